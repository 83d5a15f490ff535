use crate::delta::Delta;

/// Every delta between an original and a revised sequence, sorted by
/// source position.
///
/// A `Patch` is sealed once built: it has no way to add or remove deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<T> {
    pub(crate) deltas: Vec<Delta<T>>,
}

/// Collects deltas in any order and sorts them once in [`PatchBuilder::build`].
#[derive(Debug, Clone)]
pub struct PatchBuilder<T> {
    pub(crate) deltas: Vec<Delta<T>>,
}
