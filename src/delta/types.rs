use crate::chunk::Chunk;

/// What a delta does to the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaType {
    /// Elements only present in the revised sequence.
    Insert,
    /// Elements only present in the original sequence.
    Delete,
    /// Elements replaced by different ones.
    Change,
}

/// One edit of a patch: the `source` span of the original sequence and the
/// `target` span of the revised sequence it turns into.
///
/// For `Insert` the source is empty, for `Delete` the target is empty, and a
/// `Change` has content on both sides.
#[derive(Debug, Clone)]
pub struct Delta<T> {
    pub(crate) kind: DeltaType,
    pub(crate) source: Chunk<T>,
    pub(crate) target: Chunk<T>,
}
