mod types;
pub use types::*;

use crate::chunk::Chunk;
use crate::delta::{Delta, DeltaType};
use crate::equalizer::{DefaultEqualizer, Equalizer};
use crate::error::PatchError;
use crate::myers::ChangeRecord;
use std::slice;

impl<T> PatchBuilder<T> {
    pub fn new() -> Self {
        PatchBuilder { deltas: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PatchBuilder {
            deltas: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, delta: Delta<T>) {
        self.deltas.push(delta);
    }

    /// Sorts the collected deltas by source position and seals them.
    pub fn build(mut self) -> Patch<T> {
        self.deltas.sort_by_key(|delta| delta.source().position());
        debug!(deltas = self.deltas.len(), "patch sealed");
        Patch {
            deltas: self.deltas,
        }
    }
}

impl<T> Default for PatchBuilder<T> {
    fn default() -> Self {
        PatchBuilder::new()
    }
}

impl<T> Patch<T> {
    /// Turns change records into deltas, copying the affected spans out of
    /// `original` and `revised`.
    ///
    /// # Panics
    ///
    /// Panics if a record's range is reversed or reaches past its sequence,
    /// or if its ranges do not fit its kind (see [`Delta::new`]). Records
    /// from [`MyersDiff::compute_diff`](crate::myers::MyersDiff::compute_diff)
    /// over the same two sequences always fit.
    pub fn generate(original: &[T], revised: &[T], changes: &[ChangeRecord]) -> Self
    where
        T: Clone,
    {
        let mut builder = PatchBuilder::with_capacity(changes.len());
        for change in changes {
            let source = Chunk::from_range(original, change.original.start, change.original.end);
            let target = Chunk::from_range(revised, change.revised.start, change.revised.end);
            builder.push(match change.kind {
                DeltaType::Delete => Delta::delete(source, target),
                DeltaType::Insert => Delta::insert(source, target),
                DeltaType::Change => Delta::change(source, target),
            });
        }
        builder.build()
    }

    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Delta<T>> {
        self.deltas.iter()
    }

    /// Derives the revised sequence from `target`, which must hold the
    /// original content wherever a delta applies.
    ///
    /// `target` itself is left untouched. On error the partially patched
    /// copy is dropped.
    pub fn apply_to(&self, target: &[T]) -> Result<Vec<T>, PatchError>
    where
        T: Clone + PartialEq,
    {
        self.apply_to_with(target, &DefaultEqualizer)
    }

    pub fn apply_to_with<E>(&self, target: &[T], equalizer: &E) -> Result<Vec<T>, PatchError>
    where
        T: Clone,
        E: Equalizer<T> + ?Sized,
    {
        let mut result = target.to_vec();
        // back to front, so positions of the deltas still to go stay valid
        for delta in self.deltas.iter().rev() {
            delta.apply_to_with(&mut result, equalizer)?;
        }
        Ok(result)
    }

    /// Derives the original sequence back from a revised `target`.
    pub fn restore(&self, target: &[T]) -> Result<Vec<T>, PatchError>
    where
        T: Clone + PartialEq,
    {
        self.restore_with(target, &DefaultEqualizer)
    }

    pub fn restore_with<E>(&self, target: &[T], equalizer: &E) -> Result<Vec<T>, PatchError>
    where
        T: Clone,
        E: Equalizer<T> + ?Sized,
    {
        let mut result = target.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.restore_with(&mut result, equalizer)?;
        }
        Ok(result)
    }
}

impl<'a, T> IntoIterator for &'a Patch<T> {
    type Item = &'a Delta<T>;
    type IntoIter = slice::Iter<'a, Delta<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}
