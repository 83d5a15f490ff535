mod types;
pub use types::*;

use crate::chunk::Chunk;
use crate::equalizer::{DefaultEqualizer, Equalizer};
use crate::error::PatchError;
use std::fmt;

impl<T> Delta<T> {
    /// Builds a delta of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the chunks do not have the shape `kind` implies: an
    /// `Insert` needs an empty source and a non-empty target, a `Delete` the
    /// reverse, and a `Change` content on both sides.
    pub fn new(kind: DeltaType, source: Chunk<T>, target: Chunk<T>) -> Self {
        let well_formed = match kind {
            DeltaType::Insert => source.is_empty() && !target.is_empty(),
            DeltaType::Delete => !source.is_empty() && target.is_empty(),
            DeltaType::Change => !source.is_empty() && !target.is_empty(),
        };
        assert!(
            well_formed,
            "{kind:?} delta with source of {} and target of {} elements",
            source.size(),
            target.size()
        );
        Delta {
            kind,
            source,
            target,
        }
    }

    pub fn insert(source: Chunk<T>, target: Chunk<T>) -> Self {
        Delta::new(DeltaType::Insert, source, target)
    }

    pub fn delete(source: Chunk<T>, target: Chunk<T>) -> Self {
        Delta::new(DeltaType::Delete, source, target)
    }

    pub fn change(source: Chunk<T>, target: Chunk<T>) -> Self {
        Delta::new(DeltaType::Change, source, target)
    }

    pub fn kind(&self) -> DeltaType {
        self.kind
    }

    pub fn source(&self) -> &Chunk<T> {
        &self.source
    }

    pub fn target(&self) -> &Chunk<T> {
        &self.target
    }

    /// Same kind of delta over different chunks.
    pub fn with_chunks(&self, source: Chunk<T>, target: Chunk<T>) -> Self {
        Delta::new(self.kind, source, target)
    }

    /// Moves `target` from the source shape to the target shape at this
    /// delta's position, after checking the source content is in place.
    pub fn apply_to(&self, target: &mut Vec<T>) -> Result<(), PatchError>
    where
        T: Clone + PartialEq,
    {
        self.apply_to_with(target, &DefaultEqualizer)
    }

    pub fn apply_to_with<E>(&self, target: &mut Vec<T>, equalizer: &E) -> Result<(), PatchError>
    where
        T: Clone,
        E: Equalizer<T> + ?Sized,
    {
        self.source.verify_with(target, equalizer)?;
        let position = self.source.position();
        match self.kind {
            DeltaType::Change => {
                target.splice(
                    position..self.source.end(),
                    self.target.lines().iter().cloned(),
                );
            }
            DeltaType::Insert => {
                target.splice(position..position, self.target.lines().iter().cloned());
            }
            DeltaType::Delete => {
                target.drain(position..self.source.end());
            }
        }
        Ok(())
    }

    /// Inverse of [`Delta::apply_to`]: moves `target` from the target shape
    /// back to the source shape.
    pub fn restore(&self, target: &mut Vec<T>) -> Result<(), PatchError>
    where
        T: Clone + PartialEq,
    {
        self.restore_with(target, &DefaultEqualizer)
    }

    pub fn restore_with<E>(&self, target: &mut Vec<T>, equalizer: &E) -> Result<(), PatchError>
    where
        T: Clone,
        E: Equalizer<T> + ?Sized,
    {
        self.target.verify_with(target, equalizer)?;
        let position = self.target.position();
        match self.kind {
            DeltaType::Change => {
                target.splice(
                    position..self.target.end(),
                    self.source.lines().iter().cloned(),
                );
            }
            DeltaType::Insert => {
                target.drain(position..self.target.end());
            }
            DeltaType::Delete => {
                target.splice(position..position, self.source.lines().iter().cloned());
            }
        }
        Ok(())
    }
}

impl<T> PartialEq for Delta<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.source == other.source && self.target == other.target
    }
}

impl<T> Eq for Delta<T> {}

impl<T: fmt::Debug> fmt::Display for Delta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeltaType::Change => write!(
                f,
                "[ChangeDelta, position: {}, lines: {:?} to {:?}]",
                self.source.position(),
                self.source.lines(),
                self.target.lines()
            ),
            DeltaType::Insert => write!(
                f,
                "[InsertDelta, position: {}, lines: {:?}]",
                self.source.position(),
                self.target.lines()
            ),
            DeltaType::Delete => write!(
                f,
                "[DeleteDelta, position: {}, lines: {:?}]",
                self.source.position(),
                self.source.lines()
            ),
        }
    }
}
