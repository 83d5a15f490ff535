use crate::equalizer::{DefaultEqualizer, Equalizer};
use crate::error::PatchError;
use std::fmt;

/// A positioned copy of a contiguous span of a sequence.
///
/// Two chunks compare equal when they sit at the same `position`, whatever
/// their content. Use [`Chunk::verify`] or compare [`Chunk::lines`] directly
/// when the content matters.
#[derive(Debug, Clone)]
pub struct Chunk<T> {
    position: usize,
    lines: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(position: usize, lines: Vec<T>) -> Self {
        Chunk { position, lines }
    }

    /// Copies `data[start..end]` into a chunk positioned at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > data.len()`.
    pub fn from_range(data: &[T], start: usize, end: usize) -> Self
    where
        T: Clone,
    {
        Chunk::new(start, data[start..end].to_vec())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn lines(&self) -> &[T] {
        &self.lines
    }

    pub fn size(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last element covered, or `None` for an empty chunk.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end() - 1)
        }
    }

    /// Exclusive end index.
    pub fn end(&self) -> usize {
        self.position + self.size()
    }

    /// Checks that `target` holds this chunk's content at this chunk's position.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError>
    where
        T: PartialEq,
    {
        self.verify_with(target, &DefaultEqualizer)
    }

    pub fn verify_with<E>(&self, target: &[T], equalizer: &E) -> Result<(), PatchError>
    where
        E: Equalizer<T> + ?Sized,
    {
        if self.end() > target.len() {
            return Err(PatchError::ChunkOutOfBounds {
                position: self.position,
                size: self.size(),
                target_len: target.len(),
            });
        }

        let actual = &target[self.position..self.end()];
        match actual
            .iter()
            .zip(&self.lines)
            .position(|(a, e)| !equalizer.are_equal(a, e))
        {
            Some(offset) => Err(PatchError::ContentMismatch {
                position: self.position,
                index: self.position + offset,
            }),
            None => Ok(()),
        }
    }
}

impl<T> PartialEq for Chunk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Chunk<T> {}

impl<T: fmt::Debug> fmt::Display for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[position: {}, size: {}, lines: {:?}]",
            self.position,
            self.size(),
            self.lines
        )
    }
}
