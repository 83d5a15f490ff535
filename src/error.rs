use thiserror::Error;

/// Raised when a sequence does not hold the content a chunk expects.
///
/// Both variants mean the same thing to a caller: the patch was computed
/// against a different sequence, so the working copy must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("chunk at position {position} with {size} elements exceeds target of length {target_len}")]
    ChunkOutOfBounds {
        position: usize,
        size: usize,
        target_len: usize,
    },
    #[error("chunk at position {position} does not match the target at index {index}")]
    ContentMismatch { position: usize, index: usize },
}

impl PatchError {
    /// Position of the chunk that failed verification.
    pub fn position(&self) -> usize {
        match self {
            PatchError::ChunkOutOfBounds { position, .. } => *position,
            PatchError::ContentMismatch { position, .. } => *position,
        }
    }
}
