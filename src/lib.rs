//! Myers diffing over sequences of any comparable element, producing a
//! [`Patch`] that can rebuild the revised sequence from the original and
//! the original from the revised.
//!
//! ```
//! use deltadiff::{diff, DeltaType};
//!
//! let old = vec!["A", "B", "C"];
//! let new = vec!["A", "X", "C"];
//! let patch = diff(&old, &new);
//!
//! assert_eq!(patch.deltas()[0].kind(), DeltaType::Change);
//! assert_eq!(patch.apply_to(&old).unwrap(), new);
//! assert_eq!(patch.restore(&new).unwrap(), old);
//! ```

#[macro_use]
mod tracing_macros;

pub mod chunk;
pub mod delta;
pub mod equalizer;
pub mod error;
pub mod myers;
pub mod patch;

pub use chunk::Chunk;
pub use delta::{Delta, DeltaType};
pub use equalizer::{DefaultEqualizer, Equalizer};
pub use error::PatchError;
pub use patch::{Patch, PatchBuilder};

use myers::MyersDiff;

/// Computes the patch turning `original` into `revised`, comparing elements
/// with `PartialEq`.
pub fn diff<T: Clone + PartialEq>(original: &[T], revised: &[T]) -> Patch<T> {
    diff_with(original, revised, DefaultEqualizer)
}

/// Like [`diff`], with elements compared by `equalizer`.
pub fn diff_with<T, E>(original: &[T], revised: &[T], equalizer: E) -> Patch<T>
where
    T: Clone,
    E: Equalizer<T>,
{
    let changes = MyersDiff::new(equalizer).compute_diff(original, revised);
    Patch::generate(original, revised, &changes)
}

/// Diffs two texts line by line, splitting on `'\n'` only.
pub fn diff_lines(old: &str, new: &str) -> Patch<String> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = new.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_lines() {
        let patch = diff_lines("hello\nworld\nfoo", "hello\nrust\nfoo");
        assert_eq!(patch.len(), 1);
        let delta = &patch.deltas()[0];
        assert_eq!(delta.kind(), DeltaType::Change);
        assert_eq!(delta.source().lines(), &["world".to_string()]);
        assert_eq!(delta.target().lines(), &["rust".to_string()]);
    }

    #[test]
    fn test_diff_lines_trailing_newline() {
        let patch = diff_lines("a\nb", "a\nb\n");
        let delta = &patch.deltas()[0];
        assert_eq!(delta.kind(), DeltaType::Insert);
        assert_eq!(delta.source().position(), 2);
        assert_eq!(delta.target().lines(), &[String::new()]);
    }
}
