use crate::delta::DeltaType;
use std::ops::Range;

/// A single edit found by the Myers search, as half-open ranges into the
/// original and revised sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub kind: DeltaType,
    pub original: Range<usize>,
    pub revised: Range<usize>,
}

impl ChangeRecord {
    /// Classifies the segment between two graph points: a vertical move is an
    /// insert, a horizontal one a delete, anything else a change.
    pub(crate) fn between(from: (usize, usize), to: (usize, usize)) -> Self {
        let kind = if from.0 == to.0 && from.1 != to.1 {
            DeltaType::Insert
        } else if from.0 != to.0 && from.1 == to.1 {
            DeltaType::Delete
        } else {
            DeltaType::Change
        };
        ChangeRecord {
            kind,
            original: from.0..to.0,
            revised: from.1..to.1,
        }
    }
}
