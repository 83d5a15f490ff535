mod path;
pub mod types;
pub use types::*;

use crate::equalizer::{DefaultEqualizer, Equalizer};
use path::{Diagonals, PathArena, Reach, Snake};

/// Myers' greedy O(ND) shortest edit script search.
///
/// The engine holds nothing but its equalizer; every working array lives in
/// a single [`MyersDiff::compute_diff`] call, so one engine can be shared
/// across threads when the equalizer allows it.
///
/// # Examples
///
/// ```
/// use deltadiff::myers::{ChangeRecord, MyersDiff};
/// use deltadiff::{DefaultEqualizer, DeltaType};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let changes = MyersDiff::new(DefaultEqualizer).compute_diff(&old, &new);
/// assert_eq!(changes, vec![ChangeRecord {
///     kind: DeltaType::Change,
///     original: 1..2,
///     revised: 1..2,
/// }]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MyersDiff<E = DefaultEqualizer> {
    equalizer: E,
}

impl<E> MyersDiff<E> {
    pub fn new(equalizer: E) -> Self {
        MyersDiff { equalizer }
    }

    /// Computes the edits turning `source` into `target`, in ascending
    /// position order.
    ///
    /// # Panics
    ///
    /// Panics if the search ends without reaching the far corner of the edit
    /// graph, which can only happen through a bug in the search itself.
    pub fn compute_diff<T>(&self, source: &[T], target: &[T]) -> Vec<ChangeRecord>
    where
        E: Equalizer<T>,
    {
        trace!(n = source.len(), m = target.len(), "searching edit graph");
        let (arena, end) = self.build_path(source, target);
        let changes = build_revision(&arena, end);
        debug!(changes = changes.len(), "diff path found");
        changes
    }

    /// Walks the edit graph one edit distance `d` at a time until some
    /// diagonal reaches `(n, m)`, and returns how it got there.
    ///
    /// Diagonals only keep their furthest point; the arena only grows when a
    /// snake is found.
    fn build_path<T>(&self, orig: &[T], rev: &[T]) -> (PathArena, Reach)
    where
        E: Equalizer<T>,
    {
        let n = orig.len();
        let m = rev.len();
        let max = n + m + 1;

        let mut arena = PathArena::default();
        let mut diagonal = Diagonals::new(max);
        // virtual origin just above (0, 0)
        diagonal.set(
            1,
            Reach {
                i: 0,
                j: 0,
                snake: None,
            },
        );

        for d in 0..max as isize {
            for k in (-d..=d).step_by(2) {
                // step down from k + 1 unless k - 1 reaches further
                let down = k == -d
                    || (k != d && furthest(&diagonal, k - 1).i < furthest(&diagonal, k + 1).i);
                let (mut i, prev) = if down {
                    let from = furthest(&diagonal, k + 1);
                    (from.i, from.snake)
                } else {
                    let from = furthest(&diagonal, k - 1);
                    (from.i + 1, from.snake)
                };

                let mut j = (i as isize - k) as usize;
                let start = (i, j);
                while i < n && j < m && self.equalizer.are_equal(&orig[i], &rev[j]) {
                    i += 1;
                    j += 1;
                }

                let snake = if i != start.0 {
                    Some(arena.push(Snake {
                        start,
                        end: (i, j),
                        prev,
                    }))
                } else {
                    prev
                };
                let reach = Reach { i, j, snake };
                diagonal.set(k, reach);

                if i >= n && j >= m {
                    trace!(edit_distance = d, "reached the end of the edit graph");
                    return (arena, reach);
                }
            }
        }

        unreachable!("no diff path found within {max} edits")
    }
}

fn furthest(diagonal: &Diagonals, k: isize) -> Reach {
    match diagonal.get(k) {
        Some(reach) => reach,
        None => unreachable!("diagonal {k} has no furthest-reaching path"),
    }
}

/// Follows the snakes back from `end`, emitting one record for each gap
/// between them.
fn build_revision(arena: &PathArena, end: Reach) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    let mut point = (end.i, end.j);
    let mut cursor = end.snake;

    while let Some(id) = cursor {
        let snake = arena[id];
        assert!(
            snake.end.0 <= point.0 && snake.end.1 <= point.1,
            "bad diff path: snake ending at {:?} lies past {:?}",
            snake.end,
            point
        );
        if snake.end != point {
            changes.push(ChangeRecord::between(snake.end, point));
        }
        point = snake.start;
        cursor = snake.prev;
    }
    if point != (0, 0) {
        changes.push(ChangeRecord::between((0, 0), point));
    }

    changes.reverse();
    changes
}
