use deltadiff::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip(
        old in prop::collection::vec("[a-d]{1,2}", 0..30),
        new in prop::collection::vec("[a-d]{1,2}", 0..30),
    ) {
        let patch = diff(&old, &new);
        prop_assert_eq!(patch.apply_to(&old), Ok(new.clone()));
        prop_assert_eq!(patch.restore(&new), Ok(old));
    }

    #[test]
    fn test_identity(els in prop::collection::vec(any::<i32>(), 0..30)) {
        let patch = diff(&els, &els);
        prop_assert!(patch.deltas().is_empty());
        prop_assert_eq!(patch.apply_to(&els), Ok(els.clone()));
    }

    #[test]
    fn test_deltas_sorted_and_disjoint(
        old in prop::collection::vec(0..5u8, 0..30),
        new in prop::collection::vec(0..5u8, 0..30),
    ) {
        let patch = diff(&old, &new);
        for pair in patch.deltas().windows(2) {
            let (a, b) = (pair[0].source(), pair[1].source());
            prop_assert!(a.position() < b.position());
            if let Some(last) = a.last() {
                prop_assert!(last < b.position());
            }
        }
    }

    #[test]
    fn test_delta_shapes(
        old in prop::collection::vec(0..5u8, 0..30),
        new in prop::collection::vec(0..5u8, 0..30),
    ) {
        let patch = diff(&old, &new);
        for delta in &patch {
            match delta.kind() {
                DeltaType::Insert => {
                    prop_assert!(delta.source().is_empty());
                    prop_assert!(!delta.target().is_empty());
                }
                DeltaType::Delete => {
                    prop_assert!(!delta.source().is_empty());
                    prop_assert!(delta.target().is_empty());
                }
                DeltaType::Change => {
                    prop_assert!(!delta.source().is_empty());
                    prop_assert!(!delta.target().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_mismatch_detected(
        old in prop::collection::vec(0..5u8, 1..30),
        new in prop::collection::vec(0..5u8, 0..30),
    ) {
        let patch = diff(&old, &new);
        // corrupt the first element of the first delta that removes something
        if let Some(delta) = patch.iter().find(|d| !d.source().is_empty()) {
            let mut other = old.clone();
            other[delta.source().position()] = 99;
            prop_assert!(patch.apply_to(&other).is_err());
        }
    }
}

#[test]
fn test_insert_only() {
    let original: Vec<String> = vec![];
    let revised = vec!["Hello World!".to_string()];
    let patch = diff(&original, &revised);

    assert_eq!(patch.len(), 1);
    let delta = &patch.deltas()[0];
    assert_eq!(delta.kind(), DeltaType::Insert);
    assert_eq!(delta.source().position(), 0);
    assert!(delta.source().lines().is_empty());
    assert_eq!(delta.target().position(), 0);
    assert_eq!(delta.target().lines(), &revised[..]);
    assert_eq!(
        *delta,
        Delta::insert(Chunk::new(0, vec![]), Chunk::new(0, revised.clone()))
    );
}

#[test]
fn test_delete_only() {
    let original = vec!["Hello World!".to_string()];
    let revised: Vec<String> = vec![];
    let patch = diff(&original, &revised);

    assert_eq!(patch.len(), 1);
    let delta = &patch.deltas()[0];
    assert_eq!(delta.kind(), DeltaType::Delete);
    assert_eq!(delta.source().position(), 0);
    assert_eq!(delta.source().lines(), &original[..]);
    assert_eq!(delta.target().position(), 0);
    assert!(delta.target().lines().is_empty());
}

#[test]
fn test_change() {
    let original = vec!["A", "B", "C"];
    let revised = vec!["A", "X", "C"];
    let patch = diff(&original, &revised);

    assert_eq!(patch.len(), 1);
    let delta = &patch.deltas()[0];
    assert_eq!(delta.kind(), DeltaType::Change);
    assert_eq!(delta.source().position(), 1);
    assert_eq!(delta.source().lines(), &["B"]);
    assert_eq!(delta.target().position(), 1);
    assert_eq!(delta.target().lines(), &["X"]);
}

#[test]
fn test_mismatch_is_an_error() {
    let a = vec![1, 2, 3, 4];
    let b = vec![1, 5, 3, 4];
    let c = vec![1, 7, 3, 4];
    let patch = diff(&a, &b);

    let err = patch.apply_to(&c).unwrap_err();
    assert_eq!(
        err,
        PatchError::ContentMismatch {
            position: 1,
            index: 1
        }
    );
    assert!(patch.restore(&c).is_err());
}

#[test]
fn test_custom_equalizer() {
    let original = vec!["Hello".to_string()];
    let revised = vec!["HELLO".to_string()];

    let patch = diff_with(&original, &revised, |a: &String, b: &String| {
        a.eq_ignore_ascii_case(b)
    });
    assert!(patch.is_empty());

    let patch = diff(&original, &revised);
    assert_eq!(patch.len(), 1);
    assert_eq!(patch.deltas()[0].kind(), DeltaType::Change);
}

#[test]
fn test_adjacent_edits_merge_into_one_change() {
    let original = vec!['a', 'b', 'c', 'd'];
    let revised = vec!['a', 'x', 'y', 'z', 'd'];
    let patch = diff(&original, &revised);

    assert_eq!(patch.len(), 1);
    let delta = &patch.deltas()[0];
    assert_eq!(delta.kind(), DeltaType::Change);
    assert_eq!(delta.source().lines(), &['b', 'c']);
    assert_eq!(delta.target().lines(), &['x', 'y', 'z']);
    assert_eq!(patch.apply_to(&original), Ok(revised));
}

#[test]
fn test_patch_reusable_on_equal_copy() {
    let original = vec![10, 20, 30];
    let revised = vec![20, 30, 40];
    let patch = diff(&original, &revised);

    let copy = original.clone();
    assert_eq!(patch.apply_to(&copy), Ok(revised.clone()));
    assert_eq!(patch.apply_to(&copy), Ok(revised));
}

#[test]
fn test_multiple_deltas_restore() {
    let original: Vec<String> = "the quick brown fox jumps over the lazy dog"
        .split(' ')
        .map(String::from)
        .collect();
    let revised: Vec<String> = "a quick red fox jumps over the dog today"
        .split(' ')
        .map(String::from)
        .collect();
    let patch = diff(&original, &revised);

    assert!(patch.len() > 1);
    assert_eq!(patch.apply_to(&original), Ok(revised.clone()));
    assert_eq!(patch.restore(&revised), Ok(original));
}
