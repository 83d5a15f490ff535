/// Decides whether two elements count as equal while diffing.
///
/// Implementations should be pure and behave like an equivalence relation.
/// A non-transitive predicate still terminates, but the resulting patch is
/// no longer guaranteed to be minimal.
///
/// Any `Fn(&T, &T) -> bool` closure is an `Equalizer`:
///
/// ```
/// use deltadiff::diff_with;
///
/// let old = vec!["Hello".to_string()];
/// let new = vec!["HELLO".to_string()];
/// let patch = diff_with(&old, &new, |a: &String, b: &String| a.eq_ignore_ascii_case(b));
/// assert!(patch.is_empty());
/// ```
pub trait Equalizer<T: ?Sized> {
    fn are_equal(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Equalizer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn are_equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Plain `PartialEq` comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultEqualizer;

impl<T: PartialEq + ?Sized> Equalizer<T> for DefaultEqualizer {
    fn are_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_default_matches_partial_eq(a: u8, b: u8) {
            prop_assert_eq!(DefaultEqualizer.are_equal(&a, &b), a == b);
        }

        #[test]
        fn test_default_is_reflexive(s in ".*") {
            prop_assert!(DefaultEqualizer.are_equal(s.as_str(), s.as_str()));
        }
    }

    #[test]
    fn test_closure_equalizer() {
        let eq = |a: &str, b: &str| a.eq_ignore_ascii_case(b);
        assert!(eq.are_equal("Hello", "hELLO"));
        assert!(!eq.are_equal("Hello", "World"));
    }
}
