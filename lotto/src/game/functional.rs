//! Pure scoring helpers shared by the session and by anyone rendering results.

use std::collections::BTreeSet;

use super::entities::Number;

/// Count how many numbers appear in both `drawn` and `selected`.
///
/// Duplicates inside either slice are counted once, so the result never
/// exceeds the smaller operand.
#[must_use]
pub fn match_count(drawn: &[Number], selected: &[Number]) -> usize {
    matching_numbers(drawn, selected).len()
}

/// The numbers common to `drawn` and `selected`, ascending.
#[must_use]
pub fn matching_numbers(drawn: &[Number], selected: &[Number]) -> Vec<Number> {
    let drawn: BTreeSet<Number> = drawn.iter().copied().collect();
    let selected: BTreeSet<Number> = selected.iter().copied().collect();
    drawn.intersection(&selected).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_count_full_overlap() {
        assert_eq!(match_count(&[1, 2, 3, 4, 5, 6], &[6, 5, 4, 3, 2, 1]), 6);
    }

    #[test]
    fn test_match_count_partial_overlap() {
        assert_eq!(match_count(&[1, 9, 17, 22, 30, 37], &[1, 2, 17, 22, 31, 36]), 3);
    }

    #[test]
    fn test_match_count_disjoint() {
        assert_eq!(match_count(&[1, 2, 3], &[4, 5, 6]), 0);
    }

    #[test]
    fn test_match_count_empty_operand() {
        assert_eq!(match_count(&[], &[1, 2, 3]), 0);
        assert_eq!(match_count(&[1, 2, 3], &[]), 0);
    }

    #[test]
    fn test_match_count_ignores_duplicates() {
        assert_eq!(match_count(&[4, 4, 4], &[4]), 1);
    }

    #[test]
    fn test_matching_numbers_sorted() {
        assert_eq!(matching_numbers(&[30, 2, 17], &[17, 30, 1]), vec![17, 30]);
    }
}
