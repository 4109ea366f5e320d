//! Sortedness Verification

/// True iff every adjacent pair of `data` is non-decreasing.
///
/// Empty and single-element slices are trivially sorted. Pure predicate,
/// O(n), no panics.
pub fn is_sorted(data: &[u32]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn test_sorted_sequences() {
        assert!(is_sorted(&[1, 2, 3, 4]));
        assert!(is_sorted(&[0, 0, 0]));
        assert!(is_sorted(&[1, 1, 2, 2, 3]));
    }

    #[test]
    fn test_unsorted_sequences() {
        assert!(!is_sorted(&[2, 1]));
        assert!(!is_sorted(&[1, 3, 2, 4]));
        assert!(!is_sorted(&[4, 3, 2, 1]));
    }
}
