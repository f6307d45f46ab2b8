//! [Linear Search]: Method for finding an element within a list. It
//! sequentially checks each element of the list until a match is found or the
//! whole list has been searched.
//!
//! Kept as the baseline the binary search variants are timed against.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the index of the first element equal to `target`, or [`None`] if
/// it was not found. The array does not need to be sorted.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Linear search sequentially checks each element of the
/// list until a match is found or the whole list has been searched.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|elem| elem == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::binary_search::binary_search;

    #[test]
    fn test_found_unsorted() {
        let arr = [9, 3, 7, 1, 5];
        assert_eq!(linear_search(&arr, &1), Some(3));
    }

    #[test]
    fn test_not_found() {
        let arr = [1, 2, 3, 4, 5];
        assert_eq!(linear_search(&arr, &6), None);
    }

    #[test]
    fn test_empty_array() {
        let arr: [i32; 0] = [];
        assert_eq!(linear_search(&arr, &1), None);
    }

    #[test]
    fn test_duplicates_returns_first_occurrence() {
        let arr = [1, 2, 4, 4, 4, 5, 6];
        assert_eq!(linear_search(&arr, &4), Some(2));
    }

    #[test]
    fn test_agrees_with_binary_search_on_even_numbers() {
        let arr: Vec<u32> = (0..1_000).map(|i| i * 2).collect();
        for target in [0, 2, 998, 1_998, 1_999, 2_000] {
            assert_eq!(
                linear_search(&arr, &target),
                binary_search(&arr, &target)
            );
        }
    }
}
