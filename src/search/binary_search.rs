//! [Binary Search]: A search algorithm that finds the position of a target
//! value within a sorted array.
//!
//! Besides the plain exact-match search, this module provides the two
//! extremal variants used when the array holds duplicates: the first
//! (leftmost) and the last (rightmost) occurrence of the target.
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use core::cmp::Ordering;

/// Returns the index of the `target` within the sorted array, or [`None`] if
/// it was not found.
///
/// When the array contains duplicates of `target`, any one of their indices
/// may be returned. Use [`find_first`] or [`find_last`] for a specific one.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making *O*(*log n*)
/// comparisons, where `n` is the number of elements in the array.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(binary_search(&arr, &4), Some(0));
/// assert_eq!(binary_search(&arr, &40), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

/// Returns the index of the first (leftmost) occurrence of `target` within
/// the sorted array, or [`None`] if it was not found.
///
/// A match does not end the search: it is recorded and the search carries on
/// in the left half, so the smallest matching index is always returned.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, even when every element equals `target`.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let arr = [1, 2, 2, 2, 3, 4, 4, 5];
///
/// assert_eq!(find_first(&arr, &2), Some(1));
/// assert_eq!(find_first(&arr, &4), Some(5));
/// assert_eq!(find_first(&arr, &6), None);
/// ```
pub fn find_first<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

/// Returns the index of the last (rightmost) occurrence of `target` within
/// the sorted array, or [`None`] if it was not found.
///
/// Symmetric to [`find_first`]: after each match the search continues in the
/// right half.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let arr = [1, 2, 2, 2, 3, 4, 4, 5];
///
/// assert_eq!(find_last(&arr, &2), Some(3));
/// assert_eq!(find_last(&arr, &5), Some(7));
/// assert_eq!(find_last(&arr, &0), None);
/// ```
pub fn find_last<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}
