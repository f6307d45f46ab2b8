//! Insertion points within a sorted array, as found in ordered containers
//! such as C++'s `std::lower_bound` and `std::upper_bound`.
//!
//! Unlike the exact-match searches, both functions always return an index:
//! the search space is `[0, len]`, so `arr.len()` is a valid answer meaning
//! "insert at the end".

/// Returns the smallest index `i` such that `arr[i] >= target`, or
/// `arr.len()` if there is none.
///
/// Inserting `target` at the returned index keeps the array sorted, placing
/// it before any elements equal to it.
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
/// let arr = [1, 2, 2, 2, 3, 4];
///
/// assert_eq!(lower_bound(&arr, &2), 1);
/// assert_eq!(lower_bound(&arr, &0), 0);
/// assert_eq!(lower_bound(&arr, &9), arr.len());
/// ```
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if arr[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Returns the smallest index `i` such that `arr[i] > target`, or
/// `arr.len()` if there is none.
///
/// This is the insertion point after every element equal to `target`, so
/// `upper_bound(arr, t) - lower_bound(arr, t)` counts the occurrences of `t`.
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
/// let arr = [1, 2, 2, 2, 3, 4];
///
/// assert_eq!(upper_bound(&arr, &2), 4);
/// assert_eq!(upper_bound(&arr, &2) - lower_bound(&arr, &2), 3);
/// assert_eq!(upper_bound(&arr, &4), arr.len());
/// ```
pub fn upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if arr[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}
