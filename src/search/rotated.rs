//! Binary search within a sorted array that has been cyclically rotated by an
//! unknown offset, e.g. `[4, 5, 6, 7, 0, 1, 2]`.

/// Returns the index of `target` within a rotated sorted array, or [`None`]
/// if it was not found.
///
/// At every step at least one of the two halves around the midpoint is
/// sorted, which is decided by comparing its endpoints. If `target` lies
/// within the value range of the sorted half the search continues there,
/// otherwise in the other half.
///
/// Elements are expected to be distinct. With duplicates the sorted half
/// cannot always be identified and a present value may be missed.
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
/// let arr = [4, 5, 6, 7, 0, 1, 2];
///
/// assert_eq!(search_rotated(&arr, &0), Some(4));
/// assert_eq!(search_rotated(&arr, &3), None);
/// ```
pub fn search_rotated<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    // Half-open window: `arr[hi - 1]` is the rightmost live element.
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if arr[mid] == *target {
            return Some(mid);
        }

        if arr[lo] <= arr[mid] {
            // Left half is sorted.
            if arr[lo] <= *target && *target < arr[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else {
            // Right half is sorted.
            if arr[mid] < *target && *target <= arr[hi - 1] {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
    }

    None
}
