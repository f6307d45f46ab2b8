//! Peak finding in a unimodal array: one that strictly increases up to a
//! single maximum and strictly decreases after it.

/// Returns the index of the maximum of a unimodal array, or [`None`] if the
/// array is empty.
///
/// At every step the search moves toward the larger neighbour of the
/// midpoint, and stops once the window has narrowed to a single index.
///
/// For an array that is not unimodal the returned index is still a local
/// maximum (no smaller than its neighbours), just not necessarily the global
/// one.
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
/// assert_eq!(find_peak(&[1, 2, 3, 1]), Some(2));
/// assert_eq!(find_peak(&[5, 4, 3]), Some(0));
/// assert_eq!(find_peak::<i32>(&[]), None);
/// ```
pub fn find_peak<T: Ord>(arr: &[T]) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = arr.len() - 1;

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if arr[mid] < arr[mid + 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    Some(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_in_middle() {
        assert_eq!(find_peak(&[1, 2, 3, 1]), Some(2));
        assert_eq!(find_peak(&[1, 3, 8, 12, 4, 2]), Some(3));
    }

    #[test]
    fn test_strictly_increasing() {
        assert_eq!(find_peak(&[1, 2, 3, 4, 5]), Some(4));
    }

    #[test]
    fn test_strictly_decreasing() {
        assert_eq!(find_peak(&[9, 7, 5, 3]), Some(0));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(find_peak(&[42]), Some(0));
    }

    #[test]
    fn test_empty_array() {
        let arr: [i32; 0] = [];
        assert_eq!(find_peak(&arr), None);
    }

    #[test]
    fn test_every_peak_position() {
        for len in 1..12usize {
            for peak in 0..len {
                // Rise by 1 up to `peak`, then fall by 1.
                let arr: Vec<i64> = (0..len)
                    .map(|i| peak as i64 - (i as i64 - peak as i64).abs())
                    .collect();
                assert_eq!(find_peak(&arr), Some(peak), "{arr:?}");
            }
        }
    }
}
