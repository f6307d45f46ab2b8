//! [Bisection Method]: Binary search over the real numbers, repeatedly halving
//! an interval known to contain a root until it is narrower than the
//! requested precision.
//!
//! [Bisection Method]: https://en.wikipedia.org/wiki/Bisection_method

use num_traits::Float;

use crate::error::{Error, Result};

/// Approximates the square root of `x` by bisection, to within `precision`.
///
/// The root is bracketed in `[0, max(x, 1)]` (for `x < 1` the root is larger
/// than `x` itself) and the bracket is halved until its width is at most
/// `precision`. The midpoint of the final bracket is returned, so the result
/// is within `precision` of the true root.
///
/// `0` and `1` are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::NegativeInput`] if `x` is negative, [`Error::NotANumber`]
/// if `x` is NaN, and [`Error::InvalidPrecision`] if `precision` is not a
/// positive finite number.
///
/// # Time Complexity
///
/// Takes *O*(*log(max(x, 1) / precision)*) iterations.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let root = sqrt(25.0_f64, 1e-6).unwrap();
/// assert!((root - 5.0).abs() <= 1e-6);
///
/// assert!(sqrt(-1.0_f64, 1e-6).is_err());
/// ```
pub fn sqrt<F: Float>(x: F, precision: F) -> Result<F> {
    if x.is_nan() {
        return Err(Error::NotANumber);
    }
    if x < F::zero() {
        return Err(Error::NegativeInput);
    }
    if !(precision > F::zero() && precision.is_finite()) {
        return Err(Error::InvalidPrecision);
    }
    if x == F::zero() || x == F::one() {
        return Ok(x);
    }

    let two = F::one() + F::one();
    let mut lo = F::zero();
    let mut hi = x.max(F::one());

    while hi - lo > precision {
        let mid = (lo + hi) / two;

        // The bracket can no longer shrink at this floating point resolution.
        if mid <= lo || mid >= hi {
            break;
        }

        let square = mid * mid;

        if square == x {
            return Ok(mid);
        }
        if square < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok((lo + hi) / two)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square() {
        let root = sqrt(25.0_f64, 1e-6).unwrap();
        assert!((root - 5.0).abs() <= 1e-6, "{root}");
    }

    #[test]
    fn test_non_perfect_square() {
        let root = sqrt(2.0_f64, 1e-9).unwrap();
        assert!((root - core::f64::consts::SQRT_2).abs() <= 1e-9, "{root}");
    }

    #[test]
    fn test_below_one() {
        let root = sqrt(0.25_f64, 1e-9).unwrap();
        assert!((root - 0.5).abs() <= 1e-9, "{root}");
    }

    #[test]
    fn test_zero_and_one_returned_unchanged() {
        assert_eq!(sqrt(0.0_f64, 1e-6), Ok(0.0));
        assert_eq!(sqrt(1.0_f64, 1e-6), Ok(1.0));
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(sqrt(-1.0_f64, 1e-6), Err(Error::NegativeInput));
        assert_eq!(sqrt(-0.5_f32, 1e-3), Err(Error::NegativeInput));
    }

    #[test]
    fn test_nan_input() {
        assert_eq!(sqrt(f64::NAN, 1e-6), Err(Error::NotANumber));
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(sqrt(4.0_f64, 0.0), Err(Error::InvalidPrecision));
        assert_eq!(sqrt(4.0_f64, -1e-3), Err(Error::InvalidPrecision));
        assert_eq!(sqrt(4.0_f64, f64::NAN), Err(Error::InvalidPrecision));
        assert_eq!(sqrt(4.0_f64, f64::INFINITY), Err(Error::InvalidPrecision));
    }

    #[test]
    fn test_single_precision() {
        let root = sqrt(81.0_f32, 1e-4).unwrap();
        assert!((root - 9.0).abs() <= 1e-4, "{root}");
    }

    #[test]
    fn test_precision_below_resolution_terminates() {
        let root = sqrt(1e6_f64, 1e-300).unwrap();
        assert!((root - 1e3).abs() <= 1e-9, "{root}");
    }

    #[test]
    fn test_matches_std_over_range() {
        for i in 2..200 {
            let x = i as f64 * 0.37;
            let root = sqrt(x, 1e-8).unwrap();
            assert!((root - x.sqrt()).abs() <= 1e-8, "{x}: {root}");
        }
    }
}
