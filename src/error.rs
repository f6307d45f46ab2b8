//! Error type shared by the fallible algorithms.

use thiserror::Error;

/// Alias for a [`Result`](core::result::Result) with the error type
/// [`enum@Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Reasons an algorithm rejects its input.
///
/// Search functions do not use this type: a missing target is reported with
/// [`None`], not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The square root of a negative number was requested.
    #[error("cannot take the square root of a negative number")]
    NegativeInput,
    /// The input is not a number.
    #[error("input is NaN")]
    NotANumber,
    /// The bisection precision is not a positive, finite number.
    #[error("precision must be positive and finite")]
    InvalidPrecision,
}
