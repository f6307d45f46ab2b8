//! Searching Algorithms.
//!
//! Binary search and its variants over sorted, rotated and unimodal arrays,
//! bisection over the reals, and the linear search baseline.

pub mod binary_search;
pub mod bisection;
pub mod bounds;
pub mod linear_search;
pub mod peak;
pub mod rotated;

/// Searching Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::binary_search::*;
    #[doc(no_inline)]
    pub use super::bisection::*;
    #[doc(no_inline)]
    pub use super::bounds::*;
    #[doc(no_inline)]
    pub use super::linear_search::*;
    #[doc(no_inline)]
    pub use super::peak::*;
    #[doc(no_inline)]
    pub use super::rotated::*;
}
