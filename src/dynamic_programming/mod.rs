//! Dynamic Programming.
//!
//! Classic problems each solved several ways, from naive recursion through
//! memoization (top-down) to tabulation (bottom-up), so the approaches can be
//! compared side by side.

pub mod fibonacci;
pub mod knapsack;
pub mod lcs;

/// Dynamic Programming Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::fibonacci::*;
    #[doc(no_inline)]
    pub use super::knapsack::*;
    #[doc(no_inline)]
    pub use super::lcs::*;
}
