//! Classic Search & Dynamic Programming Algorithms

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod dynamic_programming;
pub mod error;
pub mod search;

pub use error::{Error, Result};

/// Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::dynamic_programming::prelude::*;
    #[doc(no_inline)]
    pub use super::search::prelude::*;

    #[doc(no_inline)]
    pub use super::error::Error;
}
