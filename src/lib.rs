//! # fncomb
//!
//! Function combinators for Rust: small, stateless higher-order functions
//! that transform or combine other functions.
//!
//! ## Overview
//!
//! - **Optional chaining**: run the next step only when the previous one produced a value
//! - **Tuple adaptation**: switch between positional arguments and a single tuple
//! - **Positional currying**: fix any argument (or a leading or trailing block of arguments) of a
//!   2- to 6-ary function
//! - **Argument providers**: compute an argument from a thunk or from another argument on
//!   every call
//! - **Fan-out**: `zip` several functions over one input, `union` several void functions
//!   over the same arguments, and accumulate handlers in place
//! - **Key paths**: getter/setter capability pairs and the functions lifted from them
//! - **Weak combinators**: combinators that do not keep their target alive
//!
//! ## Feature Flags
//!
//! - `compose`: Function combinators (always required by the others)
//! - `keypath`: Key paths and lifting functions
//! - `weak`: Combinators over weak references
//! - `derive`: `#[derive(KeyPaths)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fncomb::compose::{chain, into_second, zip2};
//!
//! let concat = |first: &str, second: &str| format!("{first}{second}");
//! let with_suffix = into_second(", Co.", concat);
//! assert_eq!(with_suffix("LithoByte"), "LithoByte, Co.");
//!
//! let even = |number: i32| (number % 2 == 0).then_some(number);
//! let halve_even = chain(even, |number| number / 2);
//! assert_eq!(halve_even(8), Some(4));
//! assert_eq!(halve_even(7), None);
//!
//! let stats = zip2(|values: &[i32]| values.len(), |values: &[i32]| values.iter().sum::<i32>());
//! assert_eq!(stats(&[1, 2, 3]), (3, 6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[doc(hidden)]
pub use paste;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, traits and macros.
///
/// # Usage
///
/// ```rust
/// use fncomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "keypath")]
    pub use crate::keypath::{ComposedPath, FieldPath, KeyPath};

    #[cfg(feature = "weak")]
    pub use crate::weak::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "keypath")]
pub mod keypath;

#[cfg(feature = "weak")]
pub mod weak;

#[cfg(feature = "derive")]
pub use fncomb_derive::KeyPaths;
