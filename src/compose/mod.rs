//! Function combinators.
//!
//! This module provides functions, traits and macros that build new functions
//! out of existing ones. Every combinator is pure: it takes ownership of the
//! functions (and values) it is given and returns a closure over them.
//!
//! # Overview
//!
//! - [`optional`]: composition that short-circuits on `None` ([`chain`] and friends)
//! - [`tuple`]: positional arguments to tuple and back ([`tupled2`], [`untupled2`])
//! - [`positional`]: fix, provide or pre-map any argument of a 2- to 6-ary function
//!   ([`BinaryFunction`] through [`SenaryFunction`])
//! - [`curry`]: free-function forms of positional fixing ([`into_first`], [`void_curry`])
//! - [`provide`]: free-function forms of argument providers ([`provide_first`], [`premap_first`])
//! - [`zip`]: apply several functions to one input ([`zip2`] .. [`zip6`], [`zip!`])
//! - [`union`]: call several void functions with the same arguments ([`union!`]) and
//!   accumulate handlers in place ([`append`])
//! - [`conditional`]: [`ConditionalApply`]
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`], [`flip`]
//! - [`shift_left`], [`shift_right`]
//! - [`then`], [`then_thunk`], [`return_value`]
//! - [`ignore_arg`], [`ignore_first_arg`], [`ignore_second_arg`], [`ignore_args2`] .. [`ignore_args6`]
//!
//! # Examples
//!
//! ## Optional chaining
//!
//! ```
//! use fncomb::compose::chain;
//!
//! let announce_even = |number: i32| (number % 2 == 0).then(|| "even".to_string());
//! let shout = chain(announce_even, |word: String| word.to_uppercase());
//!
//! assert_eq!(shout(2), Some("EVEN".to_string()));
//! assert_eq!(shout(1), None);
//! ```
//!
//! ## Fixing an argument
//!
//! ```
//! use fncomb::compose::TernaryFunction;
//!
//! let sum = |a: i32, b: i32, c: i32| a + b + c;
//! let add_ten = sum.fix_third(10);
//! assert_eq!(add_ten(5, 5), 20);
//! ```
//!
//! ## Fan-out
//!
//! ```
//! use std::cell::RefCell;
//! use fncomb::union;
//!
//! let log = RefCell::new(Vec::new());
//! let record_upper = |word: &str| log.borrow_mut().push(word.to_uppercase());
//! let record_length = |word: &str| log.borrow_mut().push(word.len().to_string());
//!
//! let record = union!(record_upper, record_length);
//! record("litho");
//!
//! assert_eq!(*log.borrow(), vec!["LITHO".to_string(), "5".to_string()]);
//! ```
//!
//! # Laws
//!
//! - **Chain absence**: `chain(f, g)(a) == f(a).map(g)`, and `g` is not called when `f(a)` is `None`
//! - **Fix**: `f.fix_second(b)(a) == f(a, b)`
//! - **Tuple round trip**: `untupled2(tupled2(f)) == f`
//! - **Zip**: `zip2(f, g)(t) == (f(t), g(t))`
//! - **Double flip identity**: `flip(flip(f)) == f`

pub mod conditional;
pub mod curry;
pub mod optional;
pub mod positional;
pub mod provide;
pub mod tuple;
pub mod union;
mod utils;
pub mod zip;

pub use conditional::ConditionalApply;
pub use curry::{into_fifth, into_first, into_fourth, into_second, into_sixth, into_third, void_curry};
pub use optional::{
    chain, chain_flat, chain_maybe, chain_void, chain_void_maybe, chain2, chain2_flat, chain2_void,
    chain3, chain3_flat, chain3_void, coalesce_none, first_element, if_execute, optional_cast,
    optional_cast_ref,
};
pub use positional::{
    BinaryFunction, QuaternaryFunction, QuinaryFunction, SenaryFunction, TernaryFunction,
};
pub use provide::{premap_first, premap_second, provide_first, provide_second};
pub use tuple::{
    tuple_map2, tuple_map3, tuple_zip2, tuple_zip3, tupled2, tupled3, untupled2, untupled3,
};
pub use union::{
    Handler, Handler0, Handler2, Handler3, append, append_maybe, append0, append2, append2_maybe,
    append3, apply_mut, extend, extend_maybe, extend2, extend2_maybe, union, union_all, union_mut,
    union0, union2, union3,
};
pub use utils::{
    constant, flip, identity, ignore_arg, ignore_args2, ignore_args3, ignore_args4, ignore_args5,
    ignore_args6, ignore_first_arg, ignore_second_arg, return_value, shift_left, shift_right, then,
    then_thunk,
};
pub use zip::{zip2, zip3, zip4, zip5, zip6};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::union;
pub use crate::union0;
pub use crate::union2;
pub use crate::union3;
pub use crate::zip;
