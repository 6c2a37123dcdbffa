//! Key paths and the functions lifted from them.
//!
//! A key path ([`KeyPath`]) addresses one location inside a value through a
//! pair of capabilities: a getter and a mutable getter. The [`key_path!`]
//! macro builds one for a struct field, and `#[derive(KeyPaths)]` (behind the
//! `derive` feature) generates one accessor per named field.
//!
//! The lifting functions in [`lift`] turn key paths into plain closures, which
//! then compose with everything in [`compose`](crate::compose).
//!
//! # Examples
//!
//! ```
//! use fncomb::compose::then;
//! use fncomb::key_path;
//! use fncomb::keypath::{get, over};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, age: u32 }
//!
//! let age_next_year = then(over(key_path!(User, age), |age: u32| age + 1), |user: User| user.age);
//! assert_eq!(age_next_year(User { name: "Calvin".into(), age: 30 }), 31);
//!
//! let user = User { name: "Calvin".into(), age: 30 };
//! let name_length = then(get(key_path!(User, name)), |name: String| name.len());
//! assert_eq!(name_length(&user), 6);
//! ```

mod key_path;
pub mod lift;

pub use key_path::{ComposedPath, FieldPath, KeyPath};
pub use lift::{assign, get, mut_each, mutate, over, set, setter};

pub use crate::key_path;
