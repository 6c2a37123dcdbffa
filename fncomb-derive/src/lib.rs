//! Derive macro for fncomb key paths.
//!
//! # Available Derive Macros
//!
//! - [`KeyPaths`]: Generates one key path accessor per named struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use fncomb::KeyPaths;
//! use fncomb::keypath::KeyPath;
//!
//! #[derive(Clone, KeyPaths)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_path() -> impl KeyPath<Point, i32> + Clone
//! // - Point::y_path() -> impl KeyPath<Point, i32> + Clone
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*Point::x_path().get(&point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod key_paths;

use proc_macro::TokenStream;

/// Derive macro generating a key path accessor for every named field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_path() -> impl ::fncomb::keypath::KeyPath<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Fields marked `#[key_path(skip)]` get no accessor.
///
/// # Requirements
///
/// - The type must be a struct with named fields. Enums, unions, tuple
///   structs and unit structs are rejected with a compile error.
///
/// # Example
///
/// ```rust,ignore
/// use fncomb::KeyPaths;
/// use fncomb::keypath::{KeyPath, over};
///
/// #[derive(Clone, Debug, PartialEq, KeyPaths)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let birthday = over(User::age_path(), |age: u32| age + 1);
/// let user = birthday(User { name: "Calvin".to_string(), age: 30 });
/// assert_eq!(user.age, 31);
/// ```
///
/// # Generics
///
/// Generic structs are supported; name the concrete type to call the
/// accessor:
///
/// ```rust,ignore
/// #[derive(KeyPaths)]
/// struct Wrapper<T> {
///     inner: T,
/// }
///
/// let wrapper = Wrapper { inner: 42 };
/// assert_eq!(*Wrapper::<i32>::inner_path().get(&wrapper), 42);
/// ```
#[proc_macro_derive(KeyPaths, attributes(key_path))]
pub fn derive_key_paths(input: TokenStream) -> TokenStream {
    key_paths::derive_key_paths_impl(input)
}
