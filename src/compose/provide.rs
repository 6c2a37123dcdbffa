//! Argument providers for binary functions.
//!
//! A provider supplies one argument of a function on every call instead of
//! the caller. [`provide_first`] / [`provide_second`] take a thunk;
//! [`premap_first`] / [`premap_second`] take a conversion applied to the
//! argument the caller passes in that position.
//!
//! The provider is invoked exactly once per call of the returned function,
//! before the wrapped function. Nothing is cached.
//!
//! The same combinators exist as methods for every arity on the traits in
//! [`positional`](crate::compose::positional).

use super::positional::BinaryFunction;

/// Supplies the first argument of `function` by calling `provider`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::provide_first;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_two = provide_first(|| 2, add);
/// assert_eq!(add_two(1), 3);
/// ```
#[inline]
pub fn provide_first<A, B, C, P, F>(provider: P, function: F) -> impl Fn(B) -> C
where
    P: Fn() -> A,
    F: Fn(A, B) -> C,
{
    BinaryFunction::provide_first(function, provider)
}

/// Supplies the second argument of `function` by calling `provider`.
#[inline]
pub fn provide_second<A, B, C, P, F>(provider: P, function: F) -> impl Fn(A) -> C
where
    P: Fn() -> B,
    F: Fn(A, B) -> C,
{
    BinaryFunction::provide_second(function, provider)
}

/// Converts the first argument with `transform` before calling `function`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::premap_first;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_conditional = premap_first(|flag: bool| i32::from(flag), add);
///
/// assert_eq!(add_conditional(true, 10), 11);
/// assert_eq!(add_conditional(false, 10), 10);
/// ```
#[inline]
pub fn premap_first<X, A, B, C, H, F>(transform: H, function: F) -> impl Fn(X, B) -> C
where
    H: Fn(X) -> A,
    F: Fn(A, B) -> C,
{
    BinaryFunction::premap_first(function, transform)
}

/// Converts the second argument with `transform` before calling `function`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::premap_second;
///
/// let repeat = |text: &str, times: usize| text.repeat(times);
/// let repeat_by_length = premap_second(|word: &str| word.len(), repeat);
///
/// assert_eq!(repeat_by_length("ab", "xyz"), "ababab");
/// ```
#[inline]
pub fn premap_second<X, A, B, C, H, F>(transform: H, function: F) -> impl Fn(A, X) -> C
where
    H: Fn(X) -> B,
    F: Fn(A, B) -> C,
{
    BinaryFunction::premap_second(function, transform)
}
