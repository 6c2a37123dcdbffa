//! Free-function forms of positional fixing.
//!
//! These are thin wrappers over the arity traits in
//! [`positional`](crate::compose::positional) for the common cases:
//!
//! - [`void_curry`]: fix the only argument of a unary function, producing a thunk
//! - [`into_first`] / [`into_second`]: fix one argument of a binary function
//! - [`into_third`] .. [`into_sixth`]: fix the last argument of a 3- to 6-ary function
//!
//! The fixed value is cloned on every call, so the returned functions can be
//! called any number of times.

use super::positional::{
    BinaryFunction, QuaternaryFunction, QuinaryFunction, SenaryFunction, TernaryFunction,
};

/// Fixes the only argument of `function`, producing a thunk.
///
/// # Examples
///
/// ```
/// use fncomb::compose::void_curry;
///
/// let shout = void_curry("elliot", |name: &str| name.to_uppercase());
/// assert_eq!(shout(), "ELLIOT");
/// ```
#[inline]
pub fn void_curry<T, U, F>(value: T, function: F) -> impl Fn() -> U
where
    T: Clone,
    F: Fn(T) -> U,
{
    move || function(value.clone())
}

/// Fixes the first argument of a binary function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::into_first;
///
/// let greet = |greeting: &str, name: &str| format!("{greeting}, {name}");
/// let hello = into_first("Hello", greet);
/// assert_eq!(hello("Calvin"), "Hello, Calvin");
/// ```
#[inline]
pub fn into_first<A, B, C, F>(value: A, function: F) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    BinaryFunction::fix_first(function, value)
}

/// Fixes the second argument of a binary function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::into_second;
///
/// let concat = |first: &str, second: &str| format!("{first}{second}");
/// let company = into_second(", Co.", concat);
/// assert_eq!(company("LithoByte"), "LithoByte, Co.");
/// ```
#[inline]
pub fn into_second<A, B, C, F>(value: B, function: F) -> impl Fn(A) -> C
where
    B: Clone,
    F: Fn(A, B) -> C,
{
    BinaryFunction::fix_second(function, value)
}

/// Fixes the last argument of a ternary function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::into_third;
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// assert_eq!(into_third(10, sum)(5, 5), 20);
/// ```
#[inline]
pub fn into_third<A, B, C, R, F>(value: C, function: F) -> impl Fn(A, B) -> R
where
    C: Clone,
    F: Fn(A, B, C) -> R,
{
    TernaryFunction::fix_third(function, value)
}

/// Fixes the last argument of a 4-ary function.
#[inline]
pub fn into_fourth<A, B, C, D, R, F>(value: D, function: F) -> impl Fn(A, B, C) -> R
where
    D: Clone,
    F: Fn(A, B, C, D) -> R,
{
    QuaternaryFunction::fix_fourth(function, value)
}

/// Fixes the last argument of a 5-ary function.
#[inline]
pub fn into_fifth<A, B, C, D, E, R, F>(value: E, function: F) -> impl Fn(A, B, C, D) -> R
where
    E: Clone,
    F: Fn(A, B, C, D, E) -> R,
{
    QuinaryFunction::fix_fifth(function, value)
}

/// Fixes the last argument of a 6-ary function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::into_sixth;
///
/// let sum = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
/// assert_eq!(into_sixth(10, sum)(1, 1, 1, 1, 1), 15);
/// ```
#[inline]
pub fn into_sixth<A, B, C, D, E, X, R, F>(value: X, function: F) -> impl Fn(A, B, C, D, E) -> R
where
    X: Clone,
    F: Fn(A, B, C, D, E, X) -> R,
{
    SenaryFunction::fix_sixth(function, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_curry_clones_value_per_call() {
        let shout = void_curry(String::from("elliot"), |name: String| name.to_uppercase());
        assert_eq!(shout(), "ELLIOT");
        assert_eq!(shout(), "ELLIOT");
    }

    #[test]
    fn test_into_fourth_fixes_last_position() {
        let digits = |a: u32, b: u32, c: u32, d: u32| a * 1000 + b * 100 + c * 10 + d;
        assert_eq!(into_fourth(9, digits)(1, 2, 3), 1239);
    }

    #[test]
    fn test_into_fifth_fixes_last_position() {
        let joined =
            |a: &str, b: &str, c: &str, d: &str, e: &str| [a, b, c, d, e].concat();
        assert_eq!(into_fifth("!", joined)("a", "b", "c", "d"), "abcd!");
    }
}
