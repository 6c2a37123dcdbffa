//! Helper functions (combinators) for building and reshaping functions.
//!
//! This module provides small combinators used on their own and as building
//! blocks by the rest of [`compose`](crate::compose):
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`shift_right`] / [`shift_left`]: Rotate the arguments of a ternary function
//! - [`then`] / [`then_thunk`]: Left-to-right composition
//! - [`return_value`]: A thunk returning a fixed value
//! - [`ignore_arg`] and friends: Widen a function with arguments it does not look at

/// Returns the value unchanged.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use fncomb::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator.
///
/// # Examples
///
/// ```
/// use fncomb::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`
///
/// # Examples
///
/// ```
/// use fncomb::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// assert_eq!(flip(flipped)(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Moves the last parameter of a ternary function to the front.
///
/// `shift_right(f)(c, a, b) == f(a, b, c)`
///
/// Handy together with fixing the first argument: to fix the third argument of
/// `f`, fix the first argument of `shift_right(f)`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::shift_right;
///
/// let describe = |name: &str, age: u32, city: &str| format!("{name} ({age}) from {city}");
/// let city_first = shift_right(describe);
///
/// assert_eq!(city_first("Tokyo", "Alice", 30), "Alice (30) from Tokyo");
/// ```
#[inline]
pub fn shift_right<A, B, C, R, F>(function: F) -> impl Fn(C, A, B) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |third, first, second| function(first, second, third)
}

/// Moves the first parameter of a ternary function to the back.
///
/// `shift_left(f)(b, c, a) == f(a, b, c)`. Inverse of [`shift_right`].
///
/// # Examples
///
/// ```
/// use fncomb::compose::{shift_left, shift_right};
///
/// let joined = |a: &str, b: &str, c: &str| format!("{a}{b}{c}");
/// let rotated = shift_left(joined);
/// assert_eq!(rotated("b", "c", "a"), "abc");
///
/// let round_trip = shift_right(shift_left(joined));
/// assert_eq!(round_trip("a", "b", "c"), "abc");
/// ```
#[inline]
pub fn shift_left<A, B, C, R, F>(function: F) -> impl Fn(B, C, A) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |second, third, first| function(first, second, third)
}

/// Composes two functions left to right.
///
/// `then(f, g)(a) == g(f(a))`
///
/// When `A` is a borrow, the composed function accepts that borrow for one
/// lifetime only, so the borrowed value must outlive the composed function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::then;
///
/// let length_of_text = then(|number: i32| number.to_string(), |text: String| text.len());
/// assert_eq!(length_of_text(12345), 5);
/// ```
#[inline]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes a thunk with a unary function, producing a new thunk.
///
/// `then_thunk(p, g)() == g(p())`. The thunk is evaluated on every call.
///
/// # Examples
///
/// ```
/// use fncomb::compose::then_thunk;
///
/// let greeting = then_thunk(|| "elliot", |name: &str| name.to_uppercase());
/// assert_eq!(greeting(), "ELLIOT");
/// ```
#[inline]
pub fn then_thunk<U, V, P, G>(thunk: P, function: G) -> impl Fn() -> V
where
    P: Fn() -> U,
    G: Fn(U) -> V,
{
    move || function(thunk())
}

/// Returns a thunk that yields a clone of `value` on every call.
///
/// # Examples
///
/// ```
/// use fncomb::compose::return_value;
///
/// let name = return_value(String::from("LithoByte"));
/// assert_eq!(name(), "LithoByte");
/// assert_eq!(name(), "LithoByte");
/// ```
#[inline]
pub fn return_value<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Turns a thunk into a unary function that ignores its argument.
#[inline]
pub fn ignore_arg<T, U, F>(function: F) -> impl Fn(T) -> U
where
    F: Fn() -> U,
{
    move |_| function()
}

/// Widens a unary function with a leading argument it does not use.
///
/// # Examples
///
/// ```
/// use fncomb::compose::ignore_first_arg;
///
/// let is_even = |number: i32| number % 2 == 0;
/// let function = ignore_first_arg::<&str, _, _, _>(is_even);
///
/// assert!(!function("hi", 1));
/// assert!(function("hi", 2));
/// ```
#[inline]
pub fn ignore_first_arg<T, U, V, F>(function: F) -> impl Fn(T, U) -> V
where
    F: Fn(U) -> V,
{
    move |_, second| function(second)
}

/// Widens a unary function with a trailing argument it does not use.
///
/// A typical use is adapting a callback that only cares about its subject
/// to a slot that also passes a flag:
///
/// ```
/// use fncomb::compose::ignore_second_arg;
///
/// let is_even = |number: i32| number % 2 == 0;
/// let on_appear = ignore_second_arg::<_, bool, _, _>(is_even);
///
/// assert!(on_appear(2, true));
/// assert!(!on_appear(1, false));
/// ```
#[inline]
pub fn ignore_second_arg<T, U, V, F>(function: F) -> impl Fn(T, U) -> V
where
    F: Fn(T) -> V,
{
    move |first, _| function(first)
}

/// Turns a thunk into a binary function that ignores both arguments.
#[inline]
pub fn ignore_args2<T, U, Z, F>(function: F) -> impl Fn(T, U) -> Z
where
    F: Fn() -> Z,
{
    move |_, _| function()
}

/// Turns a thunk into a ternary function that ignores all arguments.
#[inline]
pub fn ignore_args3<T, U, V, Z, F>(function: F) -> impl Fn(T, U, V) -> Z
where
    F: Fn() -> Z,
{
    move |_, _, _| function()
}

/// Turns a thunk into a 4-ary function that ignores all arguments.
#[inline]
pub fn ignore_args4<T, U, V, W, Z, F>(function: F) -> impl Fn(T, U, V, W) -> Z
where
    F: Fn() -> Z,
{
    move |_, _, _, _| function()
}

/// Turns a thunk into a 5-ary function that ignores all arguments.
#[inline]
pub fn ignore_args5<T, U, V, W, X, Z, F>(function: F) -> impl Fn(T, U, V, W, X) -> Z
where
    F: Fn() -> Z,
{
    move |_, _, _, _, _| function()
}

/// Turns a thunk into a 6-ary function that ignores all arguments.
#[inline]
pub fn ignore_args6<T, U, V, W, X, Y, Z, F>(function: F) -> impl Fn(T, U, V, W, X, Y) -> Z
where
    F: Fn() -> Z,
{
    move |_, _, _, _, _, _| function()
}
