//! Conversion between positional arguments and tuples.
//!
//! [`tupled2`] / [`tupled3`] turn a function of positional arguments into one
//! that takes a single tuple; [`untupled2`] / [`untupled3`] go the other way.
//! This lets the output of a tuple-producing function (such as one built by
//! [`zip2`](crate::compose::zip2)) feed a function declared with positional
//! parameters.
//!
//! [`tuple_map2`] / [`tuple_map3`] and [`tuple_zip2`] / [`tuple_zip3`] pair up
//! functions position by position instead.

/// Converts `function: (A, B) -> C` into `((A, B)) -> C`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::{tupled2, zip2, then};
///
/// let concat = |first: String, second: String| first + &second;
/// let split = zip2(|text: &str| text.to_uppercase(), |text: &str| text.to_lowercase());
/// let upper_then_lower = then(split, tupled2(concat));
///
/// assert_eq!(upper_then_lower("Ab"), "ABab");
/// ```
#[inline]
pub fn tupled2<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first, second)| function(first, second)
}

/// Converts `function: (A, B, C) -> D` into `((A, B, C)) -> D`.
#[inline]
pub fn tupled3<A, B, C, D, F>(function: F) -> impl Fn((A, B, C)) -> D
where
    F: Fn(A, B, C) -> D,
{
    move |(first, second, third)| function(first, second, third)
}

/// Converts `function: ((A, B)) -> C` into `(A, B) -> C`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::untupled2;
///
/// let area = |(width, height): (u32, u32)| width * height;
/// let area = untupled2(area);
/// assert_eq!(area(3, 4), 12);
/// ```
#[inline]
pub fn untupled2<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |first, second| function((first, second))
}

/// Converts `function: ((A, B, C)) -> D` into `(A, B, C) -> D`.
#[inline]
pub fn untupled3<A, B, C, D, F>(function: F) -> impl Fn(A, B, C) -> D
where
    F: Fn((A, B, C)) -> D,
{
    move |first, second, third| function((first, second, third))
}

/// Pairs two void functions position by position.
///
/// `tuple_map2(f, g)(a, b)` calls `f(a)` then `g(b)`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use fncomb::compose::tuple_map2;
///
/// let first_called = Cell::new(false);
/// let second_called = Cell::new(false);
/// let set_both = tuple_map2(
///     |number: i32| first_called.set(number == 1),
///     |text: &str| second_called.set(text == "lithobyte"),
/// );
///
/// set_both(1, "lithobyte");
/// assert!(first_called.get() && second_called.get());
/// ```
#[inline]
pub fn tuple_map2<A, B, F, G>(first: F, second: G) -> impl Fn(A, B)
where
    F: Fn(A),
    G: Fn(B),
{
    move |first_argument, second_argument| {
        first(first_argument);
        second(second_argument);
    }
}

/// Pairs three void functions position by position.
#[inline]
pub fn tuple_map3<A, B, C, F, G, H>(first: F, second: G, third: H) -> impl Fn(A, B, C)
where
    F: Fn(A),
    G: Fn(B),
    H: Fn(C),
{
    move |first_argument, second_argument, third_argument| {
        first(first_argument);
        second(second_argument);
        third(third_argument);
    }
}

/// Pairs two functions position by position and collects their results.
///
/// `tuple_zip2(f, g)(a, b) == (f(a), g(b))`
///
/// # Examples
///
/// ```
/// use fncomb::compose::tuple_zip2;
///
/// let check = tuple_zip2(|number: i32| number == 1, |text: &str| text.len());
/// assert_eq!(check(1, "hello"), (true, 5));
/// ```
#[inline]
pub fn tuple_zip2<A, B, X, Y, F, G>(first: F, second: G) -> impl Fn(A, B) -> (X, Y)
where
    F: Fn(A) -> X,
    G: Fn(B) -> Y,
{
    move |first_argument, second_argument| (first(first_argument), second(second_argument))
}

/// Pairs three functions position by position and collects their results.
#[inline]
pub fn tuple_zip3<A, B, C, X, Y, Z, F, G, H>(
    first: F,
    second: G,
    third: H,
) -> impl Fn(A, B, C) -> (X, Y, Z)
where
    F: Fn(A) -> X,
    G: Fn(B) -> Y,
    H: Fn(C) -> Z,
{
    move |first_argument, second_argument, third_argument| {
        (
            first(first_argument),
            second(second_argument),
            third(third_argument),
        )
    }
}
