//! Composition that short-circuits on absence.
//!
//! Each `chain*` function composes an upstream function returning `Option`
//! with a downstream function that only accepts the present value. The
//! downstream function runs if and only if the upstream function returned
//! `Some`; otherwise `None` flows out and the downstream function is never
//! called.
//!
//! | upstream arity | `B -> C` | `B -> Option<C>` | `B -> ()` |
//! |----------------|----------|------------------|-----------|
//! | 1 | [`chain`] | [`chain_flat`] | [`chain_void`] |
//! | 2 | [`chain2`] | [`chain2_flat`] | [`chain2_void`] |
//! | 3 | [`chain3`] | [`chain3_flat`] | [`chain3_void`] |
//!
//! [`chain_maybe`] and [`chain_void_maybe`] accept the downstream function
//! itself as an `Option`; a missing downstream function behaves like a
//! missing upstream value.
//!
//! The module also carries a handful of helpers for working with optional
//! values in point-free style: [`if_execute`], [`coalesce_none`],
//! [`first_element`], [`optional_cast`] and [`optional_cast_ref`].

use std::any::Any;

/// Composes `upstream: A -> Option<B>` with `downstream: B -> C`.
///
/// The result is `A -> Option<C>`. `downstream` is only called when
/// `upstream` yields a value.
///
/// When `A` is a borrow, the composed function accepts that borrow for one
/// lifetime only, so the borrowed value must outlive the composed function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::chain;
///
/// let announce_even = |number: i32| if number % 2 == 0 { Some("even") } else { None };
/// let shout = chain(announce_even, |word: &str| word.to_uppercase());
///
/// assert_eq!(shout(1), None);
/// assert_eq!(shout(2), Some("EVEN".to_string()));
/// ```
#[inline]
pub fn chain<A, B, C, F, G>(upstream: F, downstream: G) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> C,
{
    move |input| upstream(input).map(&downstream)
}

/// Composes `upstream: A -> Option<B>` with `downstream: B -> Option<C>`.
///
/// The nested option is flattened: the result is `A -> Option<C>`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::chain_flat;
///
/// let parse = |text: &str| text.parse::<i32>().ok();
/// let reciprocal = |number: i32| (number != 0).then(|| 1.0 / f64::from(number));
/// let parse_reciprocal = chain_flat(parse, reciprocal);
///
/// assert_eq!(parse_reciprocal("4"), Some(0.25));
/// assert_eq!(parse_reciprocal("0"), None);
/// assert_eq!(parse_reciprocal("x"), None);
/// ```
#[inline]
pub fn chain_flat<A, B, C, F, G>(upstream: F, downstream: G) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> Option<C>,
{
    move |input| upstream(input).and_then(&downstream)
}

/// Composes `upstream: A -> Option<B>` with a downstream function that may be absent.
///
/// When `downstream` is `None` the composed function returns `None` for every
/// input. `upstream` still runs, so its side effects are observed.
///
/// # Examples
///
/// ```
/// use fncomb::compose::chain_maybe;
///
/// let first_char = |text: &str| text.chars().next();
///
/// let present = chain_maybe(first_char, Some(|letter: char| letter.to_ascii_uppercase()));
/// assert_eq!(present("litho"), Some('L'));
///
/// let absent = chain_maybe(first_char, None::<fn(char) -> char>);
/// assert_eq!(absent("litho"), None);
/// ```
#[inline]
pub fn chain_maybe<A, B, C, F, G>(upstream: F, downstream: Option<G>) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> C,
{
    move |input| {
        let value = upstream(input)?;
        downstream.as_ref().map(|function| function(value))
    }
}

/// Composes `upstream: A -> Option<B>` with a void `downstream: B -> ()`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use fncomb::compose::chain_void;
///
/// let was_called = Cell::new(false);
/// let announce_even = |number: i32| (number % 2 == 0).then_some("even");
/// let on_even = chain_void(announce_even, |_: &str| was_called.set(true));
///
/// on_even(1);
/// assert!(!was_called.get());
/// on_even(2);
/// assert!(was_called.get());
/// ```
#[inline]
pub fn chain_void<A, B, F, G>(upstream: F, downstream: G) -> impl Fn(A)
where
    F: Fn(A) -> Option<B>,
    G: Fn(B),
{
    move |input| {
        if let Some(value) = upstream(input) {
            downstream(value);
        }
    }
}

/// Composes `upstream: A -> Option<B>` with a void downstream function that may be absent.
#[inline]
pub fn chain_void_maybe<A, B, F, G>(upstream: F, downstream: Option<G>) -> impl Fn(A)
where
    F: Fn(A) -> Option<B>,
    G: Fn(B),
{
    move |input| {
        if let Some(value) = upstream(input)
            && let Some(function) = downstream.as_ref()
        {
            function(value);
        }
    }
}

/// Composes a binary `upstream: (A, B) -> Option<C>` with `downstream: C -> D`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::chain2;
///
/// let checked_divide = |numerator: i32, denominator: i32| numerator.checked_div(denominator);
/// let describe = chain2(checked_divide, |quotient: i32| format!("= {quotient}"));
///
/// assert_eq!(describe(10, 2), Some("= 5".to_string()));
/// assert_eq!(describe(10, 0), None);
/// ```
#[inline]
pub fn chain2<A, B, C, D, F, G>(upstream: F, downstream: G) -> impl Fn(A, B) -> Option<D>
where
    F: Fn(A, B) -> Option<C>,
    G: Fn(C) -> D,
{
    move |first, second| upstream(first, second).map(&downstream)
}

/// Composes a binary `upstream: (A, B) -> Option<C>` with `downstream: C -> Option<D>`.
#[inline]
pub fn chain2_flat<A, B, C, D, F, G>(upstream: F, downstream: G) -> impl Fn(A, B) -> Option<D>
where
    F: Fn(A, B) -> Option<C>,
    G: Fn(C) -> Option<D>,
{
    move |first, second| upstream(first, second).and_then(&downstream)
}

/// Composes a binary `upstream: (A, B) -> Option<C>` with a void `downstream: C -> ()`.
#[inline]
pub fn chain2_void<A, B, C, F, G>(upstream: F, downstream: G) -> impl Fn(A, B)
where
    F: Fn(A, B) -> Option<C>,
    G: Fn(C),
{
    move |first, second| {
        if let Some(value) = upstream(first, second) {
            downstream(value);
        }
    }
}

/// Composes a ternary `upstream: (A, B, C) -> Option<D>` with `downstream: D -> E`.
#[inline]
pub fn chain3<A, B, C, D, E, F, G>(upstream: F, downstream: G) -> impl Fn(A, B, C) -> Option<E>
where
    F: Fn(A, B, C) -> Option<D>,
    G: Fn(D) -> E,
{
    move |first, second, third| upstream(first, second, third).map(&downstream)
}

/// Composes a ternary `upstream: (A, B, C) -> Option<D>` with `downstream: D -> Option<E>`.
#[inline]
pub fn chain3_flat<A, B, C, D, E, F, G>(
    upstream: F,
    downstream: G,
) -> impl Fn(A, B, C) -> Option<E>
where
    F: Fn(A, B, C) -> Option<D>,
    G: Fn(D) -> Option<E>,
{
    move |first, second, third| upstream(first, second, third).and_then(&downstream)
}

/// Composes a ternary `upstream: (A, B, C) -> Option<D>` with a void `downstream: D -> ()`.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use fncomb::compose::chain3_void;
///
/// let seen = RefCell::new(Vec::new());
/// let pick = |flag: bool, yes: &'static str, no: &'static str| flag.then_some(yes).or(Some(no));
/// let record = chain3_void(pick, |word: &'static str| seen.borrow_mut().push(word));
///
/// record(true, "yes", "no");
/// record(false, "yes", "no");
/// assert_eq!(*seen.borrow(), vec!["yes", "no"]);
/// ```
#[inline]
pub fn chain3_void<A, B, C, D, F, G>(upstream: F, downstream: G) -> impl Fn(A, B, C)
where
    F: Fn(A, B, C) -> Option<D>,
    G: Fn(D),
{
    move |first, second, third| {
        if let Some(value) = upstream(first, second, third) {
            downstream(value);
        }
    }
}

/// Applies `function` to the value inside `value`, if there is one.
///
/// This is `Option::map` as a free function, convenient when the function is
/// the more interesting argument. With a void function the result is
/// `Option<()>` and can be ignored.
///
/// # Examples
///
/// ```
/// use fncomb::compose::if_execute;
///
/// let name: Option<&str> = Some("elliot");
/// assert_eq!(if_execute(name, |name| name.to_uppercase()), Some("ELLIOT".to_string()));
/// assert_eq!(if_execute(None::<&str>, |name| name.to_uppercase()), None);
/// ```
#[inline]
pub fn if_execute<T, U, F>(value: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    value.map(function)
}

/// Returns a function that replaces `None` with a clone of `default`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::coalesce_none;
///
/// let announce_missing = coalesce_none("nil");
/// assert_eq!(announce_missing(None), "nil");
/// assert_eq!(announce_missing(Some("hi")), "hi");
/// ```
#[inline]
pub fn coalesce_none<T: Clone>(default: T) -> impl Fn(Option<T>) -> T {
    move |value| value.unwrap_or_else(|| default.clone())
}

/// Returns a clone of the first element of `items`, or `None` if it is empty.
///
/// # Examples
///
/// ```
/// use fncomb::compose::first_element;
///
/// let companies = ["LithoByte, Co.".to_string(), "Thryv, Inc.".to_string()];
/// assert_eq!(first_element(&companies), Some("LithoByte, Co.".to_string()));
/// assert_eq!(first_element::<i32>(&[]), None);
/// ```
#[inline]
pub fn first_element<T: Clone>(items: &[T]) -> Option<T> {
    items.first().cloned()
}

/// Attempts to view `value` as a `U`, returning a clone on success.
///
/// Pairs with [`chain`] to build functions that only act on one concrete type
/// out of a type-erased input.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use fncomb::compose::{chain, optional_cast};
///
/// let anything: Box<dyn Any> = Box::new(String::from("elliot"));
/// assert_eq!(optional_cast::<String>(anything.as_ref()), Some("elliot".to_string()));
/// assert_eq!(optional_cast::<i32>(anything.as_ref()), None);
///
/// let length_if_string = chain(optional_cast::<String>, |text: String| text.len());
/// assert_eq!(length_if_string(anything.as_ref()), Some(6));
/// ```
#[inline]
pub fn optional_cast<U: Any + Clone>(value: &dyn Any) -> Option<U> {
    value.downcast_ref::<U>().cloned()
}

/// Attempts to borrow `value` as a `U`.
#[inline]
pub fn optional_cast_ref<U: Any>(value: &dyn Any) -> Option<&U> {
    value.downcast_ref::<U>()
}
