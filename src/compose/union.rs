//! Fan-out of void functions and in-place handler accumulation.
//!
//! A *union* of void functions is a function that calls each of them, in the
//! order given, with the same argument values. Arguments are cloned for every
//! callee except the last, which receives the original.
//!
//! | Arity | Binary | Variadic |
//! |-------|--------|----------|
//! | 0 | [`union0`] | [`union0!`](crate::union0!) |
//! | 1 | [`union`] | [`union!`](crate::union!), [`union_all`] |
//! | 2 | [`union2`] | [`union2!`](crate::union2!) |
//! | 3 | [`union3`] | [`union3!`](crate::union3!) |
//!
//! [`union_mut`] and [`apply_mut`] do the same over a mutable borrow.
//!
//! # Accumulation
//!
//! Callback slots are usually stored as boxed trait objects ([`Handler`] and
//! friends), optionally absent. [`append`] adds a function to such a slot:
//! an empty slot becomes exactly the new function, a filled one becomes the
//! union of the old handler followed by the new one.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use fncomb::compose::{Handler, append};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut on_tap: Option<Handler<u32>> = None;
//!
//! let first_log = Rc::clone(&log);
//! append(&mut on_tap, move |id| first_log.borrow_mut().push(format!("analytics {id}")));
//! let second_log = Rc::clone(&log);
//! append(&mut on_tap, move |id| second_log.borrow_mut().push(format!("navigate {id}")));
//!
//! if let Some(handler) = &on_tap {
//!     handler(7);
//! }
//! assert_eq!(*log.borrow(), vec!["analytics 7", "navigate 7"]);
//! ```

use std::any::type_name;
use std::mem;

/// A boxed callback taking one argument.
pub type Handler<A> = Box<dyn Fn(A)>;

/// A boxed callback taking no arguments.
pub type Handler0 = Box<dyn Fn()>;

/// A boxed callback taking two arguments.
pub type Handler2<A, B> = Box<dyn Fn(A, B)>;

/// A boxed callback taking three arguments.
pub type Handler3<A, B, C> = Box<dyn Fn(A, B, C)>;

// Handlers stay on the thread that built them.
static_assertions::assert_not_impl_any!(Handler<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Handler0: Send, Sync);

// =============================================================================
// Union
// =============================================================================

/// Calls `first` then `second`.
#[inline]
pub fn union0<F, G>(first: F, second: G) -> impl Fn()
where
    F: Fn(),
    G: Fn(),
{
    move || {
        first();
        second();
    }
}

/// Calls `first` then `second` with the same argument.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use fncomb::compose::union;
///
/// let seen = RefCell::new(Vec::new());
/// let both = union(
///     |word: String| seen.borrow_mut().push(word.to_uppercase()),
///     |word: String| seen.borrow_mut().push(word),
/// );
///
/// both("litho".to_string());
/// assert_eq!(*seen.borrow(), vec!["LITHO".to_string(), "litho".to_string()]);
/// ```
#[inline]
pub fn union<A, F, G>(first: F, second: G) -> impl Fn(A)
where
    A: Clone,
    F: Fn(A),
    G: Fn(A),
{
    move |argument: A| {
        first(argument.clone());
        second(argument);
    }
}

/// Calls `first` then `second` with the same two arguments.
#[inline]
pub fn union2<A, B, F, G>(first: F, second: G) -> impl Fn(A, B)
where
    A: Clone,
    B: Clone,
    F: Fn(A, B),
    G: Fn(A, B),
{
    move |first_argument: A, second_argument: B| {
        first(first_argument.clone(), second_argument.clone());
        second(first_argument, second_argument);
    }
}

/// Calls `first` then `second` with the same three arguments.
#[inline]
pub fn union3<A, B, C, F, G>(first: F, second: G) -> impl Fn(A, B, C)
where
    A: Clone,
    B: Clone,
    C: Clone,
    F: Fn(A, B, C),
    G: Fn(A, B, C),
{
    move |first_argument: A, second_argument: B, third_argument: C| {
        first(
            first_argument.clone(),
            second_argument.clone(),
            third_argument.clone(),
        );
        second(first_argument, second_argument, third_argument);
    }
}

/// Calls every function of `functions` in iteration order with the same argument.
///
/// The functions must share one type, which is the case for boxed handlers.
/// An empty iterator yields a function that does nothing.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use fncomb::compose::{Handler, union_all};
///
/// let total = Rc::new(Cell::new(0));
/// let handlers: Vec<Handler<i32>> = (1..=3)
///     .map(|factor| {
///         let total = Rc::clone(&total);
///         Box::new(move |value: i32| total.set(total.get() + factor * value)) as Handler<i32>
///     })
///     .collect();
///
/// let all = union_all(handlers);
/// all(10);
/// assert_eq!(total.get(), 60);
/// ```
pub fn union_all<A, F, I>(functions: I) -> impl Fn(A)
where
    A: Clone,
    F: Fn(A),
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |argument: A| {
        if let Some((last, leading)) = functions.split_last() {
            for function in leading {
                function(argument.clone());
            }
            last(argument);
        }
    }
}

/// Calls `first` then `second` on the same mutable borrow.
///
/// `second` observes the changes made by `first`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::{apply_mut, union_mut};
///
/// let double_then_increment = union_mut(
///     |value: &mut i32| *value *= 2,
///     |value: &mut i32| *value += 1,
/// );
///
/// let mut number = 5;
/// apply_mut(&mut number, &double_then_increment);
/// assert_eq!(number, 11);
/// ```
#[inline]
pub fn union_mut<A, F, G>(first: F, second: G) -> impl Fn(&mut A)
where
    A: ?Sized,
    F: Fn(&mut A),
    G: Fn(&mut A),
{
    move |target: &mut A| {
        first(target);
        second(target);
    }
}

/// Applies `function` to `target` in place.
#[inline]
pub fn apply_mut<A, F>(target: &mut A, function: F)
where
    A: ?Sized,
    F: FnOnce(&mut A),
{
    function(target);
}

/// Combines zero-argument functions into one that calls each of them in order.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use fncomb::union0;
///
/// let order = RefCell::new(Vec::new());
/// let all = union0!(
///     || order.borrow_mut().push(1),
///     || order.borrow_mut().push(2),
///     || order.borrow_mut().push(3),
/// );
///
/// all();
/// assert_eq!(*order.borrow(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! union0 {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::union0($first, $crate::union0!($($rest),+))
    };
}

/// Combines one-argument void functions into one that calls each of them in order.
///
/// The argument is cloned for every function except the last.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use fncomb::union;
///
/// let order = RefCell::new(Vec::new());
/// let all = union!(
///     |n: i32| order.borrow_mut().push(n),
///     |n: i32| order.borrow_mut().push(n * 10),
///     |n: i32| order.borrow_mut().push(n * 100),
/// );
///
/// all(1);
/// assert_eq!(*order.borrow(), vec![1, 10, 100]);
/// ```
#[macro_export]
macro_rules! union {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::union($first, $crate::union!($($rest),+))
    };
}

/// Combines two-argument void functions into one that calls each of them in order.
#[macro_export]
macro_rules! union2 {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::union2($first, $crate::union2!($($rest),+))
    };
}

/// Combines three-argument void functions into one that calls each of them in order.
#[macro_export]
macro_rules! union3 {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::union3($first, $crate::union3!($($rest),+))
    };
}

// =============================================================================
// Accumulation
// =============================================================================

fn trace_slot_filled<G>() {
    tracing::trace!(handler = type_name::<G>(), "empty handler slot filled");
}

/// Adds `function` to an optional handler slot.
///
/// An empty slot becomes exactly `function`. A filled slot becomes a handler
/// that calls the existing handler, then `function`.
pub fn append<A, G>(slot: &mut Option<Handler<A>>, function: G)
where
    A: Clone + 'static,
    G: Fn(A) + 'static,
{
    let handler: Handler<A> = match slot.take() {
        Some(existing) => Box::new(union(existing, function)),
        None => {
            trace_slot_filled::<G>();
            Box::new(function)
        }
    };
    *slot = Some(handler);
}

/// Adds `function` to an optional handler slot if it is present.
///
/// An absent `function` leaves the slot untouched.
pub fn append_maybe<A, G>(slot: &mut Option<Handler<A>>, function: Option<G>)
where
    A: Clone + 'static,
    G: Fn(A) + 'static,
{
    if let Some(function) = function {
        append(slot, function);
    }
}

/// Extends an existing handler so that it also calls `function` afterwards.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use fncomb::compose::{Handler, extend};
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let mut handler: Handler<()> = Box::new(move |()| counter.set(counter.get() + 1));
///
/// let counter = Rc::clone(&calls);
/// extend(&mut handler, move |()| counter.set(counter.get() + 10));
///
/// handler(());
/// assert_eq!(calls.get(), 11);
/// ```
pub fn extend<A, G>(slot: &mut Handler<A>, function: G)
where
    A: Clone + 'static,
    G: Fn(A) + 'static,
{
    let existing = mem::replace(slot, Box::new(|_: A| {}));
    *slot = Box::new(union(existing, function));
}

/// Extends an existing handler with `function` if it is present.
pub fn extend_maybe<A, G>(slot: &mut Handler<A>, function: Option<G>)
where
    A: Clone + 'static,
    G: Fn(A) + 'static,
{
    if let Some(function) = function {
        extend(slot, function);
    }
}

/// Adds `function` to an optional two-argument handler slot.
pub fn append2<A, B, G>(slot: &mut Option<Handler2<A, B>>, function: G)
where
    A: Clone + 'static,
    B: Clone + 'static,
    G: Fn(A, B) + 'static,
{
    let handler: Handler2<A, B> = match slot.take() {
        Some(existing) => Box::new(union2(existing, function)),
        None => {
            trace_slot_filled::<G>();
            Box::new(function)
        }
    };
    *slot = Some(handler);
}

/// Adds `function` to an optional two-argument handler slot if it is present.
pub fn append2_maybe<A, B, G>(slot: &mut Option<Handler2<A, B>>, function: Option<G>)
where
    A: Clone + 'static,
    B: Clone + 'static,
    G: Fn(A, B) + 'static,
{
    if let Some(function) = function {
        append2(slot, function);
    }
}

/// Extends an existing two-argument handler so that it also calls `function`.
pub fn extend2<A, B, G>(slot: &mut Handler2<A, B>, function: G)
where
    A: Clone + 'static,
    B: Clone + 'static,
    G: Fn(A, B) + 'static,
{
    let existing = mem::replace(slot, Box::new(|_: A, _: B| {}));
    *slot = Box::new(union2(existing, function));
}

/// Extends an existing two-argument handler with `function` if it is present.
pub fn extend2_maybe<A, B, G>(slot: &mut Handler2<A, B>, function: Option<G>)
where
    A: Clone + 'static,
    B: Clone + 'static,
    G: Fn(A, B) + 'static,
{
    if let Some(function) = function {
        extend2(slot, function);
    }
}

/// Adds `function` to an optional zero-argument handler slot.
pub fn append0<G>(slot: &mut Option<Handler0>, function: G)
where
    G: Fn() + 'static,
{
    let handler: Handler0 = match slot.take() {
        Some(existing) => Box::new(union0(existing, function)),
        None => {
            trace_slot_filled::<G>();
            Box::new(function)
        }
    };
    *slot = Some(handler);
}

/// Adds `function` to an optional three-argument handler slot.
pub fn append3<A, B, C, G>(slot: &mut Option<Handler3<A, B, C>>, function: G)
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    G: Fn(A, B, C) + 'static,
{
    let handler: Handler3<A, B, C> = match slot.take() {
        Some(existing) => Box::new(union3(existing, function)),
        None => {
            trace_slot_filled::<G>();
            Box::new(function)
        }
    };
    *slot = Some(handler);
}
