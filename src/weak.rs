//! Combinators that fix an argument through a weak reference.
//!
//! Callbacks stored by the owner of a value often need that value as an
//! argument. Capturing a strong reference would keep the value alive for as
//! long as the callback exists (and forms a cycle when the owner holds the
//! callback). The functions in this module capture a weak handle instead:
//! every call tries to upgrade it, calls the wrapped function when the target
//! is still alive and returns `None` otherwise.
//!
//! | Function | Wrapped | Result |
//! |----------|---------|--------|
//! | [`weak_void_curry`] | `&T -> U` | `() -> Option<U>` |
//! | [`weak_into_first`] | `(&T, U) -> V` | `U -> Option<V>` |
//! | [`weak_into_second`] | `(T, &U) -> V` | `T -> Option<V>` |
//! | [`weak_into_first3`] | `(&T, U, V) -> W` | `(U, V) -> Option<W>` |
//! | [`weak_into_second3`] | `(T, &U, V) -> W` | `(T, V) -> Option<W>` |
//! | [`weak_into_third3`] | `(T, U, &V) -> W` | `(T, U) -> Option<W>` |
//!
//! Both [`std::rc::Weak`] and [`std::sync::Weak`] work, through [`Upgrade`].
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use fncomb::weak::weak_into_first;
//!
//! let history = Rc::new(RefCell::new(Vec::new()));
//! let record = weak_into_first(Rc::downgrade(&history), |history: &RefCell<Vec<i32>>, entry: i32| {
//!     history.borrow_mut().push(entry);
//! });
//!
//! assert_eq!(record(1), Some(()));
//! assert_eq!(*history.borrow(), vec![1]);
//!
//! drop(history);
//! assert_eq!(record(2), None);
//! ```

use std::any::type_name;
use std::ops::Deref;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// A non-owning handle that can be turned into an owning one while the
/// target is alive.
pub trait Upgrade {
    /// The referenced type.
    type Target: ?Sized;

    /// The owning handle produced by a successful upgrade.
    type Strong: Deref<Target = Self::Target>;

    /// Returns an owning handle, or `None` if the target has been dropped.
    fn upgrade(&self) -> Option<Self::Strong>;
}

impl<T: ?Sized> Upgrade for rc::Weak<T> {
    type Target = T;
    type Strong = Rc<T>;

    fn upgrade(&self) -> Option<Rc<T>> {
        rc::Weak::upgrade(self)
    }
}

impl<T: ?Sized> Upgrade for sync::Weak<T> {
    type Target = T;
    type Strong = Arc<T>;

    fn upgrade(&self) -> Option<Arc<T>> {
        sync::Weak::upgrade(self)
    }
}

static_assertions::assert_impl_all!(rc::Weak<str>: Upgrade);
static_assertions::assert_impl_all!(sync::Weak<dyn Fn() + Send + Sync>: Upgrade);

fn upgrade_or_trace<W: Upgrade>(handle: &W) -> Option<W::Strong> {
    let strong = Upgrade::upgrade(handle);
    if strong.is_none() {
        tracing::trace!(
            target_type = type_name::<W::Target>(),
            "weak target released, skipping call"
        );
    }
    strong
}

/// Fixes the only argument of `function` to the target of `handle`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fncomb::weak::weak_void_curry;
///
/// let name = Arc::new(String::from("elliot"));
/// let shout = weak_void_curry(Arc::downgrade(&name), |name: &String| name.to_uppercase());
///
/// assert_eq!(shout(), Some("ELLIOT".to_string()));
/// drop(name);
/// assert_eq!(shout(), None);
/// ```
pub fn weak_void_curry<W, U, F>(handle: W, function: F) -> impl Fn() -> Option<U>
where
    W: Upgrade,
    F: Fn(&W::Target) -> U,
{
    move || {
        let target = upgrade_or_trace(&handle)?;
        Some(function(&*target))
    }
}

/// Fixes the first argument of a binary function to the target of `handle`.
pub fn weak_into_first<W, U, V, F>(handle: W, function: F) -> impl Fn(U) -> Option<V>
where
    W: Upgrade,
    F: Fn(&W::Target, U) -> V,
{
    move |second| {
        let target = upgrade_or_trace(&handle)?;
        Some(function(&*target, second))
    }
}

/// Fixes the second argument of a binary function to the target of `handle`.
pub fn weak_into_second<W, T, V, F>(handle: W, function: F) -> impl Fn(T) -> Option<V>
where
    W: Upgrade,
    F: Fn(T, &W::Target) -> V,
{
    move |first| {
        let target = upgrade_or_trace(&handle)?;
        Some(function(first, &*target))
    }
}

/// Fixes the first argument of a ternary function to the target of `handle`.
pub fn weak_into_first3<W, U, V, R, F>(handle: W, function: F) -> impl Fn(U, V) -> Option<R>
where
    W: Upgrade,
    F: Fn(&W::Target, U, V) -> R,
{
    move |second, third| {
        let target = upgrade_or_trace(&handle)?;
        Some(function(&*target, second, third))
    }
}

/// Fixes the second argument of a ternary function to the target of `handle`.
pub fn weak_into_second3<W, T, V, R, F>(handle: W, function: F) -> impl Fn(T, V) -> Option<R>
where
    W: Upgrade,
    F: Fn(T, &W::Target, V) -> R,
{
    move |first, third| {
        let target = upgrade_or_trace(&handle)?;
        Some(function(first, &*target, third))
    }
}

/// Fixes the third argument of a ternary function to the target of `handle`.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use fncomb::weak::weak_into_third3;
///
/// let suffix = Rc::new(String::from("!"));
/// let exclaim = weak_into_third3(Rc::downgrade(&suffix), |a: &str, b: &str, suffix: &String| {
///     format!("{a}{b}{suffix}")
/// });
///
/// assert_eq!(exclaim("Litho", "Byte"), Some("LithoByte!".to_string()));
/// ```
pub fn weak_into_third3<W, T, U, R, F>(handle: W, function: F) -> impl Fn(T, U) -> Option<R>
where
    W: Upgrade,
    F: Fn(T, U, &W::Target) -> R,
{
    move |first, second| {
        let target = upgrade_or_trace(&handle)?;
        Some(function(first, second, &*target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_released_target_skips_function() {
        let calls = Cell::new(0);
        let value = Rc::new(5);
        let add = weak_into_second(Rc::downgrade(&value), |left: i32, right: &i32| {
            calls.set(calls.get() + 1);
            left + right
        });

        assert_eq!(add(1), Some(6));
        drop(value);
        assert_eq!(add(1), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_weak_into_second3_keeps_positions() {
        let middle = Arc::new(String::from("-"));
        let join = weak_into_second3(Arc::downgrade(&middle), |a: &str, sep: &String, b: &str| {
            format!("{a}{sep}{b}")
        });
        assert_eq!(join("a", "b"), Some("a-b".to_string()));
    }

    #[test]
    fn test_weak_into_first3_with_unsized_target() {
        let prefix: Rc<str> = Rc::from(">> ");
        let render = weak_into_first3(Rc::downgrade(&prefix), |prefix: &str, count: usize, word: &str| {
            format!("{prefix}{}", word.repeat(count))
        });
        assert_eq!(render(2, "ab"), Some(">> abab".to_string()));
    }
}
