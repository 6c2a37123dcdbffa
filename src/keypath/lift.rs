//! Lifting key paths into plain functions.
//!
//! Each function here turns a [`KeyPath`] (and possibly a value or function)
//! into a closure that can be passed wherever a plain function is expected,
//! such as `Iterator::map` or the combinators of [`compose`](crate::compose).
//!
//! | Function | Result |
//! |----------|--------|
//! | [`get`] | `&Root -> Value` |
//! | [`over`] | `Root -> Root`, transforming the value |
//! | [`set`] | `Root -> Root`, replacing the value |
//! | [`assign`] | `&mut Root -> ()`, replacing the value in place |
//! | [`setter`] | `(&mut Root, Value) -> ()` |
//! | [`mutate`] | `&mut Root -> ()`, mutating the value in place |
//! | [`mut_each`] | `&mut [A] -> ()`, mutating every element |

use super::key_path::KeyPath;

/// Lifts a key path into a getter returning a clone of the value.
///
/// # Examples
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::get;
///
/// struct User { name: String }
///
/// let users = vec![User { name: "Calvin".into() }, User { name: "Elliot".into() }];
/// let names: Vec<String> = users.iter().map(get(key_path!(User, name))).collect();
/// assert_eq!(names, vec!["Calvin", "Elliot"]);
/// ```
#[inline]
pub fn get<Root, Value, K>(path: K) -> impl Fn(&Root) -> Value
where
    Value: Clone,
    K: KeyPath<Root, Value>,
{
    move |root| path.get(root).clone()
}

/// Lifts a key path and a function on the value into a function on the root.
///
/// # Examples
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::over;
///
/// #[derive(Debug, PartialEq)]
/// struct User { name: String, age: u32 }
///
/// let shout = over(key_path!(User, name), |name: String| name.to_uppercase());
/// let user = shout(User { name: "elliot".into(), age: 30 });
/// assert_eq!(user, User { name: "ELLIOT".into(), age: 30 });
/// ```
#[inline]
pub fn over<Root, Value, K, F>(path: K, function: F) -> impl Fn(Root) -> Root
where
    Value: Clone,
    K: KeyPath<Root, Value>,
    F: Fn(Value) -> Value,
{
    move |root| path.modify(root, &function)
}

/// Lifts a key path and a value into a function that replaces the value.
///
/// `value` is cloned on every call.
#[inline]
pub fn set<Root, Value, K>(path: K, value: Value) -> impl Fn(Root) -> Root
where
    Value: Clone,
    K: KeyPath<Root, Value>,
{
    move |root| path.set(root, value.clone())
}

/// Lifts a key path and a value into an in-place assignment.
///
/// # Examples
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::assign;
///
/// struct Settings { dark_mode: bool }
///
/// let enable_dark_mode = assign(key_path!(Settings, dark_mode), true);
/// let mut settings = Settings { dark_mode: false };
/// enable_dark_mode(&mut settings);
/// assert!(settings.dark_mode);
/// ```
#[inline]
pub fn assign<Root, Value, K>(path: K, value: Value) -> impl Fn(&mut Root)
where
    Value: Clone,
    K: KeyPath<Root, Value>,
{
    move |root| *path.get_mut(root) = value.clone()
}

/// Lifts a key path into a setter taking the root and the new value.
#[inline]
pub fn setter<Root, Value, K>(path: K) -> impl Fn(&mut Root, Value)
where
    K: KeyPath<Root, Value>,
{
    move |root, value| *path.get_mut(root) = value
}

/// Lifts a key path and an in-place mutation of the value into an in-place
/// mutation of the root.
///
/// # Examples
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::mutate;
///
/// struct Cart { items: Vec<&'static str> }
///
/// let add_gift = mutate(key_path!(Cart, items), |items: &mut Vec<&'static str>| items.push("gift"));
/// let mut cart = Cart { items: vec!["book"] };
/// add_gift(&mut cart);
/// assert_eq!(cart.items, vec!["book", "gift"]);
/// ```
#[inline]
pub fn mutate<Root, Value, K, F>(path: K, function: F) -> impl Fn(&mut Root)
where
    K: KeyPath<Root, Value>,
    F: Fn(&mut Value),
{
    move |root| function(path.get_mut(root))
}

/// Lifts an in-place mutation of an element into one over a whole slice.
///
/// # Examples
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::{mut_each, mutate};
///
/// struct Item { price: u32 }
///
/// let discount_all = mut_each(mutate(key_path!(Item, price), |price: &mut u32| *price -= 10));
/// let mut items = vec![Item { price: 100 }, Item { price: 50 }];
/// discount_all(&mut items);
/// assert_eq!(items.iter().map(|item| item.price).collect::<Vec<_>>(), vec![90, 40]);
/// ```
#[inline]
pub fn mut_each<A, F>(function: F) -> impl Fn(&mut [A])
where
    F: Fn(&mut A),
{
    move |items| items.iter_mut().for_each(&function)
}
