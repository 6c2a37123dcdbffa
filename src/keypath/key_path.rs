//! Key paths: a getter and a mutable getter for one location inside a value.
//!
//! A key path names a place such as "the `city` of the `address` of a
//! `User`" without holding a `User`. It can read that place through a shared
//! borrow and write it through a mutable one.
//!
//! # Laws
//!
//! For every key path `path`, root `root` and value `value`:
//!
//! 1. **GetSet**: `path.set(root.clone(), path.get(&root).clone()) == root`
//! 2. **SetGet**: `path.get(&path.set(root, value.clone())) == &value`
//! 3. **SetSet**: `path.set(path.set(root, first), second) == path.set(root, second)`
//!
//! # Examples
//!
//! ```
//! use fncomb::key_path;
//! use fncomb::keypath::KeyPath;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Address { city: String }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, address: Address }
//!
//! let city = key_path!(User, address.city);
//! let user = User {
//!     name: "Calvin".to_string(),
//!     address: Address { city: "Tokyo".to_string() },
//! };
//!
//! assert_eq!(city.get(&user), "Tokyo");
//! let moved = city.set(user, "Osaka".to_string());
//! assert_eq!(moved.address.city, "Osaka");
//! ```

use std::marker::PhantomData;

/// A readable and writable location of type `Value` inside a `Root`.
///
/// # Laws
///
/// 1. **GetSet**: `path.set(root.clone(), path.get(&root).clone()) == root`
/// 2. **SetGet**: `path.get(&path.set(root, value.clone())) == &value`
/// 3. **SetSet**: `path.set(path.set(root, first), second) == path.set(root, second)`
pub trait KeyPath<Root, Value> {
    /// Borrows the location inside `root`.
    fn get<'a>(&self, root: &'a Root) -> &'a Value;

    /// Mutably borrows the location inside `root`.
    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value;

    /// Replaces the value at the location, returning the updated root.
    fn set(&self, mut root: Root, value: Value) -> Root {
        *self.get_mut(&mut root) = value;
        root
    }

    /// Replaces the value at the location with `function` applied to it.
    ///
    /// # Example
    ///
    /// ```
    /// use fncomb::key_path;
    /// use fncomb::keypath::KeyPath;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Counter { count: u32 }
    ///
    /// let count = key_path!(Counter, count);
    /// let counter = count.modify(Counter { count: 20 }, |count| count + 1);
    /// assert_eq!(counter.count, 21);
    /// ```
    fn modify<F>(&self, root: Root, function: F) -> Root
    where
        F: FnOnce(Value) -> Value,
        Value: Clone,
    {
        let current = self.get(&root).clone();
        self.set(root, function(current))
    }

    /// Mutates the value at the location in place.
    fn update<F>(&self, root: &mut Root, function: F)
    where
        F: FnOnce(&mut Value),
    {
        function(self.get_mut(root));
    }

    /// Extends this key path with another one that starts where this one ends.
    ///
    /// # Example
    ///
    /// ```
    /// use fncomb::key_path;
    /// use fncomb::keypath::KeyPath;
    ///
    /// struct Inner { value: i32 }
    /// struct Outer { inner: Inner }
    ///
    /// let value = key_path!(Outer, inner).compose(key_path!(Inner, value));
    /// let outer = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(*value.get(&outer), 42);
    /// ```
    fn compose<Next, Other>(self, other: Other) -> ComposedPath<Self, Other, Value>
    where
        Self: Sized,
        Other: KeyPath<Value, Next>,
    {
        ComposedPath::new(self, other)
    }
}

/// A key path built from a getter and a mutable getter.
///
/// The [`key_path!`](crate::key_path!) macro builds one for a struct field.
///
/// # Example
///
/// ```
/// use fncomb::keypath::{FieldPath, KeyPath};
///
/// struct Point { x: i32, y: i32 }
///
/// let x = FieldPath::new(|point: &Point| &point.x, |point: &mut Point| &mut point.x);
///
/// let mut point = Point { x: 10, y: 20 };
/// *x.get_mut(&mut point) += 5;
/// assert_eq!(*x.get(&point), 15);
/// ```
pub struct FieldPath<Root, Value, Getter, MutGetter>
where
    Getter: Fn(&Root) -> &Value,
    MutGetter: Fn(&mut Root) -> &mut Value,
{
    getter: Getter,
    mut_getter: MutGetter,
    _marker: PhantomData<fn(Root) -> Value>,
}

impl<Root, Value, Getter, MutGetter> FieldPath<Root, Value, Getter, MutGetter>
where
    Getter: Fn(&Root) -> &Value,
    MutGetter: Fn(&mut Root) -> &mut Value,
{
    /// Creates a key path from a getter and a mutable getter.
    ///
    /// Both functions must point at the same location.
    #[must_use]
    pub const fn new(getter: Getter, mut_getter: MutGetter) -> Self {
        Self {
            getter,
            mut_getter,
            _marker: PhantomData,
        }
    }
}

impl<Root, Value, Getter, MutGetter> KeyPath<Root, Value>
    for FieldPath<Root, Value, Getter, MutGetter>
where
    Getter: Fn(&Root) -> &Value,
    MutGetter: Fn(&mut Root) -> &mut Value,
{
    fn get<'a>(&self, root: &'a Root) -> &'a Value {
        (self.getter)(root)
    }

    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        (self.mut_getter)(root)
    }
}

impl<Root, Value, Getter, MutGetter> Clone for FieldPath<Root, Value, Getter, MutGetter>
where
    Getter: Fn(&Root) -> &Value + Clone,
    MutGetter: Fn(&mut Root) -> &mut Value + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            mut_getter: self.mut_getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Root, Value, Getter, MutGetter> std::fmt::Debug for FieldPath<Root, Value, Getter, MutGetter>
where
    Getter: Fn(&Root) -> &Value,
    MutGetter: Fn(&mut Root) -> &mut Value,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FieldPath").finish_non_exhaustive()
    }
}

/// Two key paths joined end to end.
///
/// `Middle` is the value type of `First` and the root type of `Second`. It
/// must be `'static` for the composition to be a [`KeyPath`].
pub struct ComposedPath<First, Second, Middle> {
    first: First,
    second: Second,
    _marker: PhantomData<fn() -> Middle>,
}

impl<First, Second, Middle> ComposedPath<First, Second, Middle> {
    /// Joins `first` and `second`.
    #[must_use]
    pub const fn new(first: First, second: Second) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<Root, Middle, Value, First, Second> KeyPath<Root, Value> for ComposedPath<First, Second, Middle>
where
    First: KeyPath<Root, Middle>,
    Second: KeyPath<Middle, Value>,
    Middle: 'static,
{
    fn get<'a>(&self, root: &'a Root) -> &'a Value {
        self.second.get(self.first.get(root))
    }

    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        self.second.get_mut(self.first.get_mut(root))
    }
}

impl<First: Clone, Second: Clone, Middle> Clone for ComposedPath<First, Second, Middle> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<First: std::fmt::Debug, Second: std::fmt::Debug, Middle> std::fmt::Debug
    for ComposedPath<First, Second, Middle>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPath")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a key path to a field, or a chain of fields, of a type.
///
/// # Syntax
///
/// ```text
/// key_path!(Type, field)
/// key_path!(Type, field.nested.deeper)
/// ```
///
/// Tuple fields are addressed by index: `key_path!((i32, String), 1)`.
///
/// # Example
///
/// ```
/// use fncomb::key_path;
/// use fncomb::keypath::KeyPath;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let y = key_path!(Point, y);
/// let point = y.set(Point { x: 1, y: 2 }, 20);
/// assert_eq!(point, Point { x: 1, y: 20 });
///
/// let second = key_path!((i32, String), 1);
/// assert_eq!(second.get(&(1, "two".to_string())), "two");
/// ```
#[macro_export]
macro_rules! key_path {
    ($root:ty, $($field:tt).+) => {
        $crate::keypath::FieldPath::new(
            |root: &$root| &root.$($field).+,
            |root: &mut $root| &mut root.$($field).+,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_field_path_set_keeps_other_fields() {
        let x = key_path!(Point, x);
        let updated = x.set(Point { x: 10, y: 20 }, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_update_in_place() {
        let y = key_path!(Point, y);
        let mut point = Point { x: 1, y: 2 };
        y.update(&mut point, |y| *y *= 10);
        assert_eq!(point.y, 20);
    }

    #[test]
    fn test_composed_path_get_mut() {
        struct Outer {
            point: Point,
        }

        let outer_x = key_path!(Outer, point).compose(key_path!(Point, x));
        let mut outer = Outer {
            point: Point { x: 1, y: 2 },
        };
        *outer_x.get_mut(&mut outer) = 7;
        assert_eq!(outer.point, Point { x: 7, y: 2 });
    }
}
