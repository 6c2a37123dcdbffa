//! Fan-out of several functions over one shared input.
//!
//! `zipN(f1, .., fN)` returns a function that passes its input to every
//! `fi` and collects the results into a tuple in declaration order. Each
//! function is invoked exactly once per call.
//!
//! The input is borrowed: every function takes `&T`, which lets `T` be an
//! unsized type such as `str` or `[U]` and avoids cloning it for each callee.
//! A function `f` taking `T` by value joins as `|t: &T| f(t.clone())`.
//!
//! The [`zip!`](crate::zip!) macro dispatches to the right arity.

macro_rules! define_zip {
    ($name:ident: $($function:ident => $output:ident),+) => {
        $crate::paste::paste! {
            /// Applies each function to the same borrowed input and collects the
            /// results in declaration order.
            #[inline]
            pub fn $name<T, $($output,)+ $($function,)+>(
                $([<$function:lower>]: $function),+
            ) -> impl Fn(&T) -> ($($output,)+)
            where
                T: ?Sized,
                $($function: Fn(&T) -> $output,)+
            {
                move |input| ($([<$function:lower>](input),)+)
            }
        }
    };
}

define_zip!(zip3: F1 => U1, F2 => U2, F3 => U3);
define_zip!(zip4: F1 => U1, F2 => U2, F3 => U3, F4 => U4);
define_zip!(zip5: F1 => U1, F2 => U2, F3 => U3, F4 => U4, F5 => U5);
define_zip!(zip6: F1 => U1, F2 => U2, F3 => U3, F4 => U4, F5 => U5, F6 => U6);

/// Applies two functions to the same borrowed input.
///
/// `zip2(f, g)(t) == (f(t), g(t))`
///
/// # Examples
///
/// ```
/// use fncomb::compose::{first_element, zip2};
///
/// let companies = ["LithoByte, Co.".to_string(), "Thryv, Inc.".to_string()];
/// let summary = zip2(<[String]>::len, first_element);
///
/// assert_eq!(summary(&companies), (2, Some("LithoByte, Co.".to_string())));
/// ```
#[inline]
pub fn zip2<T, U1, U2, F1, F2>(first: F1, second: F2) -> impl Fn(&T) -> (U1, U2)
where
    T: ?Sized,
    F1: Fn(&T) -> U1,
    F2: Fn(&T) -> U2,
{
    move |input| (first(input), second(input))
}

/// Applies 2 to 6 functions to the same borrowed input.
///
/// Expands to the matching `zip2` .. `zip6` call.
///
/// # Examples
///
/// ```
/// use fncomb::zip;
///
/// let stats = zip!(str::len, str::is_empty, |text: &str| text.to_uppercase());
/// assert_eq!(stats("litho"), (5, false, "LITHO".to_string()));
/// ```
#[macro_export]
macro_rules! zip {
    ($first:expr, $second:expr $(,)?) => {
        $crate::compose::zip2($first, $second)
    };
    ($first:expr, $second:expr, $third:expr $(,)?) => {
        $crate::compose::zip3($first, $second, $third)
    };
    ($first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {
        $crate::compose::zip4($first, $second, $third, $fourth)
    };
    ($first:expr, $second:expr, $third:expr, $fourth:expr, $fifth:expr $(,)?) => {
        $crate::compose::zip5($first, $second, $third, $fourth, $fifth)
    };
    ($first:expr, $second:expr, $third:expr, $fourth:expr, $fifth:expr, $sixth:expr $(,)?) => {
        $crate::compose::zip6($first, $second, $third, $fourth, $fifth, $sixth)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_zip6_keeps_declaration_order() {
        let zipped = zip6(
            |n: &i32| *n,
            |n: &i32| n + 1,
            |n: &i32| n + 2,
            |n: &i32| n + 3,
            |n: &i32| n + 4,
            |n: &i32| n + 5,
        );
        assert_eq!(zipped(&10), (10, 11, 12, 13, 14, 15));
    }

    #[test]
    fn test_zip3_invokes_each_function_once() {
        let calls = Cell::new(0);
        let count = |text: &str| {
            calls.set(calls.get() + 1);
            text.len()
        };
        let zipped = zip3(count, count, count);

        assert_eq!(zipped("abc"), (3, 3, 3));
        assert_eq!(calls.get(), 3);
    }
}
