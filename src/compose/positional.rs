//! Positional combinators for functions of 2 to 6 arguments.
//!
//! Rust has no variadic generics, so each arity gets its own extension trait,
//! implemented for every `Fn` of that arity:
//!
//! | Trait | Arity |
//! |-------|-------|
//! | [`BinaryFunction`] | 2 |
//! | [`TernaryFunction`] | 3 |
//! | [`QuaternaryFunction`] | 4 |
//! | [`QuinaryFunction`] | 5 |
//! | [`SenaryFunction`] | 6 |
//!
//! Every trait offers, for each parameter position `first` .. `sixth`:
//!
//! - `fix_<position>(value)`: the argument at that position is `value`
//!   (cloned on every call); the returned function takes the remaining
//!   arguments in their original order.
//! - `provide_<position>(provider)`: the argument is computed by calling
//!   `provider()` once per call, before the wrapped function runs.
//! - `premap_<position>(transform)`: the caller still supplies an argument at
//!   that position, but of another type; `transform` converts it once per
//!   call, before the wrapped function runs.
//!
//! Traits of arity 3 and above also fix a contiguous block of arguments from
//! the front (`fix_first_two`, `fix_first_three`) or from the back
//! (`fix_last_two`, `fix_last_three`) with a single tuple. Every trait has
//! `tupled`, which turns the function into one that takes all of its
//! arguments as a single tuple.
//!
//! Each combinator fixes one position or one block. Chaining calls fixes
//! several:
//!
//! ```
//! use fncomb::compose::{BinaryFunction, TernaryFunction};
//!
//! let sum = |a: i32, b: i32, c: i32| a + b + c;
//! let only_middle = sum.fix_first(1).fix_second(3);
//! assert_eq!(only_middle(2), 6);
//! ```

macro_rules! fix_methods {
    (
        -> $output:ident;
        $(
            $position:ident: [$($before:ident),*] $fixed:ident [$($after:ident),*] => [$($rest:ident),*];
        )+
    ) => {
        $crate::paste::paste! {
            $(
                #[doc = "Fixes the " $position " argument to `value`."]
                ///
                /// The returned function takes the remaining arguments in their original
                /// order and passes a clone of `value` on every call.
                #[inline]
                fn [<fix_ $position>](self, value: $fixed) -> impl Fn($($rest),*) -> $output
                where
                    $fixed: Clone,
                {
                    move |$([<$rest:lower>]: $rest),*| {
                        self($([<$before:lower>],)* value.clone() $(, [<$after:lower>])*)
                    }
                }

                #[doc = "Computes the " $position " argument by calling `provider`."]
                ///
                /// `provider` runs exactly once per call, before the wrapped function.
                /// Its result is never cached.
                #[inline]
                fn [<provide_ $position>]<P>(self, provider: P) -> impl Fn($($rest),*) -> $output
                where
                    P: Fn() -> $fixed,
                {
                    move |$([<$rest:lower>]: $rest),*| {
                        self($([<$before:lower>],)* provider() $(, [<$after:lower>])*)
                    }
                }

                #[doc = "Converts the " $position " argument with `transform` before the call."]
                ///
                /// The returned function takes an `X` in that position. `transform` runs
                /// exactly once per call, before the wrapped function.
                #[inline]
                fn [<premap_ $position>]<X, H>(
                    self,
                    transform: H,
                ) -> impl Fn($($before,)* X $(, $after)*) -> $output
                where
                    H: Fn(X) -> $fixed,
                {
                    move |$([<$before:lower>]: $before,)* input: X $(, [<$after:lower>]: $after)*| {
                        self($([<$before:lower>],)* transform(input) $(, [<$after:lower>])*)
                    }
                }
            )+
        }
    };
}

macro_rules! block_methods {
    (
        -> $output:ident;
        leading {
            $( $leading_name:ident: ($($leading_fixed:ident),+) [$($leading_rest:ident),*]; )*
        }
        trailing {
            $( $trailing_name:ident: [$($trailing_rest:ident),*] ($($trailing_fixed:ident),+); )*
        }
    ) => {
        $crate::paste::paste! {
            $(
                /// Fixes a block of leading arguments to the tuple `values`.
                ///
                /// The returned function takes the remaining arguments. A clone of
                /// `values` is destructured on every call.
                #[inline]
                fn $leading_name(
                    self,
                    values: ($($leading_fixed),+),
                ) -> impl Fn($($leading_rest),*) -> $output
                where
                    $($leading_fixed: Clone,)+
                {
                    move |$([<$leading_rest:lower>]: $leading_rest),*| {
                        let ($([<$leading_fixed:lower>]),+) = values.clone();
                        self($([<$leading_fixed:lower>]),+ $(, [<$leading_rest:lower>])*)
                    }
                }
            )*

            $(
                /// Fixes a block of trailing arguments to the tuple `values`.
                ///
                /// The returned function takes the remaining leading arguments. A clone
                /// of `values` is destructured on every call.
                #[inline]
                fn $trailing_name(
                    self,
                    values: ($($trailing_fixed),+),
                ) -> impl Fn($($trailing_rest),*) -> $output
                where
                    $($trailing_fixed: Clone,)+
                {
                    move |$([<$trailing_rest:lower>]: $trailing_rest),*| {
                        let ($([<$trailing_fixed:lower>]),+) = values.clone();
                        self($([<$trailing_rest:lower>],)* $([<$trailing_fixed:lower>]),+)
                    }
                }
            )*
        }
    };
}

macro_rules! tupled_method {
    ($($parameter:ident),+ -> $output:ident) => {
        $crate::paste::paste! {
            /// Converts this function into one that takes all of its arguments as one tuple.
            #[inline]
            fn tupled(self) -> impl Fn(($($parameter),+)) -> $output {
                move |($([<$parameter:lower>]),+)| self($([<$parameter:lower>]),+)
            }
        }
    };
}

/// Positional combinators for functions of two arguments.
///
/// # Examples
///
/// ```
/// use fncomb::compose::BinaryFunction;
///
/// let concat = |first: &str, second: &str| format!("{first}{second}");
///
/// let company = concat.fix_second(", Co.");
/// assert_eq!(company("LithoByte"), "LithoByte, Co.");
///
/// let bool_to_int = |flag: bool| i32::from(flag);
/// let add = |a: i32, b: i32| a + b;
/// let add_conditional = add.premap_first(bool_to_int);
/// assert_eq!(add_conditional(true, 10), 11);
/// assert_eq!(add_conditional(false, 10), 10);
///
/// let add_two = add.provide_first(|| 2);
/// assert_eq!(add_two(1), 3);
/// ```
pub trait BinaryFunction<A, B, R>: Fn(A, B) -> R + Sized {
    fix_methods! {
        -> R;
        first: [] A [B] => [B];
        second: [A] B [] => [A];
    }

    tupled_method!(A, B -> R);
}

impl<A, B, R, Function> BinaryFunction<A, B, R> for Function where Function: Fn(A, B) -> R {}

/// Positional combinators for functions of three arguments.
///
/// # Examples
///
/// ```
/// use fncomb::compose::TernaryFunction;
///
/// let concat = |a: &str, b: &str, c: &str| format!("{a}{b}{c}");
///
/// let full_name = concat.fix_last_two(("Calvin", " Collins"));
/// assert_eq!(full_name("Mr. "), "Mr. Calvin Collins");
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// assert_eq!(sum.fix_first_two((5, 5))(10), 20);
/// assert_eq!(sum.fix_third(10)(5, 5), 20);
/// ```
pub trait TernaryFunction<A, B, C, R>: Fn(A, B, C) -> R + Sized {
    fix_methods! {
        -> R;
        first: [] A [B, C] => [B, C];
        second: [A] B [C] => [A, C];
        third: [A, B] C [] => [A, B];
    }

    block_methods! {
        -> R;
        leading {
            fix_first_two: (A, B) [C];
        }
        trailing {
            fix_last_two: [A] (B, C);
        }
    }

    tupled_method!(A, B, C -> R);
}

impl<A, B, C, R, Function> TernaryFunction<A, B, C, R> for Function where
    Function: Fn(A, B, C) -> R
{
}

/// Positional combinators for functions of four arguments.
///
/// # Examples
///
/// ```
/// use fncomb::compose::QuaternaryFunction;
///
/// let sum = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
///
/// let add_twelve = sum.fix_last_three((4, 4, 4));
/// assert_eq!(add_twelve(0), 12);
///
/// let add_ten = sum.fix_last_two((5, 5));
/// assert_eq!(add_ten(5, 5), 20);
///
/// assert_eq!(sum.fix_fourth(10)(10, 10, 10), 40);
/// ```
pub trait QuaternaryFunction<A, B, C, D, R>: Fn(A, B, C, D) -> R + Sized {
    fix_methods! {
        -> R;
        first: [] A [B, C, D] => [B, C, D];
        second: [A] B [C, D] => [A, C, D];
        third: [A, B] C [D] => [A, B, D];
        fourth: [A, B, C] D [] => [A, B, C];
    }

    block_methods! {
        -> R;
        leading {
            fix_first_two: (A, B) [C, D];
            fix_first_three: (A, B, C) [D];
        }
        trailing {
            fix_last_two: [A, B] (C, D);
            fix_last_three: [A] (B, C, D);
        }
    }

    tupled_method!(A, B, C, D -> R);
}

impl<A, B, C, D, R, Function> QuaternaryFunction<A, B, C, D, R> for Function where
    Function: Fn(A, B, C, D) -> R
{
}

/// Positional combinators for functions of five arguments.
pub trait QuinaryFunction<A, B, C, D, E, R>: Fn(A, B, C, D, E) -> R + Sized {
    fix_methods! {
        -> R;
        first: [] A [B, C, D, E] => [B, C, D, E];
        second: [A] B [C, D, E] => [A, C, D, E];
        third: [A, B] C [D, E] => [A, B, D, E];
        fourth: [A, B, C] D [E] => [A, B, C, E];
        fifth: [A, B, C, D] E [] => [A, B, C, D];
    }

    block_methods! {
        -> R;
        leading {
            fix_first_two: (A, B) [C, D, E];
            fix_first_three: (A, B, C) [D, E];
        }
        trailing {
            fix_last_two: [A, B, C] (D, E);
            fix_last_three: [A, B] (C, D, E);
        }
    }

    tupled_method!(A, B, C, D, E -> R);
}

impl<A, B, C, D, E, R, Function> QuinaryFunction<A, B, C, D, E, R> for Function where
    Function: Fn(A, B, C, D, E) -> R
{
}

/// Positional combinators for functions of six arguments.
pub trait SenaryFunction<A, B, C, D, E, F, R>: Fn(A, B, C, D, E, F) -> R + Sized {
    fix_methods! {
        -> R;
        first: [] A [B, C, D, E, F] => [B, C, D, E, F];
        second: [A] B [C, D, E, F] => [A, C, D, E, F];
        third: [A, B] C [D, E, F] => [A, B, D, E, F];
        fourth: [A, B, C] D [E, F] => [A, B, C, E, F];
        fifth: [A, B, C, D] E [F] => [A, B, C, D, F];
        sixth: [A, B, C, D, E] F [] => [A, B, C, D, E];
    }

    block_methods! {
        -> R;
        leading {
            fix_first_two: (A, B) [C, D, E, F];
            fix_first_three: (A, B, C) [D, E, F];
        }
        trailing {
            fix_last_two: [A, B, C, D] (E, F);
            fix_last_three: [A, B, C] (D, E, F);
        }
    }

    tupled_method!(A, B, C, D, E, F -> R);
}

impl<A, B, C, D, E, F, R, Function> SenaryFunction<A, B, C, D, E, F, R> for Function where
    Function: Fn(A, B, C, D, E, F) -> R
{
}
