#![cfg(feature = "compose")]
//! Property-based tests for combinator laws.
//!
//! ## Optional Chaining
//! - **Absence**: `chain(f, g)(a) == f(a).map(g)`, and `g` is not called on `None`
//!
//! ## Positional Fixing
//! - **Fix**: `f.fix_second(b)(a) == f(a, b)`
//! - **Free-function agreement**: `into_second(b, f) == f.fix_second(b)`
//!
//! ## Tuples
//! - **Round trip**: `untupled2(tupled2(f))(a, b) == f(a, b)`
//!
//! ## Fan-out
//! - **Zip**: `zip2(f, g)(t) == (f(t), g(t))`
//! - **Union order**: `union(f, g)` calls `f` then `g`
//! - **Accumulation**: appending `f` then `g` to an empty slot behaves as `union(f, g)`
//!
//! ## Flip
//! - **Double flip identity**: `flip(flip(f)) == f`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fncomb::compose::{
    BinaryFunction, Handler, append, chain, flip, into_second, tupled2, union, untupled2, zip2,
};
use proptest::prelude::*;

// =============================================================================
// Optional Chaining
// =============================================================================

proptest! {
    #[test]
    fn prop_chain_matches_option_map(x in any::<i32>()) {
        let upstream = |n: i32| (n % 3 != 0).then_some(n);
        let downstream = |n: i32| n.wrapping_mul(7);

        prop_assert_eq!(chain(upstream, downstream)(x), upstream(x).map(downstream));
    }

    #[test]
    fn prop_chain_skips_downstream_on_none(x in any::<i32>()) {
        let calls = Cell::new(0);
        let chained = chain(|_: i32| None::<i32>, |n: i32| {
            calls.set(calls.get() + 1);
            n
        });

        prop_assert_eq!(chained(x), None);
        prop_assert_eq!(calls.get(), 0);
    }
}

// =============================================================================
// Positional Fixing
// =============================================================================

proptest! {
    #[test]
    fn prop_fix_second_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(subtract.fix_second(b)(a), subtract(a, b));
        prop_assert_eq!(subtract.fix_first(a)(b), subtract(a, b));
    }

    #[test]
    fn prop_into_second_agrees_with_fix_second(a in any::<i64>(), b in any::<i64>()) {
        let combine = |x: i64, y: i64| x.wrapping_mul(31).wrapping_add(y);

        prop_assert_eq!(into_second(b, combine)(a), combine.fix_second(b)(a));
    }
}

// =============================================================================
// Tuples
// =============================================================================

proptest! {
    #[test]
    fn prop_tuple_round_trip(a in any::<i32>(), b in ".{0,8}") {
        let describe = |number: i32, text: String| format!("{number}:{text}");
        let round_trip = untupled2(tupled2(describe));

        prop_assert_eq!(round_trip(a, b.clone()), describe(a, b));
    }
}

// =============================================================================
// Fan-out
// =============================================================================

proptest! {
    #[test]
    fn prop_zip_pairs_results(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let length = |items: &[i32]| items.len();
        let maximum = |items: &[i32]| items.iter().max().copied();
        let items = values.as_slice();

        prop_assert_eq!(zip2(length, maximum)(items), (length(items), maximum(items)));
    }

    #[test]
    fn prop_union_calls_in_order(x in any::<i32>()) {
        let seen = RefCell::new(Vec::new());
        let both = union(
            |n: i32| seen.borrow_mut().push(("first", n)),
            |n: i32| seen.borrow_mut().push(("second", n)),
        );

        both(x);

        prop_assert_eq!(seen.borrow().clone(), vec![("first", x), ("second", x)]);
    }

    #[test]
    fn prop_accumulation_equals_union(x in any::<i32>()) {
        let accumulated = Rc::new(RefCell::new(Vec::new()));
        let mut slot: Option<Handler<i32>> = None;
        let first = Rc::clone(&accumulated);
        append(&mut slot, move |n: i32| first.borrow_mut().push(n.wrapping_add(1)));
        let second = Rc::clone(&accumulated);
        append(&mut slot, move |n: i32| second.borrow_mut().push(n.wrapping_mul(2)));

        let unioned = RefCell::new(Vec::new());
        let expected = union(
            |n: i32| unioned.borrow_mut().push(n.wrapping_add(1)),
            |n: i32| unioned.borrow_mut().push(n.wrapping_mul(2)),
        );

        if let Some(handler) = &slot {
            handler(x);
        }
        expected(x);

        prop_assert_eq!(accumulated.borrow().clone(), unioned.borrow().clone());
    }
}

// =============================================================================
// Flip
// =============================================================================

proptest! {
    #[test]
    fn prop_double_flip_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }

    #[test]
    fn prop_flip_definition(a in any::<u8>(), b in any::<u8>()) {
        let pair = |x: u8, y: u8| (x, y);

        prop_assert_eq!(flip(pair)(a, b), (b, a));
    }
}
