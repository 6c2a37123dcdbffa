//! Tests for argument providers.
//!
//! A provider runs exactly once per call, before the wrapped function, and
//! its result is never cached.

#![cfg(feature = "compose")]

use std::cell::{Cell, RefCell};

use fncomb::compose::{premap_first, premap_second, provide_first, provide_second};
use rstest::rstest;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

// =============================================================================
// Free functions
// =============================================================================

#[test]
fn test_provide_first_constant() {
    let add_two = provide_first(|| 2, add);
    assert_eq!(add_two(1), 3);
}

#[test]
fn test_provide_second_counter_increments_per_call() {
    let counter = Cell::new(0);
    let add_counter = provide_second(
        || {
            counter.set(counter.get() + 1);
            counter.get()
        },
        add,
    );

    assert_eq!(add_counter(10), 11);
    assert_eq!(add_counter(10), 12);
    assert_eq!(add_counter(10), 13);
}

#[rstest]
#[case(true, 11)]
#[case(false, 10)]
fn test_premap_first_bool_to_int(#[case] flag: bool, #[case] expected: i32) {
    let add_conditional = premap_first(|flag: bool| i32::from(flag), add);
    assert_eq!(add_conditional(flag, 10), expected);
}

#[test]
fn test_premap_second_converts_only_its_position() {
    let repeat = |text: &str, times: usize| text.repeat(times);
    let repeat_by_word = premap_second(|word: &str| word.len(), repeat);

    assert_eq!(repeat_by_word("ab", "xyz"), "ababab");
}

#[test]
fn test_provider_runs_before_function() {
    let events = RefCell::new(Vec::new());
    let with_provided = provide_first(
        || {
            events.borrow_mut().push("provider");
            1
        },
        |a: i32, b: i32| {
            events.borrow_mut().push("function");
            a * b
        },
    );

    assert_eq!(with_provided(7), 7);
    assert_eq!(*events.borrow(), vec!["provider", "function"]);
}

// =============================================================================
// Trait methods
// =============================================================================

mod ternary_tests {
    use std::cell::Cell;

    use fncomb::compose::TernaryFunction;

    fn describe(name: &str, age: u32, city: &str) -> String {
        format!("{name} ({age}) from {city}")
    }

    #[test]
    fn test_provide_third() {
        let from_tokyo = describe.provide_third(|| "Tokyo");
        assert_eq!(from_tokyo("Calvin", 30), "Calvin (30) from Tokyo");
    }

    #[test]
    fn test_premap_second_runs_once_per_call() {
        let calls = Cell::new(0);
        let by_birth_year = describe.premap_second(|birth_year: u32| {
            calls.set(calls.get() + 1);
            2026 - birth_year
        });

        assert_eq!(by_birth_year("Elliot", 1996, "Osaka"), "Elliot (30) from Osaka");
        assert_eq!(calls.get(), 1);
    }
}

mod senary_tests {
    use fncomb::compose::SenaryFunction;

    fn digits(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64) -> u64 {
        [a, b, c, d, e, f].iter().fold(0, |total, digit| total * 10 + digit)
    }

    #[test]
    fn test_provide_each_position() {
        assert_eq!(digits.provide_first(|| 9)(1, 2, 3, 4, 5), 912_345);
        assert_eq!(digits.provide_fourth(|| 9)(1, 2, 3, 4, 5), 123_945);
        assert_eq!(digits.provide_sixth(|| 9)(1, 2, 3, 4, 5), 123_459);
    }

    #[test]
    fn test_premap_fifth() {
        let from_text = digits.premap_fifth(|text: &str| text.len() as u64);
        assert_eq!(from_text(1, 2, 3, 4, "abcdefgh", 6), 123_486);
    }
}
