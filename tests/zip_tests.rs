//! Tests for zip fan-out.

#![cfg(feature = "compose")]

use std::cell::RefCell;

use fncomb::compose::{first_element, zip2, zip3, zip4, zip5};
use fncomb::zip;
use rstest::rstest;

fn count(items: &[String]) -> usize {
    items.len()
}

#[test]
fn test_zip2_count_and_first_element() {
    let companies = vec!["LithoByte, Co.".to_string(), "Thryv, Inc.".to_string()];
    let summary = zip2(count, first_element);

    assert_eq!(summary(&companies), (2, Some("LithoByte, Co.".to_string())));
}

#[rstest]
#[case("", (0, true))]
#[case("litho", (5, false))]
fn test_zip2_over_str(#[case] input: &str, #[case] expected: (usize, bool)) {
    let stats = zip2(str::len, str::is_empty);
    assert_eq!(stats(input), expected);
}

#[test]
fn test_each_function_called_once_in_declaration_order() {
    let order = RefCell::new(Vec::new());
    let zipped = zip4(
        |n: &i32| {
            order.borrow_mut().push(1);
            *n
        },
        |n: &i32| {
            order.borrow_mut().push(2);
            n * 2
        },
        |n: &i32| {
            order.borrow_mut().push(3);
            n * 3
        },
        |n: &i32| {
            order.borrow_mut().push(4);
            n * 4
        },
    );

    assert_eq!(zipped(&5), (5, 10, 15, 20));
    assert_eq!(*order.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn test_zip_does_not_clone_input() {
    struct NotClone(i32);

    let zipped = zip3(
        |value: &NotClone| value.0,
        |value: &NotClone| value.0 + 1,
        |value: &NotClone| value.0 + 2,
    );

    assert_eq!(zipped(&NotClone(1)), (1, 2, 3));
}

#[test]
fn test_zip5_mixed_result_types() {
    let zipped = zip5(
        |text: &str| text.len(),
        |text: &str| text.to_uppercase(),
        |text: &str| text.starts_with('l'),
        |text: &str| text.chars().next(),
        |text: &str| text.split(',').count(),
    );

    assert_eq!(
        zipped("litho,byte"),
        (10, "LITHO,BYTE".to_string(), true, Some('l'), 2)
    );
}

// =============================================================================
// zip! macro
// =============================================================================

#[test]
fn test_zip_macro_dispatches_on_arity() {
    let two = zip!(str::len, str::is_empty);
    let six = zip!(
        str::len,
        str::is_empty,
        |text: &str| text.to_uppercase(),
        |text: &str| text.to_lowercase(),
        |text: &str| text.chars().rev().collect::<String>(),
        |text: &str| text.contains('b'),
    );

    assert_eq!(two("ab"), (2, false));
    assert_eq!(
        six("Ab"),
        (
            2,
            false,
            "AB".to_string(),
            "ab".to_string(),
            "bA".to_string(),
            true
        )
    );
}

#[test]
fn test_zip_by_value_function_through_clone() {
    fn consume_length(text: String) -> usize {
        text.len()
    }

    let zipped = zip2(
        |text: &String| consume_length(text.clone()),
        |text: &String| text.to_uppercase(),
    );

    assert_eq!(zipped(&"litho".to_string()), (5, "LITHO".to_string()));
}
