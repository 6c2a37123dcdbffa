//! Tests for weak-reference combinators.

#![cfg(feature = "weak")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;

use fncomb::weak::{
    Upgrade, weak_into_first, weak_into_first3, weak_into_second, weak_into_third3,
    weak_void_curry,
};

struct Screen {
    title: RefCell<String>,
}

// =============================================================================
// Liveness
// =============================================================================

#[test]
fn test_live_target_is_passed_through() {
    let screen = Rc::new(Screen {
        title: RefCell::new(String::from("Home")),
    });
    let rename = weak_into_first(Rc::downgrade(&screen), |screen: &Screen, title: &str| {
        *screen.title.borrow_mut() = title.to_string();
    });

    assert_eq!(rename("Settings"), Some(()));
    assert_eq!(*screen.title.borrow(), "Settings");
}

#[test]
fn test_released_target_returns_none_without_calling() {
    let calls = Cell::new(0);
    let screen = Rc::new(Screen {
        title: RefCell::new(String::from("Home")),
    });
    let title = weak_void_curry(Rc::downgrade(&screen), |screen: &Screen| {
        calls.set(calls.get() + 1);
        screen.title.borrow().clone()
    });

    assert_eq!(title(), Some("Home".to_string()));
    drop(screen);
    assert_eq!(title(), None);
    assert_eq!(title(), None);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_combinator_does_not_keep_target_alive() {
    let screen = Rc::new(Screen {
        title: RefCell::new(String::new()),
    });
    let _title = weak_void_curry(Rc::downgrade(&screen), |screen: &Screen| {
        screen.title.borrow().len()
    });

    assert_eq!(Rc::strong_count(&screen), 1);
}

#[test]
fn test_callback_stored_in_target_forms_no_cycle() {
    struct Owner {
        on_event: RefCell<Option<Box<dyn Fn(i32) -> Option<i32>>>>,
        base: i32,
    }

    let owner = Rc::new(Owner {
        on_event: RefCell::new(None),
        base: 100,
    });
    let callback = weak_into_first(Rc::downgrade(&owner), |owner: &Owner, value: i32| owner.base + value);
    *owner.on_event.borrow_mut() = Some(Box::new(callback));

    let result = owner.on_event.borrow().as_ref().and_then(|callback| callback(1));
    assert_eq!(result, Some(101));

    let observer = Rc::downgrade(&owner);
    drop(owner);
    assert!(Upgrade::upgrade(&observer).is_none());
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_weak_into_second_position() {
    let divisor = Rc::new(4);
    let divide = weak_into_second(Rc::downgrade(&divisor), |dividend: i32, divisor: &i32| dividend / divisor);

    assert_eq!(divide(20), Some(5));
}

#[test]
fn test_ternary_positions() {
    let separator = Rc::new(String::from(", "));

    let first = weak_into_first3(Rc::downgrade(&separator), |sep: &String, a: &str, b: &str| {
        format!("{sep}{a}{b}")
    });
    let third = weak_into_third3(Rc::downgrade(&separator), |a: &str, b: &str, sep: &String| {
        format!("{a}{sep}{b}")
    });

    assert_eq!(first("x", "y"), Some(", xy".to_string()));
    assert_eq!(third("LithoByte", "Co."), Some("LithoByte, Co.".to_string()));
}

// =============================================================================
// Thread-safe handles
// =============================================================================

#[test]
fn test_arc_weak_across_threads() {
    let totals = Arc::new(Mutex::new(Vec::new()));
    let record = weak_into_first(Arc::downgrade(&totals), |totals: &Mutex<Vec<i32>>, value: i32| {
        if let Ok(mut totals) = totals.lock() {
            totals.push(value);
        }
    });

    thread::scope(|scope| {
        scope.spawn(|| record(1));
        scope.spawn(|| record(2));
    });

    let mut recorded = totals.lock().map(|totals| totals.clone()).unwrap_or_default();
    recorded.sort_unstable();
    assert_eq!(recorded, vec![1, 2]);

    drop(totals);
    assert_eq!(record(3), None);
}
