use std::cell::RefCell;

fn main() {
    let log = RefCell::new(Vec::new());
    let record = fncomb::union!(
        |word: &str| log.borrow_mut().push(word.len()),
        |word: &str| log.borrow_mut().push(word.chars().count()),
        |_: &str| log.borrow_mut().push(0),
    );
    record("litho");
    assert_eq!(*log.borrow(), vec![5, 5, 0]);

    let stats = fncomb::zip!(str::len, str::is_empty, |text: &str| text.to_uppercase());
    assert_eq!(stats("ab"), (2, false, "AB".to_string()));
}
