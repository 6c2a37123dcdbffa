use fncomb::KeyPaths;
use fncomb::keypath::{KeyPath, get, over};

#[derive(Clone, Debug, PartialEq, KeyPaths)]
struct Inventory<T> {
    label: String,
    items: Vec<T>,
    #[key_path(skip)]
    revision: u32,
}

fn main() {
    let inventory = Inventory {
        label: "shelf".to_string(),
        items: vec![1, 2, 3],
        revision: 1,
    };

    let count = get(Inventory::<i32>::items_path());
    assert_eq!(count(&inventory).len(), 3);

    let relabel = over(Inventory::<i32>::label_path(), |label: String| label.to_uppercase());
    let relabeled = relabel(inventory);
    assert_eq!(*Inventory::<i32>::label_path().get(&relabeled), "SHELF");
    assert_eq!(relabeled.revision, 1);

    let city = fncomb::key_path!((u8, String), 1);
    assert_eq!(city.get(&(1, "Tokyo".to_string())), "Tokyo");
}
