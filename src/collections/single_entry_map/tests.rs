#![cfg(test)]

use super::*;

#[test]
fn test_single_entry() {
    let mut map = SingleEntryMap::new();
    assert!(map.is_empty());
    assert!(!map.contains_key("a"), "An empty map should contain no keys.");

    assert_eq!(map.put(String::from("a"), 1), None);
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("a"));
    assert!(map.contains_value(&1));
    assert!(!map.contains_value(&2));

    assert_eq!(map.put(String::from("b"), 2), Some(1), "Putting should replace the entry.");
    assert_eq!(map.len(), 1);
    assert_eq!(map.remove("a"), None, "Removing a different key should do nothing.");
    assert_eq!(map.entry(), Some((&String::from("b"), &2)));
    assert_eq!(map.keys().collect::<Vec<_>>(), [&String::from("b")]);

    assert_eq!(map.remove("b"), Some(2));
    assert!(map.is_empty());
    assert_eq!(map.values().next(), None);
}

#[test]
fn test_immutable() {
    let mut map = SingleEntryMap::immutable('k', "value");
    assert!(map.is_immutable());

    assert_eq!(map.put('j', "other"), None);
    assert_eq!(map.remove(&'k'), None);
    map.clear();

    assert_eq!(map.get(&'k'), Some(&"value"), "Writes to an immutable map should be ignored.");
    assert_eq!(map.into_entry(), Some(('k', "value")));
}
