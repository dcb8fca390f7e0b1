#![cfg(test)]

use super::*;

#[test]
fn test_insertion_order() {
    let mut map = LinkedMap::new();
    for (key, value) in [("three", 3), ("one", 1), ("two", 2)] {
        assert_eq!(map.insert(key, value), None);
    }

    assert_eq!(map.insert("one", 10), Some(1), "Inserting a present key returns the old value.");
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        ["three", "one", "two"],
        "Replacing a value shouldn't move its key."
    );
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [3, 10, 2]);
    assert_eq!(map.iter().next_back(), Some((&"two", &2)));
}

#[test]
fn test_removal_and_compaction() {
    let mut map: LinkedMap<u32, u32> = (0..10).map(|i| (i, i * i)).collect();

    for i in (0..10).step_by(2) {
        assert_eq!(map.remove(&i), Some(i * i));
    }
    assert_eq!(map.remove(&0), None, "Removing twice should find nothing.");
    assert_eq!(map.len(), 5);

    // Holes now outnumber entries, forcing a compaction.
    map.remove(&1);
    assert_eq!(map.entries.len(), map.len(), "Holes should have been compacted away.");

    map.remove(&3);
    assert_eq!(map.entries.len(), map.len() + 1, "A single hole shouldn't compact.");

    assert_eq!(map.get(&5), Some(&25), "Lookups should survive compaction.");
    assert_eq!(map.get(&9), Some(&81));
    assert_eq!(map.clone().into_iter().collect::<Vec<_>>(), [(5, 25), (7, 49), (9, 81)]);

    *map.get_or_insert_with(11, || 0) += 121;
    *map.get_or_insert_with(5, || 0) += 1;
    assert_eq!(map.get(&11), Some(&121));
    assert_eq!(map.get(&5), Some(&26));
    assert!(map.contains_key(&7));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
}

#[test]
fn test_merge_keeps_position() {
    let mut map: LinkedMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    map.merge("a", 10, |old, new| old + new);
    map.merge("c", 3, |_, _| unreachable!());

    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("a", 11), ("b", 2), ("c", 3)]);
}

#[test]
fn test_equality_is_ordered() {
    let forward: LinkedMap<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let backward: LinkedMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    assert_ne!(forward, backward, "LinkedMaps with different orders shouldn't be equal.");
    assert_eq!(format!("{forward:?}"), "{1: 'a', 2: 'b'}");
}

#[test]
fn test_linked_set() {
    let mut set: LinkedSet<_> = ["pear", "apple", "fig"].into_iter().collect();
    assert!(!set.insert("apple"), "Inserting a present value should report no change.");
    assert!(set.insert("kiwi"));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["pear", "apple", "fig", "kiwi"]);

    assert!(set.remove("fig"));
    assert!(!set.remove("fig"));
    assert!(set.contains("pear"));
    assert_eq!(set.len(), 3);

    set.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
    assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), ["kiwi", "pear", "apple"]);
    assert_eq!(format!("{set:?}"), r#"{"kiwi", "pear", "apple"}"#);

    set.clear();
    assert!(set.is_empty());
}
