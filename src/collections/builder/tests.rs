#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;

use super::*;
use crate::collections::LinkedMap;

#[test]
fn test_map_types() {
    for map_type in MapType::ALL {
        let map: AnyMap<u8, char> = map_type.new_map_with_cap(4);
        assert_eq!(map.map_type(), map_type, "{map_type} should instantiate its own kind.");
        assert!(map.is_empty());
    }
    assert!(MapType::default().is_hash());
}

#[test]
fn test_map_builder_order() {
    let entries = [(3, 'c'), (1, 'a'), (2, 'b')];

    let linked = MapBuilder::of_type(MapType::Linked).put_entries(entries).build();
    assert_eq!(
        linked.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        [3, 1, 2],
        "A linked map should keep insertion order."
    );

    let tree = MapBuilder::of_type(MapType::Tree).put_entries(entries).build();
    assert_eq!(
        tree.into_iter().collect::<Vec<_>>(),
        [(1, 'a'), (2, 'b'), (3, 'c')],
        "A tree map should keep key order."
    );
}

#[test]
fn test_map_builder_copies() {
    let builder = MapBuilder::new().put("one", 1).put("two", 2);

    let mut copy = builder.build_new();
    copy.insert("three", 3);
    assert_eq!(builder.map.len(), 2, "Building a copy shouldn't share the backing map.");
    assert!(copy.map_type().is_hash());

    let tree = builder.build_as(MapType::Tree);
    assert!(tree.is_tree());
    assert_eq!(tree.get("one"), Some(&1));

    let target = builder.build_into(BTreeMap::from([("zero", 0)]));
    assert_eq!(target.len(), 3);

    let merged = MapBuilder::of_type(MapType::Linked)
        .put("zero", 0)
        .put_all(&copy)
        .build();
    assert_eq!(merged.len(), 4);
    assert!(merged.contains_value(&3));
    assert!(!merged.contains_key("four"));

    let map = builder.build();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_from_map() {
    let existing = HashMap::from([(1, 1)]);
    let map = MapBuilder::from_map(existing).put(2, 4).build();
    assert!(map.is_hash());
    assert_eq!(map.len(), 2);

    let linked: LinkedMap<_, _> = [(5, 25)].into_iter().collect();
    let mut map = MapBuilder::from_map(linked).put(1, 1).build();
    assert_eq!(map.iter().next(), Some((&5, &25)));
    assert_eq!(map.remove(&5), Some(25));
    map.clear();
    assert!(map.is_empty());
}

#[test]
fn test_length_mismatch() {
    let result = MapBuilder::<u8, u8>::new().put_lists([1, 2, 3], [1, 2]);
    assert_eq!(
        result.map(|builder| builder.build().len()).unwrap_err(),
        LengthMismatch { keys: 3, values: 2 }
    );
    assert_eq!(
        LengthMismatch { keys: 3, values: 2 }.to_string(),
        "Unable to pair 3 keys with 2 values!"
    );
}

#[test]
fn test_single_entry_helpers() {
    let mut map = single_entry_map("key", 1);
    assert!(!map.is_immutable());
    map.put("other", 2);
    assert_eq!(map.get("other"), Some(&2));

    let mut frozen = immutable_single_entry_map("key", 1);
    frozen.clear();
    assert_eq!(frozen.get("key"), Some(&1));
}

#[test]
fn test_collection_types() {
    for collection_type in CollectionType::ALL {
        let mut collection = collection_type.instantiate();
        assert_eq!(collection.collection_type(), collection_type);
        assert!(collection.add(1));
        assert!(collection.contains(&1));
        assert!(!collection.contains(&2));
        assert_eq!(collection.len(), 1);
    }

    let sets = CollectionType::ALL
        .into_iter()
        .filter(|t| !t.is_sequence())
        .collect::<Vec<_>>();
    assert_eq!(
        sets,
        [CollectionType::HashSet, CollectionType::BTreeSet, CollectionType::BinaryHeap]
    );
}

#[test]
fn test_collection_builder_sort() {
    for collection_type in CollectionType::ALL.into_iter().filter(|t| t.is_sequence()) {
        let values = CollectionBuilder::new(collection_type)
            .add_all([3, 1, 2])
            .add(0)
            .sort()
            .into_vec();
        assert_eq!(values, [0, 1, 2, 3], "{collection_type} should sort in place.");
    }

    let reversed = CollectionBuilder::new(CollectionType::LinkedList)
        .add_all(["a", "c", "b"])
        .sort_by(|a, b| b.cmp(a))
        .to_vec();
    assert_eq!(reversed, ["c", "b", "a"]);

    let heap = CollectionBuilder::new(CollectionType::BinaryHeap)
        .add_all([2, 3, 1])
        .sort_by(|a, b| b.cmp(a))
        .into_vec();
    assert_eq!(heap, [1, 2, 3], "A heap should come out in ascending order.");
}

#[test]
fn test_linked_set_kind() {
    let mut set = CollectionType::LinkedSet.instantiate();
    assert!(set.is_linked_set());
    assert!(set.add('c'));
    assert!(set.add('a'));
    assert!(!set.add('c'), "Adding a duplicate to a linked set should report no change.");
    assert_eq!(set.to_vec(), ['c', 'a'], "A linked set should keep insertion order.");

    let deduped = CollectionBuilder::from_collection(vec![3, 1, 3, 2, 1])
        .build_as(CollectionType::LinkedSet)
        .into_vec();
    assert_eq!(deduped, [3, 1, 2]);
}

#[test]
fn test_collection_builder_conversion() {
    let builder = CollectionBuilder::from_collection(vec![2, 1, 2]);
    assert!(builder.collection_type().is_vec());

    let mut set = builder.build_as(CollectionType::BTreeSet);
    assert_eq!(set.to_vec(), [1, 2], "Converting to a set should drop duplicates.");
    assert!(!set.add(1), "Adding a duplicate to a set should report no change.");

    let paged = builder.build_as(CollectionType::Paged);
    assert!(paged.is_paged());
    assert_eq!(paged.into_vec(), [2, 1, 2]);

    let original = builder.build();
    assert_eq!(original.to_vec(), [2, 1, 2], "Converting shouldn't touch the backing collection.");
}

proptest! {
    #[test]
    fn prop_put_lists(pairs in prop::collection::vec((0_u16..500, any::<i32>()), 0..50)) {
        let (keys, values): (Vec<u16>, Vec<i32>) = pairs.iter().copied().unzip();

        for map_type in MapType::ALL {
            let map = MapBuilder::of_type(map_type)
                .put_lists(keys.clone(), values.clone())
                .map_err(|e| TestCaseError::fail(e.to_string()))?
                .build();

            for (key, value) in &pairs {
                prop_assert!(map.contains_key(key));
                prop_assert!(map.contains_value(value) || pairs.iter().filter(|(k, _)| k == key).count() > 1);
            }
            let expected: HashMap<u16, i32> = pairs.iter().copied().collect();
            prop_assert_eq!(map.len(), expected.len());
            for (key, value) in &expected {
                prop_assert_eq!(map.get(key), Some(value), "The last value for a key should win.");
            }
        }
    }
}
