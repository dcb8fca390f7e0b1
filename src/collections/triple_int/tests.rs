#![cfg(test)]

use super::*;
use crate::hashing::int21;

#[test]
fn test_triple_int_map() {
    let mut map = TripleIntHashMap::new();
    assert!(map.is_empty());

    assert_eq!(map.put(0, 0, 0, 'a'), None);
    assert_eq!(map.put(-1, 64, 7, 'b'), None);
    assert_eq!(map.put(0, 0, 0, 'c'), Some('a'), "Putting should replace existing values.");

    assert_eq!(map.put_if_absent(0, 0, 0, 'd'), Some(&'c'));
    assert_eq!(map.put_if_absent(1, 1, 1, 'e'), None);
    assert_eq!(map.get(1, 1, 1), Some(&'e'));

    assert_eq!(map.len(), 3);
    assert!(map.contains_key(-1, 64, 7));
    assert!(map.contains_value(&'b'));
    assert!(!map.contains_value(&'a'));

    let mut coords: Vec<_> = map.keys().into_iter().map(int21::unpack).collect();
    coords.sort();
    assert_eq!(coords, [(-1, 64, 7), (0, 0, 0), (1, 1, 1)]);

    let mut values = map.values();
    values.sort();
    assert_eq!(values, [&'b', &'c', &'e']);

    assert_eq!(map.remove(-1, 64, 7), Some('b'));
    assert_eq!(map.remove(-1, 64, 7), None);

    map.clear();
    assert_eq!(map.len(), 0);
}

#[test]
fn test_from_iter() {
    let map: TripleIntHashMap<_> = [((1, 2, 3), 6), ((-1, -2, -3), -6)].into_iter().collect();
    assert_eq!(map.get(-1, -2, -3), Some(&-6));
    assert_eq!(map.iter().count(), 2);
}
