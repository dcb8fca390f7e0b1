#![cfg(test)]

use std::collections::BTreeMap;

use super::*;

#[test]
fn test_mapping() {
    let lengths = map_by(vec!["one", "three", "two"], |s| s.len());
    assert_eq!(lengths.len(), 2, "Items with equal keys should replace each other.");
    assert_eq!(lengths[&3], "two");
    assert_eq!(lengths[&5], "three");

    let existing = BTreeMap::from([(0, "zero")]);
    let map = map_into(["a", "bb"], existing, |s| s.len());
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(0, "zero"), (1, "a"), (2, "bb")]);
}

#[test]
fn test_numeric_checks() {
    assert!(is_integer("-2147483648"));
    assert!(!is_integer("2147483648"), "Values beyond i32 shouldn't count as integers.");
    assert!(is_long("2147483648"));
    assert!(is_integer("+7"));
    assert!(!is_integer(" 7"));
    assert!(!is_integer("7.0"));

    assert!(is_short("32767"));
    assert!(!is_short("32768"));
    assert!(is_byte("-128"));
    assert!(!is_byte("128"));

    assert!(is_double(" 1.5e3 "));
    assert!(is_double("NaN"));
    assert!(!is_double("1,5"));
    assert!(is_float("-0.25"));
    assert!(!is_float(""));
}

#[test]
fn test_equals_any() {
    assert!(equals_any(&3, &[1, 2, 3]));
    assert!(!equals_any(&4, &[1, 2, 3]));
    assert!(!equals_any(&4, &[]), "Nothing should match an empty list.");
    assert!(equals_any(&None::<u8>, &vec![Some(1), None]));
}

#[test]
fn test_checked_consumer() {
    let mut total = 0;
    let mut add = |n: i32| {
        total += n;
        Ok::<_, String>(())
    };
    add.accept(2).unwrap();
    add.accept(3).unwrap();
    assert_eq!(total, 5);

    let mut log = Vec::new();
    {
        let reject_negative = |n: i32| {
            if n < 0 { Err(format!("{n} is negative")) } else { Ok(()) }
        };
        let mut chained = reject_negative.and_then(|n: i32| {
            log.push(n);
            Ok::<_, String>(())
        });

        assert_eq!(chained.accept(1), Ok(()));
        assert_eq!(chained.accept(-1), Err("-1 is negative".to_owned()));
        assert_eq!(chained.accept(2), Ok(()));
    }
    assert_eq!(log, [1, 2], "Rejected values shouldn't reach the second consumer.");
}
