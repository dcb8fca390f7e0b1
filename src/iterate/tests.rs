#![cfg(test)]

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Enumerable for Direction {
    const VALUES: &'static [Direction] = &[
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

#[test]
fn test_enum_iter_reset() {
    let mut iter = Direction::iter_values();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&Direction::North));
    assert_eq!(iter.by_ref().last(), Some(&Direction::West));
    assert_eq!(iter.next(), None, "An exhausted EnumIter should stay exhausted.");

    iter.reset();
    assert_eq!(
        iter.copied().collect::<Vec<_>>(),
        Direction::VALUES,
        "Resetting should start again from the first value."
    );
}

#[test]
fn test_cursor_movement() {
    let mut cursor = ListCursor::at(vec![1, 2, 3], 10);
    assert_eq!(cursor.next_index(), 3, "Starting past the end should clamp to the end.");
    assert!(!cursor.has_next());
    assert_eq!(cursor.read_prev(), Some(&3));

    assert_eq!(cursor.retreat(), Some(&3));
    assert_eq!(cursor.retreat(), Some(&2));
    assert_eq!(cursor.retreat(), Some(&1));
    assert!(!cursor.has_prev());
    assert_eq!(cursor.prev_index(), None);
    assert_eq!(cursor.retreat(), None, "Retreating at the start should do nothing.");
    assert_eq!(cursor.next_index(), 0);

    assert_eq!(cursor.read_next(), Some(&1));
    assert_eq!(cursor.advance(), Some(&1));
    assert_eq!(cursor.prev_index(), Some(0));

    let empty = ListCursor::<u8>::from(&[][..]);
    assert!(empty.is_empty());
    assert!(!empty.has_next() && !empty.has_prev());
}
