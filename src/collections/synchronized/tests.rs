#![cfg(test)]

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_concurrent_pushes() {
    let list = Arc::new(SynchronizedList::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..100 {
                    list.push(t * 100 + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("pushing thread panicked");
    }

    assert_eq!(list.len(), 800, "No pushes should be lost between threads.");
    list.sort_by(Ord::cmp);
    assert_eq!(list.snapshot(), (0..800).collect::<Vec<_>>());
}

#[test]
fn test_list_operations() {
    let list: SynchronizedList<_> = "hello".chars().collect();
    list.insert(0, '>');
    assert_eq!(list.remove(1), 'h');
    assert_eq!(list.replace(0, 'H'), '>');
    assert_eq!(list.get(0), Some('H'));
    assert_eq!(list.get(10), None);

    assert_eq!(list.index_of(&'l'), Some(2));
    assert_eq!(list.last_index_of(&'l'), Some(3));
    assert!(list.remove_item(&'e'));
    assert!(!list.contains(&'e'));

    let sub = list.sub_list(1..3);
    assert_eq!(sub.snapshot(), ['l', 'l']);
    sub.clear();
    assert_eq!(list.len(), 4, "A sub list should be independent of its source.");

    let mut cursor = list.cursor(0);
    list.push('!');
    assert_eq!(cursor.len(), 4, "A cursor should read a snapshot.");
    assert_eq!(cursor.advance(), Some(&'H'));

    let total = list.with_lock(|items| {
        items.reverse();
        items.len()
    });
    assert_eq!(total, 5);
    assert_eq!(list.into_inner(), ['!', 'o', 'l', 'l', 'H']);
}

#[test]
fn test_panics() {
    let list = SynchronizedList::from(vec![1, 2, 3]);
    assert_panics!({
        list.remove(3);
    });
    assert_panics!({
        list.sub_list(2..5);
    });
    assert_eq!(list.len(), 3, "The lock shouldn't be poisoned by a caught panic.");
}

#[test]
fn test_opposing_comparisons() {
    let a = Arc::new(SynchronizedList::from(vec![1, 2, 3]));
    let b = Arc::new(SynchronizedList::from(vec![1, 2, 3]));
    let (done, finished) = mpsc::channel();

    for (left, right) in [(Arc::clone(&a), Arc::clone(&b)), (Arc::clone(&b), Arc::clone(&a))] {
        let done = done.clone();
        thread::spawn(move || {
            let equal = (0..50_000).all(|_| *left == *right);
            done.send(equal).expect("receiver dropped");
        });
    }

    for _ in 0..2 {
        let equal = finished
            .recv_timeout(Duration::from_secs(20))
            .expect("Comparing in opposite directions shouldn't deadlock.");
        assert!(equal);
    }

    b.push(4);
    assert_ne!(*a, *b);
    assert_eq!(*a, *a, "A list should equal itself without locking twice.");
}
