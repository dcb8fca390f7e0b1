use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use std::mem;

use derive_more::{From, IsVariant};

use super::CollectionType;
use crate::collections::{LinkedSet, PagedList, SynchronizedList};

/// A collection whose kind is chosen at runtime.
///
/// Sets silently drop duplicates, so [`add`](AnyCollection::add) reports whether the collection
/// changed, the same way [`HashSet::insert`] does.
#[derive(Debug, Clone, From, IsVariant)]
pub enum AnyCollection<T> {
    Vec(Vec<T>),
    VecDeque(VecDeque<T>),
    LinkedList(LinkedList<T>),
    HashSet(HashSet<T>),
    BTreeSet(BTreeSet<T>),
    BinaryHeap(BinaryHeap<T>),
    LinkedSet(LinkedSet<T>),
    Paged(PagedList<T>),
    Synchronized(SynchronizedList<T>),
}

impl<T: Hash + Ord + Clone> AnyCollection<T> {
    /// Returns the tag for this collection's kind.
    pub const fn collection_type(&self) -> CollectionType {
        match self {
            AnyCollection::Vec(_) => CollectionType::Vec,
            AnyCollection::VecDeque(_) => CollectionType::VecDeque,
            AnyCollection::LinkedList(_) => CollectionType::LinkedList,
            AnyCollection::HashSet(_) => CollectionType::HashSet,
            AnyCollection::BTreeSet(_) => CollectionType::BTreeSet,
            AnyCollection::BinaryHeap(_) => CollectionType::BinaryHeap,
            AnyCollection::LinkedSet(_) => CollectionType::LinkedSet,
            AnyCollection::Paged(_) => CollectionType::Paged,
            AnyCollection::Synchronized(_) => CollectionType::Synchronized,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyCollection::Vec(c) => c.len(),
            AnyCollection::VecDeque(c) => c.len(),
            AnyCollection::LinkedList(c) => c.len(),
            AnyCollection::HashSet(c) => c.len(),
            AnyCollection::BTreeSet(c) => c.len(),
            AnyCollection::BinaryHeap(c) => c.len(),
            AnyCollection::LinkedSet(c) => c.len(),
            AnyCollection::Paged(c) => c.len(),
            AnyCollection::Synchronized(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` to the end of a sequence, or into a set or heap. Returns false if the
    /// collection didn't change.
    pub fn add(&mut self, value: T) -> bool {
        match self {
            AnyCollection::Vec(c) => c.push(value),
            AnyCollection::VecDeque(c) => c.push_back(value),
            AnyCollection::LinkedList(c) => c.push_back(value),
            AnyCollection::HashSet(c) => return c.insert(value),
            AnyCollection::BTreeSet(c) => return c.insert(value),
            AnyCollection::BinaryHeap(c) => c.push(value),
            AnyCollection::LinkedSet(c) => return c.insert(value),
            AnyCollection::Paged(c) => c.push(value),
            AnyCollection::Synchronized(c) => c.push(value),
        }
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            AnyCollection::Vec(c) => c.contains(value),
            AnyCollection::VecDeque(c) => c.contains(value),
            AnyCollection::LinkedList(c) => c.contains(value),
            AnyCollection::HashSet(c) => c.contains(value),
            AnyCollection::BTreeSet(c) => c.contains(value),
            AnyCollection::BinaryHeap(c) => c.iter().any(|e| e == value),
            AnyCollection::LinkedSet(c) => c.contains(value),
            AnyCollection::Paged(c) => c.contains(value),
            AnyCollection::Synchronized(c) => c.contains(value),
        }
    }

    /// Sorts a sequence in place using `compare`. Hashed and sorted sets and heaps define their
    /// own order, so they are left untouched. A [`LinkedSet`] is reordered.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        match self {
            AnyCollection::Vec(c) => c.sort_by(compare),
            AnyCollection::VecDeque(c) => c.make_contiguous().sort_by(compare),
            AnyCollection::LinkedList(c) => {
                let mut items: Vec<T> = mem::take(c).into_iter().collect();
                items.sort_by(&mut compare);
                c.extend(items);
            },
            AnyCollection::HashSet(_) | AnyCollection::BTreeSet(_) | AnyCollection::BinaryHeap(_) => {},
            AnyCollection::LinkedSet(c) => c.sort_by(compare),
            AnyCollection::Paged(c) => c.sort_by(compare),
            AnyCollection::Synchronized(c) => c.sort_by(compare),
        }
    }

    /// Consumes the collection, returning its elements in iteration order. A heap yields its
    /// elements in ascending order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            AnyCollection::Vec(c) => c,
            AnyCollection::VecDeque(c) => c.into(),
            AnyCollection::LinkedList(c) => c.into_iter().collect(),
            AnyCollection::HashSet(c) => c.into_iter().collect(),
            AnyCollection::BTreeSet(c) => c.into_iter().collect(),
            AnyCollection::BinaryHeap(c) => c.into_sorted_vec(),
            AnyCollection::LinkedSet(c) => c.into_iter().collect(),
            AnyCollection::Paged(c) => c.into_vec(),
            AnyCollection::Synchronized(c) => c.into_inner(),
        }
    }

    /// Returns a snapshot of the collection's elements, in the same order as
    /// [`into_vec`](AnyCollection::into_vec).
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            AnyCollection::Vec(c) => c.clone(),
            AnyCollection::VecDeque(c) => c.iter().cloned().collect(),
            AnyCollection::LinkedList(c) => c.iter().cloned().collect(),
            AnyCollection::HashSet(c) => c.iter().cloned().collect(),
            AnyCollection::BTreeSet(c) => c.iter().cloned().collect(),
            AnyCollection::BinaryHeap(c) => c.clone().into_sorted_vec(),
            AnyCollection::LinkedSet(c) => c.iter().cloned().collect(),
            AnyCollection::Paged(c) => c.to_vec(),
            AnyCollection::Synchronized(c) => c.snapshot(),
        }
    }
}

impl<T: Hash + Ord + Clone> Extend<T> for AnyCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match self {
            AnyCollection::Vec(c) => c.extend(iter),
            AnyCollection::VecDeque(c) => c.extend(iter),
            AnyCollection::LinkedList(c) => c.extend(iter),
            AnyCollection::HashSet(c) => c.extend(iter),
            AnyCollection::BTreeSet(c) => c.extend(iter),
            AnyCollection::BinaryHeap(c) => c.extend(iter),
            AnyCollection::LinkedSet(c) => c.extend(iter),
            AnyCollection::Paged(c) => c.extend(iter),
            AnyCollection::Synchronized(c) => c.extend(iter),
        }
    }
}

impl<T: Hash + Ord + Clone> Default for AnyCollection<T> {
    fn default() -> Self {
        CollectionType::default().instantiate()
    }
}
