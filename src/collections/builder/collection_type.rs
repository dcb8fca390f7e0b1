use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use derive_more::{Display, IsVariant};

use super::AnyCollection;
use crate::collections::{LinkedSet, PagedList, SynchronizedList};

/// A tag naming one of the collection kinds an [`AnyCollection`] can hold.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, IsVariant)]
pub enum CollectionType {
    #[default]
    Vec,
    VecDeque,
    LinkedList,
    /// A [`HashSet`], which drops duplicates and has no defined order.
    HashSet,
    /// A [`BTreeSet`], which drops duplicates and keeps its elements sorted.
    BTreeSet,
    /// A [`BinaryHeap`], a max-heap with no defined iteration order.
    BinaryHeap,
    /// A [`LinkedSet`], which drops duplicates and keeps insertion order.
    LinkedSet,
    /// A [`PagedList`] with the default configuration.
    Paged,
    Synchronized,
}

impl CollectionType {
    /// Every collection kind, in declaration order.
    pub const ALL: [CollectionType; 9] = [
        CollectionType::Vec,
        CollectionType::VecDeque,
        CollectionType::LinkedList,
        CollectionType::HashSet,
        CollectionType::BTreeSet,
        CollectionType::BinaryHeap,
        CollectionType::LinkedSet,
        CollectionType::Paged,
        CollectionType::Synchronized,
    ];

    /// Creates an empty collection of this kind.
    pub fn instantiate<T: Hash + Ord + Clone>(self) -> AnyCollection<T> {
        match self {
            CollectionType::Vec => AnyCollection::Vec(Vec::new()),
            CollectionType::VecDeque => AnyCollection::VecDeque(VecDeque::new()),
            CollectionType::LinkedList => AnyCollection::LinkedList(LinkedList::new()),
            CollectionType::HashSet => AnyCollection::HashSet(HashSet::new()),
            CollectionType::BTreeSet => AnyCollection::BTreeSet(BTreeSet::new()),
            CollectionType::BinaryHeap => AnyCollection::BinaryHeap(BinaryHeap::new()),
            CollectionType::LinkedSet => AnyCollection::LinkedSet(LinkedSet::new()),
            CollectionType::Paged => AnyCollection::Paged(PagedList::new()),
            CollectionType::Synchronized => AnyCollection::Synchronized(SynchronizedList::new()),
        }
    }

    /// Returns true if this kind keeps elements in the order they are arranged, and can therefore
    /// be sorted in place. [`LinkedSet`] counts, as it keeps insertion order.
    pub const fn is_sequence(self) -> bool {
        !matches!(
            self,
            CollectionType::HashSet | CollectionType::BTreeSet | CollectionType::BinaryHeap
        )
    }
}
