use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::Hash;

use derive_more::{From, IsVariant};

use super::MapType;
use crate::collections::{LinkedMap, linked_map};

/// A map whose kind is chosen at runtime.
#[derive(Debug, Clone, From, IsVariant)]
pub enum AnyMap<K, V> {
    Hash(HashMap<K, V>),
    Tree(BTreeMap<K, V>),
    Linked(LinkedMap<K, V>),
}

impl<K: Hash + Ord + Clone, V> AnyMap<K, V> {
    /// Returns the tag for this map's kind.
    pub const fn map_type(&self) -> MapType {
        match self {
            AnyMap::Hash(_) => MapType::Hash,
            AnyMap::Tree(_) => MapType::Tree,
            AnyMap::Linked(_) => MapType::Linked,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyMap::Hash(map) => map.len(),
            AnyMap::Tree(map) => map.len(),
            AnyMap::Linked(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the provided `key`-`value` pair, returning the previous value for the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self {
            AnyMap::Hash(map) => map.insert(key, value),
            AnyMap::Tree(map) => map.insert(key, value),
            AnyMap::Linked(map) => map.insert(key, value),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        match self {
            AnyMap::Hash(map) => map.get(key),
            AnyMap::Tree(map) => map.get(key),
            AnyMap::Linked(map) => map.get(key),
        }
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        match self {
            AnyMap::Hash(map) => map.remove(key),
            AnyMap::Tree(map) => map.remove(key),
            AnyMap::Linked(map) => map.remove(key),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, existing)| existing == value)
    }

    pub fn clear(&mut self) {
        match self {
            AnyMap::Hash(map) => map.clear(),
            AnyMap::Tree(map) => map.clear(),
            AnyMap::Linked(map) => map.clear(),
        }
    }

    /// Returns an iterator over all entries, in the order defined by this map's kind.
    pub fn iter(&self) -> Iter<'_, K, V> {
        match self {
            AnyMap::Hash(map) => Iter::Hash(map.iter()),
            AnyMap::Tree(map) => Iter::Tree(map.iter()),
            AnyMap::Linked(map) => Iter::Linked(map.iter()),
        }
    }
}

impl<K: Hash + Ord + Clone, V> Extend<(K, V)> for AnyMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        match self {
            AnyMap::Hash(map) => map.extend(iter),
            AnyMap::Tree(map) => map.extend(iter),
            AnyMap::Linked(map) => map.extend(iter),
        }
    }
}

impl<K: Hash + Ord + Clone, V> Default for AnyMap<K, V> {
    fn default() -> Self {
        MapType::default().new_map()
    }
}

impl<K, V> IntoIterator for AnyMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            AnyMap::Hash(map) => IntoIter::Hash(map.into_iter()),
            AnyMap::Tree(map) => IntoIter::Tree(map.into_iter()),
            AnyMap::Linked(map) => IntoIter::Linked(map.into_iter()),
        }
    }
}

impl<'a, K: Hash + Ord + Clone, V> IntoIterator for &'a AnyMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the entries of an [`AnyMap`].
pub enum Iter<'a, K, V> {
    Hash(hash_map::Iter<'a, K, V>),
    Tree(btree_map::Iter<'a, K, V>),
    Linked(linked_map::Iter<'a, K, V>),
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Hash(iter) => iter.next(),
            Iter::Tree(iter) => iter.next(),
            Iter::Linked(iter) => iter.next(),
        }
    }
}

/// An owned iterator over the entries of an [`AnyMap`].
pub enum IntoIter<K, V> {
    Hash(hash_map::IntoIter<K, V>),
    Tree(btree_map::IntoIter<K, V>),
    Linked(linked_map::IntoIter<K, V>),
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IntoIter::Hash(iter) => iter.next(),
            IntoIter::Tree(iter) => iter.next(),
            IntoIter::Linked(iter) => iter.next(),
        }
    }
}
