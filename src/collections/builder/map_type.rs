use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use derive_more::{Display, IsVariant};

use super::AnyMap;
use crate::collections::LinkedMap;

/// A tag naming one of the map kinds an [`AnyMap`] can hold.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, IsVariant)]
pub enum MapType {
    /// A [`HashMap`], with no defined iteration order.
    #[default]
    Hash,
    /// A [`BTreeMap`], iterating in key order.
    Tree,
    /// A [`LinkedMap`], iterating in insertion order.
    Linked,
}

impl MapType {
    /// Every map kind, in declaration order.
    pub const ALL: [MapType; 3] = [MapType::Hash, MapType::Tree, MapType::Linked];

    /// Creates an empty map of this kind.
    pub fn new_map<K: Hash + Ord + Clone, V>(self) -> AnyMap<K, V> {
        match self {
            MapType::Hash => AnyMap::Hash(HashMap::new()),
            MapType::Tree => AnyMap::Tree(BTreeMap::new()),
            MapType::Linked => AnyMap::Linked(LinkedMap::new()),
        }
    }

    /// Creates an empty map of this kind with room for `cap` entries. Kinds which can't reserve
    /// space ignore the hint.
    pub fn new_map_with_cap<K: Hash + Ord + Clone, V>(self, cap: usize) -> AnyMap<K, V> {
        match self {
            MapType::Hash => AnyMap::Hash(HashMap::with_capacity(cap)),
            MapType::Tree => AnyMap::Tree(BTreeMap::new()),
            MapType::Linked => AnyMap::Linked(LinkedMap::with_cap(cap)),
        }
    }
}
