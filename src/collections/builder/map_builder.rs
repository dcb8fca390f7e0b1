use std::hash::Hash;

use tracing::debug;

use super::{AnyMap, LengthMismatch, MapType};
use crate::collections::SingleEntryMap;

/// A fluent builder which accumulates entries into a map of a runtime-chosen [`MapType`].
///
/// The builder owns its backing map. [`build`](MapBuilder::build) hands that map over, while the
/// `build_*` variants taking `&self` produce independent copies and leave the builder usable.
///
/// # Examples
/// ```
/// # use dzlib::collections::builder::{MapBuilder, MapType};
/// let map = MapBuilder::of_type(MapType::Linked)
///     .put("b", 2)
///     .put("a", 1)
///     .build();
///
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"b", &2), (&"a", &1)]);
/// ```
#[derive(Debug, Clone)]
pub struct MapBuilder<K, V> {
    pub(crate) map: AnyMap<K, V>,
}

impl<K: Hash + Ord + Clone, V> MapBuilder<K, V> {
    /// Creates a builder backed by an empty hash map.
    pub fn new() -> MapBuilder<K, V> {
        MapBuilder::of_type(MapType::Hash)
    }

    pub fn of_type(map_type: MapType) -> MapBuilder<K, V> {
        MapBuilder {
            map: map_type.new_map(),
        }
    }

    /// Creates a builder for the provided type, reserving room for `cap` entries where the type
    /// supports it.
    pub fn with_cap(map_type: MapType, cap: usize) -> MapBuilder<K, V> {
        MapBuilder {
            map: map_type.new_map_with_cap(cap),
        }
    }

    /// Creates a builder which continues to add to an existing map.
    pub fn from_map(map: impl Into<AnyMap<K, V>>) -> MapBuilder<K, V> {
        MapBuilder {
            map: map.into(),
        }
    }

    pub fn map_type(&self) -> MapType {
        self.map.map_type()
    }

    pub fn put(mut self, key: K, value: V) -> Self {
        self.map.insert(key, value);
        self
    }

    /// Pairs each key with the value at the same position and puts every resulting entry.
    ///
    /// # Errors
    /// Returns [`LengthMismatch`] without putting anything if the two lists differ in length.
    pub fn put_lists<KI, VI>(mut self, keys: KI, values: VI) -> Result<Self, LengthMismatch>
    where
        KI: IntoIterator<Item = K>,
        KI::IntoIter: ExactSizeIterator,
        VI: IntoIterator<Item = V>,
        VI::IntoIter: ExactSizeIterator,
    {
        let (keys, values) = (keys.into_iter(), values.into_iter());
        if keys.len() != values.len() {
            return Err(LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        self.map.extend(keys.zip(values));
        Ok(self)
    }

    pub fn put_entries<I: IntoIterator<Item = (K, V)>>(mut self, entries: I) -> Self {
        self.map.extend(entries);
        self
    }

    /// Puts a copy of every entry in `other`.
    pub fn put_all(mut self, other: &AnyMap<K, V>) -> Self
    where
        V: Clone,
    {
        self.map
            .extend(other.iter().map(|(key, value)| (key.clone(), value.clone())));
        self
    }

    /// Returns the backing map, consuming the builder.
    pub fn build(self) -> AnyMap<K, V> {
        self.map
    }

    /// Returns an independent copy of the backing map, of the same type.
    pub fn build_new(&self) -> AnyMap<K, V>
    where
        V: Clone,
    {
        self.map.clone()
    }

    /// Returns an independent copy of the backing map, converted to `map_type`.
    pub fn build_as(&self, map_type: MapType) -> AnyMap<K, V>
    where
        V: Clone,
    {
        debug!(from = %self.map.map_type(), to = %map_type, len = self.map.len(), "converting map");
        let mut map = map_type.new_map_with_cap(self.map.len());
        map.extend(self.copied_entries());
        map
    }

    /// Copies every entry into `target`, returning it.
    pub fn build_into<M: Extend<(K, V)>>(&self, mut target: M) -> M
    where
        V: Clone,
    {
        target.extend(self.copied_entries());
        target
    }

    fn copied_entries(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        V: Clone,
    {
        self.map.iter().map(|(key, value)| (key.clone(), value.clone()))
    }
}

impl<K: Hash + Ord + Clone, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        MapBuilder::new()
    }
}

/// Creates a mutable [`SingleEntryMap`] holding the provided entry.
pub fn single_entry_map<K: Eq, V>(key: K, value: V) -> SingleEntryMap<K, V> {
    SingleEntryMap::with_entry(key, value)
}

/// Creates an immutable [`SingleEntryMap`] holding the provided entry.
pub fn immutable_single_entry_map<K: Eq, V>(key: K, value: V) -> SingleEntryMap<K, V> {
    SingleEntryMap::immutable(key, value)
}
