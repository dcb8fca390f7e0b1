use std::borrow::Borrow;

/// A map which holds at most one key-value pair.
///
/// Putting a new entry replaces the existing one, whatever its key. An immutable SingleEntryMap
/// ignores every write: [`put`](SingleEntryMap::put), [`remove`](SingleEntryMap::remove) and
/// [`clear`](SingleEntryMap::clear) all leave it untouched.
///
/// # Examples
/// ```
/// # use dzlib::collections::SingleEntryMap;
/// let mut map = SingleEntryMap::with_entry("key", 1);
/// assert_eq!(map.put("other", 2), Some(1));
/// assert_eq!(map.get(&"key"), None);
/// assert_eq!(map.get(&"other"), Some(&2));
///
/// let mut frozen = SingleEntryMap::immutable("key", 1);
/// assert_eq!(frozen.put("other", 2), None);
/// assert_eq!(frozen.get(&"key"), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleEntryMap<K, V> {
    pub(crate) entry: Option<(K, V)>,
    pub(crate) immutable: bool,
}

impl<K: Eq, V> SingleEntryMap<K, V> {
    /// Creates an empty, mutable SingleEntryMap.
    pub const fn new() -> SingleEntryMap<K, V> {
        SingleEntryMap {
            entry: None,
            immutable: false,
        }
    }

    /// Creates a mutable SingleEntryMap containing the provided entry.
    pub const fn with_entry(key: K, value: V) -> SingleEntryMap<K, V> {
        SingleEntryMap {
            entry: Some((key, value)),
            immutable: false,
        }
    }

    /// Creates an immutable SingleEntryMap containing the provided entry.
    pub const fn immutable(key: K, value: V) -> SingleEntryMap<K, V> {
        SingleEntryMap {
            entry: Some((key, value)),
            immutable: true,
        }
    }

    pub const fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Returns 1 if the map holds an entry, otherwise 0.
    pub const fn len(&self) -> usize {
        if self.entry.is_some() { 1 } else { 0 }
    }

    pub const fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        matches!(&self.entry, Some((_, existing)) if existing == value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match &self.entry {
            Some((existing, value)) if <K as Borrow<Q>>::borrow(existing) == key => Some(value),
            _ => None,
        }
    }

    /// Replaces the entry with the provided one, returning the previous value. Does nothing and
    /// returns [`None`] if the map is immutable.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.immutable {
            return None;
        }

        self.entry.replace((key, value)).map(|(_, old)| old)
    }

    /// Removes the entry if its key matches `key`, returning its value. Does nothing if the map is
    /// immutable.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if self.immutable || !self.contains_key(key) {
            return None;
        }

        self.entry.take().map(|(_, value)| value)
    }

    /// Removes the entry, unless the map is immutable.
    pub fn clear(&mut self) {
        if !self.immutable {
            self.entry = None;
        }
    }

    pub fn entry(&self) -> Option<(&K, &V)> {
        self.entry.as_ref().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entry.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entry.iter().map(|(_, value)| value)
    }

    /// Consumes the map, returning its entry.
    pub fn into_entry(self) -> Option<(K, V)> {
        self.entry
    }
}

impl<K: Eq, V> Default for SingleEntryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for SingleEntryMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::option::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entry.into_iter()
    }
}
