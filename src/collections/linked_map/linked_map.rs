use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use super::{IntoIter, Iter, Keys, Values};

/// A map which remembers the order keys were first inserted in.
///
/// Lookups go through a [`HashMap`] of positions, while entries live in a [`Vec`] in insertion
/// order. Removal leaves a hole which is skipped during iteration, and holes are compacted away
/// once they make up more than half of the entries. Inserting an existing key replaces its value
/// without moving it.
///
/// Keys are stored twice, once in the index and once beside their value, so they must implement
/// [`Clone`].
///
/// # Examples
/// ```
/// # use dzlib::collections::LinkedMap;
/// let mut map = LinkedMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("b", 3);
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"b", &3), (&"a", &1)]);
/// ```
pub struct LinkedMap<K, V> {
    pub(crate) entries: Vec<Option<(K, V)>>,
    pub(crate) index: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone, V> LinkedMap<K, V> {
    /// Creates an empty LinkedMap.
    pub fn new() -> LinkedMap<K, V> {
        LinkedMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty LinkedMap with room for `cap` entries before reallocating.
    pub fn with_cap(cap: usize) -> LinkedMap<K, V> {
        LinkedMap {
            entries: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Inserts the provided `key`-`value` pair. If the key was already present, its value is
    /// replaced in place and the previous value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            if let Some((_, existing)) = &mut self.entries[position] {
                return Some(std::mem::replace(existing, value));
            }
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Some((key, value)));
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        self.entries[position].as_ref().map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        self.entries[position].as_mut().map(|(_, value)| value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries[position].take()?;

        if self.entries.len() > 2 * self.index.len() {
            self.compact();
        }

        Some(value)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns the value for `key`, inserting the result of `default` first if it is absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push(Some((key, default())));
                position
            },
        };

        match &mut self.entries[position] {
            Some((_, value)) => value,
            // The index only ever points at occupied entries.
            None => unreachable!(),
        }
    }

    /// Inserts `value` for `key`, or if the key is present, replaces its value in place with
    /// `remap(existing, value)`.
    pub fn merge<F: FnOnce(V, V) -> V>(&mut self, key: K, value: V, remap: F) {
        let Some(&position) = self.index.get(&key) else {
            self.insert(key, value);
            return;
        };

        let slot = &mut self.entries[position];
        *slot = slot.take().map(|(key, existing)| (key, remap(existing, value)));
    }

    /// Drops the holes left by removals, updating the index to match.
    fn compact(&mut self) {
        self.entries.retain(Option::is_some);
        for (position, (key, _)) in self.entries.iter().flatten().enumerate() {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = position;
            }
        }
    }
}

impl<K, V> LinkedMap<K, V> {
    /// Returns an iterator over all entries in insertion order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over all keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over all values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Hash + Eq + Clone, V> Default for LinkedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for LinkedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for LinkedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LinkedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for LinkedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LinkedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, V: Clone> Clone for LinkedMap<K, V> {
    fn clone(&self) -> Self {
        LinkedMap {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for LinkedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for LinkedMap<K, V> {}

impl<K: Debug, V: Debug> Debug for LinkedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
