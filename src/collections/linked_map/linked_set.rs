use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::iter::Map;

use super::{IntoIter, Keys, LinkedMap};

/// A set which remembers the order values were first inserted in, built on a
/// [`LinkedMap`] with unit values.
///
/// Inserting a value which is already present leaves both the set and its order unchanged.
///
/// # Examples
/// ```
/// # use dzlib::collections::LinkedSet;
/// let mut set = LinkedSet::new();
/// assert!(set.insert('b'));
/// assert!(set.insert('a'));
/// assert!(!set.insert('b'));
/// assert_eq!(set.iter().collect::<String>(), "ba");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedSet<T> {
    pub(crate) map: LinkedMap<T, ()>,
}

impl<T: Hash + Eq + Clone> LinkedSet<T> {
    pub fn new() -> LinkedSet<T> {
        LinkedSet {
            map: LinkedMap::new(),
        }
    }

    pub fn with_cap(cap: usize) -> LinkedSet<T> {
        LinkedSet {
            map: LinkedMap::with_cap(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Adds `value` to the end of the set. Returns false if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.map.contains_key(&value) {
            return false;
        }
        self.map.insert(value, ());
        true
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Removes `value`, returning true if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(value).is_some()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Reorders the set with `compare`, so that later iteration follows the sorted order.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        let mut values: Vec<T> = std::mem::take(self).into_iter().collect();
        values.sort_by(compare);
        self.map.extend(values.into_iter().map(|value| (value, ())));
    }
}

impl<T> LinkedSet<T> {
    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> Keys<'_, T, ()> {
        self.map.keys()
    }
}

impl<T: Hash + Eq + Clone> Default for LinkedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = LinkedSet::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for LinkedSet<T> {
    type Item = T;
    type IntoIter = Map<IntoIter<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        let value: fn((T, ())) -> T = |(value, ())| value;
        self.map.into_iter().map(value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;
    type IntoIter = Keys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for LinkedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
