use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};

use super::TripleIntMap;
use crate::hashing::int21;

/// A [`TripleIntMap`] backed by a [`HashMap`] of packed keys.
///
/// # Examples
/// ```
/// # use dzlib::collections::triple_int::{TripleIntHashMap, TripleIntMap};
/// let mut map = TripleIntHashMap::new();
/// map.put(1, -2, 3, "block");
/// assert_eq!(map.get(1, -2, 3), Some(&"block"));
/// assert!(!map.contains_key(3, -2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleIntHashMap<T> {
    pub(crate) inner: HashMap<i64, T>,
}

impl<T> TripleIntHashMap<T> {
    pub fn new() -> TripleIntHashMap<T> {
        TripleIntHashMap {
            inner: HashMap::new(),
        }
    }

    pub fn with_cap(cap: usize) -> TripleIntHashMap<T> {
        TripleIntHashMap {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T> TripleIntMap<T> for TripleIntHashMap<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn get(&self, x: i32, y: i32, z: i32) -> Option<&T> {
        self.inner.get(&int21::key(x, y, z))
    }

    fn put(&mut self, x: i32, y: i32, z: i32, value: T) -> Option<T> {
        self.inner.insert(int21::key(x, y, z), value)
    }

    fn put_if_absent(&mut self, x: i32, y: i32, z: i32, value: T) -> Option<&T> {
        match self.inner.entry(int21::key(x, y, z)) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            },
        }
    }

    fn remove(&mut self, x: i32, y: i32, z: i32) -> Option<T> {
        self.inner.remove(&int21::key(x, y, z))
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Iter {
            inner: self.inner.iter(),
        }
    }
}

impl<T> Default for TripleIntHashMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<((i32, i32, i32), T)> for TripleIntHashMap<T> {
    fn from_iter<I: IntoIterator<Item = ((i32, i32, i32), T)>>(iter: I) -> Self {
        TripleIntHashMap {
            inner: iter
                .into_iter()
                .map(|((x, y, z), value)| (int21::key(x, y, z), value))
                .collect(),
        }
    }
}

/// A borrowed iterator over the packed keys and values of a [`TripleIntHashMap`].
pub struct Iter<'a, T> {
    pub(crate) inner: hash_map::Iter<'a, i64, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
