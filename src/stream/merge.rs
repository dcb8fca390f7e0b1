use std::fmt::Debug;
use std::hash::Hash;

use super::DuplicateKey;
use crate::collections::LinkedMap;

/// Combines the entries of several maps into one, resolving values for repeated keys with
/// `merger(existing, new)`.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use dzlib::stream::merging_values;
/// let a = BTreeMap::from([("x", 1), ("y", 2)]);
/// let b = BTreeMap::from([("y", 10)]);
/// let merged = merging_values([a, b], |old, new| old + new);
/// assert_eq!(merged.get("y"), Some(&12));
/// ```
pub fn merging_values<K, V, M, I, F>(maps: I, mut merger: F) -> LinkedMap<K, V>
where
    K: Hash + Eq + Clone,
    M: IntoIterator<Item = (K, V)>,
    I: IntoIterator<Item = M>,
    F: FnMut(V, V) -> V,
{
    let mut merged = LinkedMap::new();
    for (key, value) in maps.into_iter().flatten() {
        merged.merge(key, value, &mut merger);
    }
    merged
}

/// Combines the entries of several maps into one, requiring every key to appear only once.
///
/// # Errors
/// Returns [`DuplicateKey`] for the first key found in more than one map.
pub fn unique_keys<K, V, M, I>(maps: I) -> Result<LinkedMap<K, V>, DuplicateKey>
where
    K: Hash + Eq + Clone + Debug,
    M: IntoIterator<Item = (K, V)>,
    I: IntoIterator<Item = M>,
{
    let mut merged = LinkedMap::new();
    for (key, value) in maps.into_iter().flatten() {
        if merged.contains_key(&key) {
            return Err(DuplicateKey::of(&key));
        }
        merged.insert(key, value);
    }
    Ok(merged)
}
