//! Collectors which turn an iterator of pairs into a [`LinkedMap`].
//!
//! Every collector keeps keys in the order they were first seen.
//!
//! # Examples
//! ```
//! # use dzlib::stream::bi_collectors;
//! let scores = [("ann", 3), ("bob", 5), ("ann", 4)];
//!
//! let totals = bi_collectors::to_map_merging(scores, |a, b| a + b);
//! assert_eq!(totals.get("ann"), Some(&7));
//!
//! let grouped = bi_collectors::grouping::<_, _, _, Vec<_>>(scores);
//! assert_eq!(grouped.get("ann"), Some(&vec![3, 4]));
//!
//! assert!(bi_collectors::to_map(scores).is_err());
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FlatMap;

use super::DuplicateKey;
use crate::collections::LinkedMap;

/// Collects pairs into a map, requiring every key to be unique.
///
/// # Errors
/// Returns [`DuplicateKey`] for the first key seen twice.
pub fn to_map<K, V, I>(pairs: I) -> Result<LinkedMap<K, V>, DuplicateKey>
where
    K: Hash + Eq + Clone + Debug,
    I: IntoIterator<Item = (K, V)>,
{
    super::unique_keys([pairs])
}

/// Collects pairs into a map, combining the values of repeated keys with
/// `merger(existing, new)`.
pub fn to_map_merging<K, V, I, F>(pairs: I, merger: F) -> LinkedMap<K, V>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V, V) -> V,
{
    super::merging_values([pairs], merger)
}

/// Collects pairs into a map from each key to a collection of all of its values, in the order
/// they were seen.
pub fn grouping<K, V, I, C>(pairs: I) -> LinkedMap<K, C>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = (K, V)>,
    C: Default + Extend<V>,
{
    let mut groups: LinkedMap<K, C> = LinkedMap::new();
    for (key, value) in pairs {
        groups
            .get_or_insert_with(key, C::default)
            .extend(Some(value));
    }
    groups
}

/// Expands every item into its pairs with `entries_of`, then hands the flattened pairs to
/// `downstream`, which is usually one of the other collectors.
///
/// # Examples
/// ```
/// # use dzlib::stream::bi_collectors::{flattening, grouping};
/// # use dzlib::collections::LinkedMap;
/// let teams = [("red", vec!["ann", "bob"]), ("blue", vec!["cat"])];
/// let by_member: LinkedMap<&str, Vec<&str>> = flattening(
///     teams,
///     |(team, members)| members.into_iter().map(move |member| (member, team)),
///     grouping,
/// );
/// assert_eq!(by_member.get("bob"), Some(&vec!["red"]));
/// ```
pub fn flattening<T, P, I, F, D, R>(items: I, entries_of: F, downstream: D) -> R
where
    I: IntoIterator<Item = T>,
    P: IntoIterator,
    F: FnMut(T) -> P,
    D: FnOnce(FlatMap<I::IntoIter, P, F>) -> R,
{
    downstream(items.into_iter().flat_map(entries_of))
}
