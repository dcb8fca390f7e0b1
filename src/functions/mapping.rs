use std::collections::HashMap;
use std::hash::Hash;

/// Keys every item by the result of `key_of`, collecting into a [`HashMap`]. Items which produce
/// the same key replace earlier ones.
///
/// # Examples
/// ```
/// # use dzlib::functions::map_by;
/// let words = ["apple", "banana", "avocado"];
/// let by_first = map_by(words, |w| w.chars().next());
/// assert_eq!(by_first[&Some('a')], "avocado");
/// assert_eq!(by_first[&Some('b')], "banana");
/// ```
pub fn map_by<A, B, I, F>(items: I, key_of: F) -> HashMap<A, B>
where
    A: Hash + Eq,
    I: IntoIterator<Item = B>,
    F: FnMut(&B) -> A,
{
    map_into(items, HashMap::new(), key_of)
}

/// Keys every item by the result of `key_of`, extending `map` with the resulting pairs and
/// returning it.
pub fn map_into<A, B, I, F, M>(items: I, mut map: M, mut key_of: F) -> M
where
    I: IntoIterator<Item = B>,
    F: FnMut(&B) -> A,
    M: Extend<(A, B)>,
{
    map.extend(items.into_iter().map(|item| (key_of(&item), item)));
    map
}
