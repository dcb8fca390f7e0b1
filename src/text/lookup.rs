use std::collections::HashMap;
use std::hash::BuildHasher;

use super::levenshtein;

/// The tolerance usually passed to [`lookup`]: only names within a single edit match.
pub const DEFAULT_TOLERANCE: usize = 2;

/// Looks up a value by a user-provided name.
///
/// The name is normalised by removing spaces and underscores and lowercasing it, so keys in
/// `map` should already be in that form. An exact match is returned if present. Otherwise, if
/// `fuzzy` is set, the value for the closest key that shares its first character with the name
/// and lies a [`levenshtein`] distance of less than `tolerance` away is returned. Ties go to
/// whichever key is encountered first.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use dzlib::text::{DEFAULT_TOLERANCE, lookup};
/// let map = HashMap::from([("one".to_owned(), 1), ("two".to_owned(), 2)]);
/// assert_eq!(lookup(&map, "O n_E", false, DEFAULT_TOLERANCE), Some(&1));
/// assert_eq!(lookup(&map, "on", true, DEFAULT_TOLERANCE), Some(&1));
/// assert_eq!(lookup(&map, "on", false, DEFAULT_TOLERANCE), None);
/// ```
pub fn lookup<'a, T, S: BuildHasher>(
    map: &'a HashMap<String, T, S>,
    name: &str,
    fuzzy: bool,
    tolerance: usize,
) -> Option<&'a T> {
    let name: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '_'))
        .flat_map(char::to_lowercase)
        .collect();

    if let Some(value) = map.get(&name) {
        return Some(value);
    }
    if !fuzzy {
        return None;
    }

    let first = name.chars().next()?;
    map.iter()
        .filter(|(key, _)| key.starts_with(first))
        .map(|(key, value)| (levenshtein(key, &name), value))
        .filter(|(distance, _)| *distance < tolerance)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, value)| value)
}
