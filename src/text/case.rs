/// Compares two characters, ignoring case.
pub fn eq_ignore_case(one: char, two: char) -> bool {
    one == two || one.to_lowercase().eq(two.to_lowercase())
}

/// Returns true if `haystack` contains `needle`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns true if `s` starts with `prefix`, comparing each character with [`eq_ignore_case`].
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|c| eq_ignore_case(c, p)))
}
