/// Joins `parts[start..]` with `delimiter`, trimming whitespace from both ends of the result.
///
/// Returns [`None`] if `start` is not a valid index into `parts`.
///
/// # Examples
/// ```
/// # use dzlib::text::join;
/// let args = ["say", "hello", "world"];
/// assert_eq!(join(&args, 1, " ").as_deref(), Some("hello world"));
/// assert_eq!(join(&args, 3, " "), None);
/// ```
pub fn join<S: AsRef<str>>(parts: &[S], start: usize, delimiter: &str) -> Option<String> {
    let parts = parts.get(start..).filter(|rest| !rest.is_empty())?;

    let mut joined = String::new();
    for part in parts {
        joined.push_str(part.as_ref());
        joined.push_str(delimiter);
    }
    Some(joined.trim().to_owned())
}

/// Returns `amount` copies of `s`, each followed by `delimiter`.
///
/// # Examples
/// ```
/// # use dzlib::text::repeated;
/// assert_eq!(repeated("ab", 3, ","), "ab,ab,ab,");
/// ```
pub fn repeated(s: &str, amount: usize, delimiter: &str) -> String {
    let mut result = String::with_capacity((s.len() + delimiter.len()) * amount);
    for _ in 0..amount {
        result.push_str(s);
        result.push_str(delimiter);
    }
    result
}
