/// Returns true if `value` equals any of `candidates`.
///
/// # Examples
/// ```
/// # use dzlib::functions::equals_any;
/// assert!(equals_any(&"b", &["a", "b"]));
/// assert!(!equals_any(&None, &[Some(1)]));
/// ```
pub fn equals_any<'a, T, I>(value: &T, candidates: I) -> bool
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    candidates.into_iter().any(|candidate| candidate == value)
}
