/// Returns the Levenshtein distance between `s` and `t`: the minimum number of single character
/// insertions, deletions or substitutions required to turn one into the other.
///
/// The distance is measured in [`char`]s rather than bytes.
///
/// # Time Complexity
/// O(n * m) time and O(n) space, where n and m are the character counts of `s` and `t`.
///
/// # Examples
/// ```
/// # use dzlib::text::levenshtein;
/// assert_eq!(levenshtein("hippo", "gyppo"), 2);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    if s.is_empty() {
        return t.chars().count();
    }

    let mut prev: Vec<usize> = (0..=s.len()).collect();
    let mut curr = vec![0; s.len() + 1];

    for (j, tc) in t.chars().enumerate() {
        curr[0] = j + 1;
        for (i, sc) in s.iter().enumerate() {
            let cost = usize::from(*sc != tc);
            curr[i + 1] = (curr[i] + 1).min(prev[i + 1] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s.len()]
}
