/// Removes every element which is equal to an earlier one, keeping the first occurrence of each
/// and preserving order. Unlike [`Vec::dedup`], duplicates don't need to be adjacent.
///
/// # Examples
/// ```
/// # use dzlib::collections::trim_duplicates;
/// let mut items = vec![3, 1, 3, 2, 1];
/// trim_duplicates(&mut items);
/// assert_eq!(items, [3, 1, 2]);
/// ```
pub fn trim_duplicates<T: PartialEq>(items: &mut Vec<T>) {
    let mut kept = 0;
    for index in 0..items.len() {
        if !items[..kept].contains(&items[index]) {
            items.swap(kept, index);
            kept += 1;
        }
    }
    items.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_duplicates() {
        let mut words = vec!["a", "b", "a", "c", "b", "a"];
        trim_duplicates(&mut words);
        assert_eq!(words, ["a", "b", "c"], "Only first occurrences should remain, in order.");

        let mut empty: Vec<u8> = Vec::new();
        trim_duplicates(&mut empty);
        assert!(empty.is_empty());
    }
}
