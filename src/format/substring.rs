use super::StringFormatter;

/// One end of a [`Substring`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The start or end of the input.
    #[default]
    Unset,
    /// A fixed character index, clamped to the length of the input.
    Index(usize),
    /// The position of a character. A start bound uses its first occurrence, falling back to the
    /// start of the input. An end bound uses its last occurrence, falling back to the end.
    IndexOf(char),
}

/// Extracts the characters between two [`Bound`]s. The start is inclusive and the end exclusive.
///
/// All indices count [`char`]s rather than bytes. If the start falls after the end, the result is
/// empty.
///
/// # Examples
/// ```
/// # use dzlib::format::{Bound, StringFormatter, Substring};
/// let inner = Substring::new(Bound::IndexOf('('), Bound::IndexOf(')'));
/// assert_eq!(inner.format("call(a, b)"), "(a, b");
///
/// let head = Substring::new(Bound::Unset, Bound::Index(3));
/// assert_eq!(head.format("héllo"), "hél");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Substring {
    pub start: Bound,
    pub end: Bound,
}

impl Substring {
    pub const fn new(start: Bound, end: Bound) -> Substring {
        Substring {
            start,
            end,
        }
    }

    pub const fn start(mut self, start: Bound) -> Self {
        self.start = start;
        self
    }

    pub const fn end(mut self, end: Bound) -> Self {
        self.end = end;
        self
    }
}

impl StringFormatter for Substring {
    fn format(&self, input: &str) -> String {
        let len = input.chars().count();

        let start = match self.start {
            Bound::Unset => 0,
            Bound::Index(index) => index.min(len),
            Bound::IndexOf(c) => input.chars().position(|e| e == c).unwrap_or(0),
        };
        let end = match self.end {
            Bound::Unset => len,
            Bound::Index(index) => index.min(len),
            Bound::IndexOf(c) => input
                .chars()
                .rev()
                .position(|e| e == c)
                .map_or(len, |from_back| len - 1 - from_back),
        };

        input
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}
