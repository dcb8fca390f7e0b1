use std::iter::FusedIterator;

/// A type with a fixed, ordered set of values, usually a fieldless enum.
///
/// # Examples
/// ```
/// # use dzlib::iterate::Enumerable;
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Suit { Hearts, Spades }
///
/// impl Enumerable for Suit {
///     const VALUES: &'static [Suit] = &[Suit::Hearts, Suit::Spades];
/// }
///
/// assert_eq!(Suit::iter_values().copied().collect::<Vec<_>>(), [Suit::Hearts, Suit::Spades]);
/// ```
pub trait Enumerable: Sized + 'static {
    const VALUES: &'static [Self];

    /// Returns an iterator over every value, in declaration order.
    fn iter_values() -> EnumIter<Self> {
        EnumIter::new(Self::VALUES)
    }
}

/// An iterator over a static list of values which can be rewound with
/// [`reset`](EnumIter::reset).
#[derive(Debug, Clone)]
pub struct EnumIter<E: 'static> {
    pub(crate) values: &'static [E],
    pub(crate) index: usize,
}

impl<E: 'static> EnumIter<E> {
    pub const fn new(values: &'static [E]) -> EnumIter<E> {
        EnumIter {
            values,
            index: 0,
        }
    }

    /// Rewinds the iterator to the first value.
    pub fn reset(&mut self) -> &mut Self {
        self.index = 0;
        self
    }
}

impl<E: 'static> Iterator for EnumIter<E> {
    type Item = &'static E;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<E: 'static> ExactSizeIterator for EnumIter<E> {}

impl<E: 'static> FusedIterator for EnumIter<E> {}
