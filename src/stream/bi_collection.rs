use std::slice;
use std::vec;

/// An ordered collection of pairs. Unlike a map, the same left value may appear any number of
/// times.
///
/// # Examples
/// ```
/// # use dzlib::stream::BiCollection;
/// let pairs = BiCollection::builder()
///     .add("a", 1)
///     .add("a", 2)
///     .add_all([("b", 3)])
///     .build();
///
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs.iter().map(|(_, r)| r).sum::<i32>(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BiCollection<L, R> {
    pub(crate) entries: Vec<(L, R)>,
}

impl<L, R> BiCollection<L, R> {
    /// Creates an empty BiCollection.
    pub const fn new() -> BiCollection<L, R> {
        BiCollection {
            entries: Vec::new(),
        }
    }

    /// Creates a BiCollection containing a single pair.
    pub fn of(left: L, right: R) -> BiCollection<L, R> {
        BiCollection {
            entries: vec![(left, right)],
        }
    }

    pub fn builder() -> BiCollectionBuilder<L, R> {
        BiCollectionBuilder::default()
    }

    /// Maps every item to a pair, collecting the results in order.
    pub fn collect_with<T, I, LF, RF>(items: I, mut left_of: LF, mut right_of: RF) -> Self
    where
        I: IntoIterator<Item = T>,
        LF: FnMut(&T) -> L,
        RF: FnMut(&T) -> R,
    {
        items
            .into_iter()
            .map(|item| (left_of(&item), right_of(&item)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the pairs, in insertion order.
    pub fn iter(&self) -> Iter<'_, L, R> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<L, R> Default for BiCollection<L, R> {
    fn default() -> Self {
        BiCollection::new()
    }
}

impl<L, R> From<Vec<(L, R)>> for BiCollection<L, R> {
    fn from(entries: Vec<(L, R)>) -> Self {
        BiCollection {
            entries,
        }
    }
}

impl<L, R> FromIterator<(L, R)> for BiCollection<L, R> {
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        BiCollection {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<L, R> IntoIterator for BiCollection<L, R> {
    type Item = (L, R);
    type IntoIter = vec::IntoIter<(L, R)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a BiCollection<L, R> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the pairs of a [`BiCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a, L, R> {
    pub(crate) inner: slice::Iter<'a, (L, R)>,
}

impl<'a, L, R> Iterator for Iter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(left, right)| (left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for Iter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(left, right)| (left, right))
    }
}

impl<L, R> ExactSizeIterator for Iter<'_, L, R> {}

/// Accumulates pairs for a [`BiCollection`].
#[derive(Debug, Clone)]
pub struct BiCollectionBuilder<L, R> {
    pub(crate) pairs: Vec<(L, R)>,
}

impl<L, R> BiCollectionBuilder<L, R> {
    pub fn add(mut self, left: L, right: R) -> Self {
        self.pairs.push((left, right));
        self
    }

    /// Adds every pair from `pairs`, which may be a map, another BiCollection or any iterator of
    /// tuples.
    pub fn add_all<I: IntoIterator<Item = (L, R)>>(mut self, pairs: I) -> Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn build(self) -> BiCollection<L, R> {
        BiCollection::from(self.pairs)
    }
}

impl<L, R> Default for BiCollectionBuilder<L, R> {
    fn default() -> Self {
        BiCollectionBuilder {
            pairs: Vec::new(),
        }
    }
}
