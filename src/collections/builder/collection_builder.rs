use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use super::{AnyCollection, CollectionType};

/// A fluent builder which accumulates elements into a collection of a runtime-chosen
/// [`CollectionType`].
///
/// # Examples
/// ```
/// # use dzlib::collections::builder::{CollectionBuilder, CollectionType};
/// let sorted = CollectionBuilder::new(CollectionType::VecDeque)
///     .add_all([3, 1, 2])
///     .sort()
///     .into_vec();
/// assert_eq!(sorted, [1, 2, 3]);
///
/// let set = CollectionBuilder::new(CollectionType::HashSet)
///     .add_all(["a", "a", "b"])
///     .build();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CollectionBuilder<T> {
    pub(crate) collection: AnyCollection<T>,
}

impl<T: Hash + Ord + Clone> CollectionBuilder<T> {
    pub fn new(collection_type: CollectionType) -> CollectionBuilder<T> {
        CollectionBuilder {
            collection: collection_type.instantiate(),
        }
    }

    /// Creates a builder which continues to add to an existing collection.
    pub fn from_collection(collection: impl Into<AnyCollection<T>>) -> CollectionBuilder<T> {
        CollectionBuilder {
            collection: collection.into(),
        }
    }

    pub fn collection_type(&self) -> CollectionType {
        self.collection.collection_type()
    }

    pub fn add(mut self, value: T) -> Self {
        self.collection.add(value);
        self
    }

    pub fn add_all<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.collection.extend(values);
        self
    }

    /// Sorts a sequence into ascending order. Has no effect on sets and heaps.
    pub fn sort(self) -> Self {
        self.sort_by(Ord::cmp)
    }

    /// Sorts a sequence with `compare`. Has no effect on sets and heaps.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(mut self, compare: F) -> Self {
        self.collection.sort_by(compare);
        self
    }

    /// Returns the backing collection, consuming the builder.
    pub fn build(self) -> AnyCollection<T> {
        self.collection
    }

    /// Returns an independent copy of the backing collection, converted to `collection_type`.
    pub fn build_as(&self, collection_type: CollectionType) -> AnyCollection<T> {
        debug!(
            from = %self.collection.collection_type(),
            to = %collection_type,
            len = self.collection.len(),
            "converting collection"
        );
        let mut collection = collection_type.instantiate();
        collection.extend(self.collection.to_vec());
        collection
    }

    /// Consumes the builder, returning its elements as a plain [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.collection.into_vec()
    }

    /// Returns a snapshot of the builder's elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.collection.to_vec()
    }
}
