/// A map from `(x, y, z)` integer coordinates to values.
///
/// Keys are exposed in their packed `i64` form, see [`int21`](crate::hashing::int21) to unpack
/// them.
pub trait TripleIntMap<T> {
    type Iter<'a>: Iterator<Item = (i64, &'a T)> where Self: 'a, T: 'a;

    /// Returns the value at the provided coordinates, if any.
    fn get(&self, x: i32, y: i32, z: i32) -> Option<&T>;

    fn contains_key(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_some()
    }

    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|(_, existing)| existing == value)
    }

    /// Associates `value` with the provided coordinates, returning the previous value.
    fn put(&mut self, x: i32, y: i32, z: i32, value: T) -> Option<T>;

    /// Associates `value` with the provided coordinates only if they have no value yet. Returns
    /// the existing value if there was one, or [`None`] if `value` was inserted.
    fn put_if_absent(&mut self, x: i32, y: i32, z: i32, value: T) -> Option<&T>;

    /// Removes and returns the value at the provided coordinates.
    fn remove(&mut self, x: i32, y: i32, z: i32) -> Option<T>;

    /// Removes every entry.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all packed keys and their values.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns a copy of every packed key.
    fn keys(&self) -> Vec<i64> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns every value, as references.
    fn values(&self) -> Vec<&T> {
        self.iter().map(|(_, value)| value).collect()
    }
}
