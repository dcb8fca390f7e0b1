/// A read-only cursor over a snapshot of a list, able to move in both directions.
///
/// The cursor sits between elements: [`read_next`](ListCursor::read_next) reads the element after
/// it and [`read_prev`](ListCursor::read_prev) the one before. A cursor at index 0 has nothing
/// before it, and a cursor at the length has nothing after it.
///
/// # Examples
/// ```
/// # use dzlib::iterate::ListCursor;
/// let mut cursor = ListCursor::new(vec!['a', 'b']);
/// assert_eq!(cursor.advance(), Some(&'a'));
/// assert_eq!(cursor.advance(), Some(&'b'));
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.retreat(), Some(&'b'));
/// assert_eq!(cursor.next_index(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListCursor<T> {
    pub(crate) items: Vec<T>,
    pub(crate) index: usize,
}

impl<T> ListCursor<T> {
    /// Creates a cursor before the first element of `items`.
    pub const fn new(items: Vec<T>) -> ListCursor<T> {
        ListCursor {
            items,
            index: 0,
        }
    }

    /// Creates a cursor before the element at `index`. An index past the end is moved to the end.
    pub fn at(items: Vec<T>, index: usize) -> ListCursor<T> {
        let index = usize::min(index, items.len());
        ListCursor {
            items,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    pub const fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Returns the index of the element [`advance`](ListCursor::advance) would return.
    pub const fn next_index(&self) -> usize {
        self.index
    }

    /// Returns the index of the element [`retreat`](ListCursor::retreat) would return, if any.
    pub const fn prev_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn read_next(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn read_prev(&self) -> Option<&T> {
        self.items.get(self.prev_index()?)
    }

    /// Moves forward past the next element, returning it.
    pub fn advance(&mut self) -> Option<&T> {
        let value = self.items.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    /// Moves backward past the previous element, returning it.
    pub fn retreat(&mut self) -> Option<&T> {
        self.index = self.prev_index()?;
        self.items.get(self.index)
    }

    /// Consumes the cursor, returning the snapshot it was reading.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> From<&[T]> for ListCursor<T> {
    fn from(value: &[T]) -> Self {
        ListCursor::new(value.to_vec())
    }
}
