use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Range;

use parking_lot::Mutex;

use crate::iterate::ListCursor;
use crate::util::error::{RangeOutOfBounds, check_index, check_insert_index};
use crate::util::result::ResultExtension;

/// A list guarded by a mutex, so that every operation takes `&self` and holds the lock for its
/// whole duration.
///
/// Borrowing elements out of the list would outlive the lock, so reads return clones or
/// snapshots instead. Iteration goes through a [`ListCursor`] over a snapshot, which is unaffected
/// by later writes.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use std::thread;
/// # use dzlib::collections::SynchronizedList;
/// let list = Arc::new(SynchronizedList::new());
/// let handles: Vec<_> = (0..4).map(|i| {
///     let list = Arc::clone(&list);
///     thread::spawn(move || list.push(i))
/// }).collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(list.len(), 4);
/// ```
pub struct SynchronizedList<T> {
    pub(crate) inner: Mutex<Vec<T>>,
}

impl<T> SynchronizedList<T> {
    pub const fn new() -> SynchronizedList<T> {
        SynchronizedList {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop()
    }

    /// Inserts `value` at `index`, shifting all following elements back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&self, index: usize, value: T) {
        let mut items = self.inner.lock();
        check_insert_index(index, items.len()).throw();
        items.insert(index, value);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&self, index: usize) -> T {
        let mut items = self.inner.lock();
        check_index(index, items.len()).throw();
        items.remove(index)
    }

    /// Replaces the element at `index` with `value`, returning the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&self, index: usize, value: T) -> T {
        let mut items = self.inner.lock();
        check_index(index, items.len()).throw();
        std::mem::replace(&mut items[index], value)
    }

    pub fn retain<F: FnMut(&T) -> bool>(&self, keep: F) {
        self.inner.lock().retain(keep);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, compare: F) {
        self.inner.lock().sort_by(compare);
    }

    /// Runs `f` with exclusive access to the underlying [`Vec`], for compound operations which
    /// must not be interleaved with other threads.
    pub fn with_lock<R, F: FnOnce(&mut Vec<T>) -> R>(&self, f: F) -> R {
        f(&mut self.inner.lock())
    }

    pub fn extend<I: IntoIterator<Item = T>>(&self, iter: I) {
        self.inner.lock().extend(iter);
    }

    /// Consumes the list, returning the underlying [`Vec`].
    pub fn into_inner(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SynchronizedList<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.lock().get(index).cloned()
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().clone()
    }

    /// Returns a read-only cursor over a snapshot of the current contents, positioned at `index`.
    pub fn cursor(&self, index: usize) -> ListCursor<T> {
        ListCursor::at(self.snapshot(), index)
    }

    /// Returns a new, independent list containing the elements in `range`.
    ///
    /// # Panics
    /// Panics if `range` doesn't fit within the list.
    pub fn sub_list(&self, range: Range<usize>) -> SynchronizedList<T> {
        let items = self.inner.lock();
        match items.get(range.clone()) {
            Some(slice) => SynchronizedList::from(slice.to_vec()),
            None => Err(RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: items.len(),
            }).throw(),
        }
    }
}

impl<T: PartialEq> SynchronizedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.lock().iter().position(|item| item == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.inner.lock().iter().rposition(|item| item == value)
    }

    /// Removes the first element equal to `value`, returning true if one was found.
    pub fn remove_item(&self, value: &T) -> bool {
        let mut items = self.inner.lock();
        match items.iter().position(|item| item == value) {
            Some(index) => {
                items.remove(index);
                true
            },
            None => false,
        }
    }
}

impl<T> From<Vec<T>> for SynchronizedList<T> {
    fn from(value: Vec<T>) -> Self {
        SynchronizedList {
            inner: Mutex::new(value),
        }
    }
}

impl<T> FromIterator<T> for SynchronizedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SynchronizedList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Default for SynchronizedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SynchronizedList<T> {
    fn clone(&self) -> Self {
        SynchronizedList::from(self.snapshot())
    }
}

/// Compares against a snapshot of `other`, so only one lock is ever held at a time.
impl<T: Clone + PartialEq> PartialEq for SynchronizedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let theirs = other.snapshot();
        *self.inner.lock() == theirs
    }
}

impl<T: Debug> Debug for SynchronizedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynchronizedList")
            .field("contents", &*self.inner.lock())
            .finish()
    }
}
