use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, Range};

use parking_lot::Mutex;
use tracing::trace;

use super::{PageConfig, checked_per_page};
use crate::util::error::{check_index, check_insert_index};
use crate::util::result::ResultExtension;

/// Access to a collection split into numbered pages of a fixed size.
pub trait Paged {
    type Item;

    /// Returns the elements on the given page, or [`None`] if there is no such page. Pages are
    /// numbered from 1.
    fn page(&self, page: usize) -> Option<&[Self::Item]>;

    /// Returns the number of pages with the current elements per page setting.
    fn pages(&self) -> usize;

    fn elements_per_page(&self) -> usize;

    /// Returns true if pages are recalculated whenever the collection is written to. When many
    /// changes are about to be made at once, it is cheaper to disable this and call
    /// [`recalculate_pages`](Paged::recalculate_pages) at the end.
    fn is_auto_refresh(&self) -> bool;

    /// Returns true if pages are recalculated whenever they are read.
    fn is_refresh_on_read(&self) -> bool;

    /// Sets the number of elements per page.
    ///
    /// # Panics
    /// Panics if `per_page` is zero.
    fn set_elements_per_page(&mut self, per_page: usize);

    fn set_auto_refresh(&mut self, auto_refresh: bool);

    fn set_refresh_on_read(&mut self, refresh_on_read: bool);

    /// Forces the pages to be recalculated from the current contents.
    fn recalculate_pages(&self);
}

/// A list which wraps a [`Vec`] and presents its elements as pages.
///
/// Pages are a derived view: a table of index ranges which is rebuilt after each write (when
/// auto-refresh is enabled), before each page read (when refresh-on-read is enabled) or when
/// [`recalculate_pages`](Paged::recalculate_pages) is called. With both disabled, pages are stale
/// until recalculated. A stale page that no longer fits inside the list reads as [`None`].
///
/// Recalculation is guarded by a mutex, so that pages can be refreshed through a shared reference
/// and two recalculations never interleave.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
/// - `p`: The number of pages.
///
/// | Method | Complexity |
/// |-|-|
/// | `page` | `O(1)`, `O(p)`* |
/// | `pages` | `O(1)`, `O(p)`* |
/// | `push` | `O(1)`**, `O(p)` |
/// | `insert` | `O(n-i)`, `O(n-i+p)`** |
/// | `remove` | `O(n-i)`, `O(n-i+p)`** |
/// | `recalculate_pages` | `O(p)` |
///
/// \* If refresh-on-read is enabled.
///
/// \** If auto-refresh is disabled.
///
/// # Examples
/// ```
/// # use dzlib::collections::{PageConfig, Paged, PagedList};
/// let list = PagedList::from_vec_with_config((1..=7).collect(), PageConfig::new().per_page(3));
/// assert_eq!(list.pages(), 3);
/// assert_eq!(list.page(1), Some(&[1, 2, 3][..]));
/// assert_eq!(list.page(3), Some(&[7][..]));
/// assert_eq!(list.page(4), None);
/// ```
pub struct PagedList<T> {
    pub(crate) items: Vec<T>,
    pub(crate) config: PageConfig,
    pub(crate) table: Mutex<Vec<Range<usize>>>,
}

impl<T> PagedList<T> {
    /// Creates an empty PagedList with the default [`PageConfig`].
    pub fn new() -> PagedList<T> {
        PagedList::from_vec_with_config(Vec::new(), PageConfig::new())
    }

    /// Creates an empty PagedList with the provided `config`.
    pub fn with_config(config: PageConfig) -> PagedList<T> {
        PagedList::from_vec_with_config(Vec::new(), config)
    }

    /// Wraps `items`, paging them with the provided `config`. Pages are calculated immediately,
    /// regardless of the refresh settings.
    pub fn from_vec_with_config(items: Vec<T>, config: PageConfig) -> PagedList<T> {
        let list = PagedList {
            items,
            config,
            table: Mutex::new(Vec::new()),
        };
        list.calculate_pages();
        list
    }

    pub const fn config(&self) -> PageConfig {
        self.config
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the end of the list.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.after_write();
    }

    /// Pops the last value off the end of the list.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop();
        self.after_write();
        value
    }

    /// Inserts `value` at `index`, shifting all following elements back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        check_insert_index(index, self.len()).throw();
        self.items.insert(index, value);
        self.after_write();
    }

    /// Inserts every element of `values` starting at `index`, preserving their order.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) {
        check_insert_index(index, self.len()).throw();
        self.items.splice(index..index, values);
        self.after_write();
    }

    /// Removes and returns the element at `index`, shifting all following elements forward.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        check_index(index, self.len()).throw();
        let value = self.items.remove(index);
        self.after_write();
        value
    }

    /// Replaces the element at `index` with `value`, returning the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        check_index(index, self.len()).throw();
        let old = std::mem::replace(&mut self.items[index], value);
        self.after_write();
        old
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.items.retain(keep);
        self.after_write();
    }

    /// Sorts the elements with the provided comparison function.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.items.sort_by(compare);
        self.after_write();
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
        self.after_write();
    }

    /// Returns the elements in `range`, or [`None`] if the range doesn't fit in the list.
    pub fn sub_list(&self, range: Range<usize>) -> Option<&[T]> {
        self.items.get(range)
    }

    /// Returns an iterator over every page, in order.
    pub fn iter_pages(&self) -> impl Iterator<Item = &[T]> {
        (1..=self.pages()).filter_map(|page| self.page(page))
    }

    /// Consumes the list, returning the wrapped [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn after_write(&self) {
        if self.config.auto_refresh {
            self.calculate_pages();
        }
    }

    fn calculate_pages(&self) {
        let mut table = self.table.lock();
        table.clear();

        let len = self.items.len();
        let per_page = self.config.per_page.get();
        let count = len.div_ceil(per_page);

        table.extend((0..count).map(|page| {
            let start = page * per_page;
            start..usize::min(start + per_page, len)
        }));

        trace!(len, per_page, pages = count, "recalculated pages");
    }
}

impl<T: PartialEq> PagedList<T> {
    /// Removes the first element equal to `value`, returning true if one was found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.items.remove(index);
                self.after_write();
                true
            },
            None => false,
        }
    }

    /// Removes every element which is also contained in `values`, returning true if the list
    /// changed.
    pub fn remove_all(&mut self, values: &[T]) -> bool {
        let len = self.len();
        self.retain(|item| !values.contains(item));
        len != self.len()
    }

    /// Removes every element which isn't contained in `values`, returning true if the list
    /// changed.
    pub fn retain_all(&mut self, values: &[T]) -> bool {
        let len = self.len();
        self.retain(|item| values.contains(item));
        len != self.len()
    }

    /// Returns true if every element of `values` is contained in the list.
    pub fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|value| self.items.contains(value))
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().rposition(|item| item == value)
    }
}

impl<T> Paged for PagedList<T> {
    type Item = T;

    fn page(&self, page: usize) -> Option<&[T]> {
        if self.config.refresh_on_read {
            self.calculate_pages();
        }

        let range = self.table.lock().get(page.checked_sub(1)?)?.clone();
        self.items.get(range)
    }

    fn pages(&self) -> usize {
        if self.config.refresh_on_read {
            self.calculate_pages();
        }

        self.table.lock().len()
    }

    fn elements_per_page(&self) -> usize {
        self.config.elements_per_page()
    }

    fn is_auto_refresh(&self) -> bool {
        self.config.auto_refresh
    }

    fn is_refresh_on_read(&self) -> bool {
        self.config.refresh_on_read
    }

    fn set_elements_per_page(&mut self, per_page: usize) {
        self.config.per_page = checked_per_page(per_page).throw();
        self.after_write();
    }

    fn set_auto_refresh(&mut self, auto_refresh: bool) {
        self.config.auto_refresh = auto_refresh;
    }

    fn set_refresh_on_read(&mut self, refresh_on_read: bool) {
        self.config.refresh_on_read = refresh_on_read;
    }

    fn recalculate_pages(&self) {
        self.calculate_pages();
    }
}

impl<T> Extend<T> for PagedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.after_write();
    }
}

impl<T> FromIterator<T> for PagedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PagedList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> From<Vec<T>> for PagedList<T> {
    fn from(value: Vec<T>) -> Self {
        PagedList::from_vec_with_config(value, PageConfig::new())
    }
}

impl<T> From<PagedList<T>> for Vec<T> {
    fn from(value: PagedList<T>) -> Self {
        value.into_vec()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> AsRef<[T]> for PagedList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        PagedList {
            items: self.items.clone(),
            config: self.config,
            table: Mutex::new(self.table.lock().clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for PagedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for PagedList<T> {}

impl<T: Debug> Debug for PagedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedList")
            .field("contents", &self.items)
            .field("per_page", &self.config.elements_per_page())
            .field("pages", &self.table.lock().len())
            .finish()
    }
}
