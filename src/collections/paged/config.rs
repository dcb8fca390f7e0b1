use std::num::NonZeroUsize;

use derive_more::{Display, Error};

use crate::util::result::ResultExtension;

/// The number of elements on a page when none is configured.
pub const DEFAULT_PER_PAGE: usize = 8;

#[derive(Debug, Display, Error)]
#[display("A page must be able to hold at least one element!")]
pub struct ZeroPageSize;

/// Settings controlling how a [`PagedList`](super::PagedList) splits and refreshes its pages.
///
/// # Examples
/// ```
/// # use dzlib::collections::PageConfig;
/// let config = PageConfig::new().per_page(3).auto_refresh(false);
/// assert_eq!(config.elements_per_page(), 3);
/// assert!(!config.is_auto_refresh());
/// assert!(!config.is_refresh_on_read());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageConfig {
    pub(crate) per_page: NonZeroUsize,
    pub(crate) auto_refresh: bool,
    pub(crate) refresh_on_read: bool,
}

impl PageConfig {
    /// Creates the default configuration: [`DEFAULT_PER_PAGE`] elements per page, refreshing
    /// whenever the list is written to but not when it is read.
    pub const fn new() -> PageConfig {
        PageConfig {
            per_page: match NonZeroUsize::new(DEFAULT_PER_PAGE) {
                Some(per_page) => per_page,
                None => unreachable!(),
            },
            auto_refresh: true,
            refresh_on_read: false,
        }
    }

    /// Sets the number of elements per page.
    ///
    /// # Panics
    /// Panics if `per_page` is zero.
    pub fn per_page(mut self, per_page: usize) -> PageConfig {
        self.per_page = checked_per_page(per_page).throw();
        self
    }

    /// Sets whether pages are recalculated after every write.
    pub const fn auto_refresh(mut self, auto_refresh: bool) -> PageConfig {
        self.auto_refresh = auto_refresh;
        self
    }

    /// Sets whether pages are recalculated before every page read.
    pub const fn refresh_on_read(mut self, refresh_on_read: bool) -> PageConfig {
        self.refresh_on_read = refresh_on_read;
        self
    }

    pub const fn elements_per_page(&self) -> usize {
        self.per_page.get()
    }

    pub const fn is_auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub const fn is_refresh_on_read(&self) -> bool {
        self.refresh_on_read
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn checked_per_page(per_page: usize) -> Result<NonZeroUsize, ZeroPageSize> {
    NonZeroUsize::new(per_page).ok_or(ZeroPageSize)
}
