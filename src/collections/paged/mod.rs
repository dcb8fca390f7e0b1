//! A module containing [`PagedList`] and the [`Paged`] trait describing page access.
//!
//! Pages are numbered from 1. Page `k` covers the elements in
//! `(k - 1) * per_page..min(k * per_page, len)`, so every page is full except possibly the last
//! and an empty list has no pages at all.

mod config;
mod paged_list;
mod tests;

pub use config::*;
pub use paged_list::*;
