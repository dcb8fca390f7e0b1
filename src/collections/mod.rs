//! Collection types and helpers built on top of the standard library's collections.
//!
//! # Purpose
//! The standard collections cover storage. The types here cover the awkward parts around it:
//! presenting a list as pages, choosing a container at runtime and accumulating into it, or
//! holding exactly one entry.
//!
//! Applicable types implement [`Deref<Target = [T]>`](std::ops::Deref) for read access, while
//! writes go through methods so that derived state stays in sync.

pub mod builder;
pub mod linked_map;
pub mod paged;
pub mod single_entry_map;
pub mod synchronized;
pub mod triple_int;

mod dedup;

pub use dedup::*;
#[doc(inline)]
pub use linked_map::{LinkedMap, LinkedSet};
#[doc(inline)]
pub use paged::{PageConfig, Paged, PagedList};
#[doc(inline)]
pub use single_entry_map::SingleEntryMap;
#[doc(inline)]
pub use synchronized::SynchronizedList;
