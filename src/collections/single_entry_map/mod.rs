//! A module containing [`SingleEntryMap`], a map holding at most one entry.

mod single_entry_map;
mod tests;

pub use single_entry_map::*;
