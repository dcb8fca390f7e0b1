//! A module containing [`LinkedMap`], an insertion-ordered hash map, its iterators and
//! [`LinkedSet`], the matching set.

mod iter;
mod linked_map;
mod linked_set;
mod tests;

pub use iter::*;
pub use linked_map::*;
pub use linked_set::*;
