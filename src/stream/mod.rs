//! Iterator adapters and collectors over key-value pairs.
//!
//! Collectors that build maps produce a [`LinkedMap`](crate::collections::LinkedMap), so the
//! result keeps the order in which keys were first seen.

pub mod bi_collectors;

mod bi_collection;
mod error;
mod ext;
mod generate;
mod merge;

pub use bi_collection::*;
pub use error::*;
pub use ext::*;
pub use generate::*;
pub use merge::*;
