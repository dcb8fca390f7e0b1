//! Builders which accumulate into a container chosen at runtime.
//!
//! A type tag ([`MapType`] or [`CollectionType`]) names a concrete container, and each tag knows
//! how to instantiate it as an [`AnyMap`] or [`AnyCollection`]. The builders wrap one such
//! container and can later copy it into any other kind.
//!
//! Containers are chosen at runtime, so elements must satisfy the bounds of every kind: [`Hash`]
//! and [`Ord`], plus [`Clone`] for map keys.

mod any_collection;
mod any_map;
mod collection_builder;
mod collection_type;
mod error;
mod map_builder;
mod map_type;
mod tests;

pub use any_collection::*;
pub use any_map::*;
pub use collection_builder::*;
pub use collection_type::*;
pub use error::*;
pub use map_builder::*;
pub use map_type::*;
