//! Maps keyed by three integer coordinates.
//!
//! [`TripleIntMap`] describes the contract, and [`TripleIntHashMap`] implements it by packing the
//! coordinates into one `i64` with [`int21`](crate::hashing::int21). Coordinates outside
//! `int21::MIN..=int21::MAX` alias other keys.

mod triple_int_hash_map;
mod triple_int_map;
mod tests;

pub use triple_int_hash_map::*;
pub use triple_int_map::*;
