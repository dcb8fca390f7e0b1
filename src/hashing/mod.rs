//! Packing of three 21-bit integers into a single `i64` key, and back.
//!
//! Each coordinate keeps its sign bit and its 20 least significant bits, so every value in
//! `-2^20..2^20` survives a round trip:
//!
//! ```
//! # use dzlib::hashing::int21;
//! let key = int21::key(-5, 1_000, 1 << 19);
//! assert_eq!(int21::key1(key), -5);
//! assert_eq!(int21::key2(key), 1_000);
//! assert_eq!(int21::key3(key), 1 << 19);
//! ```

pub mod int21;
