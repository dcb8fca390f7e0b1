//! Iteration helpers: walking every value of a fieldless enum and read-only bidirectional cursors.

mod cursor;
mod enum_iter;
mod tests;

pub use cursor::*;
pub use enum_iter::*;
