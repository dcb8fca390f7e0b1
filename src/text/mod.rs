//! String helpers: edit distance, case-insensitive comparison, random strings and argument
//! parsing.

mod case;
mod distance;
mod join;
mod lookup;
mod quoted;
mod random;

pub use case::*;
pub use distance::*;
pub use join::*;
pub use lookup::*;
pub use quoted::*;
pub use random::*;
