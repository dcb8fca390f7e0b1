//! Numeric helpers, summary statistics, a monotonic millisecond clock and [`FastRandom`], a small
//! xorshift generator.

mod error;
mod fast_random;
mod helpers;
mod stats;
mod tests;
mod time;

pub use error::*;
pub use fast_random::*;
pub use helpers::*;
pub use stats::*;
pub use time::*;
