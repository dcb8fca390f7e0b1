//! Archive extraction.

mod error;
mod tests;
mod unzip;

pub use error::*;
pub use unzip::*;
