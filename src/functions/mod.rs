//! Small function helpers: keying collections by a derived value, checking whether strings parse
//! as numbers, and consumers which can fail.

mod checked_consumer;
mod equality;
mod mapping;
mod numeric;
mod tests;

pub use checked_consumer::*;
pub use equality::*;
pub use mapping::*;
pub use numeric::*;
