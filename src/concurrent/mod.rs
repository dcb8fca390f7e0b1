//! Concurrency helpers. [`SynchronizedList`](crate::collections::SynchronizedList) lives with
//! the other collections.

mod constant_future;
mod tests;

pub use constant_future::*;
