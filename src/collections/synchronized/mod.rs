//! A module containing [`SynchronizedList`], a list which can be shared between threads.

mod synchronized_list;
mod tests;

pub use synchronized_list::*;
