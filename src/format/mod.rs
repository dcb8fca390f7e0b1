//! Composable string transformations.
//!
//! Every transformation implements [`StringFormatter`], as do plain closures, so they can be
//! mixed freely inside a [`Batch`]. With the `log` feature, a [`FormattingLayer`] applies a batch
//! to the messages of [`tracing`] events.

mod batch;
mod formatter;
#[cfg(feature = "log")]
mod layer;
mod substring;

pub use batch::*;
pub use formatter::*;
#[cfg(feature = "log")]
pub use layer::*;
pub use substring::*;
