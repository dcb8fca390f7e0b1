use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Unable to draw a number from an empty range!")]
pub struct EmptyRange;
