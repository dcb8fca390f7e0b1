use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Unable to pair {keys} keys with {values} values!")]
pub struct LengthMismatch {
    pub keys: usize,
    pub values: usize,
}
