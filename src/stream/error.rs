use std::fmt::Debug;

use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Unable to split elements into chunks of zero!")]
pub struct ZeroChunkSize;

/// A key was produced more than once where keys are required to be unique. The key is held in its
/// [`Debug`] form.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Error)]
#[display("Encountered duplicate key {key}!")]
pub struct DuplicateKey {
    pub key: String,
}

impl DuplicateKey {
    pub(crate) fn of<K: Debug>(key: &K) -> DuplicateKey {
        DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}
