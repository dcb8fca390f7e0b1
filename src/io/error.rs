use derive_more::{Display, Error, From, IsVariant};
use zip::result::ZipError;

/// An archive entry whose path is absolute or climbs out of the extraction directory.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("Archive entry {name} would extract outside of the target directory!")]
pub struct UnsafeEntry {
    pub name: String,
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum UnzipError {
    IO(std::io::Error),
    Zip(ZipError),
    UnsafeEntry(UnsafeEntry),
}
