use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error)]
#[display("Range {start}..{end} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// Checks that `index` can be used to read from a collection of `len` elements.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index >= len {
        Err(IndexOutOfBounds { index, len })
    } else {
        Ok(())
    }
}

/// Checks that `index` can be used to insert into a collection of `len` elements, which allows an
/// index equal to the length.
pub(crate) const fn check_insert_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index > len {
        Err(IndexOutOfBounds { index, len })
    } else {
        Ok(())
    }
}
