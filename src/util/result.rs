use std::error::Error;

/// Turns a typed error into a panic, for the functions in this crate which document a
/// `# Panics` section instead of returning a [`Result`].
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. Used where the only way to fail is a caller mistake, such as an index out of bounds
    /// or a page size of zero.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
