use std::fmt::{self, Debug, Formatter};

use super::StringFormatter;
use crate::util::error::check_index;
use crate::util::result::ResultExtension;

/// A sequence of formatters, applied in the order they were added. An empty Batch returns its
/// input unchanged.
///
/// # Examples
/// ```
/// # use dzlib::format::{Batch, Prefixed, StringFormatter, Trimming, UpperCase};
/// let batch = Batch::new()
///     .with(Trimming)
///     .with(UpperCase)
///     .with(Prefixed("> ".to_owned()));
/// assert_eq!(batch.format("  hi "), "> HI");
/// ```
#[derive(Default)]
pub struct Batch {
    pub(crate) formatters: Vec<Box<dyn StringFormatter>>,
}

impl Batch {
    pub const fn new() -> Batch {
        Batch {
            formatters: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Appends `formatter` to the end of the batch.
    pub fn add<F: StringFormatter + 'static>(&mut self, formatter: F) -> &mut Self {
        self.formatters.push(Box::new(formatter));
        self
    }

    /// Appends `formatter`, consuming and returning the batch.
    pub fn with<F: StringFormatter + 'static>(mut self, formatter: F) -> Self {
        self.add(formatter);
        self
    }

    /// Removes and returns the formatter at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Box<dyn StringFormatter> {
        check_index(index, self.formatters.len()).throw();
        self.formatters.remove(index)
    }
}

impl StringFormatter for Batch {
    fn format(&self, input: &str) -> String {
        let mut result = input.to_owned();
        for formatter in &self.formatters {
            result = formatter.format(&result);
        }
        result
    }
}

impl Debug for Batch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("len", &self.formatters.len())
            .finish()
    }
}
