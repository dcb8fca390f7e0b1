/// A transformation from one string to another.
///
/// Formatters are `Send + Sync`, so a [`Batch`](super::Batch) can be shared between threads.
pub trait StringFormatter: Send + Sync {
    fn format(&self, input: &str) -> String;
}

impl<F: Fn(&str) -> String + Send + Sync> StringFormatter for F {
    fn format(&self, input: &str) -> String {
        self(input)
    }
}

/// Returns the input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl StringFormatter for Identity {
    fn format(&self, input: &str) -> String {
        input.to_owned()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UpperCase;

impl StringFormatter for UpperCase {
    fn format(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LowerCase;

impl StringFormatter for LowerCase {
    fn format(&self, input: &str) -> String {
        input.to_lowercase()
    }
}

/// Removes leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trimming;

impl StringFormatter for Trimming {
    fn format(&self, input: &str) -> String {
        input.trim().to_owned()
    }
}

/// Prepends a fixed string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefixed(pub String);

impl StringFormatter for Prefixed {
    fn format(&self, input: &str) -> String {
        let mut result = String::with_capacity(self.0.len() + input.len());
        result.push_str(&self.0);
        result.push_str(input);
        result
    }
}

/// Appends a fixed string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Suffixed(pub String);

impl StringFormatter for Suffixed {
    fn format(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len() + self.0.len());
        result.push_str(input);
        result.push_str(&self.0);
        result
    }
}
