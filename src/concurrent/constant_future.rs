use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A future which is already complete, holding a fixed value.
///
/// It can't be cancelled, and polling it always yields a clone of the value immediately, so it
/// may be polled any number of times.
///
/// # Examples
/// ```
/// # use dzlib::concurrent::ConstantFuture;
/// let future = ConstantFuture::new(42);
/// assert!(future.is_done());
/// assert!(!future.cancel());
/// assert_eq!(*future.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstantFuture<T> {
    pub(crate) value: T,
}

impl<T> ConstantFuture<T> {
    pub const fn new(value: T) -> ConstantFuture<T> {
        ConstantFuture {
            value,
        }
    }

    pub const fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Always true: the value is available from construction.
    pub const fn is_done(&self) -> bool {
        true
    }

    /// Attempts to cancel the future, which always fails.
    pub const fn cancel(&self) -> bool {
        false
    }

    pub const fn is_cancelled(&self) -> bool {
        false
    }
}

impl<T: Clone> Future for ConstantFuture<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        Poll::Ready(self.value.clone())
    }
}

impl<T> From<T> for ConstantFuture<T> {
    fn from(value: T) -> Self {
        ConstantFuture::new(value)
    }
}
