/// An operation which accepts values one at a time and may fail on any of them.
///
/// Any `FnMut(T) -> Result<(), E>` is a CheckedConsumer.
///
/// # Examples
/// ```
/// # use dzlib::functions::CheckedConsumer;
/// let mut seen = Vec::new();
/// let mut consumer = (|n: u8| if n < 10 { Ok(()) } else { Err("too big") })
///     .and_then(|n: u8| {
///         seen.push(n);
///         Ok::<_, &str>(())
///     });
///
/// assert_eq!(consumer.accept(3), Ok(()));
/// assert_eq!(consumer.accept(12), Err("too big"));
/// drop(consumer);
/// assert_eq!(seen, [3]);
/// ```
pub trait CheckedConsumer<T> {
    type Error;

    fn accept(&mut self, value: T) -> Result<(), Self::Error>;

    /// Chains `next` after this consumer. Each value is passed to `next` only if this consumer
    /// accepted it.
    fn and_then<C>(self, next: C) -> AndThen<Self, C>
    where
        Self: Sized,
        T: Clone,
        C: CheckedConsumer<T, Error = Self::Error>,
    {
        AndThen {
            first: self,
            second: next,
        }
    }
}

impl<T, E, F: FnMut(T) -> Result<(), E>> CheckedConsumer<T> for F {
    type Error = E;

    fn accept(&mut self, value: T) -> Result<(), E> {
        self(value)
    }
}

/// Two [`CheckedConsumer`]s run one after the other, created by
/// [`CheckedConsumer::and_then`].
#[derive(Debug, Clone)]
pub struct AndThen<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> CheckedConsumer<T> for AndThen<A, B>
where
    T: Clone,
    A: CheckedConsumer<T>,
    B: CheckedConsumer<T, Error = A::Error>,
{
    type Error = A::Error;

    fn accept(&mut self, value: T) -> Result<(), Self::Error> {
        self.first.accept(value.clone())?;
        self.second.accept(value)
    }
}
