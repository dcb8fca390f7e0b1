use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use super::ZeroChunkSize;
use crate::functions::CheckedConsumer;
use crate::util::result::ResultExtension;

/// Extension methods available on every [`Iterator`].
pub trait StreamExt: Iterator + Sized {
    /// Groups elements into [`Vec`]s of `size` elements. The final chunk holds the remainder and
    /// is never empty.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    ///
    /// # Examples
    /// ```
    /// # use dzlib::stream::StreamExt;
    /// let chunks: Vec<Vec<u8>> = (1..=5).dice(2).collect();
    /// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    fn dice(self, size: usize) -> Dice<Self> {
        let size = NonZeroUsize::new(size).ok_or(ZeroChunkSize).throw();
        Dice {
            inner: self,
            size,
        }
    }

    /// Passes each element to `consumer` in order, stopping at and returning the first error.
    fn iterate_through<C: CheckedConsumer<Self::Item>>(self, mut consumer: C) -> Result<(), C::Error> {
        for item in self {
            consumer.accept(item)?;
        }
        Ok(())
    }
}

impl<I: Iterator> StreamExt for I {}

/// An iterator over fixed-size chunks of another iterator, created by [`StreamExt::dice`].
#[derive(Debug, Clone)]
pub struct Dice<I> {
    pub(crate) inner: I,
    pub(crate) size: NonZeroUsize,
}

impl<I: Iterator> Iterator for Dice<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.size.get()).collect();
        (!chunk.is_empty()).then_some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let size = self.size.get();
        (lower.div_ceil(size), upper.map(|upper| upper.div_ceil(size)))
    }
}

impl<I: FusedIterator> FusedIterator for Dice<I> {}
