use std::iter::FusedIterator;

/// Lazily walks the tree rooted at `seed`, where `step` yields the children of each node.
///
/// Nodes come out in pre-order: a node first, then every descendant of its first child, and so
/// on. `step` is only called on a node once that node has been yielded, so infinite trees can be
/// explored with [`Iterator::take`] and friends.
///
/// # Examples
/// ```
/// # use dzlib::stream::generate;
/// let tree: Vec<u32> = generate(1, |n| if *n < 4 { vec![n * 2, n * 2 + 1] } else { vec![] })
///     .collect();
/// assert_eq!(tree, [1, 2, 4, 5, 3, 6, 7]);
/// ```
pub fn generate<T, C, F>(seed: T, step: F) -> Generate<T, C, F>
where
    C: IntoIterator<Item = T>,
    F: FnMut(&T) -> C,
{
    Generate {
        seed: Some(seed),
        stack: Vec::new(),
        step,
    }
}

/// A pre-order walk over a generated tree, created by [`generate`].
pub struct Generate<T, C: IntoIterator, F> {
    pub(crate) seed: Option<T>,
    pub(crate) stack: Vec<C::IntoIter>,
    pub(crate) step: F,
}

impl<T, C, F> Iterator for Generate<T, C, F>
where
    C: IntoIterator<Item = T>,
    F: FnMut(&T) -> C,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = match self.seed.take() {
            Some(seed) => seed,
            None => loop {
                let children = self.stack.last_mut()?;
                match children.next() {
                    Some(child) => break child,
                    None => {
                        self.stack.pop();
                    },
                }
            },
        };

        self.stack.push((self.step)(&node).into_iter());
        Some(node)
    }
}

impl<T, C, F> FusedIterator for Generate<T, C, F>
where
    C: IntoIterator<Item = T>,
    F: FnMut(&T) -> C,
{
}
