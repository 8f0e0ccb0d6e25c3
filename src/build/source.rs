use std::iter::Fuse;

use crate::{pull::Pull, Sequence};

/// Sequence over a standard iterator.
///
/// The iterator is fused, so an exhausted source stays exhausted even if the
/// underlying iterator would resume.
pub struct Source<I> {
    iter: Fuse<I>,
}

/// Create a sequence from any iterable collection or iterator.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_iter(1..=3);
/// assert_eq!(seq.sum(), Ok(6));
/// ```
pub fn from_iter<I>(iterable: I) -> Source<I::IntoIter>
where
    I: IntoIterator,
{
    Source {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I> Sequence for Source<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        self.iter.next().into()
    }
}

/// Conversion into a [`Sequence`].
///
/// Implemented for everything that implements [`IntoIterator`], so vectors, arrays,
/// ranges, maps and iterator chains can all start a pipeline.
pub trait IntoSequence {
    type Item;
    type IntoSeq: Sequence<Item = Self::Item>;

    fn into_seq(self) -> Self::IntoSeq;
}

impl<I> IntoSequence for I
where
    I: IntoIterator,
{
    type Item = I::Item;
    type IntoSeq = Source<I::IntoIter>;

    fn into_seq(self) -> Self::IntoSeq {
        from_iter(self)
    }
}
