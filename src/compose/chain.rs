use crate::{pull::Pull, Sequence};

/// Yield all of the first sequence, then all of the second.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = chain(vec![0, 2].into_seq(), vec![4, 9].into_seq());
/// assert_eq!(seq.to_vec(), vec![0, 2, 4, 9]);
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain(Some(first), second)
}

/// Chains two sequences back to back.
///
/// Created via [`chain()`] or [`Sequence::chain`]. The first sequence is dropped once it
/// is exhausted.
pub struct Chain<A, B>(Option<A>, B);

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if let Some(ref mut first) = self.0 {
            match first.pull() {
                Pull::Yielded(v) => return Pull::Yielded(v),
                Pull::Done => self.0 = None, // never pulled again once spent
            }
        }
        self.1.pull()
    }
}

/// Pair up values from two sequences.
///
/// Every step pulls both sides exactly once, even when the first side is already
/// exhausted, and stops as soon as either side is done.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip(vec![1, 2, 3].into_seq(), vec!["a", "b"].into_seq());
/// assert_eq!(pairs.to_vec(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip { a, b, done: false }
}

/// Zips two sequences into a sequence of pairs.
///
/// Created via [`zip()`] or [`Sequence::zip`].
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.done {
            return Pull::Done;
        }
        match (self.a.pull(), self.b.pull()) {
            (Pull::Yielded(x), Pull::Yielded(y)) => Pull::Yielded((x, y)),
            _ => {
                self.done = true;
                Pull::Done
            }
        }
    }
}
