//! Iterator adapter for sequences.
//!
//! [`SeqIter`] lets a [`Sequence`] feed anything that expects a
//! [`std::iter::Iterator`]: `for` loops, `Iterator::collect`, or other iterator
//! libraries.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seen = Vec::new();
//! for x in vec![1, 2, 3].into_seq().map(|x| x * 2).iter() {
//!     seen.push(x);
//! }
//! assert_eq!(seen, vec![2, 4, 6]);
//! ```

use crate::{pull::Pull, Sequence};

/// Iterator adapter for [`Sequence`].
///
/// Each call to `next()` pulls once from the wrapped sequence. Once the sequence reports
/// `Done`, the adapter drops it and keeps returning `None`, so `SeqIter` is always fused.
pub struct SeqIter<S> {
    state: SeqIterState<S>,
}

enum SeqIterState<S> {
    Active(S),
    Complete,
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    /// Create a new iterator from a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
        }
    }

    /// Check if the wrapped sequence has been exhausted.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SeqIterState::Complete)
    }

    /// Give back the wrapped sequence, or `None` if it was exhausted and dropped.
    pub fn into_inner(self) -> Option<S> {
        match self.state {
            SeqIterState::Active(seq) => Some(seq),
            SeqIterState::Complete => None,
        }
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let SeqIterState::Active(seq) = &mut self.state else {
            return None;
        };
        match seq.pull() {
            Pull::Yielded(v) => Some(v),
            Pull::Done => {
                self.state = SeqIterState::Complete;
                None
            }
        }
    }
}

impl<S> std::iter::FusedIterator for SeqIter<S> where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{generate_sequence, IntoSequence};

    #[test]
    fn test_seq_iter_collects() {
        let mut iter = vec![1, 2, 3].into_seq().iter();
        let values: Vec<_> = iter.by_ref().collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(iter.is_complete());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_seq_iter_partial_then_into_inner() {
        let mut iter = generate_sequence(0u32, |n| Some(n + 1)).iter();
        let first: Vec<_> = (&mut iter).take(3).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert!(!iter.is_complete());

        let mut rest = iter.into_inner().expect("sequence is still active");
        assert_eq!(rest.pull(), Pull::Yielded(4));
    }

    #[test]
    fn test_into_inner_after_completion() {
        let mut iter = vec!['x'].into_seq().iter();
        assert_eq!(iter.next(), Some('x'));
        assert_eq!(iter.next(), None);
        assert!(iter.into_inner().is_none());
    }
}
