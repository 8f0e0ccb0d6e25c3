//! Operators that bound or offset a sequence by count or by predicate.

use crate::{pull::Pull, Sequence};

/// Yields at most a fixed number of values.
pub struct Take<S> {
    source: S,
    remaining: usize,
}

/// Create a sequence of at most the first `n` source values.
///
/// If the source runs out first, the result reports `Done` from then on.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let naturals = generate_sequence(0u32, |n| Some(n + 1));
/// assert_eq!(take(3, naturals).to_vec(), vec![1, 2, 3]);
/// ```
pub fn take<S>(n: usize, source: S) -> Take<S>
where
    S: Sequence,
{
    Take {
        source,
        remaining: n,
    }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.remaining == 0 {
            return Pull::Done;
        }
        match self.source.pull() {
            Pull::Yielded(v) => {
                self.remaining -= 1;
                Pull::Yielded(v)
            }
            Pull::Done => {
                self.remaining = 0;
                Pull::Done
            }
        }
    }
}

/// Yields values until a predicate first fails.
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

/// Create a sequence that stops at the first value failing `predicate`.
///
/// The failing value is consumed from the source and discarded.
pub fn take_while<S, P>(predicate: P, source: S) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        source,
        predicate,
        done: false,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.done {
            return Pull::Done;
        }
        match self.source.pull() {
            Pull::Yielded(v) if (self.predicate)(&v) => Pull::Yielded(v),
            _ => {
                self.done = true;
                Pull::Done
            }
        }
    }
}

/// Discards a fixed number of leading values.
pub struct Skip<S> {
    source: S,
    pending: usize,
}

/// Create a sequence without the first `n` source values.
///
/// Nothing is discarded until the first pull.
pub fn skip<S>(n: usize, source: S) -> Skip<S>
where
    S: Sequence,
{
    Skip { source, pending: n }
}

impl<S> Sequence for Skip<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.pending > 0 {
            let n = std::mem::take(&mut self.pending);
            for discarded in 0..n {
                if self.source.pull().is_done() {
                    tracing::trace!(requested = n, discarded, "skip exhausted its source");
                    return Pull::Done;
                }
            }
            tracing::trace!(discarded = n, "skip discarded prefix");
        }
        self.source.pull()
    }
}

/// Discards leading values while a predicate holds.
pub struct SkipWhile<S, P> {
    source: S,
    predicate: Option<P>,
}

/// Create a sequence that drops values while `predicate` holds.
///
/// Once a value fails the predicate, it and everything after it are yielded without
/// further checks.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = skip_while(|x: &i32| *x < 5, vec![1, 6, 2, 7].into_seq());
/// assert_eq!(seq.to_vec(), vec![6, 2, 7]);
/// ```
pub fn skip_while<S, P>(predicate: P, source: S) -> SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile {
        source,
        predicate: Some(predicate),
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        let Some(predicate) = self.predicate.as_mut() else {
            return self.source.pull();
        };
        loop {
            match self.source.pull() {
                Pull::Yielded(v) if predicate(&v) => continue,
                Pull::Yielded(v) => {
                    self.predicate = None;
                    return Pull::Yielded(v);
                }
                Pull::Done => return Pull::Done,
            }
        }
    }
}

/// Yields the value at a single position.
pub struct Nth<S> {
    source: S,
    target: usize,
    position: usize,
    drained: bool,
}

/// Create a sequence that yields only the value at zero-based position `n`.
///
/// The match does not end the sequence: a later pull keeps consuming the source,
/// discarding everything, until the source is exhausted. Stop pulling after the first
/// value to leave the remainder untouched.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = nth(1, vec![1, 2, 3].into_seq());
/// assert_eq!(seq.pull(), Pull::Yielded(2));
/// assert_eq!(seq.pull(), Pull::Done);
/// ```
pub fn nth<S>(n: usize, source: S) -> Nth<S>
where
    S: Sequence,
{
    Nth {
        source,
        target: n,
        position: 0,
        drained: false,
    }
}

impl<S> Sequence for Nth<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.drained {
            return Pull::Done;
        }
        if self.position > self.target {
            tracing::trace!(index = self.target, "nth draining source past its match");
        }
        while let Pull::Yielded(v) = self.source.pull() {
            let position = self.position;
            self.position += 1;
            if position == self.target {
                return Pull::Yielded(v);
            }
        }
        self.drained = true;
        Pull::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, IntoSequence};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted(values: Vec<i32>, pulls: Rc<Cell<usize>>) -> impl Sequence<Item = i32> {
        let mut it = values.into_iter();
        from_fn(move || {
            pulls.set(pulls.get() + 1);
            it.next()
        })
    }

    // counts every call, including calls after the source is exhausted
    struct Tally {
        values: std::vec::IntoIter<i32>,
        pulls: Rc<Cell<usize>>,
    }

    impl Sequence for Tally {
        type Item = i32;

        fn pull(&mut self) -> Pull<i32> {
            self.pulls.set(self.pulls.get() + 1);
            self.values.next().into()
        }
    }

    fn tally(values: Vec<i32>, pulls: Rc<Cell<usize>>) -> Tally {
        Tally {
            values: values.into_iter(),
            pulls,
        }
    }

    #[test]
    fn test_take_first_n() {
        let seq = take(3, vec![1, 2, 3, 4, 5, 6].into_seq());
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_more_than_available() {
        let mut seq = take(5, vec![1, 2].into_seq());

        assert_eq!(seq.pull(), Pull::Yielded(1));
        assert_eq!(seq.pull(), Pull::Yielded(2));
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
    }

    #[test]
    fn test_take_past_end_stays_done_without_pulling() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = take(5, tally(vec![1, 2], pulls.clone()));

        assert_eq!(seq.pull(), Pull::Yielded(1));
        assert_eq!(seq.pull(), Pull::Yielded(2));
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 3);

        for _ in 0..3 {
            assert_eq!(seq.pull(), Pull::Done);
        }
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_take_does_not_overpull() {
        let pulls = Rc::new(Cell::new(0));
        let seq = take(2, counted(vec![1, 2, 3], pulls.clone()));

        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_take_zero_never_pulls() {
        let pulls = Rc::new(Cell::new(0));
        let seq = take(0, counted(vec![1], pulls.clone()));

        assert_eq!(seq.count(), 0);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_while_discards_first_failure() {
        let mut source = vec![1, 2, 3, 4, 5, 6].into_seq();
        let taken = take_while(|x: &i32| *x < 3, source.by_ref()).to_vec();

        assert_eq!(taken, vec![1, 2]);
        // 3 was consumed by the failed check
        assert_eq!(source.to_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn test_take_while_stops_pulling_after_failure() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = take_while(|x: &i32| *x < 2, counted(vec![1, 2, 3], pulls.clone()));

        assert_eq!(seq.pull(), Pull::Yielded(1));
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_skip_defers_until_first_pull() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = skip(4, counted(vec![1, 2, 3, 4, 5, 6], pulls.clone()));
        assert_eq!(pulls.get(), 0);

        assert_eq!(seq.pull(), Pull::Yielded(5));
        assert_eq!(pulls.get(), 5);
        assert_eq!(seq.pull(), Pull::Yielded(6));
        assert_eq!(seq.pull(), Pull::Done);
    }

    #[test]
    fn test_skip_past_end() {
        let mut seq = skip(10, vec![1, 2, 3].into_seq());
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
    }

    #[test]
    fn test_skip_while_yields_rest_unfiltered() {
        let seq = skip_while(|x: &i32| *x < 5, vec![1, 2, 3, 4, 5, 6, 1].into_seq());
        assert_eq!(seq.to_vec(), vec![5, 6, 1]);
    }

    #[test]
    fn test_skip_while_all_match() {
        let seq = skip_while(|_: &i32| true, vec![1, 2].into_seq());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_nth_yields_single_value() {
        let seq = nth(1, vec![1, 2, 3].into_seq());
        assert_eq!(seq.to_vec(), vec![2]);
    }

    #[test]
    fn test_nth_out_of_range() {
        let mut seq = nth(10, vec![1, 2, 3].into_seq());
        assert_eq!(seq.pull(), Pull::Done);
    }

    #[test]
    fn test_nth_stops_at_match_then_drains_on_next_pull() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = nth(1, counted(vec![10, 20, 30, 40], pulls.clone()));

        assert_eq!(seq.pull(), Pull::Yielded(20));
        assert_eq!(pulls.get(), 2);

        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 5);
    }

    #[test]
    fn test_nth_leaves_spent_source_alone() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = nth(0, tally(vec![1, 2], pulls.clone()));

        assert_eq!(seq.pull(), Pull::Yielded(1));
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 3);

        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_nth_out_of_range_stops_pulling() {
        let pulls = Rc::new(Cell::new(0));
        let mut seq = nth(5, tally(vec![1, 2], pulls.clone()));

        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(pulls.get(), 3);
    }
}
