//! Core trait for single-pass, pull-based sequences.
//!
//! This module defines the [`Sequence`] trait, the protocol every source and operator
//! in this library speaks. A [`Sequence`] produces values on demand, one per call to
//! [`pull`](Sequence::pull), and exhausts permanently once it reports
//! [`Pull::Done`].
//!
//! Operators come in two kinds:
//! - **Intermediate** operators (`map`, `filter`, `zip`, ...) wrap a sequence and return
//!   a new lazy sequence. Building one performs no pulls.
//! - **Terminal** operators (`sum`, `to_vec`, `any`, ...) drive a sequence and return a
//!   plain value.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares = vec![1, 2].into_seq()
//!     .chain(vec![3].into_seq())
//!     .map(|x| x * x)
//!     .to_vec();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

use std::ops::Add;

use either::Either;

use crate::{
    compose::{
        self, Chain, Enumerate, Filter, FlatMap, Flatten, Map, Nth, Scan, Skip, SkipWhile, Take,
        TakeWhile, Zip,
    },
    consume,
    error::SeqError,
    iter::SeqIter,
    pull::Pull,
};

/// A single-pass producer of values.
///
/// Each call to `pull()` either yields the next value or reports that the sequence is
/// exhausted. Implementations must be monotonic: after the first `Pull::Done`, every
/// later pull returns `Pull::Done`. All sources and operators in this crate uphold that
/// contract as long as the sequences they wrap do.
///
/// Operators take their input by value, so a sequence cannot be pulled from two places
/// at once. Use [`by_ref`](Sequence::by_ref) to lend a sequence to an operator and keep
/// pulling from it afterwards.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = vec![1, 2].into_seq();
/// assert_eq!(seq.pull(), Pull::Yielded(1));
/// assert_eq!(seq.pull(), Pull::Yielded(2));
/// assert_eq!(seq.pull(), Pull::Done);
/// assert_eq!(seq.pull(), Pull::Done);
/// ```
pub trait Sequence {
    /// Type of the values this sequence produces
    type Item;

    /// Produce the next value, or `Done` once the sequence is exhausted.
    fn pull(&mut self) -> Pull<Self::Item>;

    /// Borrow this sequence so an operator can consume part of it.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seq = vec![1, 2, 3, 4].into_seq();
    /// assert_eq!(seq.by_ref().take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(seq.to_vec(), vec![3, 4]);
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the concrete type of this sequence.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt this sequence into a [`std::iter::Iterator`].
    fn iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    /// Yield every value of this sequence, then every value of `other`.
    fn chain<R>(self, other: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
    {
        compose::chain(self, other)
    }

    /// Pair each value with its zero-based position in the output.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        compose::enumerate(self)
    }

    /// Keep only the values that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::filter(predicate, self)
    }

    /// Expand each value into a sequence and yield its elements in order.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, F, U>
    where
        Self: Sized,
        U: Sequence,
        F: FnMut(Self::Item) -> U,
    {
        compose::flat_map(f, self)
    }

    /// Yield the elements of each nested sequence in order.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        compose::flatten(self)
    }

    /// Transform each value with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        compose::map(f, self)
    }

    /// Yield only the value at zero-based position `n`.
    ///
    /// This does not stop the underlying sequence: asking for another value after the
    /// match drains the rest of the source before reporting `Done`.
    fn nth(self, n: usize) -> Nth<Self>
    where
        Self: Sized,
    {
        compose::nth(n, self)
    }

    /// Yield each intermediate accumulator of a left fold. The seed is not yielded.
    fn scan<A, F>(self, reducer: F, seed: A) -> Scan<Self, A, F>
    where
        Self: Sized,
        A: Clone,
        F: FnMut(&A, Self::Item) -> A,
    {
        compose::scan(reducer, seed, self)
    }

    /// Discard the first `n` values.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        compose::skip(n, self)
    }

    /// Discard values while `predicate` holds, then yield the rest unfiltered.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::skip_while(predicate, self)
    }

    /// Yield at most the first `n` values.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        compose::take(n, self)
    }

    /// Yield values while `predicate` holds. The first failing value is discarded.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::take_while(predicate, self)
    }

    /// Pair values from this sequence and `other` until either runs out.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Sequence,
    {
        compose::zip(self, other)
    }

    /// Hand the whole sequence to `collector`.
    fn collect<C, F>(self, collector: F) -> C
    where
        Self: Sized,
        F: FnOnce(Self) -> C,
    {
        consume::collect(collector, self)
    }

    /// Materialize the remaining values in pull order.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        consume::to_vec(self)
    }

    /// `true` if every value satisfies `predicate`. Stops at the first failure.
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::all(predicate, self)
    }

    /// `true` if some value satisfies `predicate`. Stops at the first match.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seq = vec![1, 3, 5, 6, 7].into_seq();
    /// assert!(seq.any(|x| x % 2 == 0));
    /// assert_eq!(seq.to_vec(), vec![7]);
    /// ```
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::any(predicate, self)
    }

    /// Number of remaining values.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// First value satisfying `predicate`. Stops at the match.
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::find(predicate, self)
    }

    /// Call `f` on every remaining value.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(f, self)
    }

    /// Largest value. On ties the earliest one wins. `None` if empty.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        consume::max(self)
    }

    /// Smallest value. On ties the earliest one wins. `None` if empty.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        consume::min(self)
    }

    /// Value with the largest key. On ties the last one wins. `None` if empty.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let longest = vec!["a", "bb", "cc", "d"].into_seq().max_by_key(|s| s.len());
    /// assert_eq!(longest, Some("cc"));
    /// ```
    fn max_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        consume::max_by_key(f, self)
    }

    /// Value with the smallest key. On ties the last one wins. `None` if empty.
    fn min_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        consume::min_by_key(f, self)
    }

    /// Split into `(matching, not_matching)`, each in source order.
    fn partition<P>(self, predicate: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::partition(predicate, self)
    }

    /// Zero-based index of the first value satisfying `predicate`.
    fn position<P>(&mut self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::position(predicate, self)
    }

    /// Product of all values; one for an empty sequence.
    fn product(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: std::iter::Product<Self::Item>,
    {
        consume::product(self)
    }

    /// Left fold starting from `initial`.
    fn reduce<A, F>(self, reducer: F, initial: A) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        consume::reduce(reducer, initial, self)
    }

    /// Sum of all values, seeded from the first one.
    ///
    /// Returns [`SeqError::Empty`] if there is no first value.
    fn sum(self) -> Result<Self::Item, SeqError>
    where
        Self: Sized,
        Self::Item: Add<Output = Self::Item>,
    {
        consume::sum(self)
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

/// `None` behaves as an empty sequence.
///
/// `Option` has inherent `map`, `filter`, `take` and `zip` methods that shadow the
/// [`Sequence`] ones; call them as `Sequence::map(opt, f)` when wrapping an `Option`.
impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self {
            Some(s) => s.pull(),
            None => Pull::Done,
        }
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self {
            Either::Left(l) => l.pull(),
            Either::Right(r) => r.pull(),
        }
    }
}
