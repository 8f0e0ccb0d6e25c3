//! Value-transforming operators.
//!
//! This module provides [`Map`], [`Filter`], [`Enumerate`], [`Scan`], [`FlatMap`] and
//! [`Flatten`]. Each one pulls from its source only when it is pulled itself.

use crate::{pull::Pull, Sequence};

/// Applies a function to every value of the wrapped sequence.
pub struct Map<S, F> {
    f: F,
    source: S,
}

/// Create a sequence that yields `f(value)` for each source value.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let squares = map(|x: i32| x * x, vec![1, 2, 3].into_seq());
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// ```
pub fn map<S, U, F>(f: F, source: S) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    Map { f, source }
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Pull<U> {
        self.source.pull().map(&mut self.f)
    }
}

/// Keeps only the values that satisfy a predicate.
pub struct Filter<S, P> {
    predicate: P,
    source: S,
}

/// Create a sequence that skips values failing `predicate`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let evens = filter(|x: &i32| x % 2 == 0, vec![1, 2, 3, 4].into_seq());
/// assert_eq!(evens.to_vec(), vec![2, 4]);
/// ```
pub fn filter<S, P>(predicate: P, source: S) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { predicate, source }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            match self.source.pull() {
                Pull::Yielded(v) if (self.predicate)(&v) => return Pull::Yielded(v),
                Pull::Yielded(_) => continue,
                Pull::Done => return Pull::Done,
            }
        }
    }
}

/// A value paired with its position in the output of [`enumerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexed<T> {
    pub count: usize,
    pub value: T,
}

/// Pairs each value with a running count.
pub struct Enumerate<S> {
    source: S,
    count: usize,
}

/// Create a sequence of [`Indexed`] values, counting from zero.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut seq = enumerate(vec!['a', 'b'].into_seq());
/// assert_eq!(seq.pull(), Pull::Yielded(Indexed { count: 0, value: 'a' }));
/// assert_eq!(seq.pull(), Pull::Yielded(Indexed { count: 1, value: 'b' }));
/// assert_eq!(seq.pull(), Pull::Done);
/// ```
pub fn enumerate<S>(source: S) -> Enumerate<S>
where
    S: Sequence,
{
    Enumerate { source, count: 0 }
}

impl<S> Sequence for Enumerate<S>
where
    S: Sequence,
{
    type Item = Indexed<S::Item>;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self.source.pull() {
            Pull::Yielded(value) => {
                let count = self.count;
                self.count += 1;
                Pull::Yielded(Indexed { count, value })
            }
            Pull::Done => Pull::Done,
        }
    }
}

/// Yields the running accumulator of a left fold.
pub struct Scan<S, A, F> {
    source: S,
    state: A,
    reducer: F,
}

/// Create a sequence of accumulator states.
///
/// For each source value, computes `reducer(&state, value)`, stores it as the new state
/// and yields it. The seed is never yielded.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let running = scan(|acc: &i32, x: i32| acc + x, 0, vec![1, 2, 3].into_seq());
/// assert_eq!(running.to_vec(), vec![1, 3, 6]);
/// ```
pub fn scan<S, A, F>(reducer: F, seed: A, source: S) -> Scan<S, A, F>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    Scan {
        source,
        state: seed,
        reducer,
    }
}

impl<S, A, F> Sequence for Scan<S, A, F>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    type Item = A;

    fn pull(&mut self) -> Pull<A> {
        match self.source.pull() {
            Pull::Yielded(v) => {
                let next = (self.reducer)(&self.state, v);
                self.state = next.clone();
                Pull::Yielded(next)
            }
            Pull::Done => Pull::Done,
        }
    }
}

/// Expands each value into an inner sequence and yields its elements.
pub struct FlatMap<S, F, U> {
    source: S,
    f: F,
    inner: Option<U>,
}

/// Sequence of nested sequences, flattened in order.
///
/// Created via [`flatten`]; a [`FlatMap`] whose expansion is the identity.
pub type Flatten<S> =
    FlatMap<S, fn(<S as Sequence>::Item) -> <S as Sequence>::Item, <S as Sequence>::Item>;

/// Create a sequence that yields every element of `f(value)` for each source value.
///
/// The inner sequence is drained before the outer source is pulled again.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let chars = flat_map(|w: &'static str| w.chars().into_seq(), vec!["hi", "bye"].into_seq());
/// assert_eq!(chars.to_vec(), vec!['h', 'i', 'b', 'y', 'e']);
/// ```
pub fn flat_map<S, U, F>(f: F, source: S) -> FlatMap<S, F, U>
where
    S: Sequence,
    U: Sequence,
    F: FnMut(S::Item) -> U,
{
    FlatMap {
        source,
        f,
        inner: None,
    }
}

/// Create a sequence that yields the elements of each nested sequence in order.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let nested = vec![vec![1].into_seq(), vec![2, 3].into_seq()].into_seq();
/// assert_eq!(flatten(nested).to_vec(), vec![1, 2, 3]);
/// ```
pub fn flatten<S>(source: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    flat_map(std::convert::identity as fn(S::Item) -> S::Item, source)
}

impl<S, U, F> Sequence for FlatMap<S, F, U>
where
    S: Sequence,
    U: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.pull() {
                    Pull::Yielded(v) => return Pull::Yielded(v),
                    Pull::Done => self.inner = None,
                }
            }
            match self.source.pull() {
                Pull::Yielded(outer) => self.inner = Some((self.f)(outer)),
                Pull::Done => return Pull::Done,
            }
        }
    }
}
