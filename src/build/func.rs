use std::marker::PhantomData;

use crate::{pull::Pull, Sequence};

/// Produces values by calling a closure until it returns `None`.
///
/// Created via [`from_fn`]. The closure is dropped after it first returns `None`, so it
/// is never called again.
pub struct FromFn<F>(Option<F>);

/// Create a sequence from a closure.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut counter = from_fn(move || {
///     n += 1;
///     if n <= 2 { Some(n) } else { None }
/// });
/// assert_eq!(counter.pull(), Pull::Yielded(1));
/// assert_eq!(counter.pull(), Pull::Yielded(2));
/// assert_eq!(counter.pull(), Pull::Done);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(Some(f))
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<Self::Item> {
        let Some(f) = self.0.as_mut() else {
            return Pull::Done;
        };
        match f() {
            Some(v) => Pull::Yielded(v),
            None => {
                self.0 = None;
                Pull::Done
            }
        }
    }
}

/// A sequence with no values.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Pull<Self::Item> {
        Pull::Done
    }
}
