//! Generators driven by a step function.
//!
//! Both generators start from a seed that is never yielded itself, and stop the first
//! time their step function returns `None`.

use crate::{pull::Pull, Sequence};

/// Yields `f(&seed)`, then `f(&previous)` for each following value.
///
/// Created via [`generate_sequence`].
pub struct Generate<T, F> {
    current: Option<T>,
    f: F,
}

/// Create a sequence where each value is computed from the previous one.
///
/// The seed only feeds the first call to `next_fn`; it is not part of the output. The
/// sequence ends the first time `next_fn` returns `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = generate_sequence(0, |n: &u32| if *n < 5 { Some(n + 1) } else { None });
/// assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn generate_sequence<T, F>(seed: T, next_fn: F) -> Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    Generate {
        current: Some(seed),
        f: next_fn,
    }
}

impl<T, F> Sequence for Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<Self::Item> {
        let Some(current) = self.current.as_ref() else {
            return Pull::Done;
        };
        match (self.f)(current) {
            Some(next) => {
                self.current = Some(next.clone());
                Pull::Yielded(next)
            }
            None => {
                tracing::trace!("generate_sequence step function signalled termination");
                self.current = None;
                Pull::Done
            }
        }
    }
}

/// Yields the first half of each `(value, next_state)` pair produced by a step function.
///
/// Created via [`unfold_sequence`].
pub struct Unfold<S, F> {
    state: Option<S>,
    f: F,
}

/// Create a sequence by unfolding internal state.
///
/// `gen_fn` maps the current state to `Some((value, next_state))`, or `None` to end the
/// sequence. The emitted values may have a different type than the state.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let labels = unfold_sequence(1u32, |n| (n <= 3).then(|| (format!("#{n}"), n + 1)));
/// assert_eq!(labels.to_vec(), vec!["#1", "#2", "#3"]);
/// ```
pub fn unfold_sequence<S, A, F>(seed: S, gen_fn: F) -> Unfold<S, F>
where
    F: FnMut(S) -> Option<(A, S)>,
{
    Unfold {
        state: Some(seed),
        f: gen_fn,
    }
}

impl<S, A, F> Sequence for Unfold<S, F>
where
    F: FnMut(S) -> Option<(A, S)>,
{
    type Item = A;

    fn pull(&mut self) -> Pull<Self::Item> {
        let Some(state) = self.state.take() else {
            return Pull::Done;
        };
        match (self.f)(state) {
            Some((value, next)) => {
                self.state = Some(next);
                Pull::Yielded(value)
            }
            None => {
                tracing::trace!("unfold_sequence step function signalled termination");
                Pull::Done
            }
        }
    }
}
