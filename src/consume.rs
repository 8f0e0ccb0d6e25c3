//! Functions for driving sequences to a final value.
//!
//! Every function here pulls from its input until the result is known. `all`, `any`,
//! `find` and `position` stop early and borrow the sequence, so the caller can keep
//! whatever was not consumed. The rest take the sequence by value and drain it.

use std::ops::Add;

use crate::{error::SeqError, pull::Pull, Sequence};

/// Hand the whole sequence to a custom collector.
pub fn collect<S, C, F>(collector: F, seq: S) -> C
where
    S: Sequence,
    F: FnOnce(S) -> C,
{
    collector(seq)
}

/// Materialize the remaining values, in pull order.
pub fn to_vec<S>(mut seq: S) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut out = Vec::new();
    while let Pull::Yielded(v) = seq.pull() {
        out.push(v);
    }
    out
}

/// Call `f` on every remaining value.
pub fn for_each<S, F>(mut f: F, mut seq: S)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    while let Pull::Yielded(v) = seq.pull() {
        f(v);
    }
}

/// `true` if every value satisfies `predicate`; `true` for an empty sequence.
///
/// Stops at the first failing value. Later values are left in `seq`.
pub fn all<S, P>(mut predicate: P, seq: &mut S) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Pull::Yielded(v) = seq.pull() {
        if !predicate(&v) {
            tracing::trace!("all short-circuited on a failing value");
            return false;
        }
    }
    true
}

/// `true` if some value satisfies `predicate`; `false` for an empty sequence.
///
/// Stops at the first match. Later values are left in `seq`.
pub fn any<S, P>(mut predicate: P, seq: &mut S) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Pull::Yielded(v) = seq.pull() {
        if predicate(&v) {
            tracing::trace!("any short-circuited on a match");
            return true;
        }
    }
    false
}

/// Number of remaining values.
pub fn count<S>(mut seq: S) -> usize
where
    S: Sequence,
{
    let mut n = 0;
    while seq.pull().is_yielded() {
        n += 1;
    }
    n
}

/// First value satisfying `predicate`, or `None` if the sequence runs out.
pub fn find<S, P>(mut predicate: P, seq: &mut S) -> Option<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Pull::Yielded(v) = seq.pull() {
        if predicate(&v) {
            return Some(v);
        }
    }
    None
}

/// Zero-based index of the first value satisfying `predicate`.
pub fn position<S, P>(mut predicate: P, seq: &mut S) -> Option<usize>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut index = 0;
    while let Pull::Yielded(v) = seq.pull() {
        if predicate(&v) {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// Largest value, or `None` if empty.
///
/// A later value replaces the current maximum only if strictly greater, so the
/// earliest of several equal maxima is returned.
pub fn max<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut best = seq.pull().yielded_value()?;
    while let Pull::Yielded(v) = seq.pull() {
        if v > best {
            best = v;
        }
    }
    Some(best)
}

/// Smallest value, or `None` if empty.
///
/// The earliest of several equal minima is returned.
pub fn min<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut best = seq.pull().yielded_value()?;
    while let Pull::Yielded(v) = seq.pull() {
        if v < best {
            best = v;
        }
    }
    Some(best)
}

/// Value whose key is largest, or `None` if empty.
///
/// Unlike [`max`], a later value with an equal key replaces the current one, so the
/// last of several equal maxima is returned.
pub fn max_by_key<S, K, F>(f: F, seq: S) -> Option<S::Item>
where
    S: Sequence,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    select_by_key(f, seq, |candidate, best| candidate >= best)
}

/// Value whose key is smallest, or `None` if empty.
///
/// The last of several equal minima is returned.
pub fn min_by_key<S, K, F>(f: F, seq: S) -> Option<S::Item>
where
    S: Sequence,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    select_by_key(f, seq, |candidate, best| candidate <= best)
}

fn select_by_key<S, K, F, R>(mut f: F, mut seq: S, replaces: R) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    R: Fn(&K, &K) -> bool,
{
    let first = seq.pull().yielded_value()?;
    let mut best_key = f(&first);
    let mut best = first;
    while let Pull::Yielded(v) = seq.pull() {
        let key = f(&v);
        if replaces(&key, &best_key) {
            best = v;
            best_key = key;
        }
    }
    Some(best)
}

/// Split values into `(matching, not_matching)`, each preserving source order.
pub fn partition<S, P>(mut predicate: P, mut seq: S) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    while let Pull::Yielded(v) = seq.pull() {
        if predicate(&v) {
            matching.push(v);
        } else {
            rest.push(v);
        }
    }
    (matching, rest)
}

/// Product of all values. An empty sequence yields the multiplicative identity.
pub fn product<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: std::iter::Product<S::Item>,
{
    seq.iter().product()
}

/// Strict left fold: `acc = reducer(acc, value)` for each value, starting from `initial`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let total = reduce(|acc, x| acc + x, 0, (1..=6).into_seq());
/// assert_eq!(total, 21);
/// ```
pub fn reduce<S, A, F>(mut reducer: F, initial: A, mut seq: S) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = initial;
    while let Pull::Yielded(v) = seq.pull() {
        acc = reducer(acc, v);
    }
    acc
}

/// Sum of all values, seeded from the first one rather than from zero.
///
/// # Errors
///
/// Returns [`SeqError::Empty`] if the sequence has no values.
pub fn sum<S>(mut seq: S) -> Result<S::Item, SeqError>
where
    S: Sequence,
    S::Item: Add<Output = S::Item>,
{
    let Pull::Yielded(mut total) = seq.pull() else {
        tracing::debug!("sum called on an empty sequence");
        return Err(SeqError::Empty { operation: "sum" });
    };
    while let Pull::Yielded(v) = seq.pull() {
        total = total + v;
    }
    Ok(total)
}
