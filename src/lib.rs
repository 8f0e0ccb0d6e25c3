//! # lazyseq: Single-Pass Lazy Sequences
//!
//! Build pipelines over pull-based sequences that produce values on demand and are
//! consumed exactly once.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: a producer whose `pull()` yields the next value or reports `Done`
//! - **[`IntoSequence`]**: turns any iterable collection into a [`Sequence`]
//!
//! ## Key Features
//!
//! - **Lazy**: intermediate operators do no work until the pipeline is pulled
//! - **Short-circuiting**: `any`, `all`, `find` and `position` stop at the deciding value
//!   and leave the rest of the sequence untouched
//! - **Single-pass**: operators take ownership of their input, so a sequence cannot be
//!   consumed from two places
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let evens = generate_sequence(0u32, |n| Some(n + 1))
//!     .filter(|n| n % 2 == 0)
//!     .take(3)
//!     .to_vec();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let (even, odd) = vec![1, 2, 3, 4, 5, 6].into_seq().partition(|x| x % 2 == 0);
//! assert_eq!(even, vec![2, 4, 6]);
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`generate_sequence(seed, f)`](build::generate_sequence) - each value computed from the previous one
//! - [`unfold_sequence(seed, f)`](build::unfold_sequence) - values unfolded from internal state
//! - [`from_iter(iterable)`](build::from_iter) - any collection or iterator
//!
//! **Terminal:**
//! - [`Sequence::to_vec`], [`Sequence::reduce`], [`Sequence::sum`], [`Sequence::partition`]

pub mod build;
pub mod compose;
pub mod consume;
mod error;
mod iter;
pub mod prelude;
mod pull;
mod sequence;

pub use build::IntoSequence;
pub use error::SeqError;
pub use iter::SeqIter;
pub use pull::Pull;
pub use sequence::Sequence;
