//! Building sequences from scratch
//!
//! This module provides the sources a pipeline starts from: generators driven by a step
//! function, closures, and any standard collection or iterator.

mod func;
mod generate;
mod source;

// Re-export building blocks
pub use func::{empty, from_fn, Empty, FromFn};
pub use generate::{generate_sequence, unfold_sequence, Generate, Unfold};
pub use source::{from_iter, IntoSequence, Source};
