//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{IntoSequence, Pull, SeqError, SeqIter, Sequence};

// Sources
pub use crate::build::{empty, from_fn, from_iter, generate_sequence, unfold_sequence};

// Intermediate operators
pub use crate::compose::{
    chain, enumerate, filter, flat_map, flatten, map, nth, scan, skip, skip_while, take,
    take_while, zip, Indexed,
};

// Terminal operators
pub use crate::consume::{
    all, any, collect, count, find, for_each, max, max_by_key, min, min_by_key, partition,
    position, product, reduce, sum, to_vec,
};
