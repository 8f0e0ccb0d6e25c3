//! Intermediate operators
//!
//! Each operator wraps one or two sequences and is itself a lazy [`Sequence`](crate::Sequence).
//! Constructing one never pulls from its inputs.

mod chain;
mod map;
mod take;

// Re-export composition operations
pub use chain::{chain, zip, Chain, Zip};
pub use map::{
    enumerate, filter, flat_map, flatten, map, scan, Enumerate, Filter, FlatMap, Flatten,
    Indexed, Map, Scan,
};
pub use take::{nth, skip, skip_while, take, take_while, Nth, Skip, SkipWhile, Take, TakeWhile};
