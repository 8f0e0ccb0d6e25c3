use thiserror::Error;

/// Errors reported by terminal operators that cannot produce a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// The operator needs at least one value to seed its result.
    #[error("{operation} requires at least one value, but the sequence was empty")]
    Empty { operation: &'static str },
}
