/// Result of pulling once from a sequence: either a value, or the signal that the
/// sequence is exhausted.
///
/// `Pull` is the return type of [`Sequence::pull`](crate::Sequence::pull). Once a
/// sequence has returned `Done`, every later pull returns `Done` as well.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Pull;
///
/// let value: Pull<i32> = Pull::Yielded(42);
/// let done: Pull<i32> = Pull::Done;
///
/// assert_eq!(value.map(|x| x * 2), Pull::Yielded(84));
/// assert_eq!(done.yielded_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The sequence produced a value
    Yielded(T),
    /// The sequence is exhausted
    Done,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull produced a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert!(Pull::Yielded(1).is_yielded());
    /// assert!(!Pull::<i32>::Done.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Pull::Yielded(_))
    }

    /// Returns `true` if the sequence reported exhaustion.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    /// Converts from `Pull<T>` to `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Yielded(42).yielded_value(), Some(42));
    /// assert_eq!(Pull::<i32>::Done.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Pull::Yielded(v) => Some(v),
            Pull::Done => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the yielded value.
    ///
    /// `Done` passes through untouched and the function is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Yielded(v) => Pull::Yielded(f(v)),
            Pull::Done => Pull::Done,
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Pull::Yielded(v),
            None => Pull::Done,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    #[inline]
    fn from(value: Pull<T>) -> Self {
        value.yielded_value()
    }
}
