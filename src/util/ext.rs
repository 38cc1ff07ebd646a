use std::error::Error;

pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`] but with [`unreachable!`] in the none branch. Calling it states
    /// that the invariants of the surrounding collection make None impossible.
    ///
    /// Reaching the panic is a bug in the collection rather than a failure mode for callers, so
    /// there is no panics section.
    #[inline]
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!(),
        }
    }
}

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], except that it panics with the message of the error itself
    /// rather than its debug representation. This is how allocation problems become fatal in the
    /// infallible APIs.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
