use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// An error returned when a hash-based collection fails to reserve space for more elements.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ReserveError {
    /// The requested capacity doesn't fit in a `usize`.
    CapacityOverflow(CapacityOverflow),
    /// The allocator couldn't provide the requested buckets.
    AllocFailed(TryReserveError),
}
