//! The open-addressing table that backs the hash-based collections.
//!
//! Nothing here is public: [`HashSet`](super::HashSet) wraps a [`RawTable`] and exposes a safe,
//! set-shaped API over it.

mod iter;
mod raw_table;

pub(crate) use iter::*;
pub(crate) use raw_table::*;
