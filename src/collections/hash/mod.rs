//! Hash-based collections.
//!
//! Everything here is backed by the same open-addressing table, which is kept private to the crate.

pub mod set;
pub(crate) mod table;

#[doc(inline)]
pub use set::HashSet;
