//! A module containing [`HashSet`] and associated types.
//!
//! The types here provide owned and borrowed iteration over a set's items. Iterators over the
//! results of set operations are generic over any [`Set`](crate::collections::traits::Set) and
//! live with the trait.
//!
//! As a note, there is no mutable iterator over the items of a set because mutating the items in
//! place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, ReserveError};
