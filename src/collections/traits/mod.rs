//! Traits shared by the collections in this crate.

pub mod set;

#[doc(inline)]
pub use set::Set;
