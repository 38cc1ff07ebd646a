//! General-purpose collection types.
//!
//! # Purpose
//! A set is one of the simplest collections to describe and one of the more interesting ones to
//! write properly: membership, hashing and collisions, and removal without breaking probe
//! sequences all have to work together.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
