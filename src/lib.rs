//! This crate is my take on a hash set: a collection of unique items supporting the usual set
//! operations, written from the bucket array up.
//!
//! # Purpose
//! Like most collections, a set is easy to use and easy to take for granted. Writing one properly
//! means dealing with hashing, collisions, growth and removal without breaking probe sequences,
//! which is the point of the exercise. The result is intended to be usable, not just a toy.
//!
//! # Overview
//! - [`HashSet`](collections::hash::HashSet): a mutable set of `T: Hash + Eq`, generic over its
//!   [`BuildHasher`](std::hash::BuildHasher).
//! - [`Set`](collections::traits::Set): the trait that provides union, intersection, difference,
//!   symmetric difference and the subset tests, as lazy iterators over any implementor.
//!
//! ```
//! use sets::collections::hash::HashSet;
//! use sets::collections::traits::Set;
//!
//! let a = HashSet::<i32>::from([1, 2, 3]);
//! let b = HashSet::<i32>::from([2, 3, 4]);
//!
//! assert_eq!(&a | &b, HashSet::from([1, 2, 3, 4]));
//! assert_eq!(&a & &b, HashSet::from([2, 3]));
//! assert_eq!(&a - &b, HashSet::from([1]));
//! assert!(!a.is_subset(&b));
//! ```
//!
//! Iteration order is never specified. The default hasher is randomly seeded, so the order of
//! [`iter`](collections::hash::HashSet::iter) or [`to_vec`](collections::hash::HashSet::to_vec)
//! changes between runs.
//!
//! # Error Handling
//! Set operations can't fail, so none of them return a [`Result`]. The only thing that can go wrong
//! is running out of memory (or overflowing the capacity) while growing. In the normal API that is
//! fatal and panics, the same way it does for the standard library's collections. Where a caller
//! wants to handle it, [`try_reserve`](collections::hash::HashSet::try_reserve) returns a strongly
//! typed [`ReserveError`](collections::hash::set::ReserveError) instead.
//!
//! # Concurrency
//! There is no internal synchronization. Every mutating method takes `&mut self`, so sharing a set
//! between threads requires the caller's own locking.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error types, because they remove the need for
//! some very repetitive programming.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![forbid(unsafe_code)]

pub mod collections;

pub(crate) mod util;
