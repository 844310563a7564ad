//! This crate provides [`OrderedSet`], a Data Structure for storing a
//! set of real numbers as a strictly ascending sequence, along with the
//! classical set algebra operations between two such sets.
//!
//! ## Example
//!
//! ```rust
//! use ordset::{NotFoundError, OrderedSet};
//!
//! let mut a = OrderedSet::new();
//! a.insert(2.0);
//! a.insert(1.0);
//! a.insert(3.0);
//!
//! let b = OrderedSet::from_slice([3.0, 4.0]);
//!
//! assert_eq!(a.search(2.0), true);
//! assert_eq!(a.search(10.0), false);
//!
//! assert_eq!(a.union(&b).to_string(), "{ 1 2 3 4 }");
//! assert_eq!(a.intersection(&b).to_string(), "{ 3 }");
//! assert_eq!(a.difference(&b).to_string(), "{ 1 2 }");
//! assert_eq!(a.symmetric_difference(&b).to_string(), "{ 1 2 4 }");
//! assert_eq!(a.is_subset(&b), false);
//!
//! assert_eq!(a.delete(10.0), Err(NotFoundError { value: 10.0 }));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Ordering
//!
//! Every point in an [`OrderedSet`] is strictly greater than the one
//! before it, so a set never holds two equal points. Every method that
//! adds points keeps this true before it returns.
//!
//! ### Merge Walks
//!
//! Because both sets in a binary operation are already sorted, every
//! binary operation is a single forward walk over both sets at the same
//! time, with one cursor per set. At each step the smaller of the two
//! current points is looked at and its cursor moves on, or both cursors
//! move on if the points are equal. This gives `O(n + m)` operations
//! which never need to re-sort their output.
//!
//! | operation                | `a < b`           | `a > b`           | `a == b`       |
//! | ------------------------ | ----------------- | ----------------- | -------------- |
//! | `union`                  | keep `a`          | keep `b`          | keep once      |
//! | `intersection`           | skip `a`          | skip `b`          | keep once      |
//! | `difference`             | keep `a`          | skip `b`          | skip both      |
//! | `symmetric_difference`   | keep `a`          | keep `b`          | skip both      |
//! | `is_subset`              | `false`           | skip `b`          | next `a`       |
//!
//! ### Linear Scans
//!
//! Single point operations scan from the smallest point upwards and stop
//! as soon as they pass the point they are looking for. This crate does
//! not try to be a search tree, if you need `O(log n)` operations look at
//! one of the crates below.
//!
//! ### NaN
//!
//! `NaN` is not equal to anything, not even itself, and is neither less
//! than nor greater than any other number, so it has no place in an
//! ascending sequence. Adding `NaN` to an [`OrderedSet`] with
//! [`OrderedSet::insert()`] (or anything built on top of it) panics.
//! Searching for or deleting `NaN` simply never finds it.
//!
//! `0.0` and `-0.0` are equal, so only the first of the two to be inserted
//! is kept.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`OrderedSet`].
//! - `workload`: the [`workload`] module, for timing searches and unions
//!   on seeded random sets.
//! - `cli`: the `ordset` demo binary.
//!
//! # Similar Crates
//!
//! - <https://doc.rust-lang.org/std/collections/struct.BTreeSet.html>
//!   Balanced tree set from the standard library, needs [`Ord`] so can't
//!   store `f64` directly.
//! - <https://docs.rs/sorted-vec>
//!   Sorted `Vec` wrappers using binary search.
//! - <https://docs.rs/ordered-float>
//!   Wrappers making floats [`Ord`] so they can go in a `BTreeSet`.

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;
#[cfg(any(test, feature = "workload"))]
extern crate std;

pub(crate) mod utils;

pub mod ordered_set;
#[cfg(feature = "workload")]
pub mod workload;

pub use crate::ordered_set::{NotFoundError, OrderedSet};
