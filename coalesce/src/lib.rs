//! Coalescing of closed integer intervals.
//!
//! Given an unordered collection of closed intervals `[low, high]`, this crate
//! reduces it to the minimal set of disjoint, non-adjacent intervals covering
//! exactly the same integer points. Two intervals are merged when they overlap
//! *or* touch: `[1, 2]` and `[3, 4]` become `[1, 4]`, while `[1, 2]` and
//! `[4, 5]` stay apart.
//!
//! The merge works in place on a [`List`], an arena backed doubly linked list
//! with stable node handles, or on a plain `Vec` through [`coalesce`].
//! [`IntervalSet`] wraps an already minimal cover and adds formatting,
//! statistics and serialization.
//!
//! # Examples
//!
//! ```rust
//! use coalesce::{merge_intervals, Interval, List};
//!
//! let mut list: List<Interval> =
//!     [(5, 6), (1, 2), (3, 4), (10, 12)].into_iter().map(Interval::from).collect();
//! merge_intervals(&mut list);
//!
//! let merged: Vec<(i64, i64)> = list.iter().map(|iv| (iv.low, iv.high)).collect();
//! assert_eq!(merged, vec![(1, 6), (10, 12)]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(variant_size_differences)]
#![allow(unknown_lints)] // For clippy

#[cfg(feature = "std")]
extern crate byteorder;

extern crate alloc;

use core::fmt;

mod interval;
mod list;
mod merge;
mod set;

pub use interval::Interval;
pub use list::{IntoIter, Iter, List, NodeId};
pub use merge::{coalesce, merge_intervals};
pub use set::{IntervalSet, Statistics};

/// An error type that is returned when an interval is built from bounds whose
/// `low` is greater than its `high`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MalformedInterval {
    low: i64,
    high: i64,
}

impl MalformedInterval {
    /// Returns the rejected lower bound.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the rejected upper bound.
    pub fn high(&self) -> i64 {
        self.high
    }
}

impl fmt::Display for MalformedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interval lower bound {} is greater than upper bound {}", self.low, self.high)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedInterval {}

/// An error type that is returned when a sequence of intervals is not already
/// a minimal cover: ascending, well formed, and with no two intervals
/// overlapping or touching.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NonMinimalIntervals {
    valid_until: u64,
}

impl NonMinimalIntervals {
    /// Returns the number of leading intervals that were valid.
    pub fn valid_until(&self) -> u64 {
        self.valid_until
    }
}

impl fmt::Display for NonMinimalIntervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "intervals form a minimal cover up to the {}th element", self.valid_until)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NonMinimalIntervals {}
