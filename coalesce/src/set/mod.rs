mod fmt;
mod proptests;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "std")]
mod serialization;
mod statistics;

// Order of these modules matters as it determines the `impl` blocks order in
// the docs
mod inherent;

use alloc::vec::Vec;

pub use self::statistics::Statistics;

use crate::Interval;

/// A minimal cover of integer points by closed intervals.
///
/// The intervals of an `IntervalSet` are always sorted, well formed, and no
/// two of them overlap or touch. Building a set drops malformed intervals,
/// which cover no point, then merges the rest once with the same rule as
/// [`merge_intervals`](crate::merge_intervals).
///
/// # Examples
///
/// ```rust
/// use coalesce::{Interval, IntervalSet};
///
/// let set: IntervalSet = [(5, 6), (1, 2), (3, 4), (10, 12)]
///     .into_iter()
///     .map(Interval::from)
///     .collect();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.cardinality(), 9);
/// println!("covered points: {}", set.cardinality());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}
