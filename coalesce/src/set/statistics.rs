use core::mem;

use crate::{Interval, IntervalSet};

/// Detailed statistics on the composition of an interval set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct Statistics {
    /// Number of intervals in the set
    pub n_intervals: u64,
    /// Number of intervals covering a single point
    pub n_single_point_intervals: u64,
    /// Number of bytes used by the intervals
    pub n_bytes: u64,
    /// Number of points covered by the longest interval
    pub longest_run: u128,
    /// Maximum value covered by the set
    pub max_value: Option<i64>,
    /// Minimum value covered by the set
    pub min_value: Option<i64>,
    /// Number of points covered by the set
    pub cardinality: u128,
}

impl IntervalSet {
    /// Returns statistics about the composition of an interval set.
    ///
    /// ```
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set: IntervalSet =
    ///     [(1, 3), (2, 5), (9, 9), (20, 29)].into_iter().map(Interval::from).collect();
    /// let statistics = set.statistics();
    ///
    /// assert_eq!(statistics.n_intervals, 3);
    /// assert_eq!(statistics.n_single_point_intervals, 1);
    /// assert_eq!(statistics.longest_run, 10);
    /// assert_eq!(statistics.max_value, Some(29));
    /// assert_eq!(statistics.min_value, Some(1));
    /// assert_eq!(statistics.cardinality, 16);
    /// ```
    pub fn statistics(&self) -> Statistics {
        let mut n_single_point_intervals = 0;
        let mut longest_run: u128 = 0;
        let mut cardinality = 0;

        for interval in self.iter() {
            let run_len = interval.run_len();
            if run_len == 1 {
                n_single_point_intervals += 1;
            }
            longest_run = longest_run.max(run_len);
            cardinality += run_len;
        }

        Statistics {
            n_intervals: self.len() as u64,
            n_single_point_intervals,
            n_bytes: (self.intervals.capacity() * mem::size_of::<Interval>()) as u64,
            longest_run,
            max_value: self.max(),
            min_value: self.min(),
            cardinality,
        }
    }
}
