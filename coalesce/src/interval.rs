use core::cmp::Ordering;
use core::fmt;
use core::ops::RangeInclusive;

use crate::MalformedInterval;

/// A closed integer interval, inclusive of both `low` and `high`.
///
/// The type does not enforce `low <= high`. Every merge routine in this crate
/// assumes it, so intervals built through [`Interval::new`],
/// [`Interval::with_bounds`] or `From<(i64, i64)>` must respect it; use
/// `TryFrom<RangeInclusive<i64>>` for checked construction.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Default, Debug)]
pub struct Interval {
    /// Lowest point covered by the interval.
    pub low: i64,
    /// Highest point covered by the interval.
    pub high: i64,
}

impl Interval {
    /// Creates a zero initialized interval, `[0, 0]`. Set the fields afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::Interval;
    ///
    /// let mut iv = Interval::new();
    /// iv.low = 3;
    /// iv.high = 7;
    /// assert_eq!(iv, Interval::with_bounds(3, 7));
    /// ```
    pub const fn new() -> Interval {
        Interval { low: 0, high: 0 }
    }

    /// Creates the interval `[low, high]` without checking that `low <= high`.
    pub const fn with_bounds(low: i64, high: i64) -> Interval {
        Interval { low, high }
    }

    /// Compares two intervals as integer couples: by `low` first, then by
    /// `high`.
    ///
    /// The merge pass relies on this exact order, it visits intervals by
    /// non decreasing `low` in a single forward scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use coalesce::Interval;
    ///
    /// let a = Interval::with_bounds(1, 5);
    /// let b = Interval::with_bounds(1, 9);
    /// assert_eq!(Interval::compare(&a, &b), Ordering::Less);
    /// assert_eq!(Interval::compare(&b, &a), Ordering::Greater);
    /// assert_eq!(Interval::compare(&a, &a), Ordering::Equal);
    /// ```
    pub fn compare(&self, other: &Interval) -> Ordering {
        if self.low < other.low {
            // self:  [...
            // other:      [...
            Ordering::Less
        } else if self.low > other.low {
            Ordering::Greater
        } else if self.high < other.high {
            // self:  ...]
            // other:      ...]
            Ordering::Less
        } else if self.high > other.high {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Exchanges the bounds of two intervals in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::Interval;
    ///
    /// let mut a = Interval::with_bounds(1, 2);
    /// let mut b = Interval::with_bounds(8, 9);
    /// Interval::swap(&mut a, &mut b);
    /// assert_eq!((a.low, a.high), (8, 9));
    /// assert_eq!((b.low, b.high), (1, 2));
    /// ```
    pub fn swap(&mut self, other: &mut Interval) {
        core::mem::swap(&mut self.low, &mut other.low);
        core::mem::swap(&mut self.high, &mut other.high);
    }

    /// Returns `true` if `low <= high`.
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.high
    }

    /// Returns `true` if this interval covers `value`.
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if every point of `other` is covered by this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Returns `true` if `other`, which must not start before this interval,
    /// overlaps it or starts right after its end.
    ///
    /// This is the merge rule: `self.high >= other.low - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::Interval;
    ///
    /// let a = Interval::with_bounds(1, 2);
    /// assert!(a.touches(&Interval::with_bounds(2, 5)));
    /// assert!(a.touches(&Interval::with_bounds(3, 5)));
    /// assert!(!a.touches(&Interval::with_bounds(4, 5)));
    /// ```
    #[inline]
    pub fn touches(&self, other: &Interval) -> bool {
        // saturating: an interval starting at i64::MIN is touched by anything
        // sorted before it, which can only start at i64::MIN as well
        self.high >= other.low.saturating_sub(1)
    }

    /// Returns the number of integer points covered by this interval.
    ///
    /// The whole `i64` domain holds 2^64 points, hence the `u128`.
    pub fn run_len(&self) -> u128 {
        u128::from(self.high.abs_diff(self.low)) + 1
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Interval {
    /// Builds `[low, high]` from a `(low, high)` couple, unchecked.
    fn from((low, high): (i64, i64)) -> Interval {
        Interval { low, high }
    }
}

impl From<Interval> for (i64, i64) {
    fn from(iv: Interval) -> (i64, i64) {
        (iv.low, iv.high)
    }
}

impl TryFrom<RangeInclusive<i64>> for Interval {
    type Error = MalformedInterval;

    fn try_from(range: RangeInclusive<i64>) -> Result<Interval, MalformedInterval> {
        let (low, high) = range.into_inner();
        if low <= high {
            Ok(Interval { low, high })
        } else {
            Err(MalformedInterval { low, high })
        }
    }
}

impl IntoIterator for Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.low..=self.high
    }
}

impl IntoIterator for &'_ Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.low..=self.high
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
