use alloc::vec::Vec;
use core::slice;

use crate::{coalesce, merge_intervals, Interval, IntervalSet, List, NonMinimalIntervals};

impl IntervalSet {
    /// Creates an empty `IntervalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::IntervalSet;
    /// let set = IntervalSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> IntervalSet {
        IntervalSet { intervals: Vec::new() }
    }

    /// Creates a set from intervals that already form a minimal cover:
    /// well formed, ascending, with at least one missing point between any two
    /// neighbours.
    ///
    /// Returns an error carrying the number of valid leading intervals if the
    /// input is not minimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set = IntervalSet::from_sorted_intervals([(1, 2), (4, 8)].map(Interval::from));
    /// assert!(set.is_ok());
    ///
    /// let error = IntervalSet::from_sorted_intervals([(1, 2), (3, 8)].map(Interval::from));
    /// assert_eq!(error.unwrap_err().valid_until(), 1);
    /// ```
    pub fn from_sorted_intervals<I>(iterator: I) -> Result<IntervalSet, NonMinimalIntervals>
    where
        I: IntoIterator<Item = Interval>,
    {
        let iterator = iterator.into_iter();
        let mut intervals: Vec<Interval> = Vec::with_capacity(iterator.size_hint().0);
        for interval in iterator {
            let valid = interval.is_well_formed()
                && intervals
                    .last()
                    .map_or(true, |last| last < &interval && !last.touches(&interval));
            if !valid {
                return Err(NonMinimalIntervals { valid_until: intervals.len() as u64 });
            }
            intervals.push(interval);
        }
        Ok(IntervalSet { intervals })
    }

    #[cfg(feature = "std")]
    pub(crate) fn from_vec_unchecked(intervals: Vec<Interval>) -> IntervalSet {
        IntervalSet { intervals }
    }

    /// Returns the number of intervals in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, IntervalSet};
    ///
    /// let set: IntervalSet = [(1, 3), (2, 5), (9, 9)].into_iter().map(Interval::from).collect();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set covers no point.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the number of integer points covered by the set.
    pub fn cardinality(&self) -> u128 {
        self.intervals.iter().map(Interval::run_len).sum()
    }

    /// Returns the smallest covered point.
    pub fn min(&self) -> Option<i64> {
        self.intervals.first().map(|iv| iv.low)
    }

    /// Returns the largest covered point.
    pub fn max(&self) -> Option<i64> {
        self.intervals.last().map(|iv| iv.high)
    }

    /// Returns an iterator over the intervals, in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Returns the intervals as a slice, in ascending order.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Consumes the set and returns its intervals.
    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    /// Consumes the set and returns its intervals as a [`List`].
    pub fn into_list(self) -> List<Interval> {
        self.intervals.into_iter().collect()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iterator: I) -> IntervalSet {
        IntervalSet::from(iterator.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> FromIterator<&'a Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = &'a Interval>>(iterator: I) -> IntervalSet {
        iterator.into_iter().copied().collect()
    }
}

/// Malformed intervals (`low > high`) cover no point and are dropped before
/// the merge.
impl From<Vec<Interval>> for IntervalSet {
    fn from(mut intervals: Vec<Interval>) -> IntervalSet {
        intervals.retain(Interval::is_well_formed);
        coalesce(&mut intervals);
        IntervalSet { intervals }
    }
}

/// Malformed intervals (`low > high`) cover no point and are dropped before
/// the merge.
impl From<List<Interval>> for IntervalSet {
    fn from(mut list: List<Interval>) -> IntervalSet {
        let mut cursor = list.head();
        while let Some(node) = cursor {
            cursor = list.next(node);
            if list.get(node).map_or(false, |iv| !iv.is_well_formed()) {
                list.remove(node);
            }
        }
        merge_intervals(&mut list);
        IntervalSet { intervals: list.into_iter().collect() }
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Vec<Interval> {
        set.intervals
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> slice::Iter<'a, Interval> {
        self.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = alloc::vec::IntoIter<Interval>;

    fn into_iter(self) -> alloc::vec::IntoIter<Interval> {
        self.intervals.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Interval, IntervalSet, List};
    use alloc::vec;
    use alloc::vec::Vec;

    fn set_of(pairs: &[(i64, i64)]) -> IntervalSet {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn from_list_and_vec_agree() {
        let pairs = [(7, 9), (-2, 0), (1, 1), (12, 15), (14, 20)];
        let list: List<Interval> = pairs.iter().copied().map(Interval::from).collect();
        let vec: Vec<Interval> = pairs.iter().copied().map(Interval::from).collect();
        assert_eq!(IntervalSet::from(list), IntervalSet::from(vec));
    }

    #[test]
    fn from_sorted_rejects_overlap_touch_and_disorder() {
        let ok = [(1, 2), (4, 8)].map(Interval::from);
        assert_eq!(IntervalSet::from_sorted_intervals(ok).unwrap().len(), 2);

        let touching = [(1, 2), (4, 8), (9, 10)].map(Interval::from);
        assert_eq!(IntervalSet::from_sorted_intervals(touching).unwrap_err().valid_until(), 2);

        let unordered = [(4, 8), (1, 2)].map(Interval::from);
        assert_eq!(IntervalSet::from_sorted_intervals(unordered).unwrap_err().valid_until(), 1);

        let malformed = [(3, 1)].map(Interval::from);
        assert_eq!(IntervalSet::from_sorted_intervals(malformed).unwrap_err().valid_until(), 0);
    }

    #[test]
    fn bounds_and_cardinality() {
        let set = set_of(&[(10, 19), (-5, -1), (0, 0), (30, 30)]);
        assert_eq!(
            set.as_slice(),
            &[
                Interval::with_bounds(-5, 0),
                Interval::with_bounds(10, 19),
                Interval::with_bounds(30, 30),
            ]
        );
        assert_eq!(set.min(), Some(-5));
        assert_eq!(set.max(), Some(30));
        assert_eq!(set.cardinality(), 17);

        let empty = IntervalSet::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
        assert_eq!(empty.cardinality(), 0);
    }

    #[test]
    fn malformed_intervals_are_dropped() {
        let pairs = [(5, 1), (2, 3), (9, -9), (4, 4)];
        let expected = [Interval::with_bounds(2, 4)];

        let from_vec = set_of(&pairs);
        assert_eq!(from_vec.as_slice(), &expected);
        assert_eq!(from_vec.cardinality(), 3);

        let list: List<Interval> = pairs.iter().copied().map(Interval::from).collect();
        let from_list = IntervalSet::from(list);
        assert_eq!(from_list, from_vec);
        assert_eq!(from_list.statistics().cardinality, 3);

        assert!(set_of(&[(5, 1)]).is_empty());
    }

    #[test]
    fn into_list_keeps_order() {
        let set = set_of(&[(8, 9), (1, 2)]);
        let list = set.clone().into_list();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), set.into_vec());
    }

    #[test]
    fn iterates_by_ref_and_value() {
        let set = set_of(&[(1, 2), (5, 6)]);
        let lows: Vec<i64> = (&set).into_iter().map(|iv| iv.low).collect();
        assert_eq!(lows, vec![1, 5]);
        let highs: Vec<i64> = set.into_iter().map(|iv| iv.high).collect();
        assert_eq!(highs, vec![2, 6]);
    }
}
