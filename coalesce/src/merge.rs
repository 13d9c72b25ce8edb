use alloc::vec::Vec;

use crate::{Interval, List};

/// Merges the intervals of `list` in place into the minimum number of
/// intervals covering the same points.
///
/// The list is sorted by [`Interval::compare`], then walked once: every
/// interval that overlaps or touches its retained predecessor
/// (`current.high >= candidate.low - 1`) is absorbed into it and removed from
/// the list. Afterwards the intervals are strictly ascending and any two
/// neighbours are separated by a gap of at least one missing point.
///
/// Every interval must satisfy `low <= high`; malformed intervals do not make
/// the merge panic but the result is then not guaranteed to be minimal. A list
/// with fewer than two intervals is left untouched.
///
/// # Examples
///
/// ```rust
/// use coalesce::{merge_intervals, Interval, List};
///
/// let mut list: List<Interval> =
///     [(1, 2), (4, 5), (3, 3), (8, 9)].into_iter().map(Interval::from).collect();
/// merge_intervals(&mut list);
///
/// let merged: Vec<(i64, i64)> = list.iter().map(|&iv| iv.into()).collect();
/// assert_eq!(merged, vec![(1, 5), (8, 9)]);
/// ```
pub fn merge_intervals(list: &mut List<Interval>) {
    if list.len() < 2 {
        return;
    }

    list.sort_by(Interval::compare, Interval::swap);

    let mut current = match list.head() {
        Some(head) => head,
        None => return,
    };
    let mut candidate = list.next(current);

    while let Some(node) = candidate {
        let next = match (list.get(current), list.get(node)) {
            (Some(&kept), Some(&other)) => {
                if kept.touches(&other) {
                    if other.high > kept.high {
                        if let Some(kept) = list.get_mut(current) {
                            kept.high = other.high;
                        }
                    }
                    list.remove(node);
                    // the new neighbour may touch the extended interval too
                    list.next(current)
                } else {
                    current = node;
                    list.next(node)
                }
            }
            _ => None,
        };
        candidate = next;
    }
}

/// Merges the intervals of `intervals` in place, like [`merge_intervals`]
/// does for a [`List`].
///
/// # Examples
///
/// ```rust
/// use coalesce::{coalesce, Interval};
///
/// let mut intervals: Vec<Interval> =
///     vec![(5, 6).into(), (1, 2).into(), (3, 4).into()];
/// coalesce(&mut intervals);
/// assert_eq!(intervals, vec![Interval::with_bounds(1, 6)]);
/// ```
pub fn coalesce(intervals: &mut Vec<Interval>) {
    if intervals.len() < 2 {
        return;
    }

    intervals.sort_unstable_by(Interval::compare);

    let mut current = 0;
    for candidate in 1..intervals.len() {
        let other = intervals[candidate];
        let kept = &mut intervals[current];
        if kept.touches(&other) {
            if other.high > kept.high {
                kept.high = other.high;
            }
        } else {
            current += 1;
            intervals[current] = other;
        }
    }
    intervals.truncate(current + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn merged_list(input: &[(i64, i64)]) -> Vec<(i64, i64)> {
        let mut list: List<Interval> = input.iter().copied().map(Interval::from).collect();
        merge_intervals(&mut list);
        list.iter().map(|&iv| iv.into()).collect()
    }

    fn merged_vec(input: &[(i64, i64)]) -> Vec<(i64, i64)> {
        let mut intervals: Vec<Interval> = input.iter().copied().map(Interval::from).collect();
        coalesce(&mut intervals);
        intervals.into_iter().map(Into::into).collect()
    }

    #[test]
    fn cascade_reuses_current_node() {
        let mut list: List<Interval> =
            [(1, 2), (3, 4), (5, 6)].into_iter().map(Interval::from).collect();
        let head = list.head().unwrap();
        merge_intervals(&mut list);

        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), Some(head));
        assert_eq!(list.get(head), Some(&Interval::with_bounds(1, 6)));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(merged_list(&[(2, 4), (2, 4), (2, 4)]), vec![(2, 4)]);
        assert_eq!(merged_vec(&[(2, 4), (2, 4), (2, 4)]), vec![(2, 4)]);
    }

    #[test]
    fn same_low_keeps_widest() {
        assert_eq!(merged_list(&[(0, 9), (0, 3)]), vec![(0, 9)]);
        assert_eq!(merged_vec(&[(0, 9), (0, 3)]), vec![(0, 9)]);
    }

    #[test]
    fn subsumed_then_adjacent() {
        let input = [(1, 10), (2, 3), (11, 12), (14, 14)];
        assert_eq!(merged_list(&input), vec![(1, 12), (14, 14)]);
        assert_eq!(merged_vec(&input), vec![(1, 12), (14, 14)]);
    }

    #[test]
    fn extreme_bounds() {
        let input =
            [(i64::MAX, i64::MAX), (i64::MIN, i64::MIN), (i64::MIN + 1, 0), (1, i64::MAX - 1)];
        assert_eq!(merged_list(&input), vec![(i64::MIN, i64::MAX)]);
        assert_eq!(merged_vec(&input), vec![(i64::MIN, i64::MAX)]);
    }

    #[test]
    fn gap_of_one_point_is_kept() {
        let input = [(i64::MIN, i64::MIN), (i64::MIN + 2, i64::MIN + 2)];
        assert_eq!(merged_list(&input), input.to_vec());
        assert_eq!(merged_vec(&input), input.to_vec());
    }

    #[test]
    fn negative_intervals() {
        let input = [(-3, -1), (-10, -6), (0, 2), (-4, -4)];
        assert_eq!(merged_list(&input), vec![(-10, -6), (-4, 2)]);
        assert_eq!(merged_vec(&input), vec![(-10, -6), (-4, 2)]);
    }
}
