extern crate coalesce;

use coalesce::{Interval, IntervalSet, List};

#[test]
fn smoke() {
    let mut set = IntervalSet::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.cardinality(), 0);

    set = [(1, 3), (2, 5), (7, 7), (8, 8), (20, 25)].into_iter().map(Interval::from).collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.cardinality(), 5 + 2 + 6);
    assert_eq!(
        set.iter().map(|&iv| iv.into()).collect::<Vec<(i64, i64)>>(),
        vec![(1, 5), (7, 8), (20, 25)]
    );
}

#[test]
fn from_list_merges() {
    let list: List<Interval> = [(5, 6), (1, 2), (3, 4)].into_iter().map(Interval::from).collect();
    let set = IntervalSet::from(list);
    assert_eq!(set.as_slice(), &[Interval::with_bounds(1, 6)]);
}

#[test]
fn whole_domain() {
    let set: IntervalSet = [(i64::MIN, -1), (0, i64::MAX)].into_iter().map(Interval::from).collect();
    assert_eq!(set.len(), 1);
    assert_eq!(set.cardinality(), 1u128 << 64);
    assert_eq!(set.statistics().longest_run, 1u128 << 64);
}

#[test]
fn from_sorted_error_reports_position() {
    let error = IntervalSet::from_sorted_intervals(
        [(0, 1), (5, 6), (8, 9), (9, 12)].into_iter().map(Interval::from),
    )
    .unwrap_err();
    assert_eq!(error.valid_until(), 3);
    assert_eq!(error.to_string(), "intervals form a minimal cover up to the 3th element");
}

#[test]
fn malformed_interval_error() {
    let error = Interval::try_from(4..=1).unwrap_err();
    assert_eq!(error.to_string(), "interval lower bound 4 is greater than upper bound 1");
}
