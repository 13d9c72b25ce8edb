#[cfg(test)]
mod test {
    use crate::{coalesce, merge_intervals, Interval, IntervalSet, List};
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    //
    // Tests the properties of the merge in terms of the integer points the
    // intervals cover. Point sets are only built from small intervals, see
    // `Interval::sequence`.
    //

    fn points<'a>(intervals: impl IntoIterator<Item = &'a Interval>) -> BTreeSet<i64> {
        intervals.into_iter().flat_map(|iv| iv.into_iter()).collect()
    }

    /// Number of maximal runs of consecutive points.
    fn runs(points: &BTreeSet<i64>) -> usize {
        let mut count = 0;
        let mut previous = None::<i64>;
        for &point in points {
            if previous.map_or(true, |p| p + 1 != point) {
                count += 1;
            }
            previous = Some(point);
        }
        count
    }

    fn merged(intervals: &[Interval]) -> Vec<Interval> {
        let mut list: List<Interval> = intervals.iter().copied().collect();
        merge_intervals(&mut list);
        list.into_iter().collect()
    }

    // Idempotence:
    // -----------

    proptest! {
        #[test]
        fn merging_twice_changes_nothing(intervals in Interval::sequence(0..80)) {
            let once = merged(&intervals);
            prop_assert_eq!(merged(&once), once);
        }

        #[test]
        fn merging_a_set_changes_nothing(set in IntervalSet::arbitrary()) {
            let mut list = set.clone().into_list();
            merge_intervals(&mut list);
            prop_assert_eq!(list, set.into_list());
        }
    }

    // Order invariant:
    // ---------------

    proptest! {
        #[test]
        fn neighbours_are_apart(list in List::<Interval>::arbitrary()) {
            let mut list = list;
            merge_intervals(&mut list);
            let intervals: Vec<Interval> = list.into_iter().collect();
            for pair in intervals.windows(2) {
                prop_assert!(pair[0].low < pair[1].low);
                // pair[1].low > i64::MIN here, so the subtraction cannot overflow
                prop_assert!(pair[0].high < pair[1].low - 1);
            }
        }
    }

    // Coverage preservation and minimality:
    // ------------------------------------

    proptest! {
        #[test]
        fn covered_points_are_preserved(intervals in Interval::sequence(0..80)) {
            let output = merged(&intervals);
            prop_assert_eq!(points(&output), points(&intervals));
        }

        #[test]
        fn output_is_one_interval_per_run(intervals in Interval::sequence(0..80)) {
            let output = merged(&intervals);
            prop_assert_eq!(output.len(), runs(&points(&intervals)));
        }
    }

    // Order independence:
    // ------------------

    proptest! {
        #[test]
        fn input_order_does_not_matter(
            (original, shuffled) in Interval::sequence(0..80)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(merged(&original), merged(&shuffled));
        }
    }

    // Agreement between the list and the vector flavours:
    // --------------------------------------------------

    proptest! {
        #[test]
        fn list_and_vec_agree(list in List::<Interval>::arbitrary()) {
            let mut vec: Vec<Interval> = list.iter().copied().collect();
            coalesce(&mut vec);

            let mut list = list;
            merge_intervals(&mut list);
            prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), vec);
        }

        #[test]
        fn from_sorted_accepts_merged_output(intervals in Interval::sequence(0..80)) {
            let output = merged(&intervals);
            let set = IntervalSet::from_sorted_intervals(output.iter().copied());
            prop_assert_eq!(set.map(IntervalSet::into_vec), Ok(output));
        }
    }
}
