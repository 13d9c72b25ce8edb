#![no_main]

mod arbitrary_ops;

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

use coalesce::{Interval, IntervalSet, List};

use crate::arbitrary_ops::{check_equal, check_merged, Model, Operation, SmallInterval};

#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    initial: Vec<SmallInterval>,
    ops: Vec<Operation>,
    serialized: &'a [u8],
}

fuzz_target!(|input: FuzzInput| {
    let mut list: List<Interval> = input.initial.iter().map(SmallInterval::interval).collect();
    let mut model = Model::from(list.iter().copied().collect::<Vec<_>>());
    check_equal(&list, &model);

    for op in input.ops {
        op.apply(&mut list, &mut model);
        check_equal(&list, &model);
    }

    let before = model.clone();
    coalesce::merge_intervals(&mut list);
    check_merged(&before, &list);

    // Anything that deserializes with validation is a minimal cover.
    if let Ok(set) = IntervalSet::deserialize_from(input.serialized) {
        let reparsed = IntervalSet::from_sorted_intervals(set.iter().copied());
        assert_eq!(reparsed.as_ref(), Ok(&set));
    }
});
