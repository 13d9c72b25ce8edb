use std::collections::BTreeSet;

use coalesce::{Interval, List, NodeId};
use libfuzzer_sys::arbitrary::{self, Arbitrary, Unstructured};

/// Intervals small enough to be checked point by point.
#[derive(Clone, Copy, Debug)]
pub struct SmallInterval {
    low: i16,
    width: u8,
}

impl SmallInterval {
    pub fn interval(&self) -> Interval {
        let low = i64::from(self.low);
        Interval::with_bounds(low, low + i64::from(self.width % 32))
    }
}

impl<'a> Arbitrary<'a> for SmallInterval {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(SmallInterval { low: u.arbitrary()?, width: u.arbitrary()? })
    }
}

#[derive(Arbitrary, Debug)]
pub enum Operation {
    PushBack(SmallInterval),
    PushFront(SmallInterval),
    PopBack,
    PopFront,
    InsertAfter(u8, SmallInterval),
    Remove(u8),
    RemoveStale(u8),
    Sort,
}

/// The reference model: a plain vector kept in list order.
pub type Model = Vec<Interval>;

fn nth_node(list: &List<Interval>, n: u8) -> Option<NodeId> {
    if list.is_empty() {
        return None;
    }
    let n = usize::from(n) % list.len();
    let mut node = list.head();
    for _ in 0..n {
        node = node.and_then(|id| list.next(id));
    }
    node
}

impl Operation {
    pub fn apply(&self, list: &mut List<Interval>, model: &mut Model) {
        match *self {
            Operation::PushBack(iv) => {
                list.push_back(iv.interval());
                model.push(iv.interval());
            }
            Operation::PushFront(iv) => {
                list.push_front(iv.interval());
                model.insert(0, iv.interval());
            }
            Operation::PopBack => {
                assert_eq!(list.pop_back(), model.pop());
            }
            Operation::PopFront => {
                let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                assert_eq!(list.pop_front(), expected);
            }
            Operation::InsertAfter(n, iv) => {
                if let Some(node) = nth_node(list, n) {
                    let index = usize::from(n) % model.len();
                    let id = list.insert_after(node, iv.interval()).unwrap();
                    assert_eq!(list.prev(id), Some(node));
                    model.insert(index + 1, iv.interval());
                }
            }
            Operation::Remove(n) => {
                if let Some(node) = nth_node(list, n) {
                    let index = usize::from(n) % model.len();
                    assert_eq!(list.remove(node), Some(model.remove(index)));
                }
            }
            Operation::RemoveStale(n) => {
                if let Some(node) = nth_node(list, n) {
                    let index = usize::from(n) % model.len();
                    assert_eq!(list.remove(node), Some(model.remove(index)));
                    assert_eq!(list.remove(node), None);
                    assert!(!list.contains_node(node));
                }
            }
            Operation::Sort => {
                list.sort_by(Interval::compare, Interval::swap);
                model.sort_unstable();
            }
        }
    }
}

pub fn check_equal(list: &List<Interval>, model: &Model) {
    assert_eq!(list.len(), model.len());
    assert!(list.iter().eq(model.iter()));
    assert!(list.iter().rev().eq(model.iter().rev()));
}

fn points<'a>(intervals: impl IntoIterator<Item = &'a Interval>) -> BTreeSet<i64> {
    intervals.into_iter().flat_map(|iv| iv.into_iter()).collect()
}

pub fn check_merged(before: &Model, merged: &List<Interval>) {
    let merged: Vec<Interval> = merged.iter().copied().collect();
    assert_eq!(points(before), points(&merged));
    for pair in merged.windows(2) {
        assert!(pair[0].high + 1 < pair[1].low, "{} and {} touch", pair[0], pair[1]);
    }
}
