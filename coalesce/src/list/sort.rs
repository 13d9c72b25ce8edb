use alloc::vec::Vec;
use core::cmp::Ordering;

use super::{Entry, List};

impl<T> List<T> {
    /// Sorts the list in place with the comparator `compare`, exchanging
    /// values with `swap`.
    ///
    /// The sort moves values between nodes rather than relinking the nodes:
    /// after sorting, the `n`th handle in list order still designates the
    /// `n`th node, which now holds the `n`th smallest value. It is not stable
    /// and runs in O(n log n) comparisons with O(n) auxiliary space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalesce::{Interval, List};
    ///
    /// let mut list: List<Interval> =
    ///     [(4, 5), (1, 9), (1, 2)].into_iter().map(Interval::from).collect();
    /// list.sort_by(Interval::compare, Interval::swap);
    ///
    /// let sorted: Vec<(i64, i64)> = list.iter().map(|&iv| iv.into()).collect();
    /// assert_eq!(sorted, vec![(1, 2), (1, 9), (4, 5)]);
    /// ```
    pub fn sort_by<C, S>(&mut self, mut compare: C, mut swap: S)
    where
        C: FnMut(&T, &T) -> Ordering,
        S: FnMut(&mut T, &mut T),
    {
        if self.len < 2 {
            return;
        }

        // positions in list order, mapped to arena slots
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(index) = cursor {
            order.push(index);
            cursor = self.next_index(index);
        }

        let mut heap = Heap { list: self, order: &order, compare: &mut compare, swap: &mut swap };
        heap.sort();
    }

    /// Sorts the list in place by the values' natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp, core::mem::swap);
    }

    /// Returns mutable references to the values of two distinct occupied
    /// slots.
    fn pair_mut(&mut self, a: u32, b: u32) -> Option<(&mut T, &mut T)> {
        let (a, b) = (a as usize, b as usize);
        let (first, second) = match a.cmp(&b) {
            Ordering::Less => {
                let (left, right) = self.slots.split_at_mut(b);
                (&mut left[a], &mut right[0])
            }
            Ordering::Greater => {
                let (left, right) = self.slots.split_at_mut(a);
                (&mut right[0], &mut left[b])
            }
            Ordering::Equal => return None,
        };
        match (&mut first.entry, &mut second.entry) {
            (Entry::Occupied { value: x, .. }, Entry::Occupied { value: y, .. }) => Some((x, y)),
            _ => None,
        }
    }
}

/// Binary max-heap over list positions, ordering payloads through the
/// caller's comparator and moving them through the caller's swap.
struct Heap<'a, T, C, S> {
    list: &'a mut List<T>,
    order: &'a [u32],
    compare: &'a mut C,
    swap: &'a mut S,
}

impl<T, C, S> Heap<'_, T, C, S>
where
    C: FnMut(&T, &T) -> Ordering,
    S: FnMut(&mut T, &mut T),
{
    fn sort(&mut self) {
        let len = self.order.len();
        for root in (0..len / 2).rev() {
            self.sift_down(root, len);
        }
        for end in (1..len).rev() {
            self.exchange(0, end);
            self.sift_down(0, end);
        }
    }

    fn sift_down(&mut self, mut root: usize, end: usize) {
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                break;
            }
            if child + 1 < end && self.is_less(child, child + 1) {
                child += 1;
            }
            if !self.is_less(root, child) {
                break;
            }
            self.exchange(root, child);
            root = child;
        }
    }

    fn is_less(&mut self, a: usize, b: usize) -> bool {
        match (self.list.value_at(self.order[a]), self.list.value_at(self.order[b])) {
            (Some(x), Some(y)) => (self.compare)(x, y) == Ordering::Less,
            _ => false,
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        if let Some((x, y)) = self.list.pair_mut(self.order[a], self.order[b]) {
            (self.swap)(x, y);
        }
    }
}
