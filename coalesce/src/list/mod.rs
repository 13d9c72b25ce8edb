mod fmt;
mod iter;
mod sort;

use alloc::vec::Vec;

pub use self::iter::{IntoIter, Iter};

/// A stable handle to a node of a [`List`].
///
/// A handle stays valid until its node is removed. Once removed, the handle is
/// never valid again, even if the underlying slot is reused by a later
/// insertion.
/// A slot is reused at most `u32::MAX` times, then retired for the lifetime of
/// the list.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// An ordered, doubly linked sequence backed by an arena of slots.
///
/// Nodes are addressed by [`NodeId`] handles that survive insertions and
/// removals of other nodes. Removal by handle is O(1). Freed slots are reused.
///
/// # Examples
///
/// ```rust
/// use coalesce::List;
///
/// let mut list = List::new();
/// let a = list.push_back(1);
/// let b = list.push_back(2);
/// let c = list.push_back(3);
///
/// assert_eq!(list.remove(b), Some(2));
/// assert_eq!(list.next(a), Some(c));
/// assert_eq!(list.prev(c), Some(a));
/// assert_eq!(list.get(b), None);
/// ```
pub struct List<T> {
    slots: Vec<Slot<T>>,
    head: Option<u32>,
    tail: Option<u32>,
    free: Option<u32>,
    len: usize,
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied { value: T, prev: Option<u32>, next: Option<u32> },
    Vacant { next_free: Option<u32> },
}

impl<T> Slot<T> {
    #[inline]
    fn value(&self) -> Option<&T> {
        match &self.entry {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.entry {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn links(&self) -> Option<(Option<u32>, Option<u32>)> {
        match self.entry {
            Entry::Occupied { prev, next, .. } => Some((prev, next)),
            Entry::Vacant { .. } => None,
        }
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    pub fn new() -> List<T> {
        List { slots: Vec::new(), head: None, tail: None, free: None, len: 0 }
    }

    /// Creates an empty `List` with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> List<T> {
        List { slots: Vec::with_capacity(capacity), head: None, tail: None, free: None, len: 0 }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots allocated by the arena, used or not.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Removes every node. Every handle handed out so far becomes invalid.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns the handle of the first node.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|index| self.handle(index))
    }

    /// Returns the handle of the last node.
    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|index| self.handle(index))
    }

    /// Returns the successor of `node`, or `None` if `node` is the last node
    /// or is no longer in the list.
    #[inline]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let (_, next) = self.links(node)?;
        next.map(|index| self.handle(index))
    }

    /// Returns the predecessor of `node`, or `None` if `node` is the first
    /// node or is no longer in the list.
    #[inline]
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        let (prev, _) = self.links(node)?;
        prev.map(|index| self.handle(index))
    }

    /// Returns `true` if `node` designates a node currently in the list.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.slot(node).is_some()
    }

    /// Returns a reference to the value held by `node`.
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.slot(node)?.value()
    }

    /// Returns a mutable reference to the value held by `node`.
    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.slot_mut(node)?.value_mut()
    }

    /// Returns a reference to the first value.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.slots[index as usize].value())
    }

    /// Returns a reference to the last value.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|index| self.slots[index as usize].value())
    }

    /// Appends `value` at the end of the list and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena would exceed `u32::MAX` slots.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let index = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.handle(index)
    }

    /// Prepends `value` at the start of the list and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let index = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.set_prev(head, Some(index)),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.handle(index)
    }

    /// Inserts `value` right after `node` and returns the new handle, or gives
    /// `value` back if `node` is no longer in the list.
    pub fn insert_after(&mut self, node: NodeId, value: T) -> Result<NodeId, T> {
        let (_, next) = match self.links(node) {
            Some(links) => links,
            None => return Err(value),
        };
        let index = self.allocate(value, Some(node.index), next);
        self.set_next(node.index, Some(index));
        match next {
            Some(next) => self.set_prev(next, Some(index)),
            None => self.tail = Some(index),
        }
        Ok(self.handle(index))
    }

    /// Removes the first node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Removes the last node and returns its value.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Removes `node` from the list in O(1) and returns its value.
    ///
    /// Only `node` is invalidated, handles to every other node stay valid.
    /// Returns `None` if `node` was already removed.
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        self.slot(node)?;
        self.unlink(node.index)
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    fn handle(&self, index: u32) -> NodeId {
        NodeId { index, generation: self.slots[index as usize].generation }
    }

    #[inline]
    fn slot(&self, node: NodeId) -> Option<&Slot<T>> {
        self.slots
            .get(node.index as usize)
            .filter(|slot| slot.generation == node.generation && slot.value().is_some())
    }

    #[inline]
    fn slot_mut(&mut self, node: NodeId) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(node.index as usize)
            .filter(|slot| slot.generation == node.generation && slot.value().is_some())
    }

    #[inline]
    fn links(&self, node: NodeId) -> Option<(Option<u32>, Option<u32>)> {
        self.slot(node)?.links()
    }

    #[inline]
    fn value_at(&self, index: u32) -> Option<&T> {
        self.slots[index as usize].value()
    }

    #[inline]
    fn next_index(&self, index: u32) -> Option<u32> {
        self.slots[index as usize].links().and_then(|(_, next)| next)
    }

    #[inline]
    fn prev_index(&self, index: u32) -> Option<u32> {
        self.slots[index as usize].links().and_then(|(prev, _)| prev)
    }

    fn set_next(&mut self, index: u32, to: Option<u32>) {
        if let Entry::Occupied { next, .. } = &mut self.slots[index as usize].entry {
            *next = to;
        }
    }

    fn set_prev(&mut self, index: u32, to: Option<u32>) {
        if let Entry::Occupied { prev, .. } = &mut self.slots[index as usize].entry {
            *prev = to;
        }
    }

    fn allocate(&mut self, value: T, prev: Option<u32>, next: Option<u32>) -> u32 {
        self.len += 1;
        let entry = Entry::Occupied { value, prev, next };
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                if let Entry::Vacant { next_free } = slot.entry {
                    self.free = next_free;
                }
                slot.entry = entry;
                index
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("list exceeds u32::MAX nodes");
                self.slots.push(Slot { generation: 0, entry });
                index
            }
        }
    }

    /// Splices the occupied slot at `index` out of the sequence and frees it.
    ///
    /// A slot whose generation is exhausted is retired instead of freed, so
    /// no handle is ever handed out twice.
    fn unlink(&mut self, index: u32) -> Option<T> {
        let slot = &mut self.slots[index as usize];
        let vacant = Entry::Vacant { next_free: None };
        let (value, prev, next) = match core::mem::replace(&mut slot.entry, vacant) {
            Entry::Occupied { value, prev, next } => (value, prev, next),
            entry @ Entry::Vacant { .. } => {
                slot.entry = entry;
                return None;
            }
        };
        // an exhausted slot stays vacant and off the free list
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            slot.entry = Entry::Vacant { next_free: self.free };
            self.free = Some(index);
        }
        self.len -= 1;

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        Some(value)
    }
}

impl<T> Default for List<T> {
    fn default() -> List<T> {
        List::new()
    }
}

impl<T: Clone> Clone for List<T> {
    /// Clones the values in order. Handles of `self` are not valid in the
    /// clone.
    fn clone(&self) -> List<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &List<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}
