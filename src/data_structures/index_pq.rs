use std::fmt::Debug;

use crate::{Error, Result};

/// Which end of the key order sits at the top of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest key on top
    Min,
    /// Largest key on top
    Max,
}

/// A binary-heap priority queue whose elements are stable integer indices
/// in `[0, capacity)`, each carrying one key.
///
/// Besides the usual push/pop it can change the key of a queued index and
/// remove an arbitrary index in O(log n), which is what Dijkstra and eager
/// Prim rely on. `contains` and `key_of` are O(1).
///
/// `heap[1..=len]` holds indices in heap order (`heap[0]` is unused) and
/// `position[i]` is the slot of index `i` in `heap`, so the two are inverse
/// maps for every queued index.
#[derive(Debug, Clone)]
pub struct IndexPriorityQueue<K>
where
    K: PartialOrd + Copy + Debug,
{
    order: HeapOrder,
    capacity: usize,
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K> IndexPriorityQueue<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue for indices in `[0, capacity)`
    pub fn new(capacity: usize, order: HeapOrder) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(usize::MAX);
        IndexPriorityQueue {
            order,
            capacity,
            heap,
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    /// Creates an empty min-oriented queue
    pub fn min(capacity: usize) -> Self {
        Self::new(capacity, HeapOrder::Min)
    }

    /// Creates an empty max-oriented queue
    pub fn max(capacity: usize) -> Self {
        Self::new(capacity, HeapOrder::Max)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of queued indices
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `index` is currently queued
    pub fn contains(&self, index: usize) -> Result<bool> {
        self.validate(index)?;
        Ok(self.position[index].is_some())
    }

    /// Queues `index` with the given key
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        if self.contains(index)? {
            return Err(Error::DuplicateIndex(index));
        }

        self.heap.push(index);
        let slot = self.len();
        self.position[index] = Some(slot);
        self.keys[index] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Returns the key associated with a queued index
    pub fn key_of(&self, index: usize) -> Result<K> {
        self.validate(index)?;
        self.keys[index].ok_or(Error::MissingIndex(index))
    }

    /// Replaces the key of a queued index, in whichever direction
    pub fn change_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.slot_of(index)?;
        self.keys[index] = Some(key);
        self.restore(slot);
        Ok(())
    }

    /// Lowers the key of a queued index; the new key must be strictly smaller
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        let current = self.key_of(index)?;
        if !(key < current) {
            return Err(Error::KeyOrder { index });
        }
        self.change_key(index, key)
    }

    /// Raises the key of a queued index; the new key must be strictly larger
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<()> {
        let current = self.key_of(index)?;
        if !(key > current) {
            return Err(Error::KeyOrder { index });
        }
        self.change_key(index, key)
    }

    /// Returns the index on top of the heap without removing it
    pub fn peek_index(&self) -> Option<usize> {
        self.heap.get(1).copied()
    }

    /// Returns the key on top of the heap without removing it
    pub fn peek_key(&self) -> Option<K> {
        self.peek_index().and_then(|index| self.keys[index])
    }

    /// Returns the top `(index, key)` pair without removing it
    pub fn peek(&self) -> Option<(usize, K)> {
        let index = self.peek_index()?;
        self.keys[index].map(|key| (index, key))
    }

    /// Removes the top index and returns it with its key
    pub fn pop(&mut self) -> Option<(usize, K)> {
        let top = self.peek_index()?;
        let last = self.len();
        self.swap(1, last);
        self.heap.pop();
        self.sink(1);

        self.position[top] = None;
        self.keys[top].take().map(|key| (top, key))
    }

    /// Removes an arbitrary queued index and returns its key
    pub fn remove(&mut self, index: usize) -> Result<K> {
        let slot = self.slot_of(index)?;
        let last = self.len();
        self.swap(slot, last);
        self.heap.pop();

        // The element moved into `slot` may belong above or below it.
        if slot <= self.len() {
            self.restore(slot);
        }

        self.position[index] = None;
        self.keys[index].take().ok_or(Error::MissingIndex(index))
    }

    /// Iterates over the queued `(index, key)` pairs in heap order without
    /// modifying this queue
    pub fn iter(&self) -> impl Iterator<Item = (usize, K)> {
        let mut copy = self.clone();
        std::iter::from_fn(move || copy.pop())
    }

    fn validate(&self, index: usize) -> Result<()> {
        if index < self.capacity {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, capacity: self.capacity })
        }
    }

    fn slot_of(&self, index: usize) -> Result<usize> {
        self.validate(index)?;
        self.position[index].ok_or(Error::MissingIndex(index))
    }

    /// True if the element in slot `i` belongs above the element in slot `j`
    fn outranks(&self, i: usize, j: usize) -> bool {
        match (self.keys[self.heap[i]], self.keys[self.heap[j]]) {
            (Some(a), Some(b)) => match self.order {
                HeapOrder::Min => a < b,
                HeapOrder::Max => a > b,
            },
            _ => false,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }

    fn restore(&mut self, slot: usize) {
        let slot = self.swim(slot);
        self.sink(slot);
    }

    /// Moves the element in `slot` up until its parent outranks it; returns
    /// its final slot
    fn swim(&mut self, mut slot: usize) -> usize {
        while slot > 1 && self.outranks(slot, slot / 2) {
            self.swap(slot, slot / 2);
            slot /= 2;
        }
        slot
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.len();
        while 2 * slot <= len {
            let mut child = 2 * slot;
            if child < len && self.outranks(child + 1, child) {
                child += 1;
            }
            if !self.outranks(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
