use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Upper bound on the up-front allocation; larger heaps grow on demand.
const MAX_PREALLOCATED: usize = 4096;

/// A min-heap with a fixed maximum capacity.
///
/// Keeps the `capacity` largest items pushed so far:
/// 1. While below capacity, every item is inserted
/// 2. Once full, a new item is compared against the minimum
/// 3. If the new item is larger, the minimum is evicted and the item inserted
///
/// Once full, the minimum is the `capacity`-th largest item seen.
///
/// Complexity:
/// - Push: O(log N) where N is the capacity
/// - Memory: O(N) instead of O(total items)
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Creates a new bounded min-heap with the specified capacity.
    ///
    /// A capacity of zero is allowed; such a heap discards every item.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.min(MAX_PREALLOCATED) + 1),
            capacity,
        }
    }

    /// Attempts to push an item into the heap.
    ///
    /// If the heap is not full, the item is added.
    /// If the heap is full and the item is larger than the minimum,
    /// the minimum is removed and the item is added.
    /// Otherwise, the item is discarded.
    pub fn push(&mut self, item: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
        } else if let Some(mut min) = self.heap.peek_mut() {
            // Overwrite the minimum in place; PeekMut sifts down on drop.
            if item > min.0 {
                *min = Reverse(item);
            }
        }
    }

    /// Returns the smallest item held, i.e. the current k-th largest
    /// candidate.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(min)| min)
    }

    /// Removes and returns the smallest item held.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(min)| min)
    }

    /// Consumes the heap and returns the items in descending order (largest first).
    pub fn into_sorted_vec(self) -> Vec<T> {
        // BinaryHeap sorts ascending by Reverse<T>, which is descending by T.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(x)| x)
            .collect()
    }

    /// Returns the maximum number of items the heap keeps.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true once the heap holds `capacity` items.
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }
}

impl<T: Ord> Extend<T> for BoundedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
