use crate::bounded_heap::BoundedMinHeap;
use crate::error::SelectError;

/// Tracks the k-th largest value of a stream fed one value at a time.
///
/// Only the k largest values seen so far are retained, so memory stays
/// O(k) no matter how many values are added.
#[derive(Debug, Clone)]
pub struct KthLargestTracker<T: Ord> {
    heap: BoundedMinHeap<T>,
    seen: u64,
}

impl<T: Ord> KthLargestTracker<T> {
    /// Creates a tracker for rank `k`. A rank of zero is rejected.
    pub fn new(k: usize) -> Result<Self, SelectError> {
        if k == 0 {
            tracing::debug!(k, "rejected tracker with rank zero");
            return Err(SelectError::InvalidArgument { k, len: 0 });
        }

        Ok(Self {
            heap: BoundedMinHeap::new(k),
            seen: 0,
        })
    }

    /// Creates a tracker for rank `k` and feeds it an initial batch.
    pub fn with_values<I>(k: usize, values: I) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tracker = Self::new(k)?;
        tracker.extend(values);
        Ok(tracker)
    }

    /// Feeds one value and returns the current k-th largest, or `None`
    /// while fewer than k values have been seen.
    pub fn add(&mut self, value: T) -> Option<&T> {
        self.seen += 1;
        self.heap.push(value);
        self.peek_full()
    }

    /// Returns the current k-th largest value.
    pub fn current(&self) -> Result<&T, SelectError> {
        let k = self.k();
        match self.peek_full() {
            Some(value) => Ok(value),
            None if self.heap.is_empty() => Err(SelectError::EmptyInput { k }),
            None => Err(SelectError::InvalidArgument {
                k,
                len: self.heap.len(),
            }),
        }
    }

    /// The rank being tracked.
    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    /// Total number of values fed so far, including discarded ones.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    fn peek_full(&self) -> Option<&T> {
        if self.heap.is_full() {
            self.heap.peek_min()
        } else {
            None
        }
    }
}

impl<T: Ord> Extend<T> for KthLargestTracker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
