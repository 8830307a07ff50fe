//! Select the k-th largest element of a collection with a bounded min-heap.
//!
//! A single pass keeps only the k largest values seen so far in a min-heap
//! capped at k items, so selection costs O(n log k) time and O(k) memory
//! rather than sorting the whole input.
//!
//! ```
//! use klargest::{select_kth_largest, SelectError};
//!
//! assert_eq!(select_kth_largest(&[3, 2, 1, 5, 6, 4], 2), Ok(5));
//! assert_eq!(
//!     select_kth_largest(&[1, 2, 3], 5),
//!     Err(SelectError::InvalidArgument { k: 5, len: 3 })
//! );
//! ```
//!
//! Rejected calls are reported through `tracing` at debug level; the crate
//! never installs a subscriber itself.

mod bounded_heap;
mod error;
mod select;
mod tracker;

pub use bounded_heap::BoundedMinHeap;
pub use error::SelectError;
pub use select::{kth_largest, kth_smallest, select_kth_largest, top_k};
pub use tracker::KthLargestTracker;
