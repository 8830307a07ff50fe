use crate::bounded_heap::BoundedMinHeap;
use crate::error::SelectError;
use std::cmp::Reverse;

/// Returns the k-th largest value of `values` (k = 1 is the maximum).
///
/// The rank is validated against `values.len()` before the pass, so an
/// out-of-range `k` is reported instead of reading an empty heap.
///
/// Runs in O(n log k) time with O(k) auxiliary memory.
pub fn select_kth_largest(values: &[i64], k: usize) -> Result<i64, SelectError> {
    validate_rank(k, values.len())?;
    kth_largest(values.iter().copied(), k)
}

/// Returns the k-th largest item of any sequence of ordered values.
///
/// The length of an arbitrary iterator is not known up front, so a rank
/// beyond the input is detected after the single pass by comparing the
/// number of retained items against `k`.
pub fn kth_largest<I, T>(values: I, k: usize) -> Result<T, SelectError>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    if k == 0 {
        let len = values.into_iter().count();
        return Err(reject(SelectError::InvalidArgument { k, len }));
    }

    let mut heap = BoundedMinHeap::new(k);
    heap.extend(values);

    let retained = heap.len();
    if retained < k {
        // Fewer than k items retained means the whole input had `retained` items.
        return Err(reject(if retained == 0 {
            SelectError::EmptyInput { k }
        } else {
            SelectError::InvalidArgument { k, len: retained }
        }));
    }

    tracing::trace!(k, "selected k-th largest");
    heap.pop_min().ok_or(SelectError::EmptyInput { k })
}

/// Returns the k-th smallest item (k = 1 is the minimum).
///
/// Same heap, ordering flipped through [`Reverse`].
pub fn kth_smallest<I, T>(values: I, k: usize) -> Result<T, SelectError>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    kth_largest(values.into_iter().map(Reverse), k).map(|Reverse(value)| value)
}

/// Returns the `k` largest items, largest first.
///
/// Shorter inputs yield every item; `k = 0` yields nothing.
pub fn top_k<I, T>(values: I, k: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut heap = BoundedMinHeap::new(k);
    heap.extend(values);
    heap.into_sorted_vec()
}

fn validate_rank(k: usize, len: usize) -> Result<(), SelectError> {
    if k == 0 {
        return Err(reject(SelectError::InvalidArgument { k, len }));
    }
    if len == 0 {
        return Err(reject(SelectError::EmptyInput { k }));
    }
    if k > len {
        return Err(reject(SelectError::InvalidArgument { k, len }));
    }
    Ok(())
}

fn reject(err: SelectError) -> SelectError {
    tracing::debug!(k = err.k(), error = %err, "rejected k-th largest selection");
    err
}
