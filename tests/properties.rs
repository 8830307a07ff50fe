use klargest::{kth_largest, kth_smallest, select_kth_largest, top_k, KthLargestTracker, SelectError};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn sorted_desc(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// A non-empty vector together with a valid rank into it.
fn values_and_rank() -> impl Strategy<Value = (Vec<i64>, usize)> {
    prop::collection::vec(any::<i64>(), 1..200)
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 1..=len)
        })
}

/// Small value range so duplicates are common.
fn dup_heavy_values_and_rank() -> impl Strategy<Value = (Vec<i64>, usize)> {
    prop::collection::vec(-5i64..5, 1..64)
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 1..=len)
        })
}

proptest! {
    #[test]
    fn test_matches_sorted_oracle((values, k) in values_and_rank()) {
        prop_assert_eq!(select_kth_largest(&values, k), Ok(sorted_desc(&values)[k - 1]));
    }

    #[test]
    fn test_matches_sorted_oracle_with_duplicates((values, k) in dup_heavy_values_and_rank()) {
        prop_assert_eq!(select_kth_largest(&values, k), Ok(sorted_desc(&values)[k - 1]));
    }

    #[test]
    fn test_idempotent((values, k) in values_and_rank()) {
        prop_assert_eq!(select_kth_largest(&values, k), select_kth_largest(&values, k));
    }

    #[test]
    fn test_order_independent((values, k) in values_and_rank()) {
        let mut reversed = values.clone();
        reversed.reverse();
        let mut rotated = values.clone();
        rotated.rotate_left(values.len() / 2);

        let expected = select_kth_largest(&values, k);
        prop_assert_eq!(select_kth_largest(&reversed, k), expected);
        prop_assert_eq!(select_kth_largest(&rotated, k), expected);
    }

    #[test]
    fn test_boundary_ranks(values in prop::collection::vec(any::<i64>(), 1..200)) {
        let max = values.iter().copied().max();
        let min = values.iter().copied().min();
        prop_assert_eq!(select_kth_largest(&values, 1).ok(), max);
        prop_assert_eq!(select_kth_largest(&values, values.len()).ok(), min);
    }

    #[test]
    fn test_rank_beyond_input_fails(values in prop::collection::vec(any::<i64>(), 0..50), extra in 1usize..10) {
        let k = values.len() + extra;
        let result = select_kth_largest(&values, k);
        if values.is_empty() {
            prop_assert_eq!(result, Err(SelectError::EmptyInput { k }));
        } else {
            prop_assert_eq!(result, Err(SelectError::InvalidArgument { k, len: values.len() }));
        }
    }

    #[test]
    fn test_generic_agrees_with_slice((values, k) in values_and_rank()) {
        prop_assert_eq!(kth_largest(values.iter().copied(), k), select_kth_largest(&values, k));
    }

    #[test]
    fn test_kth_smallest_mirrors_largest((values, k) in values_and_rank()) {
        let n = values.len();
        prop_assert_eq!(kth_smallest(values.iter().copied(), k), select_kth_largest(&values, n - k + 1));
    }

    #[test]
    fn test_top_k_is_sorted_prefix(values in prop::collection::vec(any::<i64>(), 0..200), k in 0usize..50) {
        let expected: Vec<i64> = sorted_desc(&values).into_iter().take(k).collect();
        prop_assert_eq!(top_k(values, k), expected);
    }

    #[test]
    fn test_tracker_agrees_with_one_shot((values, k) in values_and_rank()) {
        let tracker = KthLargestTracker::with_values(k, values.iter().copied()).unwrap();
        prop_assert_eq!(tracker.current().copied(), select_kth_largest(&values, k));
        prop_assert_eq!(tracker.seen(), values.len() as u64);
    }
}

#[test]
fn test_documented_cases() {
    // Rejections are logged at debug level; RUST_LOG=klargest=debug shows them.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    assert_eq!(select_kth_largest(&[5, 5, 5, 2], 2), Ok(5));
    assert_eq!(select_kth_largest(&[-3, -1, -7, 0], 2), Ok(-1));
    assert_eq!(select_kth_largest(&[42], 1), Ok(42));
    assert_eq!(
        select_kth_largest(&[1, 2, 3], 5),
        Err(SelectError::InvalidArgument { k: 5, len: 3 })
    );
    assert_eq!(select_kth_largest(&[], 1), Err(SelectError::EmptyInput { k: 1 }));
}
