//! Property-based tests for layout and construction invariants
//!
//! These tests use proptest to check the stride recurrence, zero-filled
//! construction and the nested round trip over random shapes.

mod common;

use ndstride::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Strategy for generating valid shapes of rank 0 through 5
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 0..=5)
}

proptest! {
    /// Property: last stride is 1 and each stride is the next stride times the next size
    #[test]
    fn prop_row_major_strides(shape in shape_strategy()) {
        let strides = Strides::row_major(&shape);
        prop_assert_eq!(strides.len(), shape.len());
        if let Some(&last) = strides.last() {
            prop_assert_eq!(last, 1);
        }
        for i in 0..shape.len().saturating_sub(1) {
            prop_assert_eq!(strides[i], strides[i + 1] * shape[i + 1]);
        }
    }

    /// Property: zeros has the requested shape, rank, size and only zero elements
    #[test]
    fn prop_zeros(shape in shape_strategy()) {
        let t = Tensor::zeros(&shape).unwrap();
        prop_assert_eq!(t.shape(), shape.as_slice());
        prop_assert_eq!(t.rank(), shape.len());
        prop_assert_eq!(t.size(), shape.iter().product::<usize>());
        for index in common::row_major_indices(&shape) {
            prop_assert_eq!(t.get(&index).unwrap(), 0.0);
        }
    }

    /// Property: every valid index maps inside storage and rows are visited in order
    #[test]
    fn prop_flat_index_is_row_major_position(shape in shape_strategy()) {
        let t = Tensor::zeros(&shape).unwrap();
        for (k, index) in common::row_major_indices(&shape).iter().enumerate() {
            prop_assert_eq!(t.flat_index(index).unwrap(), k);
        }
    }

    /// Property: nested construction reproduces every source value at its index
    #[test]
    fn prop_nested_round_trip(shape in shape_strategy(), seed in -1000i64..1000) {
        let source = common::nested_from_fn(&shape, |k| (seed + k as i64) as f64 * 0.25);
        let t = Tensor::from_nested(source.clone()).unwrap();
        prop_assert_eq!(t.shape(), shape.as_slice());
        for index in common::row_major_indices(&shape) {
            prop_assert_eq!(t.get(&index).unwrap(), common::nested_leaf(&source, &index).unwrap());
        }
    }

    /// Property: an index equal to a dimension's size is rejected for that dimension
    #[test]
    fn prop_out_of_bounds_names_dimension(shape in prop::collection::vec(1usize..5, 1..=4), pick in any::<prop::sample::Index>()) {
        let t = Tensor::zeros(&shape).unwrap();
        let dim = pick.index(shape.len());
        let mut index = vec![0usize; shape.len()];
        index[dim] = shape[dim];
        prop_assert_eq!(
            t.flat_index(&index),
            Err(Error::IndexOutOfBounds { index: shape[dim], dim, size: shape[dim] })
        );
    }
}
