//! Integration tests for index-to-offset mapping and element access

mod common;

use ndstride::prelude::*;

#[test]
fn test_flat_index_follows_strides() {
    let t = Tensor::zeros(&[2, 3, 4]).unwrap();
    assert_eq!(t.strides(), &[12, 4, 1]);

    for (k, index) in common::row_major_indices(t.shape()).iter().enumerate() {
        assert_eq!(t.flat_index(index).unwrap(), k);
    }
}

#[test]
fn test_round_trip_nested_values() {
    let source = common::nested_from_fn(&[3, 2, 4], |k| (k * k) as f64 - 0.5);
    let t = Tensor::from_nested(source.clone()).unwrap();

    for index in common::row_major_indices(t.shape()) {
        assert_eq!(
            t.get(&index).unwrap(),
            common::nested_leaf(&source, &index).unwrap(),
            "index {:?}",
            index
        );
    }
}

#[test]
fn test_wrong_arity() {
    let t = Tensor::zeros(&[2, 3]).unwrap();
    for indices in [&[][..], &[0][..], &[0, 0, 0][..]] {
        assert!(matches!(
            t.get(indices),
            Err(Error::InvalidArgument { arg: "indices", .. })
        ));
    }
}

#[test]
fn test_scalar_accepts_no_indices() {
    let t = Tensor::from_nested(9.0).unwrap();
    assert_eq!(t.flat_index(&[]).unwrap(), t.offset());
    assert!(matches!(
        t.get(&[0]),
        Err(Error::InvalidArgument { arg: "indices", .. })
    ));
}

#[test]
fn test_out_of_bounds() {
    let t = Tensor::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();

    assert_eq!(
        t.get(&[0, 3]),
        Err(Error::IndexOutOfBounds {
            index: 3,
            dim: 1,
            size: 3
        })
    );
    assert_eq!(
        t.flat_index(&[2, 0]),
        Err(Error::IndexOutOfBounds {
            index: 2,
            dim: 0,
            size: 2
        })
    );
}

#[test]
fn test_shape_copy_cannot_alter_tensor() {
    let t = Tensor::zeros(&[2, 2]).unwrap();
    let mut shape = t.shape_vec();
    shape.push(5);
    shape[1] = 10;

    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t.size(), 4);
    assert!(t.get(&[0, 5]).is_err());
}

#[test]
fn test_layout_accessor() {
    let t = Tensor::zeros(&[3, 5]).unwrap();
    let layout = t.layout();
    assert!(layout.is_contiguous());
    assert_eq!(layout.offset(), 0);
    assert_eq!(layout, &Layout::contiguous(&[3, 5]));
}
