//! Common test utilities
#![allow(dead_code)]

use ndstride::tensor::NestedArray;

/// Install a tracing subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Enumerate every multi-index of `shape` in row-major order
pub fn row_major_indices(shape: &[usize]) -> Vec<Vec<usize>> {
    let total: usize = shape.iter().product();
    let mut out = Vec::with_capacity(total);
    let mut index = vec![0usize; shape.len()];
    for _ in 0..total {
        out.push(index.clone());
        for d in (0..shape.len()).rev() {
            index[d] += 1;
            if index[d] < shape[d] {
                break;
            }
            index[d] = 0;
        }
    }
    out
}

/// Build nested input of `shape` whose leaf at row-major position `k` is `f(k)`
pub fn nested_from_fn(shape: &[usize], f: impl Fn(usize) -> f64) -> NestedArray {
    fn build(shape: &[usize], next: &mut usize, f: &dyn Fn(usize) -> f64) -> NestedArray {
        match shape.split_first() {
            None => {
                let value = f(*next);
                *next += 1;
                NestedArray::Float(value)
            }
            Some((&len, rest)) => (0..len).map(|_| build(rest, next, f)).collect(),
        }
    }
    let mut next = 0;
    build(shape, &mut next, &f)
}

/// Read the leaf of `nested` at `index` by walking the nesting directly
pub fn nested_leaf(nested: &NestedArray, index: &[usize]) -> Option<f64> {
    match (nested, index.split_first()) {
        (NestedArray::Float(v), None) => Some(*v),
        (NestedArray::Int(v), None) => Some(*v as f64),
        (NestedArray::List(items), Some((&i, rest))) => nested_leaf(items.get(i)?, rest),
        _ => None,
    }
}
