//! Basic Tensor Construction
//!
//! This demo builds tensors with each factory, inspects their layout and
//! reads elements through the checked index mapping.
//!
//! Run with:
//! ```sh
//! RUST_LOG=ndstride=trace cargo run --example basic_tensor
//! ```

use ndstride::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Zero-filled, rank 3
    let zeros = Tensor::zeros(&[2, 3, 4])?;
    println!("{zeros} strides={:?} size={}", zeros.strides(), zeros.size());

    // From nested input; the shape is inferred
    let cube = Tensor::from_nested([[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0], [7.0, 8.0]]])?;
    println!("{cube} element[1, 0, 1] = {}", cube.get(&[1, 0, 1])?);

    // Scalars have rank 0 and take no indices
    let scalar = Tensor::from_nested(42.0)?;
    println!("{scalar} rank={} value={}", scalar.rank(), scalar.get(&[])?);

    // Rejected input reports what was wrong
    if let Err(err) = Tensor::from_rows(&[vec![1.0, 2.0], vec![3.0]]) {
        println!("from_rows failed: {err}");
    }
    if let Err(err) = cube.get(&[0, 2, 0]) {
        println!("get failed: {err}");
    }

    Ok(())
}
