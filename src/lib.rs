//! # ndstride
//!
//! **Strided dense n-dimensional `f64` tensors.**
//!
//! ndstride provides the data model that numerical kernels build on: an
//! immutable tensor made of a flat owned buffer plus a row-major layout
//! (shape, strides, offset). Every element read goes through a single
//! bounds-checked index-to-offset mapping.
//!
//! ## Features
//!
//! - **Uniform rank**: scalars (rank 0) through rank-N tensors share one layout model
//! - **Shape inference**: build tensors from arbitrarily nested input without
//!   stating the rank up front
//! - **Checked access**: wrong index arity and out-of-range indices are reported
//!   with the offending index, dimension and size
//!
//! ## Quick Start
//!
//! ```
//! use ndstride::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let t = Tensor::from_nested([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
//! assert_eq!(t.shape(), &[2, 3]);
//! assert_eq!(t.strides(), &[3, 1]);
//! assert_eq!(t.get(&[1, 2])?, 6.0);
//!
//! let z = Tensor::zeros(&[2, 3, 4])?;
//! assert_eq!(z.size(), 24);
//! assert_eq!(z.to_string(), "Tensor(shape=[2, 3, 4])");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Construction emits [`tracing`] events (`trace` on success, `debug` when
//! input is rejected). No subscriber is installed by the library.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{Dim, Layout, NestedArray, Shape, Strides, Tensor};
}
