//! Tensor types and operations
//!
//! This module provides the core `Tensor` type, an immutable n-dimensional
//! array of `f64` with row-major strided layout.

mod core;
mod dim;
mod layout;
mod nested;
mod shape;
mod storage;
mod strides;

pub use self::core::Tensor;
pub use dim::Dim;
pub use layout::Layout;
pub use nested::NestedArray;
pub use shape::Shape;
pub use storage::Storage;
pub use strides::Strides;
