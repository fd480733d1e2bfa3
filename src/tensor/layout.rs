//! Layout: shape, strides, and offset for tensor memory layout

use super::{Shape, Strides};
use crate::error::{Error, Result};
use std::fmt;

/// Layout describes the memory layout of a tensor
///
/// A tensor's elements live in a flat buffer. The layout specifies how to
/// compute the storage position of any element given its indices.
///
/// Address of element at indices [i0, i1, ..., in]:
///   offset + i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
    /// Offset: starting element index in the underlying storage
    offset: usize,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use ndstride::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        Self {
            shape: Shape::from(shape),
            strides: Strides::row_major(shape),
            offset: 0,
        }
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: Shape::new(),
            strides: Strides::new(),
            offset: 0,
        }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements (1 for a scalar)
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    /// Check if the tensor is a scalar (0 dimensions)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    /// Check if memory is contiguous (row-major order)
    pub fn is_contiguous(&self) -> bool {
        if self.is_scalar() {
            return true;
        }

        self.strides == Strides::row_major(&self.shape) && self.offset == 0
    }

    /// Minimum storage length needed so that every valid index stays in bounds
    ///
    /// Zero when some dimension is empty, since no index is valid then.
    pub fn required_storage_len(&self) -> usize {
        if self.shape.contains(&0) {
            return 0;
        }

        let span: usize = self
            .shape
            .iter()
            .zip(self.strides.iter())
            .map(|(&size, &stride)| (size - 1) * stride)
            .sum();
        self.offset + span + 1
    }

    /// Get size along a specific dimension
    ///
    /// Supports negative indexing: -1 is the last dimension
    pub fn dim(&self, d: isize) -> Option<usize> {
        let idx = self.normalize_dim(d)?;
        Some(self.shape[idx])
    }

    /// Normalize a dimension index (handle negative indices)
    pub fn normalize_dim(&self, d: isize) -> Option<usize> {
        let ndim = self.ndim() as isize;
        let idx = if d < 0 { ndim + d } else { d };
        if idx >= 0 && idx < ndim {
            Some(idx as usize)
        } else {
            None
        }
    }

    /// Compute the storage position (flat offset) for given indices
    ///
    /// The number of indices must equal the rank; a scalar layout takes no
    /// indices. Each index must be smaller than its dimension's size.
    pub fn flat_index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.ndim() {
            return Err(Error::invalid_argument(
                "indices",
                format!(
                    "number of indices ({}) must match tensor rank ({})",
                    indices.len(),
                    self.ndim()
                ),
            ));
        }

        let mut linear = self.offset;
        for (dim, ((&idx, &size), &stride)) in indices
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
            .enumerate()
        {
            if idx >= size {
                return Err(Error::index_out_of_bounds(idx, dim, size));
            }
            linear += idx * stride;
        }

        Ok(linear)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape)
    }
}
