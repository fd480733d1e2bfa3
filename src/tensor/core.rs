//! Core Tensor type

use super::{Dim, Layout, NestedArray, Shape, Storage};
use crate::error::{Error, Result};
use std::fmt;

/// Immutable, strided, dense n-dimensional array of `f64`
///
/// `Tensor` consists of:
/// - **Storage**: an exclusively owned flat buffer
/// - **Layout**: shape, row-major strides, and offset into storage
///
/// A tensor is fully built by one of its factories and never mutated
/// afterward. Every element read goes through [`Tensor::flat_index`].
///
/// # Example
///
/// ```
/// use ndstride::prelude::*;
///
/// # fn main() -> Result<()> {
/// let t = Tensor::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
/// assert_eq!(t.rank(), 2);
/// assert_eq!(t.get(&[1, 0])?, 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor {
    /// Owned element buffer
    storage: Storage,
    /// Shape, strides, offset
    layout: Layout,
}

impl Tensor {
    /// Assemble a tensor, checking that storage covers every valid index
    fn from_parts(storage: Storage, layout: Layout) -> Result<Self> {
        let required = layout.required_storage_len();
        if storage.len() < required {
            return Err(Error::invalid_argument(
                "storage",
                format!(
                    "buffer of {} elements cannot back layout {:?} (needs {})",
                    storage.len(),
                    layout,
                    required
                ),
            ));
        }

        Ok(Self::assemble(storage, layout))
    }

    /// Assemble a tensor whose storage is known to cover its layout
    fn assemble(storage: Storage, layout: Layout) -> Self {
        tracing::trace!(shape = ?layout.shape(), size = layout.elem_count(), "tensor constructed");
        Self { storage, layout }
    }

    /// Element count of `shape`, rejecting shapes whose buffer size overflows
    fn checked_size(shape: &Shape) -> Result<usize> {
        let addressable = isize::MAX as usize / std::mem::size_of::<f64>();
        shape
            .checked_elem_count()
            .filter(|&count| count <= addressable)
            .ok_or_else(|| {
                tracing::debug!(shape = ?shape, "rejected shape with overflowing element count");
                Error::invalid_argument(
                    "shape",
                    format!("element count of shape {shape} overflows the addressable buffer size"),
                )
            })
    }

    /// Create a tensor filled with zeros
    ///
    /// Every requested dimension size must be positive. An empty `shape`
    /// creates a scalar holding `0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use ndstride::prelude::*;
    ///
    /// let t = Tensor::zeros(&[2, 3]).unwrap();
    /// assert_eq!(t.size(), 6);
    /// assert!(Tensor::zeros(&[2, -1, 3]).is_err());
    /// ```
    pub fn zeros<D: Dim>(shape: &[D]) -> Result<Self> {
        let mut dims = Shape::new();
        for (dim, &requested) in shape.iter().enumerate() {
            match requested.to_size() {
                Some(size) if size > 0 => dims.push(size),
                _ => {
                    tracing::debug!(dim, size = %requested, "rejected non-positive dimension size");
                    return Err(Error::invalid_argument(
                        "shape",
                        format!("dimension {dim} has non-positive size {requested}"),
                    ));
                }
            }
        }

        let size = Self::checked_size(&dims)?;
        Self::from_parts(Storage::zeroed(size), Layout::contiguous(&dims))
    }

    /// Create a rank-0 tensor holding `value`
    pub fn scalar(value: f64) -> Self {
        Self::assemble(Storage::from_vec(vec![value]), Layout::scalar())
    }

    /// Create a 1-D tensor from a slice
    ///
    /// The shape is `[data.len()]`; the data is copied, so the caller's
    /// buffer is never aliased.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::from_parts(Storage::from_slice(data), Layout::contiguous(&[data.len()]))
    }

    /// Create a 2-D tensor from rows of equal length
    ///
    /// The shape is `[rows.len(), columns]`. No rows yields shape `[0, 0]`.
    pub fn from_rows<Row: AsRef<[f64]>>(rows: &[Row]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                tracing::debug!(row = i, len = row.len(), expected = cols, "rejected ragged rows");
                return Err(Error::invalid_argument(
                    "rows",
                    format!(
                        "all rows must have the same length: row {i} has {} elements, expected {cols}",
                        row.len()
                    ),
                ));
            }
        }

        let data: Vec<f64> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Self::from_parts(Storage::from_vec(data), Layout::contiguous(&[rows.len(), cols]))
    }

    /// Create a tensor from arbitrarily nested input
    ///
    /// The shape is inferred from the nesting (see
    /// [`NestedArray::infer_shape`]) and the leaves are copied in row-major
    /// order. A lone number produces a rank-0 tensor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the input is `Null` or not rectangular
    /// - [`Error::UnsupportedElement`] if a leaf is not a number
    ///
    /// # Example
    ///
    /// ```
    /// use ndstride::prelude::*;
    ///
    /// let t = Tensor::from_nested([[[1.0, 2.0]], [[3.0, 4.0]]]).unwrap();
    /// assert_eq!(t.shape(), &[2, 1, 2]);
    ///
    /// let s = Tensor::from_nested(7.0).unwrap();
    /// assert!(s.is_scalar());
    /// ```
    pub fn from_nested(source: impl Into<NestedArray>) -> Result<Self> {
        let source = source.into();
        if matches!(source, NestedArray::Null) {
            tracing::debug!("rejected null source");
            return Err(Error::invalid_argument("source", "source is null"));
        }

        let shape = source.infer_shape();
        Self::checked_size(&shape)?;
        // Grow as leaves are visited; ragged input may claim more than it holds
        let mut data = Vec::new();
        if let Err(err) = source.flatten_into(&shape, &mut data) {
            tracing::debug!(shape = ?shape, error = %err, "rejected nested source");
            return Err(err);
        }

        Self::from_parts(Storage::from_vec(data), Layout::contiguous(&shape))
    }

    // ===== Accessors =====

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    ///
    /// The returned slice is a read-only view; use [`Self::shape_vec`] for an
    /// owned copy.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get an owned copy of the shape
    pub fn shape_vec(&self) -> Vec<usize> {
        self.layout.shape().to_vec()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    /// Get the storage offset of element (0, ..., 0)
    #[inline]
    pub fn offset(&self) -> usize {
        self.layout.offset()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn rank(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements (1 for a scalar)
    #[inline]
    pub fn size(&self) -> usize {
        self.layout.elem_count()
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Get size along a dimension (supports negative indexing)
    pub fn dim(&self, dim: isize) -> Option<usize> {
        self.layout.dim(dim)
    }

    // ===== Data Access =====

    /// Map per-dimension indices to a position in storage
    ///
    /// The number of indices must equal the rank (a scalar takes none), and
    /// each index must be smaller than its dimension's size.
    pub fn flat_index(&self, indices: &[usize]) -> Result<usize> {
        self.layout.flat_index(indices)
    }

    /// Read the element at `indices`
    pub fn get(&self, indices: &[usize]) -> Result<f64> {
        let pos = self.flat_index(indices)?;
        self.storage.get(pos).ok_or_else(|| {
            Error::invalid_argument(
                "indices",
                format!("position {pos} lies outside storage of {}", self.storage.len()),
            )
        })
    }

    /// Copy the elements into a Vec in row-major order
    pub fn to_vec(&self) -> Vec<f64> {
        // Factories only build contiguous layouts
        let start = self.layout.offset();
        self.storage.as_slice()[start..start + self.size()].to_vec()
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("offset", &self.offset())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={})", self.layout)
    }
}
