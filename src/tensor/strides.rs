//! Strides type: element offsets for tensor memory layout

use super::shape::STACK_DIMS;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Strides type: element offsets between consecutive elements along each dimension
/// NOTE: Strides are in ELEMENTS, not bytes
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Strides(SmallVec<[usize; STACK_DIMS]>);

impl Strides {
    /// Create empty strides.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Compute contiguous strides for a given shape (row-major order)
    ///
    /// The last dimension has stride 1 and every preceding stride is the
    /// following stride times the following dimension's size. An empty
    /// shape yields empty strides. The shape is not validated; its element
    /// count must fit in `usize`.
    ///
    /// # Example
    /// ```
    /// use ndstride::tensor::Strides;
    /// let strides = Strides::row_major(&[2, 3, 4]);
    /// assert_eq!(strides.as_slice(), &[12, 4, 1]);
    /// ```
    pub fn row_major(shape: &[usize]) -> Self {
        if shape.is_empty() {
            return Self::new();
        }

        let mut strides: SmallVec<[usize; STACK_DIMS]> = SmallVec::with_capacity(shape.len());
        let mut stride = 1usize;

        // Compute strides from last dimension to first
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim;
        }

        strides.reverse();
        Self(strides)
    }

    /// View strides as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of stride entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this stride vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Strides {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Strides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Strides {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_rank3() {
        assert_eq!(Strides::row_major(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
    }

    #[test]
    fn test_row_major_scalar() {
        assert!(Strides::row_major(&[]).is_empty());
    }

    #[test]
    fn test_row_major_vector() {
        assert_eq!(Strides::row_major(&[7]).as_slice(), &[1]);
    }

    #[test]
    fn test_row_major_zero_sized_dim() {
        // Degenerate shapes from empty nested input still get well-formed strides
        assert_eq!(Strides::row_major(&[2, 0]).as_slice(), &[0, 1]);
    }
}
