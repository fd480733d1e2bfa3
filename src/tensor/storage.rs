//! Storage: exclusively owned element buffer

/// Flat, contiguous buffer of `f64` elements backing a tensor
///
/// Every tensor owns its storage outright; cloning a tensor copies the buffer.
#[derive(Clone, PartialEq)]
pub struct Storage {
    data: Vec<f64>,
}

impl Storage {
    /// Create storage holding `len` zeros
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Take ownership of an existing buffer
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Copy a slice into new storage
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Number of elements (not bytes)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the element at a storage position
    #[inline]
    pub fn get(&self, pos: usize) -> Option<f64> {
        self.data.get(pos).copied()
    }

    /// Borrow the raw buffer
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").field("len", &self.len()).finish()
    }
}
