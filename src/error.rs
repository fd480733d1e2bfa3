//! Error types for ndstride

use thiserror::Error;

/// Result type alias using ndstride's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or indexing a tensor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument provided to a factory or accessor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A leaf of nested input is not a number
    #[error("Unsupported element type '{kind}' in source array, expected a number")]
    UnsupportedElement {
        /// Runtime kind of the offending element
        kind: &'static str,
    },

    /// Index out of bounds
    #[error("Index {index} is out of bounds for dimension {dim} with size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Dimension the index was applied to
        dim: usize,
        /// Size of the dimension
        size: usize,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an unsupported element error
    pub fn unsupported_element(kind: &'static str) -> Self {
        Self::UnsupportedElement { kind }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, dim: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, dim, size }
    }
}
