//! Nested input: arbitrarily deep homogeneous arrays used to build tensors
//!
//! [`NestedArray`] is a closed tagged-variant model of array-like input. Shape
//! inference and flattening are structural recursion over its variants.

use super::Shape;
use crate::error::{Error, Result};

/// Arbitrarily nested array-like input
///
/// Only `Float` and `Int` leaves are numeric. The remaining leaf kinds exist
/// so that heterogeneous input coming from dynamic sources can be represented
/// and rejected with a precise error.
///
/// # Example
///
/// ```
/// use ndstride::tensor::NestedArray;
///
/// let nested = NestedArray::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(nested.infer_shape().as_slice(), &[2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NestedArray {
    /// Floating-point number
    Float(f64),
    /// Integer number, widened to `f64` on flattening
    Int(i64),
    /// Boolean (not numeric)
    Bool(bool),
    /// Text (not numeric)
    Text(String),
    /// Absent value
    Null,
    /// One nesting level
    List(Vec<NestedArray>),
}

impl NestedArray {
    /// Runtime kind of this element, as reported in errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Null => "null",
            Self::List(_) => "list",
        }
    }

    /// Infer the shape of this input
    ///
    /// Takes the length of the outermost list, then descends into its first
    /// element, until an element is not a list. An empty list stops
    /// inference at that level, so `[[], []]` has shape `[2, 0]`. A bare leaf
    /// has the empty (scalar) shape. Element kinds are not checked here.
    pub fn infer_shape(&self) -> Shape {
        let mut shape = Shape::new();
        let mut current = self;
        while let Self::List(items) = current {
            shape.push(items.len());
            match items.first() {
                Some(first) => current = first,
                None => break,
            }
        }
        shape
    }

    /// Flatten into `out` in row-major order, following `shape`
    ///
    /// Fails with [`Error::UnsupportedElement`] on a non-numeric leaf and with
    /// [`Error::InvalidArgument`] when the input is not rectangular.
    pub(crate) fn flatten_into(&self, shape: &[usize], out: &mut Vec<f64>) -> Result<()> {
        self.flatten_at(shape, 0, out)
    }

    fn flatten_at(&self, shape: &[usize], depth: usize, out: &mut Vec<f64>) -> Result<()> {
        if depth == shape.len() {
            let value = match *self {
                Self::Float(v) => v,
                Self::Int(v) => v as f64,
                _ => return Err(Error::unsupported_element(self.kind())),
            };
            out.push(value);
            return Ok(());
        }

        let Self::List(items) = self else {
            return Err(Error::invalid_argument(
                "source",
                format!(
                    "ragged input: expected a list at depth {depth}, found {}",
                    self.kind()
                ),
            ));
        };

        if items.len() != shape[depth] {
            return Err(Error::invalid_argument(
                "source",
                format!(
                    "ragged input: dimension {depth} expects length {}, found {}",
                    shape[depth],
                    items.len()
                ),
            ));
        }

        for item in items {
            item.flatten_at(shape, depth + 1, out)?;
        }
        Ok(())
    }
}

impl From<f64> for NestedArray {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for NestedArray {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<i64> for NestedArray {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NestedArray {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<bool> for NestedArray {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for NestedArray {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NestedArray {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<NestedArray>> From<Option<T>> for NestedArray {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<NestedArray>> From<Vec<T>> for NestedArray {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NestedArray>, const N: usize> From<[T; N]> for NestedArray {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<NestedArray>> From<&[T]> for NestedArray {
    fn from(value: &[T]) -> Self {
        Self::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl FromIterator<NestedArray> for NestedArray {
    fn from_iter<I: IntoIterator<Item = NestedArray>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}
