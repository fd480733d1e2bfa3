//! Requested dimension sizes

use std::fmt;

/// A requested dimension size
///
/// Implemented for the primitive integer types so factories accept both
/// `&[usize]` and signed literals such as `&[2, -1, 3]`, rejecting the
/// latter with a descriptive error instead of wrapping.
pub trait Dim: Copy + fmt::Display {
    /// Convert to a size, or `None` if the value is negative or does not fit in `usize`
    fn to_size(self) -> Option<usize>;
}

macro_rules! impl_dim {
    ($($t:ty),* $(,)?) => {
        $(
            impl Dim for $t {
                #[inline]
                fn to_size(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_dim!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);
