//! The numeric keys a [`Tree`][crate::Tree] can hold.

use std::cmp::Ordering;
use std::fmt;

/// A numeric key. Every built-in integer type is always a valid key. Floating point keys are
/// valid only when finite, so `NaN` and the infinities are rejected with
/// [`Error::InvalidKey`][crate::Error::InvalidKey].
pub trait Key: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Whether this value may be stored in a tree.
    fn is_valid(&self) -> bool {
        true
    }

    /// Total ordering between two valid keys.
    fn compare(&self, other: &Self) -> Ordering {
        // Valid keys are always comparable.
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! integer_keys {
    ($($t:ty),*) => {
        $(impl Key for $t {})*
    };
}

integer_keys!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Key for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Key for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
