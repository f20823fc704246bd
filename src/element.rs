//! Element traits mapping Rust numeric types to matrix storage

use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a matrix
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for pivot selection
///
/// `to_f64`/`from_f64` provide the f64 interchange used by the text
/// loaders and by tolerance comparisons.
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

impl Element for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for i32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i32
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for i64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i64
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

/// Element types usable in the LU decomposition and solver kernels
///
/// The elimination divides by pivots and compares pivot magnitudes, both of
/// which require floating-point semantics. Bounding the decomposition on
/// this trait rejects integer element types at compile time.
pub trait LinalgElement: Element {
    /// Absolute value, used for pivot magnitude comparisons
    fn abs_val(self) -> Self;
}

impl LinalgElement for f32 {
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
}

impl LinalgElement for f64 {
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_roundtrip() {
        assert_eq!(f64::from_f64(2.5).to_f64(), 2.5);
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
    }

    #[test]
    fn integer_conversion_truncates() {
        assert_eq!(i32::from_f64(3.9), 3);
        assert_eq!(i64::from_f64(-2.0), -2);
    }

    #[test]
    fn abs_val() {
        assert_eq!((-1.5f64).abs_val(), 1.5);
        assert_eq!(3.0f32.abs_val(), 3.0);
    }
}
