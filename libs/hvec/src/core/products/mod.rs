//! Dot and cross products.
//!
//! The cross product only exists for two and three dimensions. [`Cross`] is
//! implemented for `HVec<2>` and `HVec<3>` alone, so calling it on any other
//! dimension is a type error rather than a runtime failure.
//!
//! ```compile_fail
//! use hvec::{Cross, HVec};
//! let a = HVec::new([1.0, 0.0, 0.0, 0.0]);
//! let _ = a.cross(&a);
//! ```

use crate::core::vector::HVec;

/// Inner product of two vectors of the same dimension.
///
/// # Examples
/// ```
/// use hvec::{dot, HVec};
/// assert_eq!(dot(&HVec::new([1.0, 0.0, 0.0]), &HVec::new([0.0, 1.0, 0.0])), 0.0);
/// ```
pub fn dot<const N: usize>(a: &HVec<N>, b: &HVec<N>) -> f32 {
    a.dot(b)
}

/// Scalar (z-component) cross product of two planar vectors.
pub fn cross2(a: &HVec<2>, b: &HVec<2>) -> f32 {
    a[0] * b[1] - a[1] * b[0]
}

/// Cross product of two spatial vectors.
pub fn cross3(a: &HVec<3>, b: &HVec<3>) -> HVec<3> {
    HVec::new([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// Cross product for the dimensions where it is defined.
///
/// # Examples
/// ```
/// use hvec::{Cross, HVec};
/// assert_eq!(HVec::new([1.0, 0.0]).cross(&HVec::new([0.0, 1.0])), 1.0);
///
/// let z = HVec::new([1.0, 0.0, 0.0]).cross(&HVec::new([0.0, 1.0, 0.0]));
/// assert!(z.approx_eq(&HVec::new([0.0, 0.0, 1.0])));
/// ```
pub trait Cross {
    /// `f32` in two dimensions, a vector in three.
    type Output;

    /// Computes `self × rhs`.
    fn cross(&self, rhs: &Self) -> Self::Output;
}

impl Cross for HVec<2> {
    type Output = f32;

    fn cross(&self, rhs: &Self) -> f32 {
        cross2(self, rhs)
    }
}

impl Cross for HVec<3> {
    type Output = HVec<3>;

    fn cross(&self, rhs: &Self) -> HVec<3> {
        cross3(self, rhs)
    }
}

/// Free-function form of [`Cross::cross`].
pub fn cross<V: Cross>(a: &V, b: &V) -> V::Output {
    a.cross(b)
}
