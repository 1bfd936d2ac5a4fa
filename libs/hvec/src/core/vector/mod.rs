//! Fixed-dimension `f32` vector value type.
//!
//! [`HVec`] is a plain `Copy` wrapper around `[f32; N]`. Every arithmetic
//! operation returns a new vector; nothing mutates the receiver.
//!
//! ## Ordering and equality
//!
//! Relational operators compare vectors **by magnitude only** (see
//! [`ByMagnitude`]). Two vectors pointing in different directions but with
//! the same Euclidean length are neither less nor greater than each other, and
//! `==` reports them equal. This is a weak order over vectors, not a total
//! order over the underlying tuples. Use [`HVec::equals`] or
//! [`HVec::approx_eq`] for a direction-sensitive comparison.
//!
//! ```
//! use hvec::HVec;
//!
//! let east = HVec::new([1.0, 0.0]);
//! let north = HVec::new([0.0, 1.0]);
//! assert!(east == north);
//! assert!(!east.approx_eq(&north));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use config::constants::{DESCRIBE_PRECISION, EQUALS_DELTA, VECTOR_TYPE_NAME};

use crate::config::VectorConfig;
use crate::core::ordering::{ByMagnitude, KeyOrdering};
use crate::error::{VectorError, VectorResult};

/// An `N`-dimensional vector of `f32` components.
///
/// `N` must be at least one. Constructing an `HVec<0>` fails to compile.
///
/// # Examples
/// ```
/// use hvec::HVec;
/// let v = HVec::new([0.1, 0.2, 0.3]);
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.describe(), "HVec<3>{0.100000 0.200000 0.300000}");
/// ```
///
/// A zero-dimensional vector is rejected at build time:
///
/// ```compile_fail
/// use hvec::HVec;
/// let empty = HVec::<0>::new([]);
/// println!("{}", empty.size());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HVec<const N: usize> {
    components: [f32; N],
}

impl<const N: usize> HVec<N> {
    /// Evaluated on every construction path so a zero-dimensional vector
    /// is rejected during monomorphization.
    const NON_EMPTY: () = assert!(N > 0, "HVec requires at least one dimension");

    /// Builds a vector from exactly `N` components.
    pub const fn new(components: [f32; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { components }
    }

    /// The all-zero vector.
    ///
    /// # Examples
    /// ```
    /// use hvec::HVec;
    /// assert_eq!(HVec::<2>::zero().magnitude(), 0.0);
    /// ```
    pub const fn zero() -> Self {
        Self::new([0.0; N])
    }

    /// Number of components, always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`HVec::try_component`] for a checked
    /// lookup.
    pub fn component(&self, index: usize) -> f32 {
        self.components[index]
    }

    /// Returns the component at `index`, or an error when it is out of range.
    ///
    /// # Examples
    /// ```
    /// use hvec::{HVec, VectorError};
    /// let v = HVec::new([1.0, 2.0]);
    /// assert_eq!(v.try_component(1), Ok(2.0));
    /// assert_eq!(
    ///     v.try_component(2),
    ///     Err(VectorError::IndexOutOfBounds { index: 2, dimension: 2 })
    /// );
    /// ```
    pub fn try_component(&self, index: usize) -> VectorResult<f32> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds {
                index,
                dimension: N,
            })
    }

    /// Borrows the underlying component array.
    pub const fn components(&self) -> &[f32; N] {
        &self.components
    }

    /// Consumes the vector, returning its components.
    pub const fn into_array(self) -> [f32; N] {
        self.components
    }

    /// Iterates over the components in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.components.iter()
    }

    /// Euclidean (L2) length, accumulated in `f32`.
    ///
    /// # Examples
    /// ```
    /// use hvec::HVec;
    /// assert_eq!(HVec::new([3.0, 4.0]).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f32 {
        self.components
            .iter()
            .fold(0.0_f32, |acc, c| acc + c * c)
            .sqrt()
    }

    /// Largest absolute component (L-infinity norm).
    pub fn max_abs(&self) -> f32 {
        self.components
            .iter()
            .fold(0.0_f32, |acc, c| acc.max(c.abs()))
    }

    /// Direction-sensitive equality: every pair of components differs by
    /// strictly less than `|delta|`.
    ///
    /// # Examples
    /// ```
    /// use hvec::HVec;
    /// let a = HVec::new([1.0, 2.0]);
    /// let b = HVec::new([1.05, 2.0]);
    /// assert!(a.equals(&b, 0.1));
    /// assert!(!a.equals(&b, 0.01));
    /// ```
    pub fn equals(&self, other: &Self, delta: f32) -> bool {
        let delta = delta.abs();
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).abs() < delta)
    }

    /// [`HVec::equals`] with the default tolerance of `0.0001`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EQUALS_DELTA)
    }

    /// [`HVec::equals`] with the tolerance from `config`.
    pub fn approx_eq_with(&self, other: &Self, config: &VectorConfig) -> bool {
        self.equals(other, config.equals_delta)
    }

    /// Componentwise sum.
    pub fn sum(&self, other: &Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            self.components[i] + other.components[i]
        }))
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.components.map(|c| c * factor))
    }

    /// Equivalent to `scale(-1.0)`.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Equivalent to `sum(&other.scale(-1.0))`.
    pub fn difference(&self, other: &Self) -> Self {
        self.sum(&other.scale(-1.0))
    }

    /// Divides every component by the largest absolute component, so the
    /// dominant component becomes `±1`.
    ///
    /// This is an L-infinity normalization; the result is generally **not**
    /// unit length.
    ///
    /// The zero vector has no dominant component: every component becomes
    /// `0 / 0`, i.e. NaN. A warning is
    /// logged in that case. Use [`HVec::try_normalize`] to get an error
    /// instead.
    ///
    /// # Examples
    /// ```
    /// use hvec::HVec;
    /// let v = HVec::new([2.0, -4.0, 1.0]).normalize();
    /// assert_eq!(v.into_array(), [0.5, -1.0, 0.25]);
    /// ```
    pub fn normalize(&self) -> Self {
        let largest = self.max_abs();
        if largest == 0.0 {
            tracing::warn!(dimension = N, "normalizing a zero vector yields NaN components");
        }
        self.divide_by(largest)
    }

    /// Checked [`HVec::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DegenerateNormalize`] when every component is
    /// zero.
    pub fn try_normalize(&self) -> VectorResult<Self> {
        let largest = self.max_abs();
        if largest == 0.0 {
            return Err(VectorError::DegenerateNormalize);
        }
        Ok(self.divide_by(largest))
    }

    // Dividing directly keeps subnormal maxima finite; their reciprocal
    // overflows to inf.
    fn divide_by(&self, divisor: f32) -> Self {
        Self::new(self.components.map(|c| c / divisor))
    }

    /// Inner product, accumulated in `f32` from zero.
    ///
    /// # Examples
    /// ```
    /// use hvec::HVec;
    /// let a = HVec::new([1.0, 2.0, 3.0]);
    /// let b = HVec::new([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> f32 {
        self.iter()
            .zip(other.iter())
            .fold(0.0_f32, |acc, (a, b)| acc + a * b)
    }

    /// Renders the vector as `HVec<N>{c0 c1 ...}` with six fractional digits.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Renders the vector with the precision from `config`.
    ///
    /// # Examples
    /// ```
    /// use hvec::{config::VectorConfig, HVec};
    /// let cfg = VectorConfig::new(1.0e-4, 2).unwrap();
    /// assert_eq!(HVec::new([0.5, 1.0]).describe_with(&cfg), "HVec<2>{0.50 1.00}");
    /// ```
    pub fn describe_with(&self, config: &VectorConfig) -> String {
        format!("{:.prec$}", self, prec = config.describe_precision)
    }
}

impl<const N: usize> Default for HVec<N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Uses the formatter precision when given, six digits otherwise.
impl<const N: usize> fmt::Display for HVec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DESCRIBE_PRECISION);
        write!(f, "{VECTOR_TYPE_NAME}<{N}>{{")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c:.precision$}")?;
        }
        f.write_str("}")
    }
}

// =============================================================================
// MAGNITUDE ORDERING
// =============================================================================

/// Equal magnitudes compare equal regardless of direction.
impl<const N: usize> PartialEq for HVec<N> {
    fn eq(&self, other: &Self) -> bool {
        ByMagnitude.key(self) == ByMagnitude.key(other)
    }
}

/// Compares magnitudes with `f32::partial_cmp`.
///
/// For ordinary vectors `a <= b` equals `!(a > b)` and `a >= b` equals
/// `!(a < b)`. A NaN magnitude (only produced by normalizing the zero vector)
/// is unordered, so `<`, `>`, `<=` and `>=` against it are all `false`.
impl<const N: usize> PartialOrd for HVec<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ByMagnitude.compare(self, other)
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<const N: usize> Index<usize> for HVec<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.components[index]
    }
}

impl<const N: usize> From<[f32; N]> for HVec<N> {
    fn from(components: [f32; N]) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<HVec<N>> for [f32; N] {
    fn from(v: HVec<N>) -> Self {
        v.components
    }
}

impl<const N: usize> TryFrom<&[f32]> for HVec<N> {
    type Error = VectorError;

    fn try_from(values: &[f32]) -> VectorResult<Self> {
        <[f32; N]>::try_from(values)
            .map(Self::new)
            .map_err(|_| VectorError::ArityMismatch {
                expected: N,
                actual: values.len(),
            })
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl<const N: usize> Add for HVec<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.sum(&rhs)
    }
}

impl<const N: usize> Sub for HVec<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl<const N: usize> Neg for HVec<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<const N: usize> Mul<f32> for HVec<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests;
