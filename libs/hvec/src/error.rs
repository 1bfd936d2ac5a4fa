//! # Error Types
//!
//! Error types for vector operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO silent padding, truncation or clamping
//! - Fallible operations return [`VectorResult`]
//! - Errors include the offending values

use thiserror::Error;

use crate::config::VectorConfigError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use hvec::{HVec, VectorError};
///
/// let values = [1.0_f32, 2.0];
/// match HVec::<3>::try_from(&values[..]) {
///     Ok(v) => println!("built {v}"),
///     Err(VectorError::ArityMismatch { expected, actual }) => {
///         eprintln!("need {expected} values, got {actual}")
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, PartialEq)]
pub enum VectorError {
    /// Wrong number of initializer values for the target dimension.
    #[error("expected {expected} components, got {actual}")]
    ArityMismatch {
        /// Dimension of the vector being built
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Component access past the end of the vector.
    #[error("component index {index} out of bounds for dimension {dimension}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Dimension of the vector
        dimension: usize,
    },

    /// Normalization of a vector whose components are all zero.
    #[error("cannot normalize a zero vector: largest absolute component is 0")]
    DegenerateNormalize,

    /// Invalid tolerance or rendering configuration.
    #[error(transparent)]
    Config(#[from] VectorConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use hvec::error::VectorResult;
/// use hvec::HVec;
///
/// fn unit_y() -> VectorResult<HVec<2>> {
///     HVec::new([0.0, 4.0]).try_normalize()
/// }
/// # assert_eq!(unit_y().unwrap().component(1), 1.0);
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
