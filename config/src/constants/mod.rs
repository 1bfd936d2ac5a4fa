//! Centralized configuration values shared across the hvec workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default absolute tolerance for componentwise vector equality.
///
/// Two components are considered equal when their absolute difference is
/// strictly below this value.
///
/// # Examples
/// ```
/// use config::constants::EQUALS_DELTA;
/// assert!((0.1_f32 - 0.10001_f32).abs() < EQUALS_DELTA);
/// ```
pub const EQUALS_DELTA: f32 = 1.0e-4;

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Number of fractional digits used when rendering vector components.
///
/// # Examples
/// ```
/// use config::constants::DESCRIBE_PRECISION;
/// assert_eq!(format!("{:.*}", DESCRIBE_PRECISION, 0.1_f32), "0.100000");
/// ```
pub const DESCRIBE_PRECISION: usize = 6;

/// Upper bound accepted for a configured rendering precision.
///
/// `f32` carries roughly nine significant decimal digits, anything beyond is
/// noise.
///
/// # Examples
/// ```
/// use config::constants::{DESCRIBE_PRECISION, MAX_DESCRIBE_PRECISION};
/// assert!(DESCRIBE_PRECISION <= MAX_DESCRIBE_PRECISION);
/// ```
pub const MAX_DESCRIBE_PRECISION: usize = 9;

/// Type name printed in front of the dimension by the vector renderer.
///
/// # Examples
/// ```
/// use config::constants::VECTOR_TYPE_NAME;
/// assert_eq!(format!("{VECTOR_TYPE_NAME}<3>"), "HVec<3>");
/// ```
pub const VECTOR_TYPE_NAME: &str = "HVec";

// =============================================================================
// SORTING CONSTANTS
// =============================================================================

/// Descending gap sequence for the shell sort (Ciura's sequence, extended).
///
/// Gaps larger than the collection length are skipped; the final gap of one
/// turns the last pass into a plain insertion sort.
///
/// # Examples
/// ```
/// use config::constants::SHELL_SORT_GAPS;
/// assert!(SHELL_SORT_GAPS.windows(2).all(|w| w[0] > w[1]));
/// ```
pub const SHELL_SORT_GAPS: [usize; 16] = [
    510_774, 227_011, 100_894, 44_842, 19_930, 8_858, 3_937, 1_750, 701, 301, 132, 57, 23, 10, 4,
    1,
];

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.equals_delta > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Componentwise tolerance used by approximate equality.
    pub equals_delta: f32,
    /// Fractional digits used when rendering components.
    pub describe_precision: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-3, 2).expect("valid config");
    /// assert_eq!(cfg.describe_precision, 2);
    /// ```
    pub fn new(equals_delta: f32, describe_precision: usize) -> Result<Self, ConfigError> {
        if !equals_delta.is_finite() || equals_delta <= 0.0 {
            return Err(ConfigError::InvalidDelta(equals_delta));
        }
        if describe_precision > MAX_DESCRIBE_PRECISION {
            return Err(ConfigError::InvalidPrecision(describe_precision));
        }
        Ok(Self {
            equals_delta,
            describe_precision,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            equals_delta: EQUALS_DELTA,
            describe_precision: DESCRIBE_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidDelta(f32),
    /// Raised when the rendering precision exceeds [`MAX_DESCRIBE_PRECISION`].
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDelta(value) => {
                write!(f, "equals_delta must be positive and finite: {value}")
            }
            ConfigError::InvalidPrecision(value) => {
                write!(
                    f,
                    "describe_precision must be <= {MAX_DESCRIBE_PRECISION}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
