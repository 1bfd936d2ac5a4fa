//! Crate-level configuration helpers building on the shared `config` crate.
//!
//! Vector operations that accept a tolerance or a rendering precision read it
//! from [`VectorConfig`] instead of literal constants.

use config::constants::{ConfigError, GlobalConfig, DESCRIBE_PRECISION, EQUALS_DELTA};

/// Tolerance and rendering configuration for vector operations.
///
/// # Examples
/// ```
/// use hvec::config::VectorConfig;
/// let cfg = VectorConfig::default();
/// assert!(cfg.equals_delta > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Componentwise tolerance used by approximate equality.
    pub equals_delta: f32,
    /// Fractional digits printed per component.
    pub describe_precision: usize,
}

impl VectorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use hvec::config::VectorConfig;
    /// let cfg = VectorConfig::new(1.0e-2, 3).unwrap();
    /// assert_eq!(cfg.describe_precision, 3);
    /// ```
    pub fn new(equals_delta: f32, describe_precision: usize) -> Result<Self, VectorConfigError> {
        GlobalConfig::new(equals_delta, describe_precision)
            .map(Self::from)
            .map_err(VectorConfigError)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            equals_delta: EQUALS_DELTA,
            describe_precision: DESCRIBE_PRECISION,
        }
    }
}

impl From<GlobalConfig> for VectorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            equals_delta: cfg.equals_delta,
            describe_precision: cfg.describe_precision,
        }
    }
}

/// Error wrapper for invalid vector configuration.
#[derive(Debug, PartialEq)]
pub struct VectorConfigError(pub ConfigError);

impl std::fmt::Display for VectorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for VectorConfigError {}
