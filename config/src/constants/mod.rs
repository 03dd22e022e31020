//! Centralized tolerance values shared across the collision prism workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Smallest `|cross(P1 - P0, P2 - P0)|` (twice the triangle area) accepted by
/// the checked triangle paths. Anything at or below is treated as collinear or
/// coincident.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_AREA_EPSILON;
/// assert!(DEGENERATE_AREA_EPSILON < 1.0e-6);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-9;

/// Allowed deviation of a direction's length from one, and of a dot product
/// from zero, when validating prism directions.
///
/// Sized for `f32` directions; `f64` data passes comfortably.
///
/// # Examples
/// ```
/// use config::constants::UNIT_LENGTH_TOLERANCE;
/// let length: f64 = 1.0 + 1.0e-6;
/// assert!((length - 1.0).abs() <= UNIT_LENGTH_TOLERANCE);
/// ```
pub const UNIT_LENGTH_TOLERANCE: f64 = 1.0e-4;

/// Per-component distance under which two unit directions share a pool slot.
///
/// Zero, so only identical directions share a slot. A non-zero value is still
/// subject to the round-trip check in the pools.
///
/// # Examples
/// ```
/// use config::constants::DIRECTION_MERGE_EPSILON;
/// assert_eq!(DIRECTION_MERGE_EPSILON, 0.0);
/// ```
pub const DIRECTION_MERGE_EPSILON: f64 = 0.0;

/// Absolute per-component tolerance for comparing reconstructed vertices with
/// the triangle they were derived from.
///
/// # Examples
/// ```
/// use config::constants::ROUND_TRIP_TOLERANCE;
/// assert_eq!(ROUND_TRIP_TOLERANCE, 1.0e-3);
/// ```
pub const ROUND_TRIP_TOLERANCE: f64 = 1.0e-3;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance for unit-length and orthogonality checks.
    pub tolerance: f64,
    /// Minimum doubled triangle area accepted by checked paths.
    pub degenerate_epsilon: f64,
    /// Per-component distance under which pooled directions are merged.
    pub merge_epsilon: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-3, 1.0e-9, 0.0).expect("valid config");
    /// assert_eq!(cfg.merge_epsilon, 0.0);
    /// ```
    pub fn new(
        tolerance: f64,
        degenerate_epsilon: f64,
        merge_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(degenerate_epsilon >= 0.0 && degenerate_epsilon.is_finite()) {
            return Err(ConfigError::InvalidDegenerateEpsilon(degenerate_epsilon));
        }
        // Zero merges exact duplicates only; below 1 keeps distinct unit axes apart.
        if !(0.0..1.0).contains(&merge_epsilon) {
            return Err(ConfigError::InvalidMergeEpsilon(merge_epsilon));
        }
        Ok(Self {
            tolerance,
            degenerate_epsilon,
            merge_epsilon,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: UNIT_LENGTH_TOLERANCE,
            degenerate_epsilon: DEGENERATE_AREA_EPSILON,
            merge_epsilon: DIRECTION_MERGE_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the validation tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the degenerate-area threshold is negative or not finite.
    InvalidDegenerateEpsilon(f64),
    /// Raised when the merge distance lies outside `[0, 1)`.
    InvalidMergeEpsilon(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidDegenerateEpsilon(value) => {
                write!(f, "degenerate_epsilon must be >= 0 and finite: {value}")
            }
            ConfigError::InvalidMergeEpsilon(value) => {
                write!(f, "merge_epsilon must lie in [0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
