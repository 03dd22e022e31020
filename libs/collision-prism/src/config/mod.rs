//! Prism-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace tolerances so the validation and pool
//! layers stay decoupled from literal constants.

use config::constants::{
    GlobalConfig, DEGENERATE_AREA_EPSILON, DIRECTION_MERGE_EPSILON, UNIT_LENGTH_TOLERANCE,
};

use crate::error::PrismResult;

/// Tolerances used by the checked paths.
///
/// # Examples
/// ```
/// use collision_prism::PrismConfig;
/// let cfg = PrismConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismConfig {
    /// Allowed deviation from unit length and from orthogonality.
    pub tolerance: f64,
    /// Doubled triangle area at or below which a triangle is degenerate.
    pub degenerate_epsilon: f64,
    /// Per-component distance under which pooled directions share a slot.
    pub merge_epsilon: f64,
}

impl PrismConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use collision_prism::PrismConfig;
    /// let cfg = PrismConfig::new(1.0e-6, 1.0e-12, 0.0).unwrap();
    /// assert_eq!(cfg.merge_epsilon, 0.0);
    /// assert!(PrismConfig::new(-1.0, 1.0e-12, 0.0).is_err());
    /// ```
    pub fn new(tolerance: f64, degenerate_epsilon: f64, merge_epsilon: f64) -> PrismResult<Self> {
        let global = GlobalConfig::new(tolerance, degenerate_epsilon, merge_epsilon)?;
        Ok(Self::from(global))
    }
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            tolerance: UNIT_LENGTH_TOLERANCE,
            degenerate_epsilon: DEGENERATE_AREA_EPSILON,
            merge_epsilon: DIRECTION_MERGE_EPSILON,
        }
    }
}

impl From<GlobalConfig> for PrismConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
            degenerate_epsilon: global.degenerate_epsilon,
            merge_epsilon: global.merge_epsilon,
        }
    }
}

#[cfg(test)]
mod tests;
