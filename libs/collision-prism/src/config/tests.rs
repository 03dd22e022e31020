//! Tests covering prism configuration behavior.

use super::*;
use crate::error::PrismError;
use config::constants::ConfigError;

#[test]
fn test_default_matches_constants() {
    let cfg = PrismConfig::default();
    assert_eq!(cfg.tolerance, UNIT_LENGTH_TOLERANCE);
    assert_eq!(cfg.degenerate_epsilon, DEGENERATE_AREA_EPSILON);
    assert_eq!(cfg.merge_epsilon, DIRECTION_MERGE_EPSILON);
    assert_eq!(PrismConfig::from(GlobalConfig::default()), cfg);
}

#[test]
fn test_builder_validates_input() {
    let err = PrismConfig::new(0.0, 1.0e-9, 1.0e-6).unwrap_err();
    assert_eq!(err, PrismError::Config(ConfigError::InvalidTolerance(0.0)));

    let err = PrismConfig::new(1.0e-4, 1.0e-9, 1.0).unwrap_err();
    assert_eq!(err, PrismError::Config(ConfigError::InvalidMergeEpsilon(1.0)));
}
