//! # Error Types
//!
//! Errors returned by the checked paths: triangle and direction validation,
//! pool insertion, and configuration.
//!
//! ## Error Policy
//!
//! - `create`, `get_point` and `get_direction` never return errors; degenerate
//!   input shows up as non-finite output
//! - Checked paths report the first violation found, with the offending value
//! - Scalars are widened to `f64` so the error type is not generic

use config::constants::ConfigError;
use thiserror::Error;

use crate::side::{Point, Side};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur on the checked prism paths.
///
/// ## Example
///
/// ```rust
/// use collision_prism::{try_create, DVec3, PrismConfig, PrismError};
///
/// let p = DVec3::new(1.0, 1.0, 1.0);
/// match try_create(DVec3::ZERO, p, p * 2.0, &PrismConfig::default()) {
///     Err(PrismError::DegenerateTriangle { area }) => assert_eq!(area, 0.0),
///     other => panic!("expected a degenerate triangle, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrismError {
    /// The triangle's vertices are collinear, coincident or not finite.
    ///
    /// `area` is `|cross(P1 - P0, P2 - P0)|`, i.e. twice the triangle area.
    #[error("Degenerate triangle: doubled area {area} is not above the tolerance")]
    DegenerateTriangle {
        /// Twice the triangle area.
        area: f64,
    },

    /// A face direction does not have unit length.
    #[error("Direction '{side}' is not unit length: {length}")]
    NonUnitDirection {
        /// Offending side.
        side: Side,
        /// Measured length.
        length: f64,
    },

    /// An in-plane direction is not perpendicular to the normal.
    #[error("Direction '{side}' is not perpendicular to the normal: dot = {dot}")]
    NotOrthogonal {
        /// Offending side.
        side: Side,
        /// Dot product with the normal.
        dot: f64,
    },

    /// Reconstructing a base vertex would divide by (nearly) zero.
    #[error("Reconstructing the {point} divides by {denominator}")]
    DegenerateDenominator {
        /// Vertex being reconstructed.
        point: Point,
        /// `dot(edge, Base)` for that vertex.
        denominator: f64,
    },

    /// The tip-to-base length is zero, negative or not finite.
    #[error("Prism length must be positive and finite: {0}")]
    NonPositiveLength(f64),

    /// A new pool slot cannot be addressed with the pool's index type.
    #[error("Pool index {index} exceeds the index type maximum {max}")]
    IndexOverflow {
        /// Position the new slot would take.
        index: usize,
        /// Largest position the index type can hold.
        max: usize,
    },

    /// Invalid tolerance configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for the checked prism operations.
pub type PrismResult<T> = Result<T, PrismError>;

// =============================================================================
// TESTS
// =============================================================================
