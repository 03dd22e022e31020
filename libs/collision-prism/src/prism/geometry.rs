//! Decomposition of a triangle into four unit directions and one length.

use serde::{Deserialize, Serialize};

use crate::config::PrismConfig;
use crate::core::vector::{Real, Vector};
use crate::error::PrismResult;
use crate::side::{Side, SIDE_COUNT};
use crate::validate;

/// Geometric signature of a triangle produced by [`create`].
///
/// Directions are stored in [`Side`] index order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrismGeometry<V: Vector> {
    length: V::Scalar,
    directions: [V; SIDE_COUNT],
}

impl<V: Vector> PrismGeometry<V> {
    /// Assembles a signature from precomputed parts. Nothing is verified; see
    /// [`validate::check_geometry`].
    pub fn new(length: V::Scalar, directions: [V; SIDE_COUNT]) -> Self {
        Self { length, directions }
    }

    /// Distance from the tip to the base line, measured along `Base`.
    #[inline]
    pub fn length(&self) -> V::Scalar {
        self.length
    }

    /// Direction for `side`.
    #[inline]
    pub fn direction(&self, side: Side) -> V {
        self.directions[side.index()]
    }

    /// All four directions in [`Side`] index order.
    #[inline]
    pub fn directions(&self) -> [V; SIDE_COUNT] {
        self.directions
    }

    /// `false` when any component or the length is `NaN` or infinite, which
    /// is what a degenerate triangle produces.
    pub fn is_finite(&self) -> bool {
        self.length.is_finite() && self.directions.iter().all(|d| d.is_finite())
    }
}

/// Decomposes the triangle `(tip, left_base, right_base)`.
///
/// Vertices are expected in counter-clockwise order seen from the side the
/// normal should face. The input is not checked: collinear or coincident
/// vertices yield non-finite directions and length. Use [`try_create`] to get
/// an error instead.
///
/// # Examples
/// ```
/// use collision_prism::{create, Side, Vec3};
///
/// let geometry = create(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(geometry.direction(Side::Normal), Vec3::Z);
/// assert_eq!(geometry.direction(Side::Left), Vec3::NEG_Y);
/// assert_eq!(geometry.direction(Side::Right), Vec3::NEG_X);
/// assert!((geometry.length() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1.0e-6);
/// ```
pub fn create<V: Vector>(tip: V, left_base: V, right_base: V) -> PrismGeometry<V> {
    let to_left_base = left_base - tip;
    let to_right_base = right_base - tip;
    let base_edge = right_base - left_base;

    let normal = to_left_base.cross(to_right_base).normalize();
    let left = to_left_base.cross(normal).normalize();
    let right = normal.cross(to_right_base).normalize();
    let base = base_edge.cross(normal).normalize();

    PrismGeometry {
        length: to_left_base.dot(base),
        directions: [normal, left, right, base],
    }
}

/// Like [`create`], but rejects degenerate triangles with
/// [`PrismError::DegenerateTriangle`](crate::PrismError::DegenerateTriangle).
///
/// # Examples
/// ```
/// use collision_prism::{try_create, DVec3, PrismConfig};
///
/// let cfg = PrismConfig::default();
/// assert!(try_create(DVec3::ZERO, DVec3::X, DVec3::Y, &cfg).is_ok());
/// assert!(try_create(DVec3::ZERO, DVec3::X, DVec3::X * 2.0, &cfg).is_err());
/// ```
pub fn try_create<V: Vector>(
    tip: V,
    left_base: V,
    right_base: V,
    config: &PrismConfig,
) -> PrismResult<PrismGeometry<V>> {
    validate::check_triangle(tip, left_base, right_base, config.degenerate_epsilon)?;
    Ok(create(tip, left_base, right_base))
}
