//! Opt-in checks for the invariants the prism relies on but never enforces.
//!
//! `create` and `get_point` stay branch-free; callers that accept untrusted
//! triangles or pool contents run these first. Every check reports the first
//! violation it finds.

use tracing::trace;

use crate::core::index::PoolIndex;
use crate::core::vector::{Real, Vector};
use crate::error::{PrismError, PrismResult};
use crate::prism::{Prism, PrismGeometry};
use crate::side::{Point, Side, SIDE_COUNT};

/// Rejects triangles whose doubled area `|cross(P1 - P0, P2 - P0)|` is not
/// finite or not above `epsilon`.
///
/// # Examples
/// ```
/// use collision_prism::validate::check_triangle;
/// use collision_prism::Vec3;
///
/// assert!(check_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, 1.0e-9).is_ok());
/// assert!(check_triangle(Vec3::ZERO, Vec3::X, Vec3::X, 1.0e-9).is_err());
/// ```
pub fn check_triangle<V: Vector>(
    tip: V,
    left_base: V,
    right_base: V,
    epsilon: f64,
) -> PrismResult<()> {
    let area = (left_base - tip).cross(right_base - tip).length().to_f64();
    if !(area.is_finite() && area > epsilon) {
        trace!(area, epsilon, "triangle is degenerate");
        return Err(PrismError::DegenerateTriangle { area });
    }
    Ok(())
}

/// Checks unit length, orthogonality to the normal, non-degenerate
/// reconstruction denominators, and a positive finite length.
///
/// # Examples
/// ```
/// use collision_prism::validate::check_geometry;
/// use collision_prism::{create, DVec3};
///
/// let geometry = create(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert!(check_geometry(&geometry, 1.0e-9).is_ok());
/// ```
pub fn check_geometry<V: Vector>(geometry: &PrismGeometry<V>, tolerance: f64) -> PrismResult<()> {
    check_directions(geometry.directions(), tolerance)?;
    let length = geometry.length().to_f64();
    if !(length.is_finite() && length > 0.0) {
        trace!(length, "prism length is not positive");
        return Err(PrismError::NonPositiveLength(length));
    }
    Ok(())
}

/// Runs the direction checks of [`check_geometry`] on the directions a
/// pooled prism refers to.
///
/// This catches pool contents that would make [`Prism::get_point`] silently
/// wrong, such as slots overwritten after the prism was built.
///
/// # Panics
/// Panics if a side slot is out of range for `directions`.
pub fn check_pool_directions<V, I, U>(
    prism: &Prism<V::Scalar, I, U>,
    directions: &[V],
    tolerance: f64,
) -> PrismResult<()>
where
    V: Vector,
    I: PoolIndex,
{
    check_directions(
        Side::ALL.map(|side| prism.get_direction(directions, side)),
        tolerance,
    )
}

fn check_directions<V: Vector>(directions: [V; SIDE_COUNT], tolerance: f64) -> PrismResult<()> {
    let direction = |side: Side| directions[side.index()];

    for side in Side::ALL {
        let length = direction(side).length().to_f64();
        if !((length - 1.0).abs() <= tolerance) {
            trace!(%side, length, "direction is not unit length");
            return Err(PrismError::NonUnitDirection { side, length });
        }
    }

    let normal = direction(Side::Normal);
    for side in [Side::Left, Side::Right, Side::Base] {
        let dot = normal.dot(direction(side)).to_f64();
        if !(dot.abs() <= tolerance) {
            trace!(%side, dot, "direction is not perpendicular to the normal");
            return Err(PrismError::NotOrthogonal { side, dot });
        }
    }

    let base = direction(Side::Base);
    let edges = [
        (Point::LeftBase, normal.cross(direction(Side::Left))),
        (Point::RightBase, direction(Side::Right).cross(normal)),
    ];
    for (point, edge) in edges {
        let denominator = edge.dot(base).to_f64();
        if !(denominator.abs() > tolerance) {
            trace!(%point, denominator, "reconstruction denominator is degenerate");
            return Err(PrismError::DegenerateDenominator { point, denominator });
        }
    }

    trace!("prism directions are consistent");
    Ok(())
}
