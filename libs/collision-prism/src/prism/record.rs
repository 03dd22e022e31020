//! The stored prism record and closed-form reconstruction.

use serde::{Deserialize, Serialize};

use crate::core::index::PoolIndex;
use crate::core::vector::{Real, Vector};
use crate::prism::geometry::PrismGeometry;
use crate::side::{Point, Side, SIDE_COUNT};

/// Compact triangle record: one length and indices into shared pools.
///
/// The record owns neither its tip point nor its directions; both live in
/// pools passed in at query time, which must be the pools the indices were
/// issued from. Only `user_data` can change after construction.
///
/// Type parameters: `R` is the scalar type, `I` the pool index width and `U`
/// an opaque payload the prism never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prism<R, I = u32, U = ()> {
    length: R,
    tip_index: I,
    side_indices: [I; SIDE_COUNT],
    user_data: U,
}

impl<R: Real, I: PoolIndex, U> Prism<R, I, U> {
    /// Builds a record from its parts.
    ///
    /// `side_indices` is in [`Side`] index order: normal, left, right, base.
    pub fn new(length: R, tip_index: I, side_indices: [I; SIDE_COUNT], user_data: U) -> Self {
        Self {
            length,
            tip_index,
            side_indices,
            user_data,
        }
    }

    /// Builds a record taking the length from `geometry`.
    pub fn from_geometry<V: Vector<Scalar = R>>(
        geometry: &PrismGeometry<V>,
        tip_index: I,
        side_indices: [I; SIDE_COUNT],
        user_data: U,
    ) -> Self {
        Self::new(geometry.length(), tip_index, side_indices, user_data)
    }

    /// Tip-to-base distance measured along `Base`.
    #[inline]
    pub fn length(&self) -> R {
        self.length
    }

    /// Slot of the tip in the point pool.
    #[inline]
    pub fn tip_index(&self) -> I {
        self.tip_index
    }

    /// Direction slots in [`Side`] index order.
    #[inline]
    pub fn side_indices(&self) -> [I; SIDE_COUNT] {
        self.side_indices
    }

    /// Direction slot for `side`.
    #[inline]
    pub fn side_index(&self, side: Side) -> I {
        self.side_indices[side.index()]
    }

    /// Caller payload.
    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Mutable caller payload; the geometry itself stays immutable.
    pub fn user_data_mut(&mut self) -> &mut U {
        &mut self.user_data
    }

    /// Consumes the record, returning the payload.
    pub fn into_user_data(self) -> U {
        self.user_data
    }

    /// Looks up the direction of `side` in `directions`.
    ///
    /// # Panics
    /// Panics if the side's slot is out of range for `directions`.
    #[inline]
    pub fn get_direction<V: Vector>(&self, directions: &[V], side: Side) -> V {
        directions[self.side_index(side).to_usize()]
    }

    /// Reconstructs `point` from the tip and the pooled directions.
    ///
    /// A base vertex lies on the ray from the tip along the edge direction
    /// (`Normal × Left` or `Right × Normal`); the ray parameter is fixed by
    /// the edge's projection onto `Base` having to equal `length`. Directions
    /// are assumed unit length and consistent with one triangle. Nothing is
    /// checked, so inconsistent pool contents give wrong or non-finite points.
    ///
    /// # Panics
    /// Panics if the tip or a side slot is out of range for its pool.
    ///
    /// # Examples
    /// ```
    /// use collision_prism::{create, Point, Prism, Side, Vec3};
    ///
    /// let (p0, p1, p2) = (Vec3::ZERO, Vec3::X, Vec3::Y);
    /// let geometry = create(p0, p1, p2);
    /// let points = vec![p0];
    /// let directions = geometry.directions().to_vec();
    /// let prism: Prism<f32> = Prism::from_geometry(&geometry, 0, [0, 1, 2, 3], ());
    ///
    /// let left = prism.get_point(&points, &directions, Point::LeftBase);
    /// assert!(left.abs_diff_eq(p1, 1.0e-6));
    /// ```
    pub fn get_point<V: Vector<Scalar = R>>(&self, points: &[V], directions: &[V], point: Point) -> V {
        let tip = points[self.tip_index.to_usize()];
        let edge = match point {
            Point::Tip => return tip,
            Point::LeftBase => self
                .get_direction(directions, Side::Normal)
                .cross(self.get_direction(directions, Side::Left)),
            Point::RightBase => self
                .get_direction(directions, Side::Right)
                .cross(self.get_direction(directions, Side::Normal)),
        };
        let denominator = edge.dot(self.get_direction(directions, Side::Base));
        tip + edge.scale(self.length / denominator)
    }

    /// Reconstructs all three vertices in [`Point::ALL`] order.
    ///
    /// # Panics
    /// Panics if the tip or a side slot is out of range for its pool.
    pub fn points<V: Vector<Scalar = R>>(&self, points: &[V], directions: &[V]) -> [V; 3] {
        Point::ALL.map(|point| self.get_point(points, directions, point))
    }
}
