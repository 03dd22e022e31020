//! Arena storage for prism points and directions.
//!
//! Prisms refer to pool slots by integer handle only. Directions are interned:
//! coplanar neighbours in a mesh share their `Normal` slot, and any other
//! direction that repeats exactly is stored once. A non-zero merge tolerance
//! also shares near-identical directions, but only for triangles that still
//! reconstruct within [`ROUND_TRIP_TOLERANCE`] from the shared slots.
//!
//! The pools are plain owned vectors. Concurrent readers share `&PrismPools`;
//! inserting needs `&mut`, so writers are serialized against readers by the
//! borrow checker rather than by locks.

use std::marker::PhantomData;

use config::constants::ROUND_TRIP_TOLERANCE;
use tracing::{debug, warn};

use crate::config::PrismConfig;
use crate::core::index::PoolIndex;
use crate::core::vector::{Real, Vector};
use crate::error::{PrismError, PrismResult};
use crate::prism::{create, Prism, PrismGeometry};
use crate::side::{Point, Side, SIDE_COUNT};
use crate::validate;

/// Shared point and direction pools addressed with `I` handles.
///
/// # Examples
/// ```
/// use collision_prism::{Point, PrismPools, Vec3};
///
/// let mut pools: PrismPools<Vec3> = PrismPools::new();
/// let prism = pools
///     .insert_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, "floor")
///     .unwrap();
///
/// assert_eq!(pools.point(&prism, Point::Tip), Vec3::ZERO);
/// assert!(pools.point(&prism, Point::RightBase).abs_diff_eq(Vec3::Y, 1.0e-6));
/// assert_eq!(*prism.user_data(), "floor");
/// ```
#[derive(Debug, Clone)]
pub struct PrismPools<V, I = u32> {
    points: Vec<V>,
    directions: Vec<V>,
    config: PrismConfig,
    _index: PhantomData<I>,
}

impl<V: Vector, I: PoolIndex> Default for PrismPools<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vector, I: PoolIndex> PrismPools<V, I> {
    /// Empty pools with the default tolerances.
    pub fn new() -> Self {
        Self::with_config(PrismConfig::default())
    }

    /// Empty pools with explicit tolerances.
    pub fn with_config(config: PrismConfig) -> Self {
        Self {
            points: Vec::new(),
            directions: Vec::new(),
            config,
            _index: PhantomData,
        }
    }

    /// Tolerances used for interning and triangle checks.
    pub fn config(&self) -> &PrismConfig {
        &self.config
    }

    /// Point pool, indexed by [`Prism::tip_index`].
    pub fn points(&self) -> &[V] {
        &self.points
    }

    /// Direction pool, indexed by [`Prism::side_indices`].
    pub fn directions(&self) -> &[V] {
        &self.directions
    }

    /// Number of stored points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of stored directions.
    pub fn direction_count(&self) -> usize {
        self.directions.len()
    }

    /// Appends a point and returns its handle.
    pub fn push_point(&mut self, point: V) -> PrismResult<I> {
        let index = slot_index(self.points.len())?;
        self.points.push(point);
        Ok(index)
    }

    /// Appends a direction without looking for an existing match.
    pub fn push_direction(&mut self, direction: V) -> PrismResult<I> {
        let index = slot_index(self.directions.len())?;
        self.directions.push(direction);
        Ok(index)
    }

    /// Returns the slot of a stored direction whose components all lie within
    /// `merge_epsilon` of `direction`, appending it when none does.
    ///
    /// Lookup is a linear scan over the direction pool. With the default
    /// `merge_epsilon` of zero only identical directions share a slot.
    pub fn intern_direction(&mut self, direction: V) -> PrismResult<I> {
        self.intern_within(direction, self.config.merge_epsilon)
    }

    fn intern_within(&mut self, direction: V, merge_epsilon: f64) -> PrismResult<I> {
        let epsilon = V::Scalar::from_f64(merge_epsilon);
        let existing = self
            .directions
            .iter()
            .position(|stored| stored.abs_diff_eq(direction, epsilon));
        match existing {
            Some(slot) => {
                debug!(slot, "reusing pooled direction");
                slot_index(slot)
            }
            None => self.push_direction(direction),
        }
    }

    /// Decomposes the triangle, interns its directions, stores its tip and
    /// returns the record.
    ///
    /// Degenerate triangles are rejected before anything is stored. When a
    /// tolerant merge would move a reconstructed vertex by more than
    /// [`ROUND_TRIP_TOLERANCE`], the sides are interned again exactly. If a
    /// handle overflows midway, directions appended by this call are removed
    /// again so the pools are left as they were.
    pub fn insert_triangle<U>(
        &mut self,
        tip: V,
        left_base: V,
        right_base: V,
        user_data: U,
    ) -> PrismResult<Prism<V::Scalar, I, U>> {
        if let Err(err) =
            validate::check_triangle(tip, left_base, right_base, self.config.degenerate_epsilon)
        {
            warn!(%err, "rejecting degenerate triangle");
            return Err(err);
        }

        let geometry = create(tip, left_base, right_base);
        let direction_mark = self.directions.len();
        let stored = self
            .intern_sides(geometry.directions(), self.config.merge_epsilon)
            .and_then(|side_indices| {
                if self.config.merge_epsilon == 0.0
                    || self.reconstructs(&geometry, [tip, left_base, right_base], side_indices)
                {
                    return Ok(side_indices);
                }
                debug!("merged directions drift the triangle, interning exactly");
                self.directions.truncate(direction_mark);
                self.intern_sides(geometry.directions(), 0.0)
            })
            .and_then(|side_indices| {
                self.push_point(tip)
                    .map(|tip_index| (tip_index, side_indices))
            });

        match stored {
            Ok((tip_index, side_indices)) => {
                debug!(
                    tip = tip_index.to_usize(),
                    length = geometry.length().to_f64(),
                    directions = self.directions.len(),
                    "inserted prism"
                );
                Ok(Prism::from_geometry(&geometry, tip_index, side_indices, user_data))
            }
            Err(err) => {
                self.directions.truncate(direction_mark);
                Err(err)
            }
        }
    }

    /// Direction of `side` for a prism built from these pools.
    ///
    /// # Panics
    /// Panics if `prism` refers to slots these pools do not have.
    pub fn direction<U>(&self, prism: &Prism<V::Scalar, I, U>, side: Side) -> V {
        prism.get_direction(&self.directions, side)
    }

    /// Reconstructed `point` for a prism built from these pools.
    ///
    /// # Panics
    /// Panics if `prism` refers to slots these pools do not have.
    pub fn point<U>(&self, prism: &Prism<V::Scalar, I, U>, point: Point) -> V {
        prism.get_point(&self.points, &self.directions, point)
    }

    /// All three reconstructed vertices, in [`Point::ALL`] order.
    ///
    /// # Panics
    /// Panics if `prism` refers to slots these pools do not have.
    pub fn vertices<U>(&self, prism: &Prism<V::Scalar, I, U>) -> [V; 3] {
        prism.points(&self.points, &self.directions)
    }

    fn intern_sides(
        &mut self,
        directions: [V; SIDE_COUNT],
        merge_epsilon: f64,
    ) -> PrismResult<[I; SIDE_COUNT]> {
        let [normal, left, right, base] = directions;
        Ok([
            self.intern_within(normal, merge_epsilon)?,
            self.intern_within(left, merge_epsilon)?,
            self.intern_within(right, merge_epsilon)?,
            self.intern_within(base, merge_epsilon)?,
        ])
    }

    /// `true` when the pooled `side_indices` rebuild `vertices` within
    /// [`ROUND_TRIP_TOLERANCE`].
    fn reconstructs(
        &self,
        geometry: &PrismGeometry<V>,
        vertices: [V; 3],
        side_indices: [I; SIDE_COUNT],
    ) -> bool {
        let Some(tip_slot) = I::from_usize(0) else {
            return false;
        };
        let candidate: Prism<V::Scalar, I> =
            Prism::from_geometry(geometry, tip_slot, side_indices, ());
        let tolerance = V::Scalar::from_f64(ROUND_TRIP_TOLERANCE);
        candidate
            .points(&vertices[..1], &self.directions)
            .into_iter()
            .zip(vertices)
            .all(|(rebuilt, vertex)| rebuilt.abs_diff_eq(vertex, tolerance))
    }
}

fn slot_index<I: PoolIndex>(index: usize) -> PrismResult<I> {
    I::from_usize(index).ok_or(PrismError::IndexOverflow {
        index,
        max: I::MAX_INDEX,
    })
}

#[cfg(test)]
mod tests;
