//! # Collision Prism
//!
//! Compact encoding of collision triangles ("prisms") for a 3D physics
//! pipeline. A triangle is decomposed once into four unit directions and a
//! single length; afterwards its vertices and face directions are rebuilt in
//! closed form from indices into shared pools.
//!
//! ## Architecture
//!
//! ```text
//! (P0, P1, P2) → create → PrismGeometry → PrismPools → Prism → get_point
//! ```
//!
//! - [`core`]: vector kernel adapter over `glam` and pool index widths
//! - [`prism`]: decomposition ([`create`]) and the [`Prism`] record
//! - [`pool`]: arena storage with direction interning
//! - [`validate`]: opt-in invariant checks
//!
//! ## Failure model
//!
//! The query path does not branch on bad input. Degenerate triangles and
//! inconsistent pool contents produce non-finite vectors instead of errors;
//! [`try_create`], [`PrismPools::insert_triangle`] and [`validate`] are the
//! checked entry points.
//!
//! ## Usage
//!
//! ```rust
//! use collision_prism::{create, Point, Prism, Side, Vec3};
//!
//! let (p0, p1, p2) = (
//!     Vec3::new(1.0, 3.0, -3.0),
//!     Vec3::new(-2.0, 1.0, 0.0),
//!     Vec3::new(3.0, 0.0, 2.0),
//! );
//! let geometry = create(p0, p1, p2);
//!
//! let points = vec![p0];
//! let directions = geometry.directions().to_vec();
//! let prism: Prism<f32> = Prism::from_geometry(&geometry, 0, [0, 1, 2, 3], ());
//!
//! let right = prism.get_point(&points, &directions, Point::RightBase);
//! assert!(right.abs_diff_eq(p2, 1.0e-3));
//! assert!(prism.get_direction(&directions, Side::Normal).y > 0.8);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod pool;
pub mod prism;
pub mod side;
pub mod validate;

pub use crate::config::PrismConfig;
pub use crate::core::index::PoolIndex;
pub use crate::core::vector::{DVec3, Real, Vec3, Vector};
pub use error::{PrismError, PrismResult};
pub use pool::PrismPools;
pub use prism::{create, try_create, Prism, PrismGeometry};
pub use side::{Point, Side, SIDE_COUNT};
