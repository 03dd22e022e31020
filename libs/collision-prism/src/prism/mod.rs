//! Prism decomposition and reconstruction.
//!
//! [`create`] turns a triangle into a [`PrismGeometry`]: unit `Normal`,
//! `Left`, `Right` and `Base` directions plus the tip-to-base `length`.
//! A [`Prism`] keeps only that length and pool indices; its vertices are
//! rebuilt on demand with [`Prism::get_point`].

pub mod geometry;
pub mod record;

pub use geometry::{create, try_create, PrismGeometry};
pub use record::Prism;
