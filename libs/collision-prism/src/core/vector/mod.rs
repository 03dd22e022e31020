//! Thin adapter over `glam` exposing exactly the vector operations the prism
//! consumes.
//!
//! The prism code is written against [`Vector`] so it runs unchanged on
//! `glam::Vec3` (`f32`) and `glam::DVec3` (`f64`), without higher layers
//! depending on `glam` directly.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use glam::{DVec3, Vec3};

/// Scalar element type of a [`Vector`].
///
/// # Examples
/// ```
/// use collision_prism::Real;
/// assert_eq!(<f32 as Real>::from_f64(0.5), 0.5_f32);
/// assert!(!<f64 as Real>::is_finite(f64::NAN));
/// ```
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Absolute value.
    fn abs(self) -> Self;
    /// Returns `false` for `NaN` and infinities.
    fn is_finite(self) -> bool;
    /// Converts from `f64`, rounding when narrowing.
    fn from_f64(value: f64) -> Self;
    /// Widens to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_real {
    ($scalar:ty) => {
        impl Real for $scalar {
            #[inline]
            fn abs(self) -> Self {
                <$scalar>::abs(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$scalar>::is_finite(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $scalar
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

/// Three-component vector used both for points and for unit directions.
///
/// Normalizing a zero vector is not guarded: the result has non-finite
/// components, which is how degenerate input surfaces downstream.
///
/// # Examples
/// ```
/// use collision_prism::{Vec3, Vector};
/// let x = <Vec3 as Vector>::new(1.0, 0.0, 0.0);
/// let y = <Vec3 as Vector>::new(0.0, 1.0, 0.0);
/// assert_eq!(Vector::cross(x, y), Vec3::Z);
/// ```
pub trait Vector: Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> {
    /// Component type.
    type Scalar: Real;

    /// Builds a vector from its components.
    fn new(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;
    /// Returns `[x, y, z]`.
    fn to_array(self) -> [Self::Scalar; 3];
    /// Multiplies every component by `factor`.
    fn scale(self, factor: Self::Scalar) -> Self;
    /// Dot product.
    fn dot(self, rhs: Self) -> Self::Scalar;
    /// Right-handed cross product.
    fn cross(self, rhs: Self) -> Self;
    /// Unit vector with the same direction.
    fn normalize(self) -> Self;
    /// Euclidean length.
    fn length(self) -> Self::Scalar;
    /// `true` when every component differs by at most `max_abs_diff`.
    fn abs_diff_eq(self, rhs: Self, max_abs_diff: Self::Scalar) -> bool;
    /// `true` when every component is finite.
    fn is_finite(self) -> bool;
}

macro_rules! impl_vector {
    ($vec:ty, $scalar:ty) => {
        impl Vector for $vec {
            type Scalar = $scalar;

            #[inline]
            fn new(x: $scalar, y: $scalar, z: $scalar) -> Self {
                <$vec>::new(x, y, z)
            }

            #[inline]
            fn to_array(self) -> [$scalar; 3] {
                <$vec>::to_array(&self)
            }

            #[inline]
            fn scale(self, factor: $scalar) -> Self {
                self * factor
            }

            #[inline]
            fn dot(self, rhs: Self) -> $scalar {
                <$vec>::dot(self, rhs)
            }

            #[inline]
            fn cross(self, rhs: Self) -> Self {
                <$vec>::cross(self, rhs)
            }

            #[inline]
            fn normalize(self) -> Self {
                <$vec>::normalize(self)
            }

            #[inline]
            fn length(self) -> $scalar {
                <$vec>::length(self)
            }

            #[inline]
            fn abs_diff_eq(self, rhs: Self, max_abs_diff: $scalar) -> bool {
                <$vec>::abs_diff_eq(self, rhs, max_abs_diff)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$vec>::is_finite(self)
            }
        }
    };
}

impl_vector!(Vec3, f32);
impl_vector!(DVec3, f64);
