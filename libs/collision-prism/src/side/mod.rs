//! Closed enumerations naming a prism's face directions and vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of face directions stored per prism.
pub const SIDE_COUNT: usize = 4;

/// Face direction of a prism.
///
/// The declaration order is significant: [`Side::index`] is used directly as
/// an array index into a prism's side indices.
///
/// # Examples
/// ```
/// use collision_prism::Side;
/// assert_eq!(Side::Base.index(), 3);
/// assert_eq!(Side::from_index(1), Some(Side::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Perpendicular to the triangle plane, facing the counter-clockwise side.
    Normal,
    /// In-plane, perpendicular to the tip → left-base edge, pointing outward.
    Left,
    /// In-plane, perpendicular to the tip → right-base edge, pointing outward.
    Right,
    /// In-plane, perpendicular to the base edge, pointing away from the tip.
    Base,
}

impl Side {
    /// All sides in index order.
    pub const ALL: [Side; SIDE_COUNT] = [Side::Normal, Side::Left, Side::Right, Side::Base];

    /// Position of this side in a prism's side index array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Side::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Normal => "normal",
            Side::Left => "left",
            Side::Right => "right",
            Side::Base => "base",
        };
        f.write_str(name)
    }
}

/// Vertex of a prism that can be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// Apex; stored directly in the point pool.
    Tip,
    /// Base vertex reached from the tip along the left edge.
    LeftBase,
    /// Base vertex reached from the tip along the right edge.
    RightBase,
}

impl Point {
    /// All points in triangle winding order.
    pub const ALL: [Point; 3] = [Point::Tip, Point::LeftBase, Point::RightBase];
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Point::Tip => "tip",
            Point::LeftBase => "left base",
            Point::RightBase => "right base",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests;
