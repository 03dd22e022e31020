//! Integer handles into the shared point and direction pools.
//!
//! The index width is a type parameter so meshes with few unique directions
//! can store prisms with `u16` (or `u8`) handles.

use std::fmt::Debug;

/// Unsigned integer type used to address a pool slot.
///
/// # Examples
/// ```
/// use collision_prism::PoolIndex;
/// assert_eq!(<u16 as PoolIndex>::from_usize(7), Some(7_u16));
/// assert_eq!(<u16 as PoolIndex>::from_usize(70_000), None);
/// assert_eq!(PoolIndex::to_usize(7_u32), 7);
/// ```
pub trait PoolIndex: Copy + Eq + Debug {
    /// Largest slot position representable by this type.
    const MAX_INDEX: usize;

    /// Converts a slot position, returning `None` when it does not fit.
    fn from_usize(index: usize) -> Option<Self>;
    /// Converts back to a slot position.
    fn to_usize(self) -> usize;
}

macro_rules! impl_pool_index {
    ($($index:ty),*) => {
        $(
            impl PoolIndex for $index {
                const MAX_INDEX: usize = <$index>::MAX as usize;

                #[inline]
                fn from_usize(index: usize) -> Option<Self> {
                    <$index>::try_from(index).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_pool_index!(u8, u16, u32, usize);
