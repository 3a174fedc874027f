use crate::math::BlockPos;
use crate::shape::VoxelShape;

/// How far the collision shape of a block may reach outside of its own cell.
///
/// World sweeps only look at the blocks around the swept box. Blocks on the
/// outer ring of that neighborhood are only consulted when their shape may
/// reach into it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CollisionExtent {
    /// The shape stays inside of `[0, 1]³`.
    #[default]
    Contained,
    /// The shape may poke into face-adjacent cells, like a fence.
    Large,
    /// The shape may reach any neighboring cell, like a block being moved.
    Oversized,
}

impl CollisionExtent {
    /// The number of neighborhood boundaries a block with this extent may lie on
    /// and still be consulted.
    pub const fn max_boundaries(self) -> u32 {
        match self {
            CollisionExtent::Contained => 0,
            CollisionExtent::Large => 1,
            CollisionExtent::Oversized => 2,
        }
    }
}

/// A grid of blocks, each with a collision shape expressed in its own cell.
///
/// The shape of the block at `pos` is given in coordinates relative to `pos`:
/// a full block is [`shapes::block()`](crate::shape::shapes::block) whatever
/// its position.
pub trait BlockCollisions {
    /// Opaque data forwarded untouched to [`Self::collision_shape`], typically
    /// describing the entity being moved.
    type Context: ?Sized;

    /// How far the shape of the block at `pos` may reach outside of its cell.
    fn collision_extent(&self, _pos: &BlockPos) -> CollisionExtent {
        CollisionExtent::Contained
    }

    /// The collision shape of the block at `pos`, relative to `pos`.
    fn collision_shape(&self, pos: &BlockPos, context: &Self::Context) -> VoxelShape;
}
