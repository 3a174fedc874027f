//! Non-persistent geometric queries.
//!
//! The queries of this module move an [`Aabb`](crate::bounding_volume::Aabb)
//! along one axis through voxel shapes:
//!
//! * [`collide`] clips the motion against a list of [`VoxelShape`](crate::shape::VoxelShape)s.
//! * [`collide_with_world`] clips the motion against the blocks of a world
//!   implementing [`BlockCollisions`].

pub use self::sweep::{collide, collide_with_world, BlockCollisions, CollisionExtent};

pub mod sweep;
