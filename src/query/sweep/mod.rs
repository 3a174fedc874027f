//! Single-axis sweeps of a box against voxel shapes.
//!
//! A sweep moves an [`Aabb`](crate::bounding_volume::Aabb) along one
//! coordinate axis and returns how far it can go before touching a shape.
//! Moving along several axes is done by sweeping one axis at a time.

pub use self::block_collisions::{BlockCollisions, CollisionExtent};
pub use self::sweep_shapes::collide;
pub use self::sweep_world::collide_with_world;

mod block_collisions;
mod sweep_shapes;
mod sweep_world;
