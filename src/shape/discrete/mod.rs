//! Integer occupancy grids underlying every [`VoxelShape`](crate::shape::VoxelShape).

pub use self::bitset_discrete_voxel_shape::{BitSetDiscreteVoxelShape, DiscreteShapeBuilder};
pub use self::discrete_voxel_shape::DiscreteVoxelShape;
pub use self::sub_shape::SubShape;

mod bitset_discrete_voxel_shape;
mod discrete_voxel_shape;
mod sub_shape;
