//! Voxel collision shapes.

pub use self::array_voxel_shape::ArrayVoxelShape;
pub use self::boolean_op::BooleanOp;
pub use self::coords::AxisCoords;
pub use self::cube_voxel_shape::CubeVoxelShape;
pub use self::discrete::{DiscreteShapeBuilder, DiscreteVoxelShape};
pub use self::error::ShapeError;
pub use self::merger::{IndexMerger, MAX_DISCRETE_MERGE_CELLS};
pub use self::shapes::MAX_FIND_BITS;
pub use self::slice_shape::SliceShape;
#[doc(inline)]
pub use self::voxel_shape::{TypedVoxelShape, VoxelShape};

pub mod discrete;
pub mod merger;
pub mod shapes;

mod array_voxel_shape;
mod boolean_op;
mod coords;
mod cube_voxel_shape;
mod error;
mod slice_shape;
mod voxel_shape;
