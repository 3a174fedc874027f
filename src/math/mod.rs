//! Linear algebra type aliases, tolerances and axis bookkeeping.

pub use self::axis::{Axis, AxisCycle, AxisDirection, Direction};
pub use na::{Point3, Vector3};

mod axis;

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The tolerance used when comparing shape coordinates.
///
/// Two breakpoints closer than this are considered equal, and a sweep offset
/// smaller than this in magnitude is considered fully blocked.
pub const EPSILON: Real = 1.0e-7;

/// The coarser tolerance used to reject degenerate moving boxes in sweeps.
pub const BIG_EPSILON: Real = 1.0e-6;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The integer coordinates of a block of a voxel world.
pub type BlockPos = Point3<i32>;
