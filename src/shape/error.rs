use crate::math::{Axis, Real};
use crate::shape::BooleanOp;

/// Error indicating that a shape could not be built or queried from the given arguments.
///
/// Every panicking entry point of this crate has a `try_` twin returning this
/// error instead. Reaching one of these is a bug on the caller side.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A box was given a minimum larger than its maximum.
    #[error("the min values need to be smaller or equal to the max values ({axis:?}: {min} > {max})")]
    InvertedBounds {
        /// The first axis where the bounds are inverted.
        axis: Axis,
        /// The minimum given along that axis.
        min: Real,
        /// The maximum given along that axis.
        max: Real,
    },
    /// The boolean operator is true where neither shape is filled.
    #[error("the operator {0:?} is true outside of both shapes")]
    DegenerateOperator(BooleanOp),
    /// Coordinate lists that do not match the size of the occupancy grid.
    #[error("{axis:?} has {found} coordinates for a grid needing {expected}")]
    InconsistentCoords {
        /// The axis with the mismatch.
        axis: Axis,
        /// The number of coordinates the grid needs.
        expected: usize,
        /// The number of coordinates given.
        found: usize,
    },
    /// The operation is not defined on empty shapes.
    #[error("no bounds for empty shape")]
    EmptyShape,
}
