use crate::math::{Axis, Real};
use crate::shape::discrete::DiscreteVoxelShape;
use crate::shape::AxisCoords;
use crate::utils;
use alloc::sync::Arc;

/// A shape whose grid is the regular subdivision of the unit cube.
///
/// Along each axis, the `n` cells of the occupancy grid are the intervals
/// `[i / n, (i + 1) / n]`.
#[derive(Clone, Debug)]
pub struct CubeVoxelShape {
    shape: Arc<DiscreteVoxelShape>,
}

impl CubeVoxelShape {
    /// Lays `shape` onto the unit cube.
    ///
    /// Every axis of `shape` must have at least one cell.
    pub fn new(shape: Arc<DiscreteVoxelShape>) -> Self {
        debug_assert!(shape.sizes().iter().all(|s| *s > 0));
        Self { shape }
    }

    /// The occupancy grid.
    pub fn discrete(&self) -> &Arc<DiscreteVoxelShape> {
        &self.shape
    }

    /// The breakpoints along `axis`.
    pub fn coords(&self, axis: Axis) -> AxisCoords {
        AxisCoords::cube(self.shape.size(axis))
    }

    /// The index of the cell containing `value` along `axis`.
    ///
    /// Computed arithmetically instead of searching the breakpoints.
    pub fn find_index(&self, axis: Axis, value: Real) -> i32 {
        let parts = self.shape.size(axis) as Real;
        utils::floor_to_i32((value * parts).clamp(-1.0, parts))
    }
}
