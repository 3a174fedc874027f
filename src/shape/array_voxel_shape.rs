use crate::math::Axis;
use crate::shape::discrete::DiscreteVoxelShape;
use crate::shape::{AxisCoords, ShapeError};
use alloc::sync::Arc;

/// A shape with arbitrary breakpoints along each axis.
#[derive(Clone, Debug)]
pub struct ArrayVoxelShape {
    shape: Arc<DiscreteVoxelShape>,
    coords: [AxisCoords; 3],
}

impl ArrayVoxelShape {
    /// Lays `shape` onto the grid described by `xs`, `ys` and `zs`.
    ///
    /// Each list must have exactly one more breakpoint than `shape` has cells
    /// along the same axis.
    pub fn new(
        shape: Arc<DiscreteVoxelShape>,
        xs: AxisCoords,
        ys: AxisCoords,
        zs: AxisCoords,
    ) -> Result<Self, ShapeError> {
        let coords = [xs, ys, zs];

        for axis in Axis::ALL {
            let expected = shape.size(axis) as usize + 1;
            let found = coords[axis.index()].len();

            if expected != found {
                return Err(ShapeError::InconsistentCoords {
                    axis,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { shape, coords })
    }

    pub(crate) fn new_unchecked(shape: Arc<DiscreteVoxelShape>, coords: [AxisCoords; 3]) -> Self {
        debug_assert!(Axis::ALL
            .iter()
            .all(|a| shape.size(*a) as usize + 1 == coords[a.index()].len()));
        Self { shape, coords }
    }

    /// The occupancy grid.
    pub fn discrete(&self) -> &Arc<DiscreteVoxelShape> {
        &self.shape
    }

    /// The breakpoints along `axis`.
    pub fn coords(&self, axis: Axis) -> &AxisCoords {
        &self.coords[axis.index()]
    }
}
