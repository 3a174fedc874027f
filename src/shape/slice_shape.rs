use crate::math::Axis;
use crate::shape::discrete::{DiscreteShapeBuilder, DiscreteVoxelShape, SubShape};
use crate::shape::{AxisCoords, VoxelShape};
use alloc::sync::Arc;

/// A one-cell-thick layer of another shape, flattened onto `[0, 1]` along the
/// sliced axis.
///
/// Slices are what face-occlusion tests compare: the layer of a shape touching
/// one of its faces, seen from that face.
#[derive(Clone, Debug)]
pub struct SliceShape {
    shape: Arc<DiscreteVoxelShape>,
    coords: [AxisCoords; 3],
}

impl SliceShape {
    /// The layer `index` of `delegate` along `axis`.
    ///
    /// An `index` outside of the grid of `delegate` gives an empty slice.
    pub fn new(delegate: &VoxelShape, axis: Axis, index: i32) -> Self {
        let parent = delegate.discrete();
        let mut sizes = parent.sizes();

        let shape = if index >= 0 && (index as u32) < sizes[axis.index()] {
            let mut start = [0; 3];
            start[axis.index()] = index as u32;
            let mut end = sizes;
            end[axis.index()] = index as u32 + 1;
            DiscreteVoxelShape::from(SubShape::new(parent.clone(), start, end))
        } else {
            sizes[axis.index()] = 1;
            DiscreteShapeBuilder::new(sizes[0], sizes[1], sizes[2]).build()
        };

        let coords = Axis::ALL.map(|a| {
            if a == axis {
                AxisCoords::cube(1)
            } else {
                delegate.coords(a)
            }
        });

        Self {
            shape: Arc::new(shape),
            coords,
        }
    }

    /// The occupancy grid of the layer.
    pub fn discrete(&self) -> &Arc<DiscreteVoxelShape> {
        &self.shape
    }

    /// The breakpoints along `axis`.
    pub fn coords(&self, axis: Axis) -> &AxisCoords {
        &self.coords[axis.index()]
    }
}
