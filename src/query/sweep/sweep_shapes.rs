use crate::bounding_volume::Aabb;
use crate::math::{Axis, Real, EPSILON};
use crate::shape::VoxelShape;

/// Clips `offset`, the motion of `moving` along `axis`, against each shape of `shapes`.
///
/// Returns `0` as soon as the motion is blocked down to less than [`EPSILON`].
///
/// # Example
///
/// ```
/// use voxshape3d::bounding_volume::Aabb;
/// use voxshape3d::math::Axis;
/// use voxshape3d::shape::shapes;
///
/// let wall = shapes::box_shape(3.0, 0.0, 0.0, 4.0, 1.0, 1.0);
/// let moving = Aabb::from_bounds(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
///
/// assert_eq!(shapes::collide(Axis::X, &moving, [&wall], 5.0), 2.0);
/// assert_eq!(shapes::collide(Axis::X, &moving, [&wall], -5.0), -5.0);
/// ```
pub fn collide<'a>(
    axis: Axis,
    moving: &Aabb,
    shapes: impl IntoIterator<Item = &'a VoxelShape>,
    mut offset: Real,
) -> Real {
    for shape in shapes {
        if offset.abs() < EPSILON {
            return 0.0;
        }

        offset = shape.collide(axis, moving, offset);
    }

    offset
}

#[cfg(test)]
mod test {
    use super::collide;
    use crate::bounding_volume::Aabb;
    use crate::math::Axis;
    use crate::shape::{shapes, VoxelShape};

    #[test]
    fn nearest_shape_wins() {
        let near = shapes::box_shape(2.0, 0.0, 0.0, 3.0, 1.0, 1.0);
        let far = shapes::box_shape(5.0, 0.0, 0.0, 6.0, 1.0, 1.0);
        let moving = Aabb::from_bounds(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        assert_eq!(collide(Axis::X, &moving, [&far, &near], 10.0), 1.0);
        assert_eq!(collide(Axis::X, &moving, &[near, far], 10.0), 1.0);
        let none: [&VoxelShape; 0] = [];
        assert_eq!(collide(Axis::X, &moving, none, 10.0), 10.0);
    }

    #[test]
    fn touching_blocks_motion() {
        let wall = shapes::box_shape(1.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        let moving = Aabb::from_bounds(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        assert_eq!(collide(Axis::X, &moving, [&wall], 1.0), 0.0);
        assert_eq!(collide(Axis::X, &moving, [&wall], -1.0), -1.0);
    }
}
