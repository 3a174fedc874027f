use voxshape3d::bounding_volume::Aabb;
use voxshape3d::math::Axis;
use voxshape3d::shape::{shapes, ShapeError, TypedVoxelShape};

#[test]
fn unit_box_is_the_block() {
    assert!(shapes::box_shape(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).ptr_eq(&shapes::block()));
    assert!(shapes::box_shape(-1.0e-8, 0.0, 0.0, 1.0, 1.0, 1.0 + 1.0e-8).ptr_eq(&shapes::block()));
}

#[test]
fn eighth_aligned_boxes_are_cubes() {
    for i in 0..8 {
        for j in (i + 1)..=8 {
            let (min, max) = (i as f64 / 8.0, j as f64 / 8.0);
            let shape = shapes::box_shape(min, 0.0, 0.0, max, 0.5, 1.0);
            assert!(
                matches!(shape.as_typed_shape(), TypedVoxelShape::Cube(_)),
                "{min}..{max}"
            );
            assert_eq!(shape.min(Axis::X), min);
            assert_eq!(shape.max(Axis::X), max);
        }
    }
}

#[test]
fn unaligned_boxes_are_arrays() {
    let shape = shapes::box_shape(0.1, 0.0, 0.0, 0.7, 1.0, 1.0);
    assert!(matches!(shape.as_typed_shape(), TypedVoxelShape::Array(_)));
    assert_eq!(
        shape.bounds(),
        Aabb::from_bounds(0.1, 0.0, 0.0, 0.7, 1.0, 1.0)
    );

    let large = shapes::box_shape(-3.0, -2.0, -1.0, 3.0, 2.0, 1.0);
    assert!(matches!(large.as_typed_shape(), TypedVoxelShape::Array(_)));
    assert_eq!(large.to_aabbs(), vec![large.bounds()]);
}

#[test]
fn zero_volume_boxes_are_empty() {
    let empty = shapes::empty();
    assert!(shapes::box_shape(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).ptr_eq(&empty));
    assert!(shapes::box_shape(0.0, 0.0, 0.0, 1.0, 1.0, 5.0e-8).ptr_eq(&empty));
    assert!(shapes::box_shape(0.3, 0.0, 0.0, 0.3, 1.0, 1.0).ptr_eq(&empty));
}

#[test]
fn inverted_bounds_are_an_error() {
    let err = shapes::try_box_shape(0.0, 0.0, 0.0, -1.0, 1.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        ShapeError::InvertedBounds {
            axis: Axis::X,
            min: 0.0,
            max: -1.0,
        }
    );
    assert!(err.to_string().contains("min values"));
}

#[test]
fn from_aabb() {
    let aabb = Aabb::from_bounds(0.25, 0.0, 0.25, 0.75, 1.0, 0.75);
    let shape = shapes::create_from_aabb(&aabb);

    assert!(shape.is_cube());
    assert_eq!(shape.bounds(), aabb);
}
