#[macro_use]
extern crate approx;

mod box_shape;
mod index_merger;
mod join_brute_force;
mod occlusion;
mod sweep_world;
mod to_aabbs;

use voxshape3d::math::{Axis, Point, Real};
use voxshape3d::shape::{shapes, AxisCoords, VoxelShape};

/// A random union of `max_boxes` boxes with corners on a grid of tenths
/// spanning `[-0.5, 1.5]`.
pub fn random_shape(rng: &mut oorandom::Rand32, max_boxes: u32) -> VoxelShape {
    let mut coord = || (rng.rand_range(0..21) as Real - 5.0) / 10.0;
    let mut boxes = vec![];

    for _ in 0..max_boxes.max(1) {
        let (x0, x1, y0, y1, z0, z1) = (coord(), coord(), coord(), coord(), coord(), coord());
        boxes.push(shapes::create(
            x0.min(x1),
            y0.min(y1),
            z0.min(z1),
            x0.max(x1),
            y0.max(y1),
            z0.max(z1),
        ));
    }

    shapes::or_all(&boxes[0], &boxes[1..])
}

/// Points inside of every cell of the common refinement of the grids of `a` and `b`.
pub fn sample_points(a: &VoxelShape, b: &VoxelShape) -> Vec<Point<Real>> {
    let midpoints = |axis: Axis| {
        let coords = AxisCoords::from_breakpoints(a.coords(axis).iter().chain(b.coords(axis).iter()));
        let values: Vec<_> = coords.iter().collect();
        values
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect::<Vec<_>>()
    };

    let (xs, ys, zs) = (midpoints(Axis::X), midpoints(Axis::Y), midpoints(Axis::Z));
    let mut result = vec![];
    for x in &xs {
        for y in &ys {
            for z in &zs {
                result.push(Point::new(*x, *y, *z));
            }
        }
    }
    result
}
