use super::random_shape;
use voxshape3d::math::{Axis, Real};
use voxshape3d::shape::{shapes, BooleanOp, VoxelShape};

// The volume of the filled cells, cell by cell.
fn filled_volume(shape: &VoxelShape) -> Real {
    let [xs, ys, zs] = Axis::ALL.map(|axis| shape.coords(axis));
    let grid = shape.discrete();
    let mut volume = 0.0;

    for x in 0..xs.cells() {
        for y in 0..ys.cells() {
            for z in 0..zs.cells() {
                if grid.is_full(x as u32, y as u32, z as u32) {
                    volume += (xs.get(x + 1) - xs.get(x))
                        * (ys.get(y + 1) - ys.get(y))
                        * (zs.get(z + 1) - zs.get(z));
                }
            }
        }
    }

    volume
}

#[test]
fn boxes_are_disjoint_and_cover_the_shape() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..100 {
        let shape = random_shape(&mut rng, 4);
        let aabbs = shape.to_aabbs();

        for (i, a) in aabbs.iter().enumerate() {
            for b in &aabbs[i + 1..] {
                let overlap = a.intersection(b).map(|o| o.volume()).unwrap_or(0.0);
                assert_relative_eq!(overlap, 0.0, epsilon = 1.0e-12);
            }
        }

        let total: Real = aabbs.iter().map(|a| a.volume()).sum();
        assert_relative_eq!(total, filled_volume(&shape), epsilon = 1.0e-9);
    }
}

#[test]
fn stairs() {
    let lower = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
    let upper = shapes::box_shape(0.0, 0.5, 0.5, 1.0, 1.0, 1.0);
    let stairs = shapes::join(&lower, &upper, BooleanOp::Or);
    let aabbs = stairs.to_aabbs();

    assert_eq!(aabbs.len(), 2);
    assert_relative_eq!(aabbs.iter().map(|a| a.volume()).sum::<Real>(), 0.75);
    assert_eq!(stairs.bounds(), shapes::block().bounds());
}

#[test]
fn edges_of_a_block() {
    let mut edges = 0;
    let mut length = 0.0;
    shapes::block().for_all_edges(|x0, y0, z0, x1, y1, z1| {
        edges += 1;
        length += (x1 - x0) + (y1 - y0) + (z1 - z0);
    });

    assert_eq!(edges, 12);
    assert_relative_eq!(length, 12.0);
}
