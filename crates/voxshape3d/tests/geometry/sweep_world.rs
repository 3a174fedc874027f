use std::collections::HashMap;
use voxshape3d::bounding_volume::Aabb;
use voxshape3d::math::{Axis, BlockPos, Vector};
use voxshape3d::query::{BlockCollisions, CollisionExtent};
use voxshape3d::shape::{shapes, VoxelShape};

/// A sparse world where every block not listed is air.
#[derive(Default)]
struct SparseWorld {
    blocks: HashMap<BlockPos, VoxelShape>,
}

impl SparseWorld {
    fn set(&mut self, x: i32, y: i32, z: i32, shape: VoxelShape) {
        let _ = self.blocks.insert(BlockPos::new(x, y, z), shape);
    }
}

/// Entities flagged as sneaking do not collide with half-height blocks.
struct Entity {
    ignores_slabs: bool,
}

impl BlockCollisions for SparseWorld {
    type Context = Entity;

    fn collision_extent(&self, _: &BlockPos) -> CollisionExtent {
        CollisionExtent::Contained
    }

    fn collision_shape(&self, pos: &BlockPos, entity: &Entity) -> VoxelShape {
        match self.blocks.get(pos) {
            Some(shape) if entity.ignores_slabs && shape.max(Axis::Y) < 1.0 => shapes::empty(),
            Some(shape) => shape.clone(),
            None => shapes::empty(),
        }
    }
}

const ENTITY: Entity = Entity {
    ignores_slabs: false,
};

fn unit_box_ending_at_origin() -> Aabb {
    Aabb::from_bounds(-1.0, 0.0, 0.0, 0.0, 1.0, 1.0)
}

#[test]
fn stops_flush_against_a_block() {
    let mut world = SparseWorld::default();
    world.set(2, 0, 0, shapes::block());

    let moving = unit_box_ending_at_origin();
    let dx = shapes::collide_with_world(Axis::X, &moving, &world, 5.0, &ENTITY, &[]);
    assert_eq!(dx, 2.0);

    // The box now touches the block and cannot move any further.
    let moved = moving.translated(&Vector::new(dx, 0.0, 0.0));
    assert_eq!(
        shapes::collide_with_world(Axis::X, &moved, &world, 5.0, &ENTITY, &[]),
        0.0
    );
}

#[test]
fn free_motion_is_unchanged() {
    let world = SparseWorld::default();
    let moving = unit_box_ending_at_origin();

    assert_eq!(
        shapes::collide_with_world(Axis::X, &moving, &world, 5.0, &ENTITY, &[]),
        5.0
    );

    // A block out of the path of the box.
    let mut world = SparseWorld::default();
    world.set(2, 2, 0, shapes::block());
    assert_eq!(
        shapes::collide_with_world(Axis::X, &moving, &world, 5.0, &ENTITY, &[]),
        5.0
    );
}

#[test]
fn context_is_forwarded() {
    let mut world = SparseWorld::default();
    world.set(0, -3, 0, shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0));
    world.set(0, -6, 0, shapes::block());
    let moving = Aabb::from_bounds(0.25, 0.0, 0.25, 0.75, 1.8, 0.75);

    let walker = Entity {
        ignores_slabs: false,
    };
    let sneaker = Entity {
        ignores_slabs: true,
    };

    assert_eq!(
        shapes::collide_with_world(Axis::Y, &moving, &world, -10.0, &walker, &[]),
        -2.5
    );
    assert_eq!(
        shapes::collide_with_world(Axis::Y, &moving, &world, -10.0, &sneaker, &[]),
        -5.0
    );
}

#[test]
fn sweeps_in_a_corridor() {
    // Walls on both sides along z and a floor, a block at the end of the corridor.
    let mut world = SparseWorld::default();
    for x in -2..10 {
        world.set(x, -1, 0, shapes::block());
        world.set(x, 0, -1, shapes::block());
        world.set(x, 0, 1, shapes::block());
    }
    world.set(8, 0, 0, shapes::block());

    let moving = Aabb::from_bounds(0.2, 0.0, 0.2, 0.8, 0.9, 0.8);
    let dx = shapes::collide_with_world(Axis::X, &moving, &world, 20.0, &ENTITY, &[]);
    assert!(relative_eq!(dx, 7.2, epsilon = 1.0e-9));

    // Side walls and floor are flush with the box's neighborhood but never hit.
    assert_eq!(
        shapes::collide_with_world(Axis::X, &moving, &world, -1.0, &ENTITY, &[]),
        -1.0
    );
    assert!(relative_eq!(
        shapes::collide_with_world(Axis::Z, &moving, &world, 1.0, &ENTITY, &[]),
        0.2,
        epsilon = 1.0e-9
    ));
    assert_eq!(
        shapes::collide_with_world(Axis::Y, &moving, &world, -1.0, &ENTITY, &[]),
        0.0
    );
}
