use super::{collide, BlockCollisions};
use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisCycle, BlockPos, Real, Vector, BIG_EPSILON, EPSILON};
use crate::shape::VoxelShape;
use crate::utils::floor_to_i32;

/// Clips `offset`, the motion of `moving` along `axis`, against the blocks of
/// `world` and then against the `extra` shapes.
///
/// Blocks are visited layer by layer along `axis`, starting from the layer
/// just behind `moving` and up to the furthest layer the remaining motion can
/// reach. Each layer covers the cross-section of `moving` enlarged by one
/// block on every side. Blocks on the border of that neighborhood are only
/// consulted if their [`CollisionExtent`](super::CollisionExtent) allows their
/// shape to reach into it.
///
/// Boxes thinner than [`BIG_EPSILON`] along any axis cannot collide and get
/// `offset` back unchanged. Motions smaller than [`EPSILON`] are returned as
/// `0`.
pub fn collide_with_world<W: BlockCollisions + ?Sized>(
    axis: Axis,
    moving: &Aabb,
    world: &W,
    mut offset: Real,
    context: &W::Context,
    extra: &[VoxelShape],
) -> Real {
    if Axis::ALL.iter().any(|a| moving.size(*a) < BIG_EPSILON) {
        log::debug!("Degenerate box {:?} swept along {:?}.", moving, axis);
        return offset;
    }

    if offset.abs() < EPSILON {
        return 0.0;
    }

    // Permute axes so that the swept axis is the last one.
    let cycle = AxisCycle::between(axis, Axis::Z).inverse();
    let a0 = cycle.cycle(Axis::X);
    let a1 = cycle.cycle(Axis::Y);
    let a2 = cycle.cycle(Axis::Z);

    let i0 = floor_to_i32(moving.min(a0) - EPSILON) - 1;
    let i1 = floor_to_i32(moving.max(a0) + EPSILON) + 1;
    let j0 = floor_to_i32(moving.min(a1) - EPSILON) - 1;
    let j1 = floor_to_i32(moving.max(a1) + EPSILON) + 1;

    let low = moving.min(a2) - EPSILON;
    let high = moving.max(a2) + EPSILON;
    let positive = offset > 0.0;
    let step = if positive { 1 } else { -1 };

    let first_layer = if positive {
        floor_to_i32(moving.max(a2) - EPSILON) - 1
    } else {
        floor_to_i32(moving.min(a2) + EPSILON) + 1
    };
    let mut last_layer = furthest_layer(offset, low, high);
    let mut layer = first_layer;

    while (positive && layer <= last_layer) || (!positive && layer >= last_layer) {
        for i in i0..=i1 {
            for j in j0..=j1 {
                let boundaries = (i == i0 || i == i1) as u32
                    + (j == j0 || j == j1) as u32
                    + (layer == first_layer || layer == last_layer) as u32;

                if boundaries == 3 {
                    continue;
                }

                let pos = cycle.cycle_block_pos(i, j, layer);
                if world.collision_extent(&pos).max_boundaries() < boundaries {
                    continue;
                }

                let shape = world.collision_shape(&pos, context);
                let local = moving.translated(&-block_offset(&pos));
                offset = shape.collide(a2, &local, offset);

                if offset.abs() < EPSILON {
                    return 0.0;
                }

                last_layer = furthest_layer(offset, low, high);
            }
        }

        layer += step;
    }

    collide(a2, moving, extra, offset)
}

fn furthest_layer(offset: Real, low: Real, high: Real) -> i32 {
    if offset > 0.0 {
        floor_to_i32(high + offset) + 1
    } else {
        floor_to_i32(low + offset) - 1
    }
}

fn block_offset(pos: &BlockPos) -> Vector<Real> {
    Vector::new(pos.x as Real, pos.y as Real, pos.z as Real)
}
