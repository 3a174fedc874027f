//! Construction and combination of [`VoxelShape`]s.
//!
//! # Example
//!
//! ```
//! use voxshape3d::math::{Axis, Direction};
//! use voxshape3d::shape::{shapes, BooleanOp};
//!
//! let lower = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
//! let upper = shapes::box_shape(0.0, 0.5, 0.0, 1.0, 1.0, 1.0);
//!
//! // Two slabs make a full block.
//! let merged = shapes::join(&lower, &upper, BooleanOp::Or);
//! assert!(!shapes::join_is_not_empty(&shapes::block(), &merged, BooleanOp::NotSame));
//!
//! // Nothing covers the top face of the lower slab.
//! assert!(!shapes::block_occludes(&lower, &shapes::empty(), Direction::PosY));
//! assert!(shapes::block_occludes(&shapes::block(), &shapes::block(), Direction::PosY));
//! ```

use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisDirection, Direction, Real, EPSILON};
use crate::shape::discrete::{BitSetDiscreteVoxelShape, DiscreteShapeBuilder, DiscreteVoxelShape};
use crate::shape::merger::{create_index_merger, IndexMerger};
use crate::shape::{
    ArrayVoxelShape, AxisCoords, BooleanOp, CubeVoxelShape, ShapeError, SliceShape, VoxelShape,
};
use alloc::sync::Arc;
use alloc::vec;
use once_cell::sync::Lazy;

pub use crate::query::sweep::{collide, collide_with_world};

/// The finest subdivision of the unit cube, as a power of two, that
/// [`create`] recognizes as a regular grid.
pub const MAX_FIND_BITS: u32 = 3;

static EMPTY: Lazy<VoxelShape> = Lazy::new(|| {
    let grid = Arc::new(DiscreteShapeBuilder::new(0, 0, 0).build());
    let zero = AxisCoords::explicit(vec![0.0]);
    ArrayVoxelShape::new_unchecked(grid, [zero.clone(), zero.clone(), zero]).into()
});

static BLOCK: Lazy<VoxelShape> =
    Lazy::new(|| CubeVoxelShape::new(Arc::new(DiscreteVoxelShape::full(1, 1, 1))).into());

static INFINITY: Lazy<VoxelShape> = Lazy::new(|| {
    create(
        Real::NEG_INFINITY,
        Real::NEG_INFINITY,
        Real::NEG_INFINITY,
        Real::INFINITY,
        Real::INFINITY,
        Real::INFINITY,
    )
});

/// The shape containing nothing.
///
/// Always returns the same shared instance.
pub fn empty() -> VoxelShape {
    EMPTY.clone()
}

/// The full unit cube `[0, 1]³`.
///
/// Always returns the same shared instance, which fast paths recognize with
/// [`VoxelShape::ptr_eq`].
pub fn block() -> VoxelShape {
    BLOCK.clone()
}

/// The shape covering the whole space.
pub fn infinity() -> VoxelShape {
    INFINITY.clone()
}

/// The box `[x0, x1] × [y0, y1] × [z0, z1]`.
///
/// # Panics
/// Panics if a minimum is larger than its maximum. See [`try_box_shape`].
pub fn box_shape(x0: Real, y0: Real, z0: Real, x1: Real, y1: Real, z1: Real) -> VoxelShape {
    try_box_shape(x0, y0, z0, x1, y1, z1).unwrap_or_else(|e| panic!("{e}"))
}

/// The box `[x0, x1] × [y0, y1] × [z0, z1]`, or an error if a minimum is
/// larger than its maximum.
pub fn try_box_shape(
    x0: Real,
    y0: Real,
    z0: Real,
    x1: Real,
    y1: Real,
    z1: Real,
) -> Result<VoxelShape, ShapeError> {
    for (axis, min, max) in [(Axis::X, x0, x1), (Axis::Y, y0, y1), (Axis::Z, z0, z1)] {
        if min > max {
            return Err(ShapeError::InvertedBounds { axis, min, max });
        }
    }

    Ok(create(x0, y0, z0, x1, y1, z1))
}

/// The box `aabb`, without checking its bounds.
///
/// An `aabb` with `mins` larger than `maxs` on any axis gives the empty shape,
/// as with [`create`].
pub fn create_from_aabb(aabb: &Aabb) -> VoxelShape {
    create(
        aabb.mins.x,
        aabb.mins.y,
        aabb.mins.z,
        aabb.maxs.x,
        aabb.maxs.y,
        aabb.maxs.z,
    )
}

/// The box `[x0, x1] × [y0, y1] × [z0, z1]`, without checking the bounds.
///
/// A box thinner than [`EPSILON`] along any axis is empty. A box whose
/// bounds all lie on a power-of-two subdivision of the unit cube (up to
/// `2^MAX_FIND_BITS` parts) is represented as a regular grid, and the unit
/// cube itself as [`block()`].
pub fn create(x0: Real, y0: Real, z0: Real, x1: Real, y1: Real, z1: Real) -> VoxelShape {
    if x1 - x0 < EPSILON || y1 - y0 < EPSILON || z1 - z0 < EPSILON {
        return empty();
    }

    match (find_bits(x0, x1), find_bits(y0, y1), find_bits(z0, z1)) {
        (Some(bx), Some(by), Some(bz)) => {
            if bx == 0 && by == 0 && bz == 0 {
                return block();
            }

            let parts = [1u32 << bx, 1 << by, 1 << bz];
            let cell = |value: Real, parts: u32| (value * parts as Real).round() as u32;
            let grid = DiscreteShapeBuilder::with_filled_bounds(
                parts[0],
                parts[1],
                parts[2],
                cell(x0, parts[0]),
                cell(y0, parts[1]),
                cell(z0, parts[2]),
                cell(x1, parts[0]),
                cell(y1, parts[1]),
                cell(z1, parts[2]),
            )
            .build();
            CubeVoxelShape::new(Arc::new(grid)).into()
        }
        _ => {
            let coords = [
                AxisCoords::explicit(vec![x0, x1]),
                AxisCoords::explicit(vec![y0, y1]),
                AxisCoords::explicit(vec![z0, z1]),
            ];
            ArrayVoxelShape::new_unchecked(BLOCK.discrete().clone(), coords).into()
        }
    }
}

/// The smallest `b` such that `min` and `max` are both multiples of `2^-b`.
///
/// Returns `None` if no `b` up to [`MAX_FIND_BITS`] works, or if the range
/// does not fit in `[0, 1]`. Multiples are recognized up to `2^b * EPSILON`.
pub fn find_bits(min: Real, max: Real) -> Option<u32> {
    if min < -EPSILON || max > 1.0 + EPSILON {
        return None;
    }

    (0..=MAX_FIND_BITS).find(|bits| {
        let parts = (1u32 << bits) as Real;
        let (lo, hi) = (min * parts, max * parts);
        (lo - lo.round()).abs() < EPSILON * parts && (hi - hi.round()).abs() < EPSILON * parts
    })
}

/// The union of two shapes.
pub fn or(a: &VoxelShape, b: &VoxelShape) -> VoxelShape {
    join(a, b, BooleanOp::Or)
}

/// The union of `first` and every shape of `others`, optimized once at the end.
pub fn or_all(first: &VoxelShape, others: &[VoxelShape]) -> VoxelShape {
    others
        .iter()
        .fold(first.clone(), |acc, shape| {
            join_unoptimized(&acc, shape, BooleanOp::Or)
        })
        .optimize()
}

/// Combines two shapes with a boolean operator, then simplifies the result.
///
/// # Panics
/// Panics if `op` is true where neither shape is filled. See [`try_join`].
pub fn join(a: &VoxelShape, b: &VoxelShape, op: BooleanOp) -> VoxelShape {
    try_join(a, b, op).unwrap_or_else(|e| panic!("{e}"))
}

/// Combines two shapes with a boolean operator, then simplifies the result.
pub fn try_join(a: &VoxelShape, b: &VoxelShape, op: BooleanOp) -> Result<VoxelShape, ShapeError> {
    Ok(try_join_unoptimized(a, b, op)?.optimize())
}

/// Combines two shapes with a boolean operator.
///
/// The result lives on the merged grid of both operands and may contain
/// breakpoints separating cells with the same occupancy. See
/// [`VoxelShape::optimize`].
///
/// # Panics
/// Panics if `op` is true where neither shape is filled. See
/// [`try_join_unoptimized`].
pub fn join_unoptimized(a: &VoxelShape, b: &VoxelShape, op: BooleanOp) -> VoxelShape {
    try_join_unoptimized(a, b, op).unwrap_or_else(|e| panic!("{e}"))
}

/// Combines two shapes with a boolean operator, without simplifying the result.
pub fn try_join_unoptimized(
    a: &VoxelShape,
    b: &VoxelShape,
    op: BooleanOp,
) -> Result<VoxelShape, ShapeError> {
    if op.is_degenerate() {
        return Err(ShapeError::DegenerateOperator(op));
    }

    if a.ptr_eq(b) {
        return Ok(if op.apply(true, true) {
            a.clone()
        } else {
            empty()
        });
    }

    let first_only = op.keeps_first_only();
    let second_only = op.keeps_second_only();

    if a.is_empty() {
        return Ok(if second_only { b.clone() } else { empty() });
    }

    if b.is_empty() {
        return Ok(if first_only { a.clone() } else { empty() });
    }

    let [mx, my, mz] = mergers(a, b, first_only, second_only);
    let grid = Arc::new(BitSetDiscreteVoxelShape::join(
        a.discrete(),
        b.discrete(),
        &mx,
        &my,
        &mz,
        op,
    ));

    if mx.is_discrete_cube() && my.is_discrete_cube() && mz.is_discrete_cube() {
        Ok(CubeVoxelShape::new(grid).into())
    } else {
        Ok(ArrayVoxelShape::new_unchecked(grid, [mx.coords(), my.coords(), mz.coords()]).into())
    }
}

/// Does combining `a` and `b` with `op` give a non-empty shape?
///
/// The combined shape is never built, and the search stops at the first
/// merged cell where `op` holds.
///
/// # Panics
/// Panics if `op` is true where neither shape is filled. See
/// [`try_join_is_not_empty`].
pub fn join_is_not_empty(a: &VoxelShape, b: &VoxelShape, op: BooleanOp) -> bool {
    try_join_is_not_empty(a, b, op).unwrap_or_else(|e| panic!("{e}"))
}

/// Does combining `a` and `b` with `op` give a non-empty shape?
pub fn try_join_is_not_empty(
    a: &VoxelShape,
    b: &VoxelShape,
    op: BooleanOp,
) -> Result<bool, ShapeError> {
    if op.is_degenerate() {
        return Err(ShapeError::DegenerateOperator(op));
    }

    let a_empty = a.is_empty();
    let b_empty = b.is_empty();

    if a_empty || b_empty {
        return Ok(op.apply(!a_empty, !b_empty));
    }

    if a.ptr_eq(b) {
        return Ok(op.apply(true, true));
    }

    let first_only = op.keeps_first_only();
    let second_only = op.keeps_second_only();

    for axis in Axis::ALL {
        if a.max(axis) < b.min(axis) - EPSILON || b.max(axis) < a.min(axis) - EPSILON {
            // Disjoint: every filled cell is filled by one operand only.
            return Ok(first_only || second_only);
        }
    }

    let [mx, my, mz] = mergers(a, b, first_only, second_only);
    let (da, db) = (a.discrete(), b.discrete());
    let all_false = mx.for_merged_indexes(|ax, bx, _| {
        my.for_merged_indexes(|ay, by, _| {
            mz.for_merged_indexes(|az, bz, _| {
                !op.apply(da.is_full_wide(ax, ay, az), db.is_full_wide(bx, by, bz))
            })
        })
    });

    Ok(!all_false)
}

fn mergers(a: &VoxelShape, b: &VoxelShape, first_only: bool, second_only: bool) -> [IndexMerger; 3] {
    let mx = create_index_merger(
        1,
        &a.coords(Axis::X),
        &b.coords(Axis::X),
        first_only,
        second_only,
    );
    let my = create_index_merger(
        mx.cells() as u64,
        &a.coords(Axis::Y),
        &b.coords(Axis::Y),
        first_only,
        second_only,
    );
    let mz = create_index_merger(
        mx.cells() as u64 * my.cells() as u64,
        &a.coords(Axis::Z),
        &b.coords(Axis::Z),
        first_only,
        second_only,
    );
    [mx, my, mz]
}

fn fuzzy_eq(a: Real, b: Real) -> bool {
    abs_diff_eq!(a, b, epsilon = EPSILON)
}

// The shapes on both sides of the face of `shape` pointing towards
// `direction`, ordered along the axis of `direction`.
fn oriented<'a>(
    shape: &'a VoxelShape,
    adjacent: &'a VoxelShape,
    direction: Direction,
) -> (&'a VoxelShape, &'a VoxelShape) {
    match direction.axis_direction() {
        AxisDirection::Positive => (shape, adjacent),
        AxisDirection::Negative => (adjacent, shape),
    }
}

fn last_layer(shape: &VoxelShape, axis: Axis) -> VoxelShape {
    SliceShape::new(shape, axis, shape.discrete().size(axis) as i32 - 1).into()
}

fn first_layer(shape: &VoxelShape, axis: Axis) -> VoxelShape {
    SliceShape::new(shape, axis, 0).into()
}

/// Does `adjacent`, the shape of the neighbor of `shape` across its face
/// `direction`, cover that face entirely?
///
/// Both shapes must be flush with their shared face: `shape` must reach it
/// and `adjacent` must start right at it.
pub fn block_occludes(shape: &VoxelShape, adjacent: &VoxelShape, direction: Direction) -> bool {
    let block = block();
    if shape.ptr_eq(&block) && adjacent.ptr_eq(&block) {
        return true;
    }

    if adjacent.is_empty() {
        return false;
    }

    let axis = direction.axis();
    let (first, second) = oriented(shape, adjacent, direction);
    let op = match direction.axis_direction() {
        AxisDirection::Positive => BooleanOp::OnlyFirst,
        AxisDirection::Negative => BooleanOp::OnlySecond,
    };

    fuzzy_eq(first.max(axis), 1.0)
        && fuzzy_eq(second.min(axis), 0.0)
        && !join_is_not_empty(&last_layer(first, axis), &first_layer(second, axis), op)
}

/// The layer of `shape` on its face `direction`, if `shape` reaches that face.
///
/// Returns [`empty()`] if `shape` does not reach the face of the unit cube
/// pointing towards `direction`.
pub fn boundary_face_shape(shape: &VoxelShape, direction: Direction) -> VoxelShape {
    if shape.ptr_eq(&block()) {
        return block();
    }

    let axis = direction.axis();
    let (flush, index) = match direction.axis_direction() {
        AxisDirection::Positive => (
            fuzzy_eq(shape.max(axis), 1.0),
            shape.discrete().size(axis) as i32 - 1,
        ),
        AxisDirection::Negative => (fuzzy_eq(shape.min(axis), 0.0), 0),
    };

    if flush {
        SliceShape::new(shape, axis, index).into()
    } else {
        empty()
    }
}

/// Do the faces of `shape` and `adjacent` that touch across the face
/// `direction` of `shape` together cover the whole unit square?
pub fn merged_face_occludes(
    shape: &VoxelShape,
    adjacent: &VoxelShape,
    direction: Direction,
) -> bool {
    let block = block();
    if shape.ptr_eq(&block) || adjacent.ptr_eq(&block) {
        return true;
    }

    let axis = direction.axis();
    let empty = empty();
    let (mut first, mut second) = oriented(shape, adjacent, direction);

    if !fuzzy_eq(first.max(axis), 1.0) {
        first = &empty;
    }

    if !fuzzy_eq(second.min(axis), 0.0) {
        second = &empty;
    }

    let faces = join_unoptimized(
        &last_layer(first, axis),
        &first_layer(second, axis),
        BooleanOp::Or,
    );
    !join_is_not_empty(&block, &faces, BooleanOp::OnlyFirst)
}

/// Do two face shapes together cover the whole unit cube?
///
/// The arguments are typically [`VoxelShape::face_shape`]s of two adjacent
/// blocks.
pub fn face_shape_occludes(a: &VoxelShape, b: &VoxelShape) -> bool {
    let block = block();
    if a.ptr_eq(&block) || b.ptr_eq(&block) {
        return true;
    }

    if a.is_empty() && b.is_empty() {
        return false;
    }

    !join_is_not_empty(
        &block,
        &join_unoptimized(a, b, BooleanOp::Or),
        BooleanOp::OnlyFirst,
    )
}
