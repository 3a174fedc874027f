use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisCycle, AxisDirection, Direction, Point, Real, EPSILON};
use crate::shape::discrete::DiscreteVoxelShape;
use crate::shape::{
    shapes, ArrayVoxelShape, AxisCoords, BooleanOp, CubeVoxelShape, ShapeError, SliceShape,
};
use crate::utils;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use once_cell::sync::OnceCell;

/// Enum representing the concrete layout of a [`VoxelShape`].
#[derive(Clone, Debug)]
pub enum TypedVoxelShape {
    /// A regular grid over the unit cube.
    Cube(CubeVoxelShape),
    /// A grid with arbitrary breakpoints.
    Array(ArrayVoxelShape),
    /// A one-cell layer of another shape.
    Slice(SliceShape),
}

impl TypedVoxelShape {
    fn discrete(&self) -> &Arc<DiscreteVoxelShape> {
        match self {
            TypedVoxelShape::Cube(s) => s.discrete(),
            TypedVoxelShape::Array(s) => s.discrete(),
            TypedVoxelShape::Slice(s) => s.discrete(),
        }
    }

    fn coords(&self, axis: Axis) -> AxisCoords {
        match self {
            TypedVoxelShape::Cube(s) => s.coords(axis),
            TypedVoxelShape::Array(s) => s.coords(axis).clone(),
            TypedVoxelShape::Slice(s) => s.coords(axis).clone(),
        }
    }
}

struct VoxelShapeData {
    shape: TypedVoxelShape,
    faces: [OnceCell<VoxelShape>; 6],
}

/// An immutable, reference-counted collision shape made of boxes laid out on a grid.
///
/// A `VoxelShape` is an occupancy grid ([`DiscreteVoxelShape`]) plus, for each
/// axis, the breakpoints ([`AxisCoords`]) placing the cells of that grid in
/// space. Cloning a `VoxelShape` only increments a reference count, and two
/// clones are recognized as the same shape by [`VoxelShape::ptr_eq`].
///
/// Shapes are built with the functions of [`shapes`] and never modified
/// afterwards.
///
/// # Example
///
/// ```
/// use voxshape3d::math::Axis;
/// use voxshape3d::shape::shapes;
///
/// let slab = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
/// assert_eq!(slab.max(Axis::Y), 0.5);
/// assert_eq!(slab.to_aabbs().len(), 1);
///
/// let copy = slab.clone();
/// assert!(copy.ptr_eq(&slab));
/// ```
#[derive(Clone)]
pub struct VoxelShape(Arc<VoxelShapeData>);

impl fmt::Debug for VoxelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VoxelShape").field(&self.0.shape).finish()
    }
}

impl From<TypedVoxelShape> for VoxelShape {
    fn from(shape: TypedVoxelShape) -> Self {
        VoxelShape(Arc::new(VoxelShapeData {
            shape,
            faces: Default::default(),
        }))
    }
}

impl From<CubeVoxelShape> for VoxelShape {
    fn from(shape: CubeVoxelShape) -> Self {
        TypedVoxelShape::Cube(shape).into()
    }
}

impl From<ArrayVoxelShape> for VoxelShape {
    fn from(shape: ArrayVoxelShape) -> Self {
        TypedVoxelShape::Array(shape).into()
    }
}

impl From<SliceShape> for VoxelShape {
    fn from(shape: SliceShape) -> Self {
        TypedVoxelShape::Slice(shape).into()
    }
}

impl VoxelShape {
    /// Are `self` and `other` clones of the same shape?
    #[inline]
    pub fn ptr_eq(&self, other: &VoxelShape) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The concrete layout of this shape.
    pub fn as_typed_shape(&self) -> &TypedVoxelShape {
        &self.0.shape
    }

    /// The occupancy grid of this shape.
    #[inline]
    pub fn discrete(&self) -> &Arc<DiscreteVoxelShape> {
        self.0.shape.discrete()
    }

    /// The breakpoints of this shape along `axis`.
    #[inline]
    pub fn coords(&self, axis: Axis) -> AxisCoords {
        self.0.shape.coords(axis)
    }

    /// Is the grid of this shape the regular subdivision of the unit cube?
    pub fn is_cube(&self) -> bool {
        matches!(self.0.shape, TypedVoxelShape::Cube(_))
    }

    /// Does this shape contain no box?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discrete().is_empty()
    }

    /// The smallest coordinate of this shape along `axis`, or `+∞` if it is empty.
    pub fn min(&self, axis: Axis) -> Real {
        let first = self.discrete().first_full(axis);
        if first >= self.discrete().size(axis) {
            Real::INFINITY
        } else {
            self.coords(axis).get(first as usize)
        }
    }

    /// The largest coordinate of this shape along `axis`, or `-∞` if it is empty.
    pub fn max(&self, axis: Axis) -> Real {
        let last = self.discrete().last_full(axis);
        if last == 0 {
            Real::NEG_INFINITY
        } else {
            self.coords(axis).get(last as usize)
        }
    }

    /// The smallest coordinate along `axis` of the line of cells crossing
    /// `primary` on the next axis and `secondary` on the one after.
    ///
    /// Returns `+∞` if that line is empty.
    pub fn min_at(&self, axis: Axis, primary: Real, secondary: Real) -> Real {
        let (a1, a2) = axis.others();
        let i = self.find_index(a1, primary);
        let j = self.find_index(a2, secondary);
        let first = self.discrete().first_full_in_line(axis, i, j);

        if first >= self.discrete().size(axis) {
            Real::INFINITY
        } else {
            self.coords(axis).get(first as usize)
        }
    }

    /// The largest coordinate along `axis` of the line of cells crossing
    /// `primary` on the next axis and `secondary` on the one after.
    ///
    /// Returns `-∞` if that line is empty.
    pub fn max_at(&self, axis: Axis, primary: Real, secondary: Real) -> Real {
        let (a1, a2) = axis.others();
        let i = self.find_index(a1, primary);
        let j = self.find_index(a2, secondary);
        let last = self.discrete().last_full_in_line(axis, i, j);

        if last == 0 {
            Real::NEG_INFINITY
        } else {
            self.coords(axis).get(last as usize)
        }
    }

    /// The bounding box of this shape.
    ///
    /// # Panics
    /// Panics if the shape is empty. See [`Self::try_bounds`].
    pub fn bounds(&self) -> Aabb {
        self.try_bounds().unwrap_or_else(|e| panic!("{e}"))
    }

    /// The bounding box of this shape, or an error if the shape is empty.
    pub fn try_bounds(&self) -> Result<Aabb, ShapeError> {
        if self.is_empty() {
            return Err(ShapeError::EmptyShape);
        }

        Ok(Aabb::new(
            Point::new(self.min(Axis::X), self.min(Axis::Y), self.min(Axis::Z)),
            Point::new(self.max(Axis::X), self.max(Axis::Y), self.max(Axis::Z)),
        ))
    }

    /// The index of the cell containing `value` along `axis`.
    ///
    /// Returns `-1` for values below the first breakpoint, and the number of
    /// cells for values at or beyond the last one.
    pub fn find_index(&self, axis: Axis, value: Real) -> i32 {
        if let TypedVoxelShape::Cube(cube) = &self.0.shape {
            return cube.find_index(axis, value);
        }

        let coords = self.coords(axis);
        utils::binary_search(0, coords.len() as i32, |i| value < coords.get(i as usize)) - 1
    }

    /// Does this shape contain the given point?
    ///
    /// Points on the lower boundary of a box are inside of it, points on its
    /// upper boundary are not.
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.discrete().is_full_wide(
            self.find_index(Axis::X, point.x),
            self.find_index(Axis::Y, point.y),
            self.find_index(Axis::Z, point.z),
        )
    }

    /// Calls `f(x0, y0, z0, x1, y1, z1)` for a set of disjoint boxes covering
    /// exactly this shape.
    pub fn for_all_boxes(&self, mut f: impl FnMut(Real, Real, Real, Real, Real, Real)) {
        let [xs, ys, zs] = Axis::ALL.map(|axis| self.coords(axis));
        self.discrete()
            .for_all_boxes(true, |x0, y0, z0, x1, y1, z1| {
                f(
                    xs.get(x0 as usize),
                    ys.get(y0 as usize),
                    zs.get(z0 as usize),
                    xs.get(x1 as usize),
                    ys.get(y1 as usize),
                    zs.get(z1 as usize),
                )
            });
    }

    /// Calls `f(x0, y0, z0, x1, y1, z1)` for every edge of the outline of this shape.
    pub fn for_all_edges(&self, mut f: impl FnMut(Real, Real, Real, Real, Real, Real)) {
        let [xs, ys, zs] = Axis::ALL.map(|axis| self.coords(axis));
        self.discrete()
            .for_all_edges(true, |x0, y0, z0, x1, y1, z1| {
                f(
                    xs.get(x0 as usize),
                    ys.get(y0 as usize),
                    zs.get(z0 as usize),
                    xs.get(x1 as usize),
                    ys.get(y1 as usize),
                    zs.get(z1 as usize),
                )
            });
    }

    /// A set of disjoint boxes covering exactly this shape.
    pub fn to_aabbs(&self) -> Vec<Aabb> {
        let mut result = Vec::new();
        self.for_all_boxes(|x0, y0, z0, x1, y1, z1| {
            result.push(Aabb::from_bounds(x0, y0, z0, x1, y1, z1))
        });
        result
    }

    /// Rebuilds this shape as the union of its boxes.
    ///
    /// Parts aligned on a power-of-two subdivision of the unit cube are
    /// re-expressed as regular grids, and breakpoints only separating cells
    /// with the same occupancy disappear.
    #[must_use]
    pub fn optimize(&self) -> VoxelShape {
        let mut result = shapes::empty();
        self.for_all_boxes(|x0, y0, z0, x1, y1, z1| {
            let part = shapes::create(x0, y0, z0, x1, y1, z1);
            result = shapes::join_unoptimized(&result, &part, BooleanOp::Or);
        });
        result
    }

    /// This shape translated by `(dx, dy, dz)`.
    ///
    /// The result always has explicit breakpoints, except for the empty shape
    /// which is returned as is.
    #[must_use]
    pub fn translated(&self, dx: Real, dy: Real, dz: Real) -> VoxelShape {
        if self.is_empty() {
            return shapes::empty();
        }

        let coords = [
            self.coords(Axis::X).offset(dx),
            self.coords(Axis::Y).offset(dy),
            self.coords(Axis::Z).offset(dz),
        ];
        ArrayVoxelShape::new_unchecked(self.discrete().clone(), coords).into()
    }

    /// The single box enclosing this shape.
    #[must_use]
    pub fn single_encompassing(&self) -> VoxelShape {
        if self.is_empty() {
            return shapes::empty();
        }

        shapes::create(
            self.min(Axis::X),
            self.min(Axis::Y),
            self.min(Axis::Z),
            self.max(Axis::X),
            self.max(Axis::Y),
            self.max(Axis::Z),
        )
    }

    /// The part of this shape visible from the face `direction` of the unit cube.
    ///
    /// This is the layer of cells containing the face of the unit cube, as a
    /// slice flattened onto `[0, 1]` along the axis of `direction`. The result
    /// is cached per direction.
    pub fn face_shape(&self, direction: Direction) -> VoxelShape {
        if self.is_empty() || self.ptr_eq(&shapes::block()) {
            return self.clone();
        }

        let axis = direction.axis();
        let coords = self.coords(axis);
        if coords.len() == 2
            && abs_diff_eq!(coords.get(0), 0.0, epsilon = EPSILON)
            && abs_diff_eq!(coords.get(1), 1.0, epsilon = EPSILON)
        {
            // Already one layer thick along `axis`.
            return self.clone();
        }

        self.0.faces[direction.index()]
            .get_or_init(|| {
                let position = match direction.axis_direction() {
                    AxisDirection::Positive => 0.9999999,
                    AxisDirection::Negative => 1.0e-7,
                };
                let slice: VoxelShape =
                    SliceShape::new(self, axis, self.find_index(axis, position)).into();

                if slice.is_empty() {
                    shapes::empty()
                } else if !shapes::join_is_not_empty(&shapes::block(), &slice, BooleanOp::NotSame)
                {
                    shapes::block()
                } else {
                    slice
                }
            })
            .clone()
    }

    /// Clips `offset`, the motion of `moving` along `axis`, so that it does not
    /// enter this shape.
    ///
    /// Only the parts of this shape ahead of `moving` along `axis` and
    /// overlapping it on the two other axes are taken into account. The
    /// returned offset has the same sign as `offset` and a smaller or equal
    /// magnitude. Offsets smaller than [`EPSILON`] in magnitude are returned
    /// as `0`.
    pub fn collide(&self, axis: Axis, moving: &Aabb, mut offset: Real) -> Real {
        if self.is_empty() {
            return offset;
        }

        if offset.abs() < EPSILON {
            return 0.0;
        }

        // Permute axes so that the swept axis is read as `x` by the grid queries.
        let cycle = AxisCycle::between(axis, Axis::X).inverse();
        let ax = cycle.cycle(Axis::X);
        let ay = cycle.cycle(Axis::Y);
        let az = cycle.cycle(Axis::Z);
        let discrete = self.discrete();
        let coords = self.coords(ax);

        let leading = moving.max(ax);
        let trailing = moving.min(ax);
        let first = self.find_index(ax, trailing + EPSILON);
        let last = self.find_index(ax, leading - EPSILON);
        let y0 = self.find_index(ay, moving.min(ay) + EPSILON).max(0);
        let y1 = (self.find_index(ay, moving.max(ay) - EPSILON) + 1).min(discrete.size(ay) as i32);
        let z0 = self.find_index(az, moving.min(az) + EPSILON).max(0);
        let z1 = (self.find_index(az, moving.max(az) - EPSILON) + 1).min(discrete.size(az) as i32);
        let len = discrete.size(ax) as i32;

        let blocked = |layer: i32| {
            (y0..y1).any(|y| (z0..z1).any(|z| discrete.is_full_wide_cycled(cycle, layer, y, z)))
        };

        if offset > 0.0 {
            if let Some(layer) = ((last + 1).max(0)..len).find(|l| blocked(*l)) {
                let gap = coords.get(layer as usize) - leading;
                if gap >= -EPSILON {
                    offset = offset.min(gap);
                }
            }
        } else if offset < 0.0 {
            if let Some(layer) = (0..first.min(len)).rev().find(|l| blocked(*l)) {
                let gap = coords.get(layer as usize + 1) - trailing;
                if gap <= EPSILON {
                    offset = offset.max(gap);
                }
            }
        }

        offset
    }
}

static_assertions::assert_impl_all!(VoxelShape: Send, Sync);
