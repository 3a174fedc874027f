use super::{BitSetDiscreteVoxelShape, SubShape};
use crate::math::{Axis, AxisCycle};
use bitvec::vec::BitVec;

/// A boolean occupancy grid over the integer box `[0, xs) × [0, ys) × [0, zs)`.
///
/// Cells outside of the box are always empty. Grids are immutable: they are
/// built with a [`DiscreteShapeBuilder`](super::DiscreteShapeBuilder) and
/// never modified afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum DiscreteVoxelShape {
    /// A grid with every cell filled. Needs no storage.
    Full([u32; 3]),
    /// A grid storing one bit per cell.
    BitSet(BitSetDiscreteVoxelShape),
    /// A rectangular window into another grid.
    Sub(SubShape),
}

impl DiscreteVoxelShape {
    /// A grid of the given size with every cell filled.
    pub fn full(x_size: u32, y_size: u32, z_size: u32) -> Self {
        DiscreteVoxelShape::Full([x_size, y_size, z_size])
    }

    /// The number of cells of this grid along each axis.
    #[inline]
    pub fn sizes(&self) -> [u32; 3] {
        match self {
            DiscreteVoxelShape::Full(size) => *size,
            DiscreteVoxelShape::BitSet(s) => s.sizes(),
            DiscreteVoxelShape::Sub(s) => s.sizes(),
        }
    }

    /// The number of cells of this grid along `axis`.
    #[inline]
    pub fn size(&self, axis: Axis) -> u32 {
        self.sizes()[axis.index()]
    }

    /// Is the given in-bounds cell filled?
    #[inline]
    pub fn is_full(&self, x: u32, y: u32, z: u32) -> bool {
        match self {
            DiscreteVoxelShape::Full(size) => {
                debug_assert!(x < size[0] && y < size[1] && z < size[2]);
                true
            }
            DiscreteVoxelShape::BitSet(s) => s.is_full(x, y, z),
            DiscreteVoxelShape::Sub(s) => s.is_full(x, y, z),
        }
    }

    /// Is the given cell filled? Cells outside of the grid are empty.
    #[inline]
    pub fn is_full_wide(&self, x: i32, y: i32, z: i32) -> bool {
        if x < 0 || y < 0 || z < 0 {
            return false;
        }

        let [xs, ys, zs] = self.sizes();
        let (x, y, z) = (x as u32, y as u32, z as u32);
        x < xs && y < ys && z < zs && self.is_full(x, y, z)
    }

    /// Like [`Self::is_full_wide`] with coordinates permuted by `cycle`.
    ///
    /// The coordinate `a` is read along `cycle.cycle(Axis::X)`, `b` along
    /// `cycle.cycle(Axis::Y)` and `c` along `cycle.cycle(Axis::Z)`.
    #[inline]
    pub fn is_full_wide_cycled(&self, cycle: AxisCycle, a: i32, b: i32, c: i32) -> bool {
        self.is_full_wide(
            cycle.cycle_coord(a, b, c, Axis::X),
            cycle.cycle_coord(a, b, c, Axis::Y),
            cycle.cycle_coord(a, b, c, Axis::Z),
        )
    }

    /// The index of the first filled layer along `axis`, or `size(axis)` if empty.
    #[inline]
    pub fn first_full(&self, axis: Axis) -> u32 {
        match self {
            DiscreteVoxelShape::Full(size) => {
                if size.contains(&0) {
                    size[axis.index()]
                } else {
                    0
                }
            }
            DiscreteVoxelShape::BitSet(s) => s.first_full(axis),
            DiscreteVoxelShape::Sub(s) => s.first_full(axis),
        }
    }

    /// One past the index of the last filled layer along `axis`, or `0` if empty.
    #[inline]
    pub fn last_full(&self, axis: Axis) -> u32 {
        match self {
            DiscreteVoxelShape::Full(size) => {
                if size.contains(&0) {
                    0
                } else {
                    size[axis.index()]
                }
            }
            DiscreteVoxelShape::BitSet(s) => s.last_full(axis),
            DiscreteVoxelShape::Sub(s) => s.last_full(axis),
        }
    }

    /// The first filled cell along the line parallel to `axis` through `(i, j)`.
    ///
    /// `i` indexes the axis following `axis` cyclically, `j` the one after.
    /// Returns `size(axis)` if the line is empty or outside of the grid.
    pub fn first_full_in_line(&self, axis: Axis, i: i32, j: i32) -> u32 {
        let len = self.size(axis);
        if !self.line_in_bounds(axis, i, j) {
            return len;
        }

        let cycle = AxisCycle::between(Axis::X, axis);
        (0..len)
            .find(|l| self.is_full_wide_cycled(cycle, *l as i32, i, j))
            .unwrap_or(len)
    }

    /// One past the last filled cell along the line parallel to `axis` through `(i, j)`.
    ///
    /// Returns `0` if the line is empty or outside of the grid.
    pub fn last_full_in_line(&self, axis: Axis, i: i32, j: i32) -> u32 {
        if !self.line_in_bounds(axis, i, j) {
            return 0;
        }

        let cycle = AxisCycle::between(Axis::X, axis);
        (0..self.size(axis))
            .rev()
            .find(|l| self.is_full_wide_cycled(cycle, *l as i32, i, j))
            .map(|l| l + 1)
            .unwrap_or(0)
    }

    fn line_in_bounds(&self, axis: Axis, i: i32, j: i32) -> bool {
        let (a1, a2) = axis.others();
        i >= 0 && j >= 0 && (i as u32) < self.size(a1) && (j as u32) < self.size(a2)
    }

    /// Does this grid have no filled cell?
    pub fn is_empty(&self) -> bool {
        match self {
            DiscreteVoxelShape::Full(size) => size.contains(&0),
            DiscreteVoxelShape::BitSet(s) => s.is_empty(),
            DiscreteVoxelShape::Sub(s) => s.is_empty(),
        }
    }

    /// The number of filled cells.
    pub fn filled_count(&self) -> usize {
        match self {
            DiscreteVoxelShape::Full([xs, ys, zs]) => *xs as usize * *ys as usize * *zs as usize,
            DiscreteVoxelShape::BitSet(s) => s.filled_count(),
            DiscreteVoxelShape::Sub(s) => s.filled_count(),
        }
    }

    /// Calls `f(x0, y0, z0, x1, y1, z1)` for boxes covering exactly the filled cells.
    ///
    /// Without `combine`, every filled cell is reported on its own. With
    /// `combine`, cells are merged greedily into larger disjoint boxes: a run
    /// along `z` is grown along `x`, then the resulting rectangle along `y`.
    pub fn for_all_boxes(
        &self,
        combine: bool,
        mut f: impl FnMut(u32, u32, u32, u32, u32, u32),
    ) {
        let mut scratch = Scratch::new(self);
        let [xs, ys, zs] = scratch.size;

        for y in 0..ys {
            for x in 0..xs {
                let mut run_start = None;

                for z in 0..=zs {
                    if z != zs && scratch.is_full(x, y, z) {
                        if !combine {
                            f(x, y, z, x + 1, y + 1, z + 1);
                        } else if run_start.is_none() {
                            run_start = Some(z);
                        }
                    } else if let Some(z0) = run_start.take() {
                        let mut x_end = x;
                        let mut y_end = y;
                        scratch.clear_z_strip(z0, z, x, y);

                        while scratch.is_z_strip_full(z0, z, x_end + 1, y) {
                            scratch.clear_z_strip(z0, z, x_end + 1, y);
                            x_end += 1;
                        }

                        while scratch.is_xz_rectangle_full(x, x_end + 1, z0, z, y_end + 1) {
                            for x1 in x..=x_end {
                                scratch.clear_z_strip(z0, z, x1, y_end + 1);
                            }
                            y_end += 1;
                        }

                        f(x, y, z0, x_end + 1, y_end + 1, z);
                    }
                }
            }
        }
    }

    /// Calls `f(x0, y0, z0, x1, y1, z1)` for every edge of the outline of the filled cells.
    ///
    /// Edge endpoints are breakpoint indices, so they range up to `size`
    /// inclusive. With `combine`, collinear consecutive edge segments are
    /// reported as a single segment.
    pub fn for_all_edges(
        &self,
        combine: bool,
        mut f: impl FnMut(u32, u32, u32, u32, u32, u32),
    ) {
        self.for_all_axis_edges(AxisCycle::None, combine, &mut f);
        self.for_all_axis_edges(AxisCycle::Forward, combine, &mut f);
        self.for_all_axis_edges(AxisCycle::Backward, combine, &mut f);
    }

    fn for_all_axis_edges(
        &self,
        cycle: AxisCycle,
        combine: bool,
        f: &mut impl FnMut(u32, u32, u32, u32, u32, u32),
    ) {
        let inv = cycle.inverse();
        let size_a = self.size(inv.cycle(Axis::X));
        let size_b = self.size(inv.cycle(Axis::Y));
        let size_c = self.size(inv.cycle(Axis::Z));
        let mut emit = |a: u32, b: u32, c0: u32, c1: u32| {
            f(
                inv.cycle_coord(a, b, c0, Axis::X),
                inv.cycle_coord(a, b, c0, Axis::Y),
                inv.cycle_coord(a, b, c0, Axis::Z),
                inv.cycle_coord(a, b, c1, Axis::X),
                inv.cycle_coord(a, b, c1, Axis::Y),
                inv.cycle_coord(a, b, c1, Axis::Z),
            )
        };

        for a in 0..=size_a {
            for b in 0..=size_b {
                let mut run_start = None;

                for c in 0..=size_c {
                    // Look at the four cells around the edge segment `(a, b, c)`.
                    let mut filled = 0;
                    let mut parity = 0;
                    for da in 0..=1 {
                        for db in 0..=1 {
                            if self.is_full_wide_cycled(
                                inv,
                                a as i32 + da - 1,
                                b as i32 + db - 1,
                                c as i32,
                            ) {
                                filled += 1;
                                parity ^= da ^ db;
                            }
                        }
                    }

                    // One or three filled cells make a corner; two diagonal ones make two.
                    let is_edge = filled == 1 || filled == 3 || (filled == 2 && parity & 1 == 0);

                    if is_edge {
                        if !combine {
                            emit(a, b, c, c + 1);
                        } else if run_start.is_none() {
                            run_start = Some(c);
                        }
                    } else if let Some(c0) = run_start.take() {
                        emit(a, b, c0, c);
                    }
                }
            }
        }
    }
}

impl From<BitSetDiscreteVoxelShape> for DiscreteVoxelShape {
    fn from(shape: BitSetDiscreteVoxelShape) -> Self {
        DiscreteVoxelShape::BitSet(shape)
    }
}

impl From<SubShape> for DiscreteVoxelShape {
    fn from(shape: SubShape) -> Self {
        DiscreteVoxelShape::Sub(shape)
    }
}

// A mutable copy of a grid, consumed by the greedy box decomposition.
struct Scratch {
    size: [u32; 3],
    bits: BitVec,
}

impl Scratch {
    fn new(shape: &DiscreteVoxelShape) -> Self {
        let size = shape.sizes();
        let [xs, ys, zs] = size;
        let mut bits = BitVec::repeat(false, xs as usize * ys as usize * zs as usize);

        for x in 0..xs {
            for y in 0..ys {
                for z in 0..zs {
                    if shape.is_full(x, y, z) {
                        bits.set(Self::index_in(size, x, y, z), true);
                    }
                }
            }
        }

        Self { size, bits }
    }

    #[inline]
    fn index_in(size: [u32; 3], x: u32, y: u32, z: u32) -> usize {
        ((x as usize * size[1] as usize) + y as usize) * size[2] as usize + z as usize
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        Self::index_in(self.size, x, y, z)
    }

    fn is_full(&self, x: u32, y: u32, z: u32) -> bool {
        self.bits[self.index(x, y, z)]
    }

    fn is_z_strip_full(&self, z0: u32, z1: u32, x: u32, y: u32) -> bool {
        x < self.size[0]
            && y < self.size[1]
            && self.bits[self.index(x, y, z0)..self.index(x, y, z1)].all()
    }

    fn is_xz_rectangle_full(&self, x0: u32, x1: u32, z0: u32, z1: u32, y: u32) -> bool {
        (x0..x1).all(|x| self.is_z_strip_full(z0, z1, x, y))
    }

    fn clear_z_strip(&mut self, z0: u32, z1: u32, x: u32, y: u32) {
        let (start, end) = (self.index(x, y, z0), self.index(x, y, z1));
        self.bits[start..end].fill(false);
    }
}
