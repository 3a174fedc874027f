use super::DiscreteVoxelShape;
use crate::math::Axis;
use crate::shape::{BooleanOp, IndexMerger};
use bitvec::vec::BitVec;

/// A grid storing one occupancy bit per cell.
///
/// Cells are laid out with `z` varying fastest: the cell `(x, y, z)` is the bit
/// `((x * ys) + y) * zs + z`. The bounds of the filled cells are maintained
/// while the grid is built so that [`Self::first_full`] and
/// [`Self::last_full`] are constant-time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BitSetDiscreteVoxelShape {
    size: [u32; 3],
    storage: BitVec,
    mins: [u32; 3],
    maxs: [u32; 3],
}

impl BitSetDiscreteVoxelShape {
    fn new(size: [u32; 3]) -> Self {
        let len = size.iter().map(|s| *s as usize).product();
        Self {
            size,
            storage: BitVec::repeat(false, len),
            mins: size,
            maxs: [0; 3],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        ((x as usize * self.size[1] as usize) + y as usize) * self.size[2] as usize + z as usize
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn sizes(&self) -> [u32; 3] {
        self.size
    }

    /// Is the given in-bounds cell filled?
    #[inline]
    pub fn is_full(&self, x: u32, y: u32, z: u32) -> bool {
        self.storage[self.index(x, y, z)]
    }

    /// The first filled layer along `axis`, or `size(axis)` if empty.
    #[inline]
    pub fn first_full(&self, axis: Axis) -> u32 {
        self.mins[axis.index()]
    }

    /// One past the last filled layer along `axis`, or `0` if empty.
    #[inline]
    pub fn last_full(&self, axis: Axis) -> u32 {
        self.maxs[axis.index()]
    }

    /// Does this grid have no filled cell?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.not_any()
    }

    /// The number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.storage.count_ones()
    }

    fn fill(&mut self, x: u32, y: u32, z: u32) {
        let i = self.index(x, y, z);
        self.storage.set(i, true);

        for (k, v) in [x, y, z].into_iter().enumerate() {
            self.mins[k] = self.mins[k].min(v);
            self.maxs[k] = self.maxs[k].max(v + 1);
        }
    }

    /// Combines two grids cell by cell on the grid described by three mergers.
    ///
    /// The merged cell `(i, j, k)` is filled iff
    /// `op(a.is_full_wide(ai, aj, ak), b.is_full_wide(bi, bj, bk))`, where
    /// `(ai, bi)`, `(aj, bj)` and `(ak, bk)` are the source cells the mergers
    /// map `i`, `j` and `k` to.
    pub fn join(
        a: &DiscreteVoxelShape,
        b: &DiscreteVoxelShape,
        merger_x: &IndexMerger,
        merger_y: &IndexMerger,
        merger_z: &IndexMerger,
        op: BooleanOp,
    ) -> DiscreteVoxelShape {
        let mut builder = DiscreteShapeBuilder::new(
            merger_x.cells() as u32,
            merger_y.cells() as u32,
            merger_z.cells() as u32,
        );

        // The visitors never stop early, so every merged cell is evaluated.
        let _ = merger_x.for_merged_indexes(|ax, bx, x| {
            let _ = merger_y.for_merged_indexes(|ay, by, y| {
                let _ = merger_z.for_merged_indexes(|az, bz, z| {
                    if op.apply(a.is_full_wide(ax, ay, az), b.is_full_wide(bx, by, bz)) {
                        builder.fill(x, y, z);
                    }
                    true
                });
                true
            });
            true
        });

        builder.build()
    }
}

/// The mutable construction phase of a [`DiscreteVoxelShape`].
///
/// # Example
///
/// ```
/// use voxshape3d::math::Axis;
/// use voxshape3d::shape::discrete::DiscreteShapeBuilder;
///
/// let mut builder = DiscreteShapeBuilder::new(2, 2, 2);
/// builder.fill(1, 0, 1);
/// let shape = builder.build();
///
/// assert!(shape.is_full(1, 0, 1));
/// assert!(!shape.is_full(0, 0, 0));
/// assert_eq!(shape.first_full(Axis::X), 1);
/// assert_eq!(shape.last_full(Axis::Y), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteShapeBuilder {
    shape: BitSetDiscreteVoxelShape,
}

impl DiscreteShapeBuilder {
    /// An empty grid with the given size.
    pub fn new(x_size: u32, y_size: u32, z_size: u32) -> Self {
        Self {
            shape: BitSetDiscreteVoxelShape::new([x_size, y_size, z_size]),
        }
    }

    /// A grid with the given size where exactly the cells of
    /// `[x0, x1) × [y0, y1) × [z0, z1)` are filled.
    pub fn with_filled_bounds(
        x_size: u32,
        y_size: u32,
        z_size: u32,
        x0: u32,
        y0: u32,
        z0: u32,
        x1: u32,
        y1: u32,
        z1: u32,
    ) -> Self {
        let mut result = Self::new(x_size, y_size, z_size);

        for x in x0..x1.min(x_size) {
            for y in y0..y1.min(y_size) {
                for z in z0..z1.min(z_size) {
                    result.fill(x, y, z);
                }
            }
        }

        result
    }

    /// Marks one cell as filled.
    ///
    /// The cell must lie inside of the grid. Out-of-bounds cells are ignored
    /// in release builds.
    pub fn fill(&mut self, x: u32, y: u32, z: u32) {
        let [xs, ys, zs] = self.shape.size;
        let in_bounds = x < xs && y < ys && z < zs;
        debug_assert!(
            in_bounds,
            "cell ({x}, {y}, {z}) outside of a {xs}x{ys}x{zs} grid"
        );

        if in_bounds {
            self.shape.fill(x, y, z);
        }
    }

    /// Freezes the grid.
    ///
    /// A non-empty grid with every cell filled is stored without any bit.
    pub fn build(self) -> DiscreteVoxelShape {
        let shape = self.shape;

        if !shape.storage.is_empty() && shape.storage.all() {
            DiscreteVoxelShape::Full(shape.size)
        } else {
            DiscreteVoxelShape::BitSet(shape)
        }
    }
}

#[cfg(test)]
mod test {
    use super::DiscreteShapeBuilder;
    use crate::math::Axis;
    use crate::shape::discrete::DiscreteVoxelShape;

    #[test]
    fn tracks_filled_bounds() {
        let mut builder = DiscreteShapeBuilder::new(4, 4, 4);
        builder.fill(1, 2, 3);
        builder.fill(2, 0, 3);
        let shape = builder.build();

        assert_eq!(shape.first_full(Axis::X), 1);
        assert_eq!(shape.last_full(Axis::X), 3);
        assert_eq!(shape.first_full(Axis::Y), 0);
        assert_eq!(shape.last_full(Axis::Y), 3);
        assert_eq!(shape.first_full(Axis::Z), 3);
        assert_eq!(shape.last_full(Axis::Z), 4);
        assert_eq!(shape.filled_count(), 2);
    }

    #[test]
    fn empty_bounds_are_inverted() {
        let shape = DiscreteShapeBuilder::new(3, 2, 1).build();
        assert!(shape.is_empty());
        assert_eq!(shape.first_full(Axis::X), 3);
        assert_eq!(shape.last_full(Axis::X), 0);
    }

    #[test]
    fn completely_filled_grid_needs_no_bits() {
        let shape = DiscreteShapeBuilder::with_filled_bounds(2, 2, 2, 0, 0, 0, 2, 2, 2).build();
        assert!(matches!(shape, DiscreteVoxelShape::Full([2, 2, 2])));

        let partial = DiscreteShapeBuilder::with_filled_bounds(2, 2, 2, 0, 0, 0, 2, 1, 2).build();
        assert!(matches!(partial, DiscreteVoxelShape::BitSet(_)));
        assert_eq!(partial.filled_count(), 4);
        assert!(!partial.is_full(0, 1, 0));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fill_out_of_bounds() {
        let mut builder = DiscreteShapeBuilder::new(1, 1, 1);
        builder.fill(1, 0, 0);
    }
}
