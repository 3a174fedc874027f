use super::DiscreteVoxelShape;
use crate::math::Axis;
use alloc::sync::Arc;

/// A read-only rectangular window `[start, end)` into another grid.
///
/// The cell `(0, 0, 0)` of the window is the cell `start` of the parent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SubShape {
    parent: Arc<DiscreteVoxelShape>,
    start: [u32; 3],
    end: [u32; 3],
    mins: [u32; 3],
    maxs: [u32; 3],
}

impl SubShape {
    /// The window `[start, end)` of `parent`.
    ///
    /// The window must be contained in the parent grid.
    pub fn new(parent: Arc<DiscreteVoxelShape>, start: [u32; 3], end: [u32; 3]) -> Self {
        let parent_size = parent.sizes();
        debug_assert!(
            (0..3).all(|i| start[i] <= end[i] && end[i] <= parent_size[i]),
            "window {start:?}..{end:?} outside of a {parent_size:?} grid"
        );

        let mut result = Self {
            parent,
            start,
            end,
            mins: [0; 3],
            maxs: [0; 3],
        };
        result.compute_bounds();
        result
    }

    fn compute_bounds(&mut self) {
        let size = self.sizes();
        let mut mins = size;
        let mut maxs = [0; 3];

        for x in 0..size[0] {
            for y in 0..size[1] {
                for z in 0..size[2] {
                    if self.is_full(x, y, z) {
                        for (k, v) in [x, y, z].into_iter().enumerate() {
                            mins[k] = mins[k].min(v);
                            maxs[k] = maxs[k].max(v + 1);
                        }
                    }
                }
            }
        }

        self.mins = mins;
        self.maxs = maxs;
    }

    /// The number of cells of the window along each axis.
    #[inline]
    pub fn sizes(&self) -> [u32; 3] {
        [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ]
    }

    /// Is the given in-bounds cell of the window filled?
    #[inline]
    pub fn is_full(&self, x: u32, y: u32, z: u32) -> bool {
        self.parent
            .is_full(self.start[0] + x, self.start[1] + y, self.start[2] + z)
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

    /// Does this window contain no filled cell?
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.mins[i] >= self.maxs[i])
    }

    /// The number of filled cells inside of the window.
    pub fn filled_count(&self) -> usize {
        let [xs, ys, zs] = self.sizes();
        let mut count = 0;
        for x in 0..xs {
            for y in 0..ys {
                for z in 0..zs {
                    count += self.is_full(x, y, z) as usize;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod test {
    use super::SubShape;
    use crate::math::Axis;
    use crate::shape::discrete::{DiscreteShapeBuilder, DiscreteVoxelShape};
    use alloc::sync::Arc;

    #[test]
    fn window_bounds_are_exact() {
        let mut builder = DiscreteShapeBuilder::new(4, 1, 1);
        builder.fill(0, 0, 0);
        builder.fill(3, 0, 0);
        let parent = Arc::new(builder.build());

        let middle = SubShape::new(parent.clone(), [1, 0, 0], [3, 1, 1]);
        assert!(middle.is_empty());
        assert_eq!(middle.filled_count(), 0);

        let last = DiscreteVoxelShape::from(SubShape::new(parent, [2, 0, 0], [4, 1, 1]));
        assert!(!last.is_empty());
        assert_eq!(last.size(Axis::X), 2);
        assert_eq!(last.first_full(Axis::X), 1);
        assert_eq!(last.last_full(Axis::X), 2);
        assert!(last.is_full_wide(1, 0, 0));
        assert!(!last.is_full_wide(2, 0, 0));
    }
}
