use crate::math::Real;
use crate::shape::AxisCoords;
use alloc::vec::Vec;

/// Merges two lists whose ranges are disjoint by concatenating them.
///
/// The merged cell spanning the gap between the two ranges belongs to neither
/// operand and is never visited.
#[derive(Clone, Debug, PartialEq)]
pub struct NonOverlappingMerger {
    lower: AxisCoords,
    upper: AxisCoords,
    swap: bool,
}

impl NonOverlappingMerger {
    /// Merges `lower` with `upper`, every breakpoint of which is larger.
    ///
    /// With `swap`, `upper` is the first operand of the merge and `lower` the
    /// second one.
    pub fn new(lower: AxisCoords, upper: AxisCoords, swap: bool) -> Self {
        Self { lower, upper, swap }
    }

    /// The merged breakpoints.
    pub fn coords(&self) -> AxisCoords {
        AxisCoords::explicit(
            self.lower
                .iter()
                .chain(self.upper.iter())
                .collect::<Vec<_>>(),
        )
    }

    /// The number of merged breakpoints.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// The `i`-th merged breakpoint.
    pub fn get(&self, i: usize) -> Real {
        if i < self.lower.len() {
            self.lower.get(i)
        } else {
            self.upper.get(i - self.lower.len())
        }
    }

    /// See [`IndexMerger::for_merged_indexes`](super::IndexMerger::for_merged_indexes).
    pub fn for_merged_indexes(&self, mut f: impl FnMut(i32, i32, u32) -> bool) -> bool {
        let mut merge = |lower_cell: i32, upper_cell: i32, i: usize| {
            if self.swap {
                f(upper_cell, lower_cell, i as u32)
            } else {
                f(lower_cell, upper_cell, i as u32)
            }
        };

        let lower_cells = self.lower.cells();
        if !(0..lower_cells).all(|i| merge(i as i32, -1, i)) {
            return false;
        }

        (0..self.upper.cells()).all(|i| merge(lower_cells as i32, i as i32, lower_cells + 1 + i))
    }
}
