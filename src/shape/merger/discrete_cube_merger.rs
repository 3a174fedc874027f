use crate::math::Real;
use crate::shape::AxisCoords;
use crate::utils;

/// Merges two regular grids into the regular grid of their least common multiple.
///
/// No breakpoint is ever materialized: the source cells of a merged cell are
/// found by integer division.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiscreteCubeMerger {
    cells: u32,
    first_div: u32,
    second_div: u32,
}

impl DiscreteCubeMerger {
    /// Merges the regular grids of `a_parts` and `b_parts` cells.
    pub fn new(a_parts: u32, b_parts: u32) -> Self {
        let gcd = utils::gcd(a_parts, b_parts);
        Self {
            cells: utils::lcm(a_parts, b_parts) as u32,
            first_div: a_parts / gcd,
            second_div: b_parts / gcd,
        }
    }

    /// The merged breakpoints.
    pub fn coords(&self) -> AxisCoords {
        AxisCoords::cube(self.cells)
    }

    /// The number of merged breakpoints.
    pub fn len(&self) -> usize {
        self.cells as usize + 1
    }

    /// The `i`-th merged breakpoint.
    pub fn get(&self, i: usize) -> Real {
        i as Real / self.cells as Real
    }

    /// See [`IndexMerger::for_merged_indexes`](super::IndexMerger::for_merged_indexes).
    pub fn for_merged_indexes(&self, mut f: impl FnMut(i32, i32, u32) -> bool) -> bool {
        (0..self.cells).all(|i| f((i / self.second_div) as i32, (i / self.first_div) as i32, i))
    }
}
