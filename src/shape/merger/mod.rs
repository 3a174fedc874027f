//! Merging of the breakpoints of two shapes along one axis.
//!
//! Combining two shapes requires a common grid refining both of their grids.
//! An [`IndexMerger`] builds that grid for one axis and maps every merged cell
//! back to the cell of each operand it lies in.

pub use self::discrete_cube_merger::DiscreteCubeMerger;
pub use self::identical_merger::IdenticalMerger;
pub use self::indirect_merger::IndirectMerger;
pub use self::non_overlapping_merger::NonOverlappingMerger;

use crate::math::{Real, EPSILON};
use crate::shape::AxisCoords;
use crate::utils;

mod discrete_cube_merger;
mod identical_merger;
mod indirect_merger;
mod non_overlapping_merger;

/// The maximum number of merged cells for which two regular grids are merged
/// into a regular grid.
///
/// The budget is shared by the three axes: the merger along `y` gets what the
/// merger along `x` left, and so on.
pub const MAX_DISCRETE_MERGE_CELLS: u64 = 256;

/// The merged breakpoints of two axis lists `a` and `b`.
///
/// Merged cell indices are always in `0..self.cells()`. The source cell
/// indices reported alongside them may be `-1` or past the last cell of their
/// list, meaning that the merged cell lies outside of that operand.
#[derive(Clone, Debug)]
pub enum IndexMerger {
    /// Two regular grids merged into their least common multiple.
    DiscreteCube(DiscreteCubeMerger),
    /// Two lists whose ranges do not overlap.
    NonOverlapping(NonOverlappingMerger),
    /// Two equal lists.
    Identical(IdenticalMerger),
    /// The general case.
    Indirect(IndirectMerger),
}

/// Picks the cheapest merger able to merge `a` and `b`.
///
/// `prior_cells` is the number of merged cells along the axes already merged,
/// used to bound the size of regular merged grids. `first_only` and
/// `second_only` tell whether the operator the merger is built for keeps
/// cells filled by one operand only. When it does not, the breakpoints of one
/// operand lying outside of the other are useless and may be dropped.
pub fn create_index_merger(
    prior_cells: u64,
    a: &AxisCoords,
    b: &AxisCoords,
    first_only: bool,
    second_only: bool,
) -> IndexMerger {
    let a_cells = a.cells();
    let b_cells = b.cells();

    if let (AxisCoords::Cube(a_parts), AxisCoords::Cube(b_parts)) = (a, b) {
        if prior_cells.saturating_mul(utils::lcm(*a_parts, *b_parts)) <= MAX_DISCRETE_MERGE_CELLS {
            log::trace!("Merging regular grids of {a_parts} and {b_parts} cells.");
            return IndexMerger::DiscreteCube(DiscreteCubeMerger::new(*a_parts, *b_parts));
        }
    }

    if a.last() < b.first() - EPSILON {
        log::trace!("Merging disjoint ranges.");
        IndexMerger::NonOverlapping(NonOverlappingMerger::new(a.clone(), b.clone(), false))
    } else if b.last() < a.first() - EPSILON {
        log::trace!("Merging disjoint ranges, second first.");
        IndexMerger::NonOverlapping(NonOverlappingMerger::new(b.clone(), a.clone(), true))
    } else if a_cells == b_cells && a == b {
        log::trace!("Merging identical lists of {a_cells} cells.");
        IndexMerger::Identical(IdenticalMerger::new(a.clone()))
    } else {
        log::trace!("Merging lists of {a_cells} and {b_cells} cells.");
        IndexMerger::Indirect(IndirectMerger::new(a, b, first_only, second_only))
    }
}

impl IndexMerger {
    /// The merged breakpoints.
    pub fn coords(&self) -> AxisCoords {
        match self {
            IndexMerger::DiscreteCube(m) => m.coords(),
            IndexMerger::NonOverlapping(m) => m.coords(),
            IndexMerger::Identical(m) => m.coords().clone(),
            IndexMerger::Indirect(m) => m.coords(),
        }
    }

    /// The number of merged breakpoints.
    pub fn len(&self) -> usize {
        match self {
            IndexMerger::DiscreteCube(m) => m.len(),
            IndexMerger::NonOverlapping(m) => m.len(),
            IndexMerger::Identical(m) => m.coords().len(),
            IndexMerger::Indirect(m) => m.len(),
        }
    }

    /// Does the merged list have no breakpoint?
    ///
    /// Always false: a merger that dropped every breakpoint reports `[0.0]`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of merged cells.
    pub fn cells(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// The `i`-th merged breakpoint.
    pub fn get(&self, i: usize) -> Real {
        match self {
            IndexMerger::DiscreteCube(m) => m.get(i),
            IndexMerger::NonOverlapping(m) => m.get(i),
            IndexMerger::Identical(m) => m.coords().get(i),
            IndexMerger::Indirect(m) => m.get(i),
        }
    }

    /// Is the merged list a regular grid?
    pub fn is_discrete_cube(&self) -> bool {
        matches!(self, IndexMerger::DiscreteCube(_))
    }

    /// Calls `f(a_cell, b_cell, merged_cell)` for every merged cell, in order.
    ///
    /// Stops and returns `false` as soon as `f` returns `false`. Returns `true`
    /// if every cell was visited.
    pub fn for_merged_indexes(&self, f: impl FnMut(i32, i32, u32) -> bool) -> bool {
        match self {
            IndexMerger::DiscreteCube(m) => m.for_merged_indexes(f),
            IndexMerger::NonOverlapping(m) => m.for_merged_indexes(f),
            IndexMerger::Identical(m) => m.for_merged_indexes(f),
            IndexMerger::Indirect(m) => m.for_merged_indexes(f),
        }
    }
}
