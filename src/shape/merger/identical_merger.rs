use crate::shape::AxisCoords;

/// Merges a list with itself: merged cell `i` is cell `i` of both operands.
#[derive(Clone, Debug, PartialEq)]
pub struct IdenticalMerger {
    coords: AxisCoords,
}

impl IdenticalMerger {
    /// Merges `coords` with an equal list.
    pub fn new(coords: AxisCoords) -> Self {
        Self { coords }
    }

    /// The merged breakpoints, equal to both operands.
    pub fn coords(&self) -> &AxisCoords {
        &self.coords
    }

    /// See [`IndexMerger::for_merged_indexes`](super::IndexMerger::for_merged_indexes).
    pub fn for_merged_indexes(&self, mut f: impl FnMut(i32, i32, u32) -> bool) -> bool {
        (0..self.coords.cells() as u32).all(|i| f(i as i32, i as i32, i))
    }
}
