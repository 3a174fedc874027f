use crate::math::{Real, EPSILON};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// The breakpoints partitioning one axis of a shape into cells.
///
/// A list of `n + 1` strictly increasing values describes `n` cells, cell `i`
/// spanning `[get(i), get(i + 1)]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AxisCoords {
    /// The regular partition of `[0, 1]` into the given number of parts.
    ///
    /// This variant is recognized structurally: merging two of these takes a
    /// fast path that never materializes the merged breakpoints.
    Cube(u32),
    /// Arbitrary breakpoints.
    Explicit(Arc<[Real]>),
}

impl AxisCoords {
    /// The regular partition of `[0, 1]` into `parts` cells.
    ///
    /// Panics if `parts` is zero.
    pub fn cube(parts: u32) -> Self {
        assert!(parts > 0, "Need at least 1 part");
        AxisCoords::Cube(parts)
    }

    /// Wraps breakpoints already sorted in increasing order.
    pub fn explicit(values: impl Into<Arc<[Real]>>) -> Self {
        let values = values.into();
        debug_assert!(
            values.windows(2).all(|w| w[0] <= w[1]),
            "breakpoints must be sorted"
        );
        AxisCoords::Explicit(values)
    }

    /// Sorts the given values and merges those closer than [`EPSILON`].
    pub fn from_breakpoints(values: impl IntoIterator<Item = Real>) -> Self {
        let mut values: Vec<Real> = values.into_iter().filter(|v| !v.is_nan()).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup_by(|next, kept| *next - *kept < EPSILON);
        AxisCoords::Explicit(values.into())
    }

    /// The number of breakpoints, one more than the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            AxisCoords::Cube(parts) => *parts as usize + 1,
            AxisCoords::Explicit(values) => values.len(),
        }
    }

    /// Does this list have no breakpoint at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of cells described by this list.
    #[inline]
    pub fn cells(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// The `i`-th breakpoint.
    #[inline]
    pub fn get(&self, i: usize) -> Real {
        match self {
            AxisCoords::Cube(parts) => i as Real / *parts as Real,
            AxisCoords::Explicit(values) => values[i],
        }
    }

    /// The smallest breakpoint.
    #[inline]
    pub fn first(&self) -> Real {
        self.get(0)
    }

    /// The largest breakpoint.
    #[inline]
    pub fn last(&self) -> Real {
        self.get(self.len() - 1)
    }

    /// Is this the structurally regular partition?
    #[inline]
    pub fn is_cube(&self) -> bool {
        matches!(self, AxisCoords::Cube(_))
    }

    /// Iterates through the breakpoints in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// The same breakpoints shifted by `delta`.
    ///
    /// The result is always explicit, even for a zero `delta`.
    pub fn offset(&self, delta: Real) -> Self {
        AxisCoords::Explicit(self.iter().map(|v| v + delta).collect())
    }
}

impl PartialEq for AxisCoords {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AxisCoords::Cube(a), AxisCoords::Cube(b)) => a == b,
            _ => self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}
