use crate::math::{Real, EPSILON};
use crate::shape::AxisCoords;
use alloc::sync::Arc;
use alloc::{vec, vec::Vec};

/// Merges two arbitrary lists by walking both of them in increasing order.
///
/// Breakpoints closer than [`EPSILON`] are merged. When the operator the
/// merge is built for discards cells filled by only one operand, the
/// breakpoints of that operand lying before the other operand starts or after
/// it ends are skipped.
#[derive(Clone, Debug)]
pub struct IndirectMerger {
    result: Arc<[Real]>,
    first_indices: Vec<i32>,
    second_indices: Vec<i32>,
}

impl IndirectMerger {
    /// Merges `a` and `b`.
    pub fn new(a: &AxisCoords, b: &AxisCoords, first_only: bool, second_only: bool) -> Self {
        let (m, n) = (a.len(), b.len());
        let mut result = Vec::with_capacity(m + n);
        let mut first_indices = Vec::with_capacity(m + n);
        let mut second_indices = Vec::with_capacity(m + n);

        let mut last = Real::NAN;
        let (mut i, mut j) = (0, 0);

        loop {
            let a_done = i >= m;
            let b_done = j >= n;

            if a_done && b_done {
                break;
            }

            let take_a = !a_done && (b_done || a.get(i) < b.get(j) + EPSILON);

            if take_a {
                i += 1;
                if !first_only && (j == 0 || b_done) {
                    continue;
                }
            } else {
                j += 1;
                if !second_only && (i == 0 || a_done) {
                    continue;
                }
            }

            let a_cell = i as i32 - 1;
            let b_cell = j as i32 - 1;
            let value = if take_a { a.get(i - 1) } else { b.get(j - 1) };

            // `last` is NaN until the first breakpoint is kept.
            if !(last >= value - EPSILON) {
                result.push(value);
                first_indices.push(a_cell);
                second_indices.push(b_cell);
                last = value;
            } else if let (Some(f), Some(s)) = (first_indices.last_mut(), second_indices.last_mut())
            {
                *f = a_cell;
                *s = b_cell;
            }
        }

        if result.len() <= 1 {
            log::debug!(
                "Merging lists of {} and {} breakpoints left no cell.",
                m,
                n
            );
            result = vec![0.0];
        }

        Self {
            result: result.into(),
            first_indices,
            second_indices,
        }
    }

    /// The merged breakpoints.
    pub fn coords(&self) -> AxisCoords {
        AxisCoords::explicit(self.result.clone())
    }

    /// The number of merged breakpoints.
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// The `i`-th merged breakpoint.
    pub fn get(&self, i: usize) -> Real {
        self.result[i]
    }

    /// See [`IndexMerger::for_merged_indexes`](super::IndexMerger::for_merged_indexes).
    pub fn for_merged_indexes(&self, mut f: impl FnMut(i32, i32, u32) -> bool) -> bool {
        (0..self.len() - 1)
            .all(|i| f(self.first_indices[i], self.second_indices[i], i as u32))
    }
}
