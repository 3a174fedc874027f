use super::BlockPos;

/// One of the three coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The `x` axis.
    X = 0,
    /// The `y` axis.
    Y = 1,
    /// The `z` axis.
    Z = 2,
}

impl Axis {
    /// All the axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The index of this axis (0 for `x`, 1 for `y`, 2 for `z`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis with the given index, wrapping around modulo 3.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 3]
    }

    /// Picks the argument matching this axis.
    #[inline]
    pub fn choose<T>(self, x: T, y: T, z: T) -> T {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }

    /// The two other axes, in cyclic order after this one.
    #[inline]
    pub const fn others(self) -> (Axis, Axis) {
        (
            Self::from_index(self.index() + 1),
            Self::from_index(self.index() + 2),
        )
    }
}

/// The sign of a direction along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AxisDirection {
    /// Towards increasing coordinates.
    Positive,
    /// Towards decreasing coordinates.
    Negative,
}

impl AxisDirection {
    /// The opposite sign.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            AxisDirection::Positive => AxisDirection::Negative,
            AxisDirection::Negative => AxisDirection::Positive,
        }
    }
}

/// One of the six signed coordinate directions, identifying a face of a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Direction {
    /// The direction `-x`.
    NegX = 0,
    /// The direction `+x`.
    PosX = 1,
    /// The direction `-y`.
    NegY = 2,
    /// The direction `+y`.
    PosY = 3,
    /// The direction `-z`.
    NegZ = 4,
    /// The direction `+z`.
    PosZ = 5,
}

impl Direction {
    /// All the directions, ordered so that `ALL[i].index() == i`.
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Builds the direction along `axis` with the sign `dir`.
    pub const fn new(axis: Axis, dir: AxisDirection) -> Self {
        let base = axis.index() * 2;
        match dir {
            AxisDirection::Negative => Self::ALL[base],
            AxisDirection::Positive => Self::ALL[base + 1],
        }
    }

    /// A dense index in `0..6`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis this direction is parallel to.
    #[inline]
    pub const fn axis(self) -> Axis {
        Axis::from_index(self.index() / 2)
    }

    /// The sign of this direction along its axis.
    #[inline]
    pub const fn axis_direction(self) -> AxisDirection {
        if self.index() % 2 == 1 {
            AxisDirection::Positive
        } else {
            AxisDirection::Negative
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::new(self.axis(), self.axis_direction().opposite())
    }
}

/// A cyclic permutation of the coordinate axes.
///
/// Sweeps and line scans are written once for a canonical axis and reused for
/// the others by cycling coordinates through one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisCycle {
    /// The identity permutation.
    None,
    /// Maps `x -> y -> z -> x`.
    Forward,
    /// Maps `x -> z -> y -> x`.
    Backward,
}

impl AxisCycle {
    const ALL: [AxisCycle; 3] = [AxisCycle::None, AxisCycle::Forward, AxisCycle::Backward];

    /// The permutation mapping `from` onto `to`.
    pub fn between(from: Axis, to: Axis) -> Self {
        let shift = (to.index() as i32 - from.index() as i32).rem_euclid(3);
        Self::ALL[shift as usize]
    }

    /// The permutation undoing this one.
    pub const fn inverse(self) -> Self {
        match self {
            AxisCycle::None => AxisCycle::None,
            AxisCycle::Forward => AxisCycle::Backward,
            AxisCycle::Backward => AxisCycle::Forward,
        }
    }

    /// The image of `axis` by this permutation.
    pub const fn cycle(self, axis: Axis) -> Axis {
        match self {
            AxisCycle::None => axis,
            AxisCycle::Forward => Axis::from_index(axis.index() + 1),
            AxisCycle::Backward => Axis::from_index(axis.index() + 2),
        }
    }

    /// The coordinate landing on `axis` once `(x, y, z)` is permuted.
    ///
    /// This is consistent with [`AxisCycle::cycle`]: for the forward cycle the
    /// `x` input ends up on the `y` axis.
    #[inline]
    pub fn cycle_coord<T>(self, x: T, y: T, z: T, axis: Axis) -> T {
        match self {
            AxisCycle::None => axis.choose(x, y, z),
            AxisCycle::Forward => axis.choose(z, x, y),
            AxisCycle::Backward => axis.choose(y, z, x),
        }
    }

    /// Permutes a whole block position.
    pub fn cycle_block_pos(self, x: i32, y: i32, z: i32) -> BlockPos {
        BlockPos::new(
            self.cycle_coord(x, y, z, Axis::X),
            self.cycle_coord(x, y, z, Axis::Y),
            self.cycle_coord(x, y, z, Axis::Z),
        )
    }
}
