/// A boolean operator combining the occupancy of two shapes cell by cell.
///
/// The discriminant of each variant is its truth table: bit `2 * a + b` is
/// the result of the operator applied to `(a, b)`. For example
/// [`BooleanOp::OnlyFirst`] is `0b0100` since it is only true for
/// `(true, false)`.
///
/// Operators true for `(false, false)` would produce unbounded shapes. They
/// are rejected by [`shapes::join`](crate::shape::shapes::join) and
/// [`shapes::join_is_not_empty`](crate::shape::shapes::join_is_not_empty).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum BooleanOp {
    /// Always false.
    False = 0b0000,
    /// `!a && !b`
    NotOr = 0b0001,
    /// `!a && b`
    OnlySecond = 0b0010,
    /// `!a`
    NotFirst = 0b0011,
    /// `a && !b`
    OnlyFirst = 0b0100,
    /// `!b`
    NotSecond = 0b0101,
    /// `a != b`
    NotSame = 0b0110,
    /// `!(a && b)`
    NotAnd = 0b0111,
    /// `a && b`
    And = 0b1000,
    /// `a == b`
    Same = 0b1001,
    /// `b`
    Second = 0b1010,
    /// `!a || b`
    Causes = 0b1011,
    /// `a`
    First = 0b1100,
    /// `a || !b`
    CausedBy = 0b1101,
    /// `a || b`
    Or = 0b1110,
    /// Always true.
    True = 0b1111,
}

impl BooleanOp {
    /// All the operators, ordered by truth table.
    pub const ALL: [BooleanOp; 16] = [
        BooleanOp::False,
        BooleanOp::NotOr,
        BooleanOp::OnlySecond,
        BooleanOp::NotFirst,
        BooleanOp::OnlyFirst,
        BooleanOp::NotSecond,
        BooleanOp::NotSame,
        BooleanOp::NotAnd,
        BooleanOp::And,
        BooleanOp::Same,
        BooleanOp::Second,
        BooleanOp::Causes,
        BooleanOp::First,
        BooleanOp::CausedBy,
        BooleanOp::Or,
        BooleanOp::True,
    ];

    /// Evaluates this operator.
    #[inline]
    pub const fn apply(self, a: bool, b: bool) -> bool {
        let bit = ((a as u8) << 1) | (b as u8);
        (self as u8 >> bit) & 1 == 1
    }

    /// Is the result true where neither shape is filled?
    ///
    /// Such an operator cannot be used to combine shapes.
    #[inline]
    pub const fn is_degenerate(self) -> bool {
        self.apply(false, false)
    }

    /// Does the result keep cells only the first shape fills?
    #[inline]
    pub const fn keeps_first_only(self) -> bool {
        self.apply(true, false)
    }

    /// Does the result keep cells only the second shape fills?
    #[inline]
    pub const fn keeps_second_only(self) -> bool {
        self.apply(false, true)
    }
}
