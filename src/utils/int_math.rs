use crate::math::Real;

/// The greatest common divisor of two grid resolutions.
#[inline]
pub fn gcd(a: u32, b: u32) -> u32 {
    num::integer::gcd(a, b)
}

/// The least common multiple of two grid resolutions.
///
/// Computed in 64 bits since merged resolutions are compared against a cell
/// budget before anything is allocated.
#[inline]
pub fn lcm(a: u32, b: u32) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    a as u64 * (b / gcd(a, b)) as u64
}

/// Rounds towards negative infinity and converts to `i32`, saturating.
#[inline]
pub fn floor_to_i32(value: Real) -> i32 {
    value.floor() as i32
}
