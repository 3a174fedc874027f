//! Various unsorted numerical helpers.

pub use self::binary_search::binary_search;
pub use self::int_math::{floor_to_i32, gcd, lcm};

mod binary_search;
mod int_math;
