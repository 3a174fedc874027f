/// Finds the first integer of `[min, max)` for which `pred` holds.
///
/// The predicate must be monotone: once it returns `true` for some value, it
/// must return `true` for every greater value. Returns `max` if `pred` never
/// holds on the range.
pub fn binary_search(mut min: i32, max: i32, mut pred: impl FnMut(i32) -> bool) -> i32 {
    let mut len = max - min;

    while len > 0 {
        let half = len / 2;
        let mid = min + half;

        if pred(mid) {
            len = half;
        } else {
            min = mid + 1;
            len -= half + 1;
        }
    }

    min
}
