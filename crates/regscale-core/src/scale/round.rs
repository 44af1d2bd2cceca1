/// Round half up: add 0.5 then truncate.
///
/// Ties go away from zero (2.5 -> 3), never to even.
/// Negative and NaN inputs saturate to 0; callers only pass non-negative values.
#[inline]
pub fn round_half_up(x: f64) -> u32 {
    (x + 0.5).floor() as u32
}
