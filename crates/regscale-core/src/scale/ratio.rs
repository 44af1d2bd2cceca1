use crate::scale::round::round_half_up;

/// Target reference frequency term of the rescale ratio.
pub const SCALE_NUMERATOR: f64 = 1.77345;
/// Source reference frequency term of the rescale ratio.
pub const SCALE_DENOMINATOR: f64 = 2.0053;

/// Unrounded scaled value.
///
/// Evaluation order is fixed (multiply, then divide) so results stay
/// bit-identical with dumps converted by earlier tools.
#[inline]
pub fn scaled(value: u32) -> f64 {
    value as f64 * SCALE_NUMERATOR / SCALE_DENOMINATOR
}

/// `floor(value * 1.77345 / 2.0053 + 0.5)`
#[inline]
pub fn rescale(value: u32) -> u32 {
    round_half_up(scaled(value))
}

/// Rescale then clamp to `max` (high side only; the result is never negative).
#[inline]
pub fn rescale_clamped(value: u32, max: u32) -> u32 {
    rescale(value).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(rescale(0), 0);
        assert_eq!(rescale(1), 1);
        assert_eq!(rescale(31), 27);
        assert_eq!(rescale(100), 88);
        assert_eq!(rescale(255), 226);
        assert_eq!(rescale(1000), 884);
        assert_eq!(rescale(4095), 3622);
        assert_eq!(rescale(4096), 3622);
    }

    #[test]
    fn max_u16_stays_below_u16_bound() {
        assert_eq!(rescale(65535), 57958);
        assert_eq!(rescale_clamped(65535, 65535), 57958);
    }

    #[test]
    fn clamp_engages_at_first_overflowing_input() {
        assert_eq!(rescale_clamped(4630, 4095), 4095);
        assert_eq!(rescale(4630), 4095);
        assert_eq!(rescale(4631), 4096);
        assert_eq!(rescale_clamped(4631, 4095), 4095);

        assert_eq!(rescale(35), 31);
        assert_eq!(rescale(36), 32);
        assert_eq!(rescale_clamped(36, 31), 31);
        assert_eq!(rescale_clamped(255, 31), 31);
    }

    #[test]
    fn exact_ties_round_up() {
        // 20053 * 1.77345 / 2.0053 is exactly 17734.5 in f64
        assert_eq!(scaled(20053), 17734.5);
        assert_eq!(rescale(20053), 17735);
        assert_eq!(scaled(60159), 53203.5);
        assert_eq!(rescale(60159), 53204);
    }

    #[test]
    fn matches_formula_over_u16_range() {
        for v in 0u32..=u16::MAX as u32 {
            let expect = (v as f64 * 1.77345 / 2.0053 + 0.5).floor() as u32;
            assert_eq!(rescale(v), expect, "v={v}");
        }
    }

    #[test]
    fn not_idempotent() {
        let once = rescale(1000);
        let twice = rescale(once);
        assert_eq!(once, 884);
        assert_eq!(twice, 782);
        assert_ne!(twice, 1000);
    }

    #[test]
    fn monotone_non_decreasing() {
        let mut prev = 0;
        for v in 0u32..=u16::MAX as u32 {
            let r = rescale(v);
            assert!(r >= prev, "v={v}");
            prev = r;
        }
    }
}
