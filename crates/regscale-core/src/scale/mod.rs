pub mod ratio;
pub mod round;

pub use ratio::{rescale, rescale_clamped, scaled, SCALE_DENOMINATOR, SCALE_NUMERATOR};
pub use round::round_half_up;
