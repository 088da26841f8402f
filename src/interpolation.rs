//! Parameter interpolation
//!
//! Maps the bounded control bytes (`speed`, `step`) onto concrete tick
//! delays, moduli and hue increments. Every mapping is a straight line
//! `y = m·x + b` through two configured endpoints, evaluated in integer
//! math so that the endpoints come out exact.

use embassy_time::Duration;

/// Lowest meaningful `speed`/`step` value
pub const PARAM_MIN: u8 = 1;
/// Highest meaningful `speed`/`step` value
pub const PARAM_MAX: u8 = 100;
/// Midpoint of the `step` domain used by centered mappings
pub const PARAM_MID: u8 = 50;

/// Inclusive output range of an interpolated parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRange {
    pub min: u16,
    pub max: u16,
}

impl ParamRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }
}

/// Clamp a raw control byte into `PARAM_MIN..=PARAM_MAX`.
#[inline]
pub const fn clamp_param(value: u8) -> u8 {
    if value < PARAM_MIN {
        PARAM_MIN
    } else if value > PARAM_MAX {
        PARAM_MAX
    } else {
        value
    }
}

/// Linear interpolation of `x` over `x0..=x1` onto `y0..=y1`.
///
/// Rounds toward negative infinity; `x0 == x1` yields `y0`.
#[inline]
pub fn lerp(x: i32, x0: i32, x1: i32, y0: i32, y1: i32) -> i32 {
    let span = x1 - x0;
    if span == 0 {
        return y0;
    }
    let (num, den) = if span < 0 {
        (-(x - x0) * (y1 - y0), -span)
    } else {
        ((x - x0) * (y1 - y0), span)
    };
    y0 + num.div_euclid(den)
}

/// Tick delay for a speed value. Higher speed means a shorter delay:
/// speed 1 maps to `range.max`, speed 100 to `range.min`.
pub fn iteration_delay(speed: u8, range: ParamRange) -> Duration {
    let millis = lerp(
        i32::from(clamp_param(speed)),
        i32::from(PARAM_MIN),
        i32::from(PARAM_MAX),
        i32::from(range.max),
        i32::from(range.min),
    );
    Duration::from_millis(u64::from(millis.unsigned_abs()))
}

/// Modulus growing linearly with step, from `range.min` at step 1 to
/// `range.max` at step 100. Never below 1.
pub fn modulus(step: u8, range: ParamRange) -> u32 {
    let value = lerp(
        i32::from(clamp_param(step)),
        i32::from(PARAM_MIN),
        i32::from(PARAM_MAX),
        i32::from(range.min),
        i32::from(range.max),
    );
    value.unsigned_abs().max(1)
}

/// Modulus driven by the distance of step from the midpoint.
///
/// Equals `range.min` at step 50 and grows toward `range.max` as step
/// moves to either end, so `centered_modulus(50 - d) == centered_modulus(50 + d)`.
pub fn centered_modulus(step: u8, range: ParamRange) -> u32 {
    let distance = (i32::from(clamp_param(step)) - i32::from(PARAM_MID)).abs();
    let value = lerp(
        distance,
        0,
        i32::from(PARAM_MID),
        i32::from(range.min),
        i32::from(range.max),
    );
    value.unsigned_abs().max(1)
}

/// Hue advance per tick, from `range.min` at step 1 to `range.max` at step 100.
pub fn hue_increment(step: u8, range: ParamRange) -> u16 {
    let value = lerp(
        i32::from(clamp_param(step)),
        i32::from(PARAM_MIN),
        i32::from(PARAM_MAX),
        i32::from(range.min),
        i32::from(range.max),
    );
    u16::try_from(value).unwrap_or(range.max)
}
