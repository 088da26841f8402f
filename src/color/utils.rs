use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::color::Rgb;

/// The zero color every cleared or "off" pixel holds
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Convert a 16-bit wheel hue into a fully saturated color.
///
/// The high byte picks a pair of neighbouring 8-bit hues and the low byte
/// blends between their colors, so small hue steps still change the
/// output.
pub fn hue_to_rgb(hue: u16) -> Rgb {
    let [coarse, fine] = hue.to_be_bytes();
    let from = wheel(coarse);
    let to = wheel(coarse.wrapping_add(1));
    Rgb {
        r: blend(from.r, to.r, fine),
        g: blend(from.g, to.g, fine),
        b: blend(from.b, to.b, fine),
    }
}

#[inline]
fn wheel(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Channel at `fraction / 256` of the way from `from` to `to`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(from: u8, to: u8, fraction: u8) -> u8 {
    let from = i32::from(from);
    let delta = i32::from(to) - from;
    // Stays between the endpoints, so it fits in u8
    (from + (delta * i32::from(fraction)).div_euclid(256)) as u8
}
