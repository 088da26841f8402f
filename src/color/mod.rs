mod utils;

use smart_leds::RGB8;

pub use smart_leds::hsv::{Hsv, hsv2rgb};
pub use utils::{OFF, hue_to_rgb, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
