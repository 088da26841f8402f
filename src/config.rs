#![allow(clippy::unreadable_literal)]

use crate::color::rgb_from_u32;
use crate::interpolation::ParamRange;
use crate::buffer::PixelBuffer;
use crate::error::LayoutError;
use crate::layout::Geometry;
use crate::style::Palette;

/// Interpolation endpoints of one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTiming {
    /// Tick delay in milliseconds over speed (inverted)
    pub delay_ms: ParamRange,
    /// Modulus or hue increment over step
    pub step: ParamRange,
}

/// Value of each control setting before any remote write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlDefaults {
    pub brightness: u8,
    pub style: u8,
    pub speed: u8,
    pub pattern: u8,
    pub step: u8,
}

/// Compiled-in device wiring
pub struct DeviceConfig {
    pub led_count: usize,
    pub geometry: Geometry,
}

pub const SOLID_TIMING: StyleTiming = StyleTiming {
    delay_ms: ParamRange::new(20, 1000),
    step: ParamRange::new(2, 10),
};

pub const TWO_COLOR_TIMING: StyleTiming = StyleTiming {
    delay_ms: ParamRange::new(20, 1000),
    step: ParamRange::new(2, 10),
};

pub const RAINBOW_TIMING: StyleTiming = StyleTiming {
    delay_ms: ParamRange::new(5, 500),
    step: ParamRange::new(5, 1000),
};

pub const CONTROL_DEFAULTS: ControlDefaults = ControlDefaults {
    brightness: 64,
    style: 0,
    speed: 50,
    pattern: 0,
    step: 50,
};

pub const PALETTE: Palette = Palette {
    solid: rgb_from_u32(0xFF6A00),
    primary: rgb_from_u32(0x00A0FF),
    secondary: rgb_from_u32(0xFF0060),
};

#[cfg(feature = "ring24")]
pub const DEVICE: DeviceConfig = DeviceConfig {
    led_count: 24,
    geometry: Geometry::Ring { digits: 4 },
};
#[cfg(feature = "matrix")]
pub const DEVICE: DeviceConfig = DeviceConfig {
    led_count: 256,
    geometry: Geometry::Matrix {
        width: 32,
        height: 8,
        cell_width: 8,
    },
};
#[cfg(feature = "clock")]
pub const DEVICE: DeviceConfig = DeviceConfig {
    led_count: 56,
    geometry: Geometry::SevenSegment {
        digits: 4,
        leds_per_segment: 2,
    },
};
#[cfg(feature = "strip")]
pub const DEVICE: DeviceConfig = DeviceConfig {
    led_count: 600,
    geometry: Geometry::Strip,
};
#[cfg(not(any(
    feature = "ring24",
    feature = "matrix",
    feature = "clock",
    feature = "strip"
)))]
pub const DEVICE: DeviceConfig = DeviceConfig {
    led_count: 12,
    geometry: Geometry::Ring { digits: 4 },
};

/// Pixel count of the compiled-in device
pub const LED_COUNT: usize = DEVICE.led_count;

/// Buffer for the compiled-in device, partitioned by its geometry
pub fn device_buffer() -> Result<PixelBuffer<LED_COUNT>, LayoutError> {
    PixelBuffer::from_geometry(DEVICE.geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Partition;

    #[test]
    fn device_geometry_builds() {
        let buffer = device_buffer().unwrap();
        assert_eq!(buffer.len(), LED_COUNT);
        for partition in [Partition::Columns, Partition::Rows, Partition::Digits] {
            assert!(buffer.block_count(partition) >= 1);
            assert!(buffer.block_count(partition) <= LED_COUNT);
        }
    }

    #[test]
    fn control_defaults_are_in_range() {
        assert!((1..=100).contains(&CONTROL_DEFAULTS.speed));
        assert!((1..=100).contains(&CONTROL_DEFAULTS.step));
    }
}
