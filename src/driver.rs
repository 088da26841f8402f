//! LED driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the animator to stay hardware-agnostic.

use core::fmt::Debug;

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animator is generic over this trait.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip, in index order
    fn write(&mut self, colors: &[Rgb; N]);

    /// Set output brightness (0-255). Drivers without dimming ignore it.
    fn set_brightness(&mut self, _brightness: u8) {}
}

/// Driver over any `smart-leds` writer (RMT, SPI, PIO adapters)
///
/// Brightness is applied in software while streaming the frame.
pub struct SmartLedsDriver<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsDriver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LedDriver<N> for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Error: Debug,
    Rgb: Into<W::Color>,
{
    fn write(&mut self, colors: &[Rgb; N]) {
        // A dropped frame is replaced by the next one
        if let Err(err) = self
            .writer
            .write(brightness(colors.iter().copied(), self.brightness))
        {
            log::warn!("driver: frame write failed: {err:?}");
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
