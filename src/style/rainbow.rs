//! Rainbow hue walk

use embassy_time::Duration;

use super::{Style, StyleState};
use crate::color::{Rgb, hue_to_rgb};
use crate::config::RAINBOW_TIMING;
use crate::interpolation::{hue_increment, iteration_delay};

/// Injects the color of a running hue, advancing it by a step-derived
/// amount each tick.
#[derive(Debug, Clone, Default)]
pub struct RainbowStyle {
    state: StyleState,
    /// Running hue over the full 16-bit wheel, wraps
    hue: u16,
}

impl RainbowStyle {
    pub const fn new() -> Self {
        Self {
            state: StyleState::new(),
            hue: 0,
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Hue advance per tick at the current step
    pub fn hue_increment(&self) -> u16 {
        hue_increment(self.state.step(), RAINBOW_TIMING.step)
    }
}

impl Style for RainbowStyle {
    fn state(&self) -> &StyleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StyleState {
        &mut self.state
    }

    fn next_color(&mut self) -> Rgb {
        let color = hue_to_rgb(self.hue);
        self.hue = self.hue.wrapping_add(self.hue_increment());
        color
    }

    fn iteration_delay(&self) -> Duration {
        iteration_delay(self.state.speed(), RAINBOW_TIMING.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_advances_by_step_increment() {
        let mut style = RainbowStyle::new();
        style.state_mut().set_step(100);
        assert_eq!(style.next_color(), hue_to_rgb(0));
        assert_eq!(style.hue(), 1000);
        style.state_mut().set_step(1);
        style.next_color();
        assert_eq!(style.hue(), 1005);
    }

    #[test]
    fn hue_wraps_around_the_wheel() {
        let mut style = RainbowStyle::new();
        style.state_mut().set_step(100);
        for _ in 0..65 {
            style.next_color();
        }
        assert_eq!(style.hue(), 65_000);
        style.next_color();
        assert_eq!(style.hue(), 464);
    }

    #[test]
    fn delay_endpoints() {
        let mut style = RainbowStyle::new();
        style.state_mut().set_speed(100);
        assert_eq!(style.iteration_delay(), Duration::from_millis(5));
        style.state_mut().set_speed(1);
        assert_eq!(style.iteration_delay(), Duration::from_millis(500));
    }
}
