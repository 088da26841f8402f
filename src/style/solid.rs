//! Single color with periodic off pixels

use embassy_time::Duration;

use super::{Style, StyleState};
use crate::color::{OFF, Rgb};
use crate::config::SOLID_TIMING;
use crate::interpolation::{iteration_delay, modulus};

/// One base color; every `modulus(step)`-th tick injects an off pixel.
#[derive(Debug, Clone)]
pub struct SolidStyle {
    state: StyleState,
    color: Rgb,
    iteration: u32,
}

impl SolidStyle {
    pub const fn new(color: Rgb) -> Self {
        Self {
            state: StyleState::new(),
            color,
            iteration: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Change the base color. Pixels already shown keep their color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Ticks run so far
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Period of off pixels at the current step
    pub fn modulus(&self) -> u32 {
        modulus(self.state.step(), SOLID_TIMING.step)
    }
}

impl Style for SolidStyle {
    fn state(&self) -> &StyleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StyleState {
        &mut self.state
    }

    fn next_color(&mut self) -> Rgb {
        let color = if self.iteration % self.modulus() == 0 {
            OFF
        } else {
            self.color
        };
        self.iteration = self.iteration.wrapping_add(1);
        color
    }

    fn iteration_delay(&self) -> Duration {
        iteration_delay(self.state.speed(), SOLID_TIMING.delay_ms)
    }
}
