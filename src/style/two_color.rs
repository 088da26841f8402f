//! Two alternating colors

use embassy_time::Duration;

use super::{Style, StyleState};
use crate::color::Rgb;
use crate::config::TWO_COLOR_TIMING;
use crate::interpolation::{PARAM_MID, centered_modulus, iteration_delay};

/// Two colors; the minority color is injected every `modulus` ticks.
///
/// Steps above the midpoint swap which color is the minority. The
/// modulus is smallest at the midpoint, so the colors alternate fastest
/// there and get sparser toward either end.
#[derive(Debug, Clone)]
pub struct TwoColorStyle {
    state: StyleState,
    primary: Rgb,
    secondary: Rgb,
    iteration: u32,
}

impl TwoColorStyle {
    pub const fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self {
            state: StyleState::new(),
            primary,
            secondary,
            iteration: 0,
        }
    }

    pub fn set_colors(&mut self, primary: Rgb, secondary: Rgb) {
        self.primary = primary;
        self.secondary = secondary;
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// `(majority, minority)` colors at the current step
    pub fn roles(&self) -> (Rgb, Rgb) {
        if self.state.step() > PARAM_MID {
            (self.secondary, self.primary)
        } else {
            (self.primary, self.secondary)
        }
    }

    pub fn modulus(&self) -> u32 {
        centered_modulus(self.state.step(), TWO_COLOR_TIMING.step)
    }
}

impl Style for TwoColorStyle {
    fn state(&self) -> &StyleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StyleState {
        &mut self.state
    }

    fn next_color(&mut self) -> Rgb {
        let (majority, minority) = self.roles();
        let color = if self.iteration % self.modulus() == 0 {
            minority
        } else {
            majority
        };
        self.iteration = self.iteration.wrapping_add(1);
        color
    }

    fn iteration_delay(&self) -> Duration {
        iteration_delay(self.state.speed(), TWO_COLOR_TIMING.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_from_u32;

    const GREEN: Rgb = rgb_from_u32(0x00_FF00);
    const BLUE: Rgb = rgb_from_u32(0x00_00FF);

    #[test]
    fn midpoint_alternates_every_other_tick() {
        let mut style = TwoColorStyle::new(GREEN, BLUE);
        style.state_mut().set_step(50);
        assert_eq!(style.modulus(), 2);
        let colors: [Rgb; 4] = core::array::from_fn(|_| style.next_color());
        assert_eq!(colors, [BLUE, GREEN, BLUE, GREEN]);
    }

    #[test]
    fn high_step_swaps_minority() {
        let mut style = TwoColorStyle::new(GREEN, BLUE);
        style.state_mut().set_step(100);
        assert_eq!(style.roles(), (BLUE, GREEN));
        assert_eq!(style.modulus(), 10);
        assert_eq!(style.next_color(), GREEN);
        assert!((0..9).all(|_| style.next_color() == BLUE));
    }

    #[test]
    fn modulus_mirrors_around_midpoint() {
        let mut low = TwoColorStyle::new(GREEN, BLUE);
        let mut high = TwoColorStyle::new(GREEN, BLUE);
        for d in 0..50 {
            low.state_mut().set_step(50 - d);
            high.state_mut().set_step(50 + d);
            assert_eq!(low.modulus(), high.modulus());
        }
    }
}
