//! Style system with compile-time known style variants
//!
//! All styles are stored in an enum to avoid heap allocations and
//! virtual dispatch. Each style implements the [`Style`] trait, which
//! only asks for the variant's color rule; deadline gating, shifting and
//! pre-filling are shared.

mod rainbow;
mod solid;
mod two_color;

use embassy_time::{Duration, Instant};
use heapless::String;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::interpolation::clamp_param;
use crate::pattern::{Pattern, join_names};

pub use rainbow::RainbowStyle;
pub use solid::SolidStyle;
pub use two_color::TwoColorStyle;

const STYLE_NAME_SOLID: &str = "solid";
const STYLE_NAME_TWO_COLOR: &str = "two_color";
const STYLE_NAME_RAINBOW: &str = "rainbow";

const STYLE_ID_SOLID: u8 = 0;
const STYLE_ID_TWO_COLOR: u8 = 1;
const STYLE_ID_RAINBOW: u8 = 2;

/// Capacity of the joined style-name list
pub const STYLE_NAMES_LEN: usize = 32;

/// Parameters and schedule shared by every style
#[derive(Debug, Clone)]
pub struct StyleState {
    speed: u8,
    step: u8,
    pattern: Pattern,
    next_update: Instant,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleState {
    /// Mid-range speed and step, line pattern, due immediately
    pub const fn new() -> Self {
        Self {
            speed: 50,
            step: 50,
            pattern: Pattern::Line,
            next_update: Instant::from_ticks(0),
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Absolute time of the next tick
    pub fn next_update(&self) -> Instant {
        self.next_update
    }

    /// Set speed, clamped to 1..=100
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = clamp_param(speed);
    }

    /// Set step, clamped to 1..=100
    pub fn set_step(&mut self, step: u8) {
        self.step = clamp_param(step);
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    /// Whether a tick is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_update
    }

    /// Schedule the next tick `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.next_update = now.checked_add(delay).unwrap_or(Instant::MAX);
    }
}

/// Animation contract shared by all styles
pub trait Style {
    fn state(&self) -> &StyleState;

    fn state_mut(&mut self) -> &mut StyleState;

    /// Color the next tick injects. Advances the variant's counter.
    fn next_color(&mut self) -> Rgb;

    /// Delay between ticks at the current speed
    fn iteration_delay(&self) -> Duration;

    /// Run one tick unconditionally: shift the next color in.
    fn tick<const N: usize>(&mut self, buffer: &mut PixelBuffer<N>) {
        let pattern = self.state().pattern();
        let color = self.next_color();
        buffer.shift(pattern, color);
    }

    /// Tick if the deadline has passed.
    ///
    /// Returns `true` when the buffer changed. Early calls leave the buffer
    /// and all counters untouched; late calls run a single tick and
    /// reschedule from `now`.
    fn update<const N: usize>(&mut self, now: Instant, buffer: &mut PixelBuffer<N>) -> bool {
        if !self.state().is_due(now) {
            return false;
        }
        self.tick(buffer);
        let delay = self.iteration_delay();
        self.state_mut().schedule(now, delay);
        true
    }

    /// Pre-fill the buffer as if the style had already been running.
    ///
    /// Fills every block of the current pattern directly, from the far
    /// end toward the insertion end, with the colors consecutive ticks
    /// would have injected. The result equals that many back-to-back
    /// ticks; the deadline is left alone.
    fn reset<const N: usize>(&mut self, buffer: &mut PixelBuffer<N>) {
        let pattern = self.state().pattern();
        let partition = pattern.partition();
        let direction = pattern.direction();
        let count = buffer.block_count(partition);
        for distance in (0..count).rev() {
            let color = self.next_color();
            buffer.fill_block(partition, direction.block_at_distance(distance, count), color);
        }
    }
}

/// Known style ids that can be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum StyleId {
    #[default]
    Solid = STYLE_ID_SOLID,
    TwoColor = STYLE_ID_TWO_COLOR,
    Rainbow = STYLE_ID_RAINBOW,
}

impl StyleId {
    /// Number of known styles
    pub const COUNT: usize = 3;

    /// Every style, in discriminant order
    pub const ALL: [Self; Self::COUNT] = [Self::Solid, Self::TwoColor, Self::Rainbow];

    /// Decode a control byte. Unknown values fall back to [`StyleId::Solid`].
    pub const fn from_raw(value: u8) -> Self {
        match value {
            STYLE_ID_TWO_COLOR => Self::TwoColor,
            STYLE_ID_RAINBOW => Self::Rainbow,
            _ => Self::Solid,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => STYLE_NAME_SOLID,
            Self::TwoColor => STYLE_NAME_TWO_COLOR,
            Self::Rainbow => STYLE_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STYLE_NAME_SOLID => Some(Self::Solid),
            STYLE_NAME_TWO_COLOR => Some(Self::TwoColor),
            STYLE_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }

    /// Build a fresh style of this kind from a palette
    pub fn to_style_slot(self, palette: &Palette) -> StyleSlot {
        match self {
            Self::Solid => StyleSlot::Solid(SolidStyle::new(palette.solid)),
            Self::TwoColor => {
                StyleSlot::TwoColor(TwoColorStyle::new(palette.primary, palette.secondary))
            }
            Self::Rainbow => StyleSlot::Rainbow(RainbowStyle::new()),
        }
    }
}

/// Names of every known style, `;`-separated
pub fn style_names() -> String<STYLE_NAMES_LEN> {
    join_names(StyleId::ALL.iter().map(|id| id.as_str()))
}

/// Base colors the color-based styles are built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub solid: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// Style slot - enum containing all possible styles
#[derive(Debug, Clone)]
pub enum StyleSlot {
    Solid(SolidStyle),
    TwoColor(TwoColorStyle),
    Rainbow(RainbowStyle),
}

impl StyleSlot {
    pub fn id(&self) -> StyleId {
        match self {
            Self::Solid(_) => StyleId::Solid,
            Self::TwoColor(_) => StyleId::TwoColor,
            Self::Rainbow(_) => StyleId::Rainbow,
        }
    }

    pub fn state(&self) -> &StyleState {
        match self {
            Self::Solid(style) => style.state(),
            Self::TwoColor(style) => style.state(),
            Self::Rainbow(style) => style.state(),
        }
    }

    pub fn state_mut(&mut self) -> &mut StyleState {
        match self {
            Self::Solid(style) => style.state_mut(),
            Self::TwoColor(style) => style.state_mut(),
            Self::Rainbow(style) => style.state_mut(),
        }
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.state_mut().set_speed(speed);
    }

    pub fn set_step(&mut self, step: u8) {
        self.state_mut().set_step(step);
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.state_mut().set_pattern(pattern);
    }

    /// Pre-fill the buffer for activation
    pub fn reset<const N: usize>(&mut self, buffer: &mut PixelBuffer<N>) {
        match self {
            Self::Solid(style) => style.reset(buffer),
            Self::TwoColor(style) => style.reset(buffer),
            Self::Rainbow(style) => style.reset(buffer),
        }
    }

    /// Tick if due; `true` when the buffer changed
    pub fn update<const N: usize>(&mut self, now: Instant, buffer: &mut PixelBuffer<N>) -> bool {
        match self {
            Self::Solid(style) => style.update(now, buffer),
            Self::TwoColor(style) => style.update(now, buffer),
            Self::Rainbow(style) => style.update(now, buffer),
        }
    }
}
