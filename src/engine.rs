//! Animator - poll-driven orchestrator
//!
//! The Animator is the central coordinator that:
//! - Picks up control writes (brightness, style, speed, pattern, step)
//! - Keeps one instance of every style, so inactive styles resume where
//!   they left off
//! - Resets the active style when it is selected or its pattern changes
//! - Ticks the active style and pushes changed frames to the driver
//!
//! Nothing here blocks: `poll` returns immediately when no tick is due,
//! and the caller decides how often to poll.

use embassy_time::Instant;

use crate::buffer::PixelBuffer;
use crate::config::ControlDefaults;
use crate::control::{ControlChanges, ControlPort, ControlSettings, Setting};
use crate::driver::LedDriver;
use crate::pattern::Pattern;
use crate::style::{Palette, StyleId, StyleSlot};

/// Initial configuration of the animator
#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    pub palette: Palette,
    pub defaults: ControlDefaults,
}

/// Animator - the main orchestrator
///
/// Generic over `D: LedDriver` to support different hardware backends.
pub struct Animator<D: LedDriver<N>, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Frame shared by all styles, driven by the active one only
    buffer: PixelBuffer<N>,
    /// One instance per style, indexed by [`StyleId`]
    styles: [StyleSlot; StyleId::COUNT],
    /// Currently driving style
    active: StyleId,
    /// Last applied control values
    settings: ControlSettings,
}

impl<D: LedDriver<N>, const N: usize> Animator<D, N> {
    /// Create an animator with every style configured from the defaults
    /// and the default style already pre-filled into the buffer.
    pub fn new(driver: D, buffer: PixelBuffer<N>, config: &AnimatorConfig) -> Self {
        let settings = ControlSettings::new(&config.defaults);
        let mut styles = StyleId::ALL.map(|id| id.to_style_slot(&config.palette));
        let pattern = Pattern::from_raw(settings.pattern());
        for style in &mut styles {
            style.set_speed(settings.speed());
            style.set_step(settings.step());
            style.set_pattern(pattern);
        }

        let mut animator = Self {
            driver,
            buffer,
            styles,
            active: StyleId::from_raw(settings.style()),
            settings,
        };
        animator.driver.set_brightness(animator.settings.brightness());
        animator.restart_active();
        animator
    }

    /// Currently driving style
    pub fn active_style(&self) -> StyleId {
        self.active
    }

    pub fn style(&self, id: StyleId) -> &StyleSlot {
        &self.styles[id.index()]
    }

    pub fn style_mut(&mut self, id: StyleId) -> &mut StyleSlot {
        &mut self.styles[id.index()]
    }

    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Make `id` the driving style and pre-fill the buffer with it
    pub fn select_style(&mut self, id: StyleId) {
        self.settings.store(Setting::Style, id.as_raw());
        self.assign_style(id);
        self.restart_active();
    }

    /// Change the pattern of every style and restart the active one
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.settings.store(Setting::Pattern, pattern.as_raw());
        self.assign_pattern(pattern);
        self.restart_active();
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.settings.store(Setting::Speed, speed);
        for style in &mut self.styles {
            style.set_speed(speed);
        }
    }

    pub fn set_step(&mut self, step: u8) {
        self.settings.store(Setting::Step, step);
        for style in &mut self.styles {
            style.set_step(step);
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.settings.store(Setting::Brightness, brightness);
        self.buffer.set_brightness(&mut self.driver, brightness);
    }

    /// Apply pending control writes, tick the active style if due and
    /// push the frame when it changed.
    ///
    /// Returns `true` when a frame was written to the driver.
    pub fn poll<P: ControlPort>(&mut self, now: Instant, port: &mut P) -> bool {
        let changes = self.settings.poll(port);
        let restarted = self.apply(changes);
        let ticked = self.styles[self.active.index()].update(now, &mut self.buffer);
        if ticked || restarted {
            self.buffer.display(&mut self.driver);
            return true;
        }
        false
    }

    /// Push the current frame regardless of ticks
    pub fn display(&mut self) {
        self.buffer.display(&mut self.driver);
    }

    /// Returns `true` when the active style was restarted.
    ///
    /// Raw bytes stay in the settings cache as written, even when they
    /// decode to a fallback.
    fn apply(&mut self, changes: ControlChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if changes.contains(Setting::Brightness) {
            self.set_brightness(self.settings.brightness());
        }
        if changes.contains(Setting::Speed) {
            self.set_speed(self.settings.speed());
        }
        if changes.contains(Setting::Step) {
            self.set_step(self.settings.step());
        }

        let mut restart = false;
        if changes.contains(Setting::Pattern) {
            self.assign_pattern(Pattern::from_raw(self.settings.pattern()));
            restart = true;
        }
        if changes.contains(Setting::Style) {
            self.assign_style(StyleId::from_raw(self.settings.style()));
            restart = true;
        }
        if restart {
            self.restart_active();
        }
        restart
    }

    fn assign_style(&mut self, id: StyleId) {
        log::info!("animator: style {} selected", id.as_str());
        self.active = id;
    }

    fn assign_pattern(&mut self, pattern: Pattern) {
        log::info!("animator: pattern {} selected", pattern.as_str());
        for style in &mut self.styles {
            style.set_pattern(pattern);
        }
    }

    /// Clear the buffer and pre-fill it from the active style
    fn restart_active(&mut self) {
        self.buffer.clear();
        self.styles[self.active.index()].reset(&mut self.buffer);
    }
}
