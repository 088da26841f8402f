//! Control channel boundary
//!
//! The remote side (a BLE service on the device) exposes five byte-sized
//! settings. [`ControlSettings`] caches the last applied value of each,
//! falling back to configured defaults until a remote write arrives.

use crate::config::ControlDefaults;

/// Externally writable settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Setting {
    Brightness = 0,
    Style = 1,
    Speed = 2,
    Pattern = 3,
    Step = 4,
}

impl Setting {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Brightness,
        Self::Style,
        Self::Speed,
        Self::Pattern,
        Self::Step,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Style => "style",
            Self::Speed => "speed",
            Self::Pattern => "pattern",
            Self::Step => "step",
        }
    }
}

/// Port interface for the remote control channel
pub trait ControlPort {
    /// Value written remotely since the last call, if any
    fn take_written(&mut self, setting: Setting) -> Option<u8>;

    /// Expose a locally applied value to remote readers
    fn publish(&mut self, setting: Setting, value: u8);
}

/// Set of settings written during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlChanges(u8);

impl ControlChanges {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, setting: Setting) {
        self.0 |= 1 << setting.index();
    }

    pub const fn contains(self, setting: Setting) -> bool {
        self.0 & (1 << setting as u8) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Last applied value of every setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSettings {
    values: [u8; Setting::COUNT],
}

impl ControlSettings {
    pub const fn new(defaults: &ControlDefaults) -> Self {
        Self {
            values: [
                defaults.brightness,
                defaults.style,
                defaults.speed,
                defaults.pattern,
                defaults.step,
            ],
        }
    }

    pub fn get(&self, setting: Setting) -> u8 {
        self.values[setting.index()]
    }

    pub fn brightness(&self) -> u8 {
        self.get(Setting::Brightness)
    }

    pub fn style(&self) -> u8 {
        self.get(Setting::Style)
    }

    pub fn speed(&self) -> u8 {
        self.get(Setting::Speed)
    }

    pub fn pattern(&self) -> u8 {
        self.get(Setting::Pattern)
    }

    pub fn step(&self) -> u8 {
        self.get(Setting::Step)
    }

    /// Pick up every remote write since the last poll.
    ///
    /// Writes are reported even when the value did not change, so a
    /// repeated style write re-selects the style.
    pub fn poll<P: ControlPort>(&mut self, port: &mut P) -> ControlChanges {
        let mut changes = ControlChanges::empty();
        for setting in Setting::ALL {
            if let Some(value) = port.take_written(setting) {
                log::debug!("control: {} <- {:#04x}", setting.as_str(), value);
                self.values[setting.index()] = value;
                changes.insert(setting);
            }
        }
        changes
    }

    /// Record a locally applied value without touching the channel
    pub fn store(&mut self, setting: Setting, value: u8) {
        self.values[setting.index()] = value;
    }

    /// Apply a value locally and publish it to the channel
    pub fn set<P: ControlPort>(&mut self, port: &mut P, setting: Setting, value: u8) {
        self.store(setting, value);
        port.publish(setting, value);
    }

    /// Publish every cached value, e.g. after the channel comes up
    pub fn publish_all<P: ControlPort>(&self, port: &mut P) {
        for setting in Setting::ALL {
            port.publish(setting, self.get(setting));
        }
    }
}

/// In-memory control channel for hosts without a radio
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryControl {
    written: [Option<u8>; Setting::COUNT],
    published: [u8; Setting::COUNT],
}

impl MemoryControl {
    pub const fn new() -> Self {
        Self {
            written: [None; Setting::COUNT],
            published: [0; Setting::COUNT],
        }
    }

    /// Simulate a remote write
    pub fn write(&mut self, setting: Setting, value: u8) {
        self.written[setting.index()] = Some(value);
    }

    /// Value last published for a setting
    pub fn published(&self, setting: Setting) -> u8 {
        self.published[setting.index()]
    }
}

impl ControlPort for MemoryControl {
    fn take_written(&mut self, setting: Setting) -> Option<u8> {
        self.written[setting.index()].take()
    }

    fn publish(&mut self, setting: Setting, value: u8) {
        self.published[setting.index()] = value;
    }
}
