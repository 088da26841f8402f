#![cfg_attr(not(test), no_std)]

//! Block-shifting LED styles
//!
//! Architecture layers:
//! - `buffer` - Flat color buffer, block maps and the shift algorithm
//! - `layout` - Wiring-dependent partitions (ring, matrix, seven-segment)
//! - `pattern` - Display patterns (partition + direction) table
//! - `interpolation` - Control byte to delay/modulus/hue mappings
//! - `style` - Style state machines and the [`StyleSlot`] enum
//! - `control` - Control channel boundary (cached settings)
//! - `driver` - Hardware abstraction ([`LedDriver`] trait + adapters)
//! - `engine` - Poll-driven orchestrator
//!
//! The animator is generic over `LedDriver`, allowing different hardware backends.

pub mod buffer;
pub mod color;
pub mod config;
pub mod control;
pub mod driver;
pub mod engine;
pub mod error;
pub mod interpolation;
pub mod layout;
pub mod pattern;
pub mod style;

// Buffer exports
pub use buffer::{BlockMap, Direction, Partition, PixelBuffer};

// Color exports
pub use color::{Rgb, rgb_from_u32, rgb_to_u32};

// Control exports
pub use control::{ControlPort, ControlSettings, MemoryControl, Setting};

// Driver exports
pub use driver::{LedDriver, SmartLedsDriver};

// Engine exports
pub use engine::{Animator, AnimatorConfig};

pub use error::LayoutError;
pub use layout::{BlockLayout, Geometry};
pub use pattern::Pattern;

// Style exports
pub use style::{Palette, Style, StyleId, StyleSlot};
