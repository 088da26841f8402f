//! Pixel buffer with geometric block maps
//!
//! The buffer owns the flat color array the driver emits and the three
//! wiring-dependent partitions (`columns`, `rows`, `digits`). The fourth
//! partition, `line`, is implicit.

mod block_map;
mod shift;

pub use block_map::BlockMap;
pub use shift::{Direction, shift_blocks, shift_line};

use crate::color::{OFF, Rgb};
use crate::driver::LedDriver;
use crate::error::LayoutError;
use crate::layout::{BlockLayout, Geometry};
use crate::pattern::Pattern;

/// Grouping of buffer indices a pattern shifts through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Every pixel is its own block, in index order
    Line,
    Columns,
    Rows,
    Digits,
}

/// Flat color buffer plus its block layout
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    colors: [Rgb; N],
    layout: BlockLayout<N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a cleared buffer over a validated layout
    pub fn new(layout: BlockLayout<N>) -> Self {
        Self {
            colors: [OFF; N],
            layout,
        }
    }

    /// Create a cleared buffer partitioned by a device geometry
    pub fn from_geometry(geometry: Geometry) -> Result<Self, LayoutError> {
        Ok(Self::new(geometry.build()?))
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the buffer holds no pixels
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current colors in index order
    pub fn colors(&self) -> &[Rgb; N] {
        &self.colors
    }

    pub fn layout(&self) -> &BlockLayout<N> {
        &self.layout
    }

    /// Overwrite one pixel. Out-of-range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Read one pixel. Out-of-range indices read as off.
    pub fn pixel(&self, index: usize) -> Rgb {
        self.colors.get(index).copied().unwrap_or(OFF)
    }

    /// Turn every pixel off. The partitions are left alone.
    pub fn clear(&mut self) {
        self.colors = [OFF; N];
    }

    /// Number of blocks in a partition (`N` for the line)
    pub fn block_count(&self, partition: Partition) -> usize {
        self.layout.partition(partition).map_or(N, BlockMap::len)
    }

    /// Fill every index of one block with a color.
    ///
    /// For [`Partition::Line`] the block is the pixel index itself.
    /// Out-of-range blocks are ignored.
    pub fn fill_block(&mut self, partition: Partition, block: usize, color: Rgb) {
        match self.layout.partition(partition) {
            Some(map) => shift::fill(&mut self.colors, map.block(block), color),
            None => self.set_pixel(block, color),
        }
    }

    /// Shift a partition one block in `direction`, injecting `new_color`.
    pub fn shift_partition(&mut self, partition: Partition, direction: Direction, new_color: Rgb) {
        match self.layout.partition(partition) {
            Some(map) => shift_blocks(&mut self.colors, map, direction, new_color),
            None => shift_line(&mut self.colors, direction, new_color),
        }
    }

    /// Shift according to a display pattern
    pub fn shift(&mut self, pattern: Pattern, new_color: Rgb) {
        self.shift_partition(pattern.partition(), pattern.direction(), new_color);
    }

    /// Push the current buffer downstream
    pub fn display<D: LedDriver<N>>(&self, driver: &mut D) {
        driver.write(&self.colors);
    }

    /// Forward a brightness level to the driver
    pub fn set_brightness<D: LedDriver<N>>(&self, driver: &mut D, brightness: u8) {
        driver.set_brightness(brightness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_from_u32;

    fn ring() -> PixelBuffer<12> {
        PixelBuffer::new(BlockLayout::ring(4).unwrap())
    }

    #[test]
    fn out_of_range_access_is_silent() {
        let mut buffer = ring();
        buffer.set_pixel(12, rgb_from_u32(0xFF_FFFF));
        assert_eq!(buffer.pixel(12), OFF);
        assert!(buffer.colors().iter().all(|c| *c == OFF));
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut buffer = ring();
        buffer.set_pixel(3, rgb_from_u32(0x10_2030));
        assert_eq!(buffer.pixel(3), rgb_from_u32(0x10_2030));
        buffer.clear();
        assert_eq!(buffer.pixel(3), OFF);
        assert_eq!(buffer.block_count(Partition::Rows), 7);
    }

    #[test]
    fn block_counts_per_partition() {
        let buffer = ring();
        assert_eq!(buffer.block_count(Partition::Line), 12);
        assert_eq!(buffer.block_count(Partition::Columns), 7);
        assert_eq!(buffer.block_count(Partition::Rows), 7);
        assert_eq!(buffer.block_count(Partition::Digits), 4);
    }

    #[test]
    fn fill_block_writes_whole_block() {
        let mut buffer = ring();
        let red = rgb_from_u32(0xFF_0000);
        buffer.fill_block(Partition::Rows, 1, red);
        assert_eq!(buffer.pixel(2), red);
        assert_eq!(buffer.pixel(4), red);
        assert_eq!(buffer.colors().iter().filter(|c| **c == red).count(), 2);

        buffer.fill_block(Partition::Line, 11, red);
        assert_eq!(buffer.pixel(11), red);
        buffer.fill_block(Partition::Rows, 40, OFF);
        assert_eq!(buffer.pixel(2), red);
    }
}
