//! Wiring-dependent block layouts
//!
//! A [`BlockLayout`] bundles the `columns`, `rows` and `digits`
//! partitions of one physical device. Built-in constructors compute them
//! from the device geometry; hand-wired devices can use
//! [`BlockMap::from_blocks`] directly.
//!
//! Orientation convention: block 0 of `columns` is the leftmost column,
//! block 0 of `rows` is the bottom row, block 0 of `digits` is the first
//! digit along the strip.

use crate::buffer::{BlockMap, Partition};
use crate::error::LayoutError;

/// Segment wiring order inside one seven-segment digit
const SEGMENTS: usize = 7;

/// Row band (bottom to top) of each segment, wired a, b, c, d, e, f, g
const SEGMENT_ROW: [usize; SEGMENTS] = [4, 3, 1, 0, 1, 3, 2];

/// Column (left, center, right) of each segment, wired a, b, c, d, e, f, g
const SEGMENT_COLUMN: [usize; SEGMENTS] = [1, 2, 2, 1, 0, 0, 1];

/// The three named partitions of a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLayout<const N: usize> {
    pub columns: BlockMap<N>,
    pub rows: BlockMap<N>,
    pub digits: BlockMap<N>,
}

/// Compile-time description of a device geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Straight strip, every partition is the line
    Strip,
    /// Closed ring split into `digits` equal arcs
    Ring { digits: usize },
    /// Serpentine panel with character cells `cell_width` columns wide
    Matrix {
        width: usize,
        height: usize,
        cell_width: usize,
    },
    /// Seven-segment digits wired one after another
    SevenSegment {
        digits: usize,
        leds_per_segment: usize,
    },
}

impl Geometry {
    /// Compute the block layout for `N` pixels
    pub fn build<const N: usize>(self) -> Result<BlockLayout<N>, LayoutError> {
        match self {
            Self::Strip => Ok(BlockLayout::strip()),
            Self::Ring { digits } => BlockLayout::ring(digits),
            Self::Matrix {
                width,
                height,
                cell_width,
            } => BlockLayout::matrix(width, height, cell_width),
            Self::SevenSegment {
                digits,
                leds_per_segment,
            } => BlockLayout::seven_segment(digits, leds_per_segment),
        }
    }
}

impl<const N: usize> BlockLayout<N> {
    pub fn new(columns: BlockMap<N>, rows: BlockMap<N>, digits: BlockMap<N>) -> Self {
        Self {
            columns,
            rows,
            digits,
        }
    }

    /// Block map backing a partition, `None` for the implicit line
    pub fn partition(&self, partition: Partition) -> Option<&BlockMap<N>> {
        match partition {
            Partition::Line => None,
            Partition::Columns => Some(&self.columns),
            Partition::Rows => Some(&self.rows),
            Partition::Digits => Some(&self.digits),
        }
    }

    /// Straight strip: every partition degenerates to the line.
    pub fn strip() -> Self {
        Self::new(BlockMap::line(), BlockMap::line(), BlockMap::line())
    }

    /// Ring with pixel 0 on the left, `N/4` at the bottom and `3N/4` on top.
    ///
    /// Rows pair up pixels at the same height (`{N/4 - r, N/4 + r}`),
    /// columns pair up pixels at the same horizontal position
    /// (`{c, N - c}`).
    ///
    /// Indices inside each block are ascending, so the lower index of a
    /// pair is its representative (row `{7, 11}` reads pixel 7). Shift
    /// output does not depend on this while blocks stay uniform.
    pub fn ring(digits: usize) -> Result<Self, LayoutError> {
        if N % 4 != 0 || digits == 0 || N % digits != 0 {
            return Err(LayoutError::GeometryMismatch);
        }
        let quarter = N / 4;
        let half = N / 2;
        let arc = N / digits;

        let rows = BlockMap::from_fn(half + 1, |pixel| {
            let down = (pixel + N - quarter) % N;
            down.min(N - down)
        })?;
        let columns = BlockMap::from_fn(half + 1, |pixel| pixel.min(N - pixel))?;
        let digit_map = BlockMap::from_fn(digits, |pixel| pixel / arc)?;

        Ok(Self::new(columns, rows, digit_map))
    }

    /// Serpentine row-major panel: row 0 is wired left to right along the
    /// top, the next row comes back right to left, and so on.
    pub fn matrix(width: usize, height: usize, cell_width: usize) -> Result<Self, LayoutError> {
        if width == 0
            || height == 0
            || width * height != N
            || cell_width == 0
            || width % cell_width != 0
        {
            return Err(LayoutError::GeometryMismatch);
        }
        let xy = |pixel: usize| {
            let y = pixel / width;
            let run = pixel % width;
            let x = if y % 2 == 0 { run } else { width - 1 - run };
            (x, y)
        };

        let columns = BlockMap::from_fn(width, |pixel| xy(pixel).0)?;
        let rows = BlockMap::from_fn(height, |pixel| height - 1 - xy(pixel).1)?;
        let digits = BlockMap::from_fn(width / cell_width, |pixel| xy(pixel).0 / cell_width)?;

        Ok(Self::new(columns, rows, digits))
    }

    /// Seven-segment display: `digits` digits, each wired segment by
    /// segment (a through g) with `leds_per_segment` LEDs per segment.
    ///
    /// Rows are five bands across all digits (d, e+c, g, f+b, a from the
    /// bottom up); columns are three per digit (f+e, a+g+d, b+c).
    pub fn seven_segment(digits: usize, leds_per_segment: usize) -> Result<Self, LayoutError> {
        if digits == 0 || leds_per_segment == 0 || digits * SEGMENTS * leds_per_segment != N {
            return Err(LayoutError::GeometryMismatch);
        }
        let per_digit = SEGMENTS * leds_per_segment;
        let segment = |pixel: usize| (pixel / leds_per_segment) % SEGMENTS;

        let digit_map = BlockMap::from_fn(digits, |pixel| pixel / per_digit)?;
        let rows = BlockMap::from_fn(5, |pixel| {
            SEGMENT_ROW.get(segment(pixel)).copied().unwrap_or_default()
        })?;
        let columns = BlockMap::from_fn(digits * 3, |pixel| {
            let column = SEGMENT_COLUMN.get(segment(pixel)).copied().unwrap_or_default();
            (pixel / per_digit) * 3 + column
        })?;

        Ok(Self::new(columns, rows, digit_map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_rows_pair_pixels_at_same_height() {
        let layout = BlockLayout::<12>::ring(4).unwrap();
        let expected: [&[u16]; 7] = [&[3], &[2, 4], &[1, 5], &[0, 6], &[7, 11], &[8, 10], &[9]];
        assert_eq!(layout.rows.len(), 7);
        for (block, indices) in expected.iter().enumerate() {
            assert_eq!(layout.rows.block(block), *indices);
        }
    }

    #[test]
    fn ring_columns_pair_pixels_left_to_right() {
        let layout = BlockLayout::<12>::ring(4).unwrap();
        assert_eq!(layout.columns.block(0), &[0]);
        assert_eq!(layout.columns.block(1), &[1, 11]);
        assert_eq!(layout.columns.block(6), &[6]);
        assert_eq!(layout.digits.block(2), &[6, 7, 8]);
    }

    #[test]
    fn ring_rejects_bad_geometry() {
        assert_eq!(BlockLayout::<10>::ring(2), Err(LayoutError::GeometryMismatch));
        assert_eq!(BlockLayout::<12>::ring(5), Err(LayoutError::GeometryMismatch));
        assert_eq!(BlockLayout::<12>::ring(0), Err(LayoutError::GeometryMismatch));
    }

    #[test]
    fn matrix_is_serpentine() {
        let layout = BlockLayout::<6>::matrix(3, 2, 1).unwrap();
        // Wiring: 0 1 2 on top, 5 4 3 below
        assert_eq!(layout.columns.block(0), &[0, 5]);
        assert_eq!(layout.columns.block(2), &[2, 3]);
        assert_eq!(layout.rows.block(0), &[3, 4, 5]);
        assert_eq!(layout.rows.block(1), &[0, 1, 2]);
        assert_eq!(layout.digits.len(), 3);
        assert_eq!(BlockLayout::<6>::matrix(3, 2, 2), Err(LayoutError::GeometryMismatch));
    }

    #[test]
    fn seven_segment_groups_segments() {
        let layout = BlockLayout::<14>::seven_segment(2, 1).unwrap();
        assert_eq!(layout.digits.block(0), &[0, 1, 2, 3, 4, 5, 6]);
        // Bottom row holds segment d of both digits
        assert_eq!(layout.rows.block(0), &[3, 10]);
        // Top row holds segment a of both digits
        assert_eq!(layout.rows.block(4), &[0, 7]);
        // Left column of the second digit: f and e
        assert_eq!(layout.columns.block(3), &[11, 12]);
        assert_eq!(layout.columns.len(), 6);
    }

    #[test]
    fn geometry_builds_each_layout() {
        assert_eq!(
            Geometry::Ring { digits: 4 }.build::<12>(),
            BlockLayout::<12>::ring(4)
        );
        let matrix = Geometry::Matrix {
            width: 4,
            height: 2,
            cell_width: 2,
        }
        .build::<8>()
        .unwrap();
        assert_eq!(matrix.columns.len(), 4);
        assert_eq!(matrix.rows.len(), 2);
        assert_eq!(matrix.digits.len(), 2);

        let clock = Geometry::SevenSegment {
            digits: 2,
            leds_per_segment: 2,
        }
        .build::<28>()
        .unwrap();
        assert_eq!(clock.digits.len(), 2);
        assert_eq!(clock.rows.len(), 5);
        assert_eq!(clock.columns.len(), 6);
        assert_eq!(clock.digits.block(1).len(), 14);
    }

    #[test]
    fn geometry_rejects_wrong_pixel_count() {
        assert_eq!(
            Geometry::Ring { digits: 4 }.build::<10>(),
            Err(LayoutError::GeometryMismatch)
        );
        let matrix = Geometry::Matrix {
            width: 4,
            height: 2,
            cell_width: 2,
        };
        assert_eq!(matrix.build::<9>(), Err(LayoutError::GeometryMismatch));
        let clock = Geometry::SevenSegment {
            digits: 2,
            leds_per_segment: 2,
        };
        assert_eq!(clock.build::<27>(), Err(LayoutError::GeometryMismatch));
    }

    #[test]
    fn strip_partitions_are_lines() {
        let layout = BlockLayout::<4>::strip();
        assert_eq!(layout.partition(Partition::Rows).map(BlockMap::len), Some(4));
        assert!(layout.partition(Partition::Line).is_none());
        assert_eq!(Geometry::Strip.build::<4>(), Ok(layout));
    }
}
