//! Block shift algorithm
//!
//! Shifting moves every block's color one block along the partition and
//! injects a new color at the vacated end. Each block is read through its
//! representative (first) index only, so blocks stay uniform as long as
//! they are written through shifts or whole-block fills.

use crate::buffer::BlockMap;
use crate::color::Rgb;

/// Direction colors travel through a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Block `i` takes block `i - 1`; the new color enters block 0
    Right,
    /// Block `i` takes block `i + 1`; the new color enters the last block
    Left,
}

impl Direction {
    /// Block index holding the color injected `distance` ticks ago.
    pub(crate) fn block_at_distance(self, distance: usize, count: usize) -> usize {
        match self {
            Self::Right => distance,
            Self::Left => count - 1 - distance,
        }
    }
}

/// Write one color to every index of a block.
#[inline]
pub(crate) fn fill<const N: usize>(colors: &mut [Rgb; N], indices: &[u16], color: Rgb) {
    for &index in indices {
        if let Some(slot) = colors.get_mut(usize::from(index)) {
            *slot = color;
        }
    }
}

#[inline]
fn representative_color<const N: usize>(colors: &[Rgb; N], map: &BlockMap<N>, block: usize) -> Rgb {
    map.representative(block)
        .and_then(|index| colors.get(index).copied())
        .unwrap_or_default()
}

/// Shift all blocks of `map` one step in `direction`, injecting `new_color`.
pub fn shift_blocks<const N: usize>(
    colors: &mut [Rgb; N],
    map: &BlockMap<N>,
    direction: Direction,
    new_color: Rgb,
) {
    let count = map.len();
    if count == 0 {
        return;
    }

    match direction {
        Direction::Right => {
            for block in (1..count).rev() {
                let color = representative_color(colors, map, block - 1);
                fill(colors, map.block(block), color);
            }
            fill(colors, map.block(0), new_color);
        }
        Direction::Left => {
            for block in 0..count - 1 {
                let color = representative_color(colors, map, block + 1);
                fill(colors, map.block(block), color);
            }
            fill(colors, map.block(count - 1), new_color);
        }
    }
}

/// Line fast path: rotate the flat buffer by one and insert `new_color`.
///
/// Produces the same buffer as [`shift_blocks`] over [`BlockMap::line`].
pub fn shift_line<const N: usize>(colors: &mut [Rgb; N], direction: Direction, new_color: Rgb) {
    if N == 0 {
        return;
    }
    match direction {
        Direction::Right => {
            colors.copy_within(0..N - 1, 1);
            colors[0] = new_color;
        }
        Direction::Left => {
            colors.copy_within(1..N, 0);
            colors[N - 1] = new_color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_from_u32;

    fn colors<const N: usize>(packed: [u32; N]) -> [Rgb; N] {
        packed.map(rgb_from_u32)
    }

    #[test]
    fn line_shift_right_inserts_at_front() {
        let mut buffer = colors([1, 2, 3, 4]);
        shift_line(&mut buffer, Direction::Right, rgb_from_u32(9));
        assert_eq!(buffer, colors([9, 1, 2, 3]));
    }

    #[test]
    fn line_shift_left_inserts_at_back() {
        let mut buffer = colors([1, 2, 3, 4]);
        shift_line(&mut buffer, Direction::Left, rgb_from_u32(9));
        assert_eq!(buffer, colors([2, 3, 4, 9]));
    }

    #[test]
    fn blocks_take_neighbour_representative() {
        let map = BlockMap::<5>::from_blocks(&[&[0], &[1, 2], &[3, 4]]).unwrap();
        let mut buffer = colors([1, 2, 2, 3, 3]);
        shift_blocks(&mut buffer, &map, Direction::Right, rgb_from_u32(7));
        assert_eq!(buffer, colors([7, 1, 1, 2, 2]));

        shift_blocks(&mut buffer, &map, Direction::Left, rgb_from_u32(8));
        assert_eq!(buffer, colors([1, 2, 2, 8, 8]));
    }

    #[test]
    fn single_block_becomes_constant_fill() {
        let map = BlockMap::<3>::from_blocks(&[&[0, 1, 2]]).unwrap();
        let mut buffer = colors([1, 2, 3]);
        shift_blocks(&mut buffer, &map, Direction::Right, rgb_from_u32(5));
        assert_eq!(buffer, colors([5, 5, 5]));
        shift_blocks(&mut buffer, &map, Direction::Left, rgb_from_u32(6));
        assert_eq!(buffer, colors([6, 6, 6]));
    }

    #[test]
    fn distance_maps_to_insertion_end() {
        assert_eq!(Direction::Right.block_at_distance(0, 4), 0);
        assert_eq!(Direction::Left.block_at_distance(0, 4), 3);
        assert_eq!(Direction::Left.block_at_distance(3, 4), 0);
    }
}
