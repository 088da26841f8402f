//! Geometric partition of a pixel buffer into blocks
//!
//! A [`BlockMap`] stores one partition without heap allocation: every
//! pixel index appears exactly once in `order`, grouped block by block,
//! and `ends` marks where each block stops.

use crate::error::LayoutError;

/// One partition of `0..N` into non-empty, disjoint blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMap<const N: usize> {
    /// Pixel indices grouped block by block
    order: [u16; N],
    /// Exclusive end offset of each block inside `order`
    ends: [u16; N],
    /// Number of blocks
    count: usize,
}

impl<const N: usize> BlockMap<N> {
    const VALID_SIZE: () = assert!(
        N > 0 && N <= u16::MAX as usize,
        "pixel count must be in 1..=u16::MAX"
    );

    /// Degenerate partition: every pixel is its own block, in index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn line() -> Self {
        let () = Self::VALID_SIZE;
        let mut order = [0u16; N];
        let mut ends = [0u16; N];
        for (i, (slot, end)) in order.iter_mut().zip(ends.iter_mut()).enumerate() {
            *slot = i as u16;
            *end = (i + 1) as u16;
        }
        Self {
            order,
            ends,
            count: N,
        }
    }

    /// Build a partition from explicit index lists.
    ///
    /// Indices keep the order they are listed in, so the first entry of
    /// each list becomes that block's representative.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_blocks(blocks: &[&[u16]]) -> Result<Self, LayoutError> {
        let () = Self::VALID_SIZE;
        if blocks.is_empty() {
            return Err(LayoutError::NoBlocks);
        }

        let mut seen = [false; N];
        let mut order = [0u16; N];
        let mut ends = [0u16; N];
        let mut cursor = 0usize;

        for (block, indices) in blocks.iter().enumerate() {
            if indices.is_empty() {
                return Err(LayoutError::EmptyBlock { block });
            }
            for &index in *indices {
                let index = usize::from(index);
                let Some(was_seen) = seen.get_mut(index) else {
                    return Err(LayoutError::IndexOutOfRange { block, index });
                };
                if *was_seen {
                    return Err(LayoutError::DuplicateIndex { index });
                }
                *was_seen = true;
                // Distinct in-range indices never exceed N
                order[cursor] = index as u16;
                cursor += 1;
            }
            ends[block] = cursor as u16;
        }

        if let Some(index) = seen.iter().position(|covered| !covered) {
            return Err(LayoutError::MissingIndex { index });
        }

        Ok(Self {
            order,
            ends,
            count: blocks.len(),
        })
    }

    /// Build a partition from a function assigning each pixel to a block.
    ///
    /// Coverage and disjointness hold by construction; pixels inside a
    /// block are kept in ascending index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fn<F>(count: usize, block_of: F) -> Result<Self, LayoutError>
    where
        F: Fn(usize) -> usize,
    {
        let () = Self::VALID_SIZE;
        if count == 0 {
            return Err(LayoutError::NoBlocks);
        }
        if count > N {
            return Err(LayoutError::EmptyBlock { block: N });
        }

        let mut sizes = [0u16; N];
        for index in 0..N {
            let block = block_of(index);
            if block >= count {
                return Err(LayoutError::UnknownBlock { index, block });
            }
            sizes[block] += 1;
        }

        let mut ends = [0u16; N];
        let mut total = 0u16;
        for block in 0..count {
            if sizes[block] == 0 {
                return Err(LayoutError::EmptyBlock { block });
            }
            total += sizes[block];
            ends[block] = total;
        }

        // Fill each block from its start offset
        let mut cursors = [0u16; N];
        for block in 1..count {
            cursors[block] = ends[block - 1];
        }
        let mut order = [0u16; N];
        for index in 0..N {
            let block = block_of(index);
            let slot = &mut cursors[block];
            order[usize::from(*slot)] = index as u16;
            *slot += 1;
        }

        Ok(Self { order, ends, count })
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the map has no blocks (never true for a constructed map)
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Pixel indices of a block, empty when `block` is out of range.
    pub fn block(&self, block: usize) -> &[u16] {
        if block >= self.count {
            return &[];
        }
        let start = match block {
            0 => 0,
            _ => usize::from(self.ends[block - 1]),
        };
        let end = usize::from(self.ends[block]);
        &self.order[start..end]
    }

    /// Index whose color stands for the whole block during a shift
    pub fn representative(&self, block: usize) -> Option<usize> {
        self.block(block).first().copied().map(usize::from)
    }

    /// Iterate blocks in partition order
    pub fn blocks(&self) -> impl Iterator<Item = &[u16]> + '_ {
        (0..self.count).map(|block| self.block(block))
    }
}
