/// Defects in a geometric block layout.
///
/// Layouts are wiring-dependent and built once at startup, so any of
/// these is a construction-time bug rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The partition has no blocks at all
    NoBlocks,
    /// A block holds no pixel indices
    EmptyBlock { block: usize },
    /// A block references a pixel past the end of the buffer
    IndexOutOfRange { block: usize, index: usize },
    /// A pixel index appears in more than one place
    DuplicateIndex { index: usize },
    /// A pixel index is not covered by any block
    MissingIndex { index: usize },
    /// A computed layout assigned a pixel to a block that does not exist
    UnknownBlock { index: usize, block: usize },
    /// Geometry parameters do not describe this pixel count
    GeometryMismatch,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoBlocks => write!(f, "partition has no blocks"),
            Self::EmptyBlock { block } => write!(f, "block {block} is empty"),
            Self::IndexOutOfRange { block, index } => {
                write!(f, "block {block} references pixel {index} past the buffer end")
            }
            Self::DuplicateIndex { index } => write!(f, "pixel {index} is in more than one block"),
            Self::MissingIndex { index } => write!(f, "pixel {index} is not in any block"),
            Self::UnknownBlock { index, block } => {
                write!(f, "pixel {index} assigned to missing block {block}")
            }
            Self::GeometryMismatch => write!(f, "geometry does not match the pixel count"),
        }
    }
}

impl core::error::Error for LayoutError {}
