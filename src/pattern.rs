//! Display patterns
//!
//! A pattern picks the partition a tick shifts through and the direction
//! colors travel. Known patterns live in the immutable [`PATTERNS`] table,
//! indexed by the [`Pattern`] discriminant.

use heapless::String;

use crate::buffer::{Direction, Partition};

/// Capacity of the joined pattern-name list
pub const PATTERN_NAMES_LEN: usize = 96;

const PATTERN_ID_LINE: u8 = 0;
const PATTERN_ID_COLUMNS_RIGHT: u8 = 1;
const PATTERN_ID_COLUMNS_LEFT: u8 = 2;
const PATTERN_ID_ROWS_UP: u8 = 3;
const PATTERN_ID_ROWS_DOWN: u8 = 4;
const PATTERN_ID_DIGITS_RIGHT: u8 = 5;
const PATTERN_ID_DIGITS_LEFT: u8 = 6;

/// Known display patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Pattern {
    #[default]
    Line = PATTERN_ID_LINE,
    ColumnsRight = PATTERN_ID_COLUMNS_RIGHT,
    ColumnsLeft = PATTERN_ID_COLUMNS_LEFT,
    /// New colors enter the bottom row
    RowsUp = PATTERN_ID_ROWS_UP,
    /// New colors enter the top row
    RowsDown = PATTERN_ID_ROWS_DOWN,
    DigitsRight = PATTERN_ID_DIGITS_RIGHT,
    DigitsLeft = PATTERN_ID_DIGITS_LEFT,
}

/// Static description of one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternInfo {
    pub pattern: Pattern,
    pub name: &'static str,
    pub partition: Partition,
    pub direction: Direction,
}

/// Every known pattern, in discriminant order
pub static PATTERNS: [PatternInfo; 7] = [
    PatternInfo {
        pattern: Pattern::Line,
        name: "line",
        partition: Partition::Line,
        direction: Direction::Right,
    },
    PatternInfo {
        pattern: Pattern::ColumnsRight,
        name: "columns_right",
        partition: Partition::Columns,
        direction: Direction::Right,
    },
    PatternInfo {
        pattern: Pattern::ColumnsLeft,
        name: "columns_left",
        partition: Partition::Columns,
        direction: Direction::Left,
    },
    PatternInfo {
        pattern: Pattern::RowsUp,
        name: "rows_up",
        partition: Partition::Rows,
        direction: Direction::Right,
    },
    PatternInfo {
        pattern: Pattern::RowsDown,
        name: "rows_down",
        partition: Partition::Rows,
        direction: Direction::Left,
    },
    PatternInfo {
        pattern: Pattern::DigitsRight,
        name: "digits_right",
        partition: Partition::Digits,
        direction: Direction::Right,
    },
    PatternInfo {
        pattern: Pattern::DigitsLeft,
        name: "digits_left",
        partition: Partition::Digits,
        direction: Direction::Left,
    },
];

impl Pattern {
    /// Decode a control byte. Unknown values fall back to [`Pattern::Line`].
    pub const fn from_raw(value: u8) -> Self {
        match value {
            PATTERN_ID_COLUMNS_RIGHT => Self::ColumnsRight,
            PATTERN_ID_COLUMNS_LEFT => Self::ColumnsLeft,
            PATTERN_ID_ROWS_UP => Self::RowsUp,
            PATTERN_ID_ROWS_DOWN => Self::RowsDown,
            PATTERN_ID_DIGITS_RIGHT => Self::DigitsRight,
            PATTERN_ID_DIGITS_LEFT => Self::DigitsLeft,
            _ => Self::Line,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Table entry for this pattern
    pub fn info(self) -> &'static PatternInfo {
        &PATTERNS[self as usize]
    }

    pub fn partition(self) -> Partition {
        self.info().partition
    }

    pub fn direction(self) -> Direction {
        self.info().direction
    }

    pub fn as_str(self) -> &'static str {
        self.info().name
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        PATTERNS.iter().find(|info| info.name == s).map(|info| info.pattern)
    }
}

/// Join names with `;`, stopping before the first name that would not fit.
pub fn join_names<'a, const L: usize>(names: impl IntoIterator<Item = &'a str>) -> String<L> {
    let mut joined = String::new();
    for name in names {
        let separator = usize::from(!joined.is_empty());
        if joined.len() + separator + name.len() > L {
            log::warn!("pattern: name list truncated before {name:?}");
            break;
        }
        if separator == 1 {
            let _ = joined.push(';');
        }
        let _ = joined.push_str(name);
    }
    joined
}

/// Names of every known pattern, `;`-separated
pub fn pattern_names() -> String<PATTERN_NAMES_LEN> {
    join_names(PATTERNS.iter().map(|info| info.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (index, info) in PATTERNS.iter().enumerate() {
            assert_eq!(info.pattern as usize, index);
            assert_eq!(Pattern::from_raw(index as u8), info.pattern);
        }
    }

    #[test]
    fn unknown_raw_values_fall_back_to_line() {
        assert_eq!(Pattern::from_raw(7), Pattern::Line);
        assert_eq!(Pattern::from_raw(255), Pattern::Line);
    }

    #[test]
    fn rows_move_in_opposite_directions() {
        assert_eq!(Pattern::RowsUp.partition(), Partition::Rows);
        assert_eq!(Pattern::RowsUp.direction(), Direction::Right);
        assert_eq!(Pattern::RowsDown.direction(), Direction::Left);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Pattern::parse_from_str("rows_down"), Some(Pattern::RowsDown));
        assert_eq!(Pattern::DigitsLeft.as_str(), "digits_left");
        assert_eq!(Pattern::parse_from_str("spiral"), None);
    }

    #[test]
    fn pattern_names_are_joined() {
        let names = pattern_names();
        assert!(names.starts_with("line;columns_right;"));
        assert!(names.ends_with(";digits_left"));
        assert_eq!(names.split(';').count(), PATTERNS.len());
    }

    #[test]
    fn join_truncates_at_name_boundary() {
        let joined: String<8> = join_names(["abc", "def", "ghi"]);
        assert_eq!(joined.as_str(), "abc;def");
    }
}
