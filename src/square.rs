// Square coordinates on the 8x8 board

use std::fmt;

use crate::error::BoardError;

/// A square on the board, stored as (row, col) with both in 0..=7.
///
/// Row 0 = rank 8 (black's back rank)
/// Row 7 = rank 1 (white's back rank)
/// Col 0 = file a, Col 7 = file h
///
/// A `Square` can only be built through [`Square::new`] (or `TryFrom`), so
/// every value in circulation is on the board.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    row: u8,
    col: u8,
}

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

impl Square {
    /// Create a square, failing if either coordinate is off the board
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row < 8 && col < 8 {
            Ok(Square { row, col })
        } else {
            Err(BoardError::InvalidSquare { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// All 64 squares, row by row starting from a8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// The square `(dr, dc)` away from this one, or `None` if it falls off the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// True if `other` is one king step away (never true for the square itself)
    pub fn is_adjacent_to(self, other: Square) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc) == 1
    }

    /// Algebraic notation, e.g. (7, 4) -> "e1"
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = BoardError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.col as usize], RANKS[self.row as usize])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
