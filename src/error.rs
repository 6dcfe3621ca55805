// Error type shared by squares and the board

use crate::board::Color;
use crate::square::Square;

/// Everything that can go wrong while building or querying a position.
///
/// Each variant is a caller bug: an off-board coordinate, a move from an
/// empty square, or a check query on a side without a king.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square out of range: row {row}, col {col} (expected 0..=7)")]
    InvalidSquare { row: u8, col: u8 },

    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    #[error("no {0} king found on the board")]
    NoKingFound(Color),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BoardError::InvalidSquare { row: 8, col: 0 };
        assert_eq!(err.to_string(), "square out of range: row 8, col 0 (expected 0..=7)");

        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(BoardError::NoPieceAtSquare(e4).to_string(), "no piece at e4");

        assert_eq!(
            BoardError::NoKingFound(Color::Black).to_string(),
            "no black king found on the board"
        );
    }
}
