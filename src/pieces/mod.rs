//! Per-piece movement rules.
//!
//! Every piece type gets a unit struct implementing [`MoveRules`]. The board
//! never matches on piece types itself: it asks `piece.piece_type.rules()`
//! for candidate moves and for attack tests, so check detection covers every
//! piece type the same way.

use crate::board::{Board, Color, Piece};
use crate::square::Square;

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

pub use bishop::BishopMoves;
pub use king::KingMoves;
pub use knight::KnightMoves;
pub use pawn::PawnMoves;
pub use queen::QueenMoves;
pub use rook::RookMoves;

/// Movement and attack geometry of one piece type
pub trait MoveRules {
    /// Candidate destinations for `piece`, ignoring whether the move leaves
    /// its own king in check. Squares holding a friendly piece are never
    /// included.
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square>;

    /// True if `piece` could capture on `target` by its movement rule,
    /// whatever stands there.
    fn attacks(&self, board: &Board, piece: &Piece, target: Square) -> bool;
}

/// Orthogonal ray directions
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight directions, shared by the queen rays and the king steps
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Push sliding moves along each direction until the edge or a piece.
/// An enemy piece ends the ray and is included; a friendly one is not.
pub(crate) fn add_sliding_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    directions: &[(i8, i8)],
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.get_piece(to) {
                None => {
                    moves.push(to);
                    current = to;
                }
                Some(p) => {
                    if p.color != our_color {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
}

/// Push single-step moves for leapers (king, knight).
/// Jumps ignore anything in between.
pub(crate) fn add_jump_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    offsets: &[(i8, i8)],
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.get_piece(to) {
                None => moves.push(to),
                Some(p) if p.color != our_color => moves.push(to),
                _ => {}
            }
        }
    }
}

/// Direction from `from` toward `target` if they share a row, column or
/// diagonal. `None` for unaligned squares and for `from == target`.
pub(crate) fn line_direction(from: Square, target: Square) -> Option<(i8, i8)> {
    let dr = target.row() as i8 - from.row() as i8;
    let dc = target.col() as i8 - from.col() as i8;
    if (dr, dc) == (0, 0) {
        return None;
    }
    if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        Some((dr.signum(), dc.signum()))
    } else {
        None
    }
}

/// True if every square strictly between `from` and `target` along `step` is empty
pub(crate) fn ray_clear(board: &Board, from: Square, target: Square, step: (i8, i8)) -> bool {
    let mut current = from;
    while let Some(next) = current.offset(step.0, step.1) {
        if next == target {
            return true;
        }
        if board.get_piece(next).is_some() {
            return false;
        }
        current = next;
    }
    false
}

/// Sliding attack test restricted to the given directions
pub(crate) fn slider_attacks(
    board: &Board,
    from: Square,
    target: Square,
    directions: &[(i8, i8)],
) -> bool {
    match line_direction(from, target) {
        Some(step) if directions.contains(&step) => ray_clear(board, from, target, step),
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_line_direction() {
        assert_eq!(line_direction(sq(7, 3), sq(0, 3)), Some((-1, 0)));
        assert_eq!(line_direction(sq(7, 0), sq(0, 7)), Some((-1, 1)));
        assert_eq!(line_direction(sq(4, 4), sq(4, 0)), Some((0, -1)));
        assert_eq!(line_direction(sq(4, 4), sq(2, 5)), None, "Knight offset is not a line");
        assert_eq!(line_direction(sq(4, 4), sq(4, 4)), None);
    }

    #[test]
    fn test_ray_clear_blocked_by_any_color() {
        let mut board = Board::new();
        board.add_piece(Piece::new(crate::board::PieceType::Rook, Color::Black, sq(4, 3)));

        assert!(!ray_clear(&board, sq(7, 3), sq(0, 3), (-1, 0)));
        assert!(ray_clear(&board, sq(7, 3), sq(5, 3), (-1, 0)));
        // The blocker itself is reachable
        assert!(ray_clear(&board, sq(7, 3), sq(4, 3), (-1, 0)));
    }
}
