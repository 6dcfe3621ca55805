// Rook move generation
// Moves horizontally and vertically (orthogonally)
use crate::board::{Board, Piece};
use crate::pieces::{add_sliding_moves, slider_attacks, MoveRules, ROOK_DIRECTIONS};
use crate::square::Square;

pub struct RookMoves;

impl MoveRules for RookMoves {
    /// Rook slides along the four orthogonal rays, up to 14 squares
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14);
        add_sliding_moves(&mut moves, board, piece.square, piece.color, &ROOK_DIRECTIONS);
        moves
    }

    fn attacks(&self, board: &Board, piece: &Piece, target: Square) -> bool {
        slider_attacks(board, piece.square, target, &ROOK_DIRECTIONS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
