// Queen move generation
// Slides like a rook and a bishop combined, stopping at the first piece
use crate::board::{Board, Piece};
use crate::pieces::{add_sliding_moves, ray_clear, line_direction, MoveRules, ALL_DIRECTIONS};
use crate::square::Square;

pub struct QueenMoves;

impl MoveRules for QueenMoves {
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(27); // Queen can have up to 27 moves
        add_sliding_moves(&mut moves, board, piece.square, piece.color, &ALL_DIRECTIONS);
        moves
    }

    /// Same row, column or diagonal, with nothing standing strictly between
    fn attacks(&self, board: &Board, piece: &Piece, target: Square) -> bool {
        match line_direction(piece.square, target) {
            Some(step) => ray_clear(board, piece.square, target, step),
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
