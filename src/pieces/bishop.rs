// Bishop: slides along the four diagonals
use crate::board::{Board, Piece};
use crate::pieces::{add_sliding_moves, slider_attacks, MoveRules, BISHOP_DIRECTIONS};
use crate::square::Square;

pub struct BishopMoves;

impl MoveRules for BishopMoves {
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(13);
        add_sliding_moves(&mut moves, board, piece.square, piece.color, &BISHOP_DIRECTIONS);
        moves
    }

    fn attacks(&self, board: &Board, piece: &Piece, target: Square) -> bool {
        slider_attacks(board, piece.square, target, &BISHOP_DIRECTIONS)
    }
}
