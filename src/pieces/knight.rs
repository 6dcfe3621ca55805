// Knight: (2,1) leaps, jumping over anything in between
use crate::board::{Board, Piece};
use crate::pieces::{add_jump_moves, MoveRules};
use crate::square::Square;

/// Knight offsets: (±2, ±1) and (±1, ±2)
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    ( 1, -2), ( 1, 2), ( 2, -1), ( 2, 1),
];

pub struct KnightMoves;

impl MoveRules for KnightMoves {
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);
        add_jump_moves(&mut moves, board, piece.square, piece.color, &KNIGHT_OFFSETS);
        moves
    }

    fn attacks(&self, _board: &Board, piece: &Piece, target: Square) -> bool {
        let dr = piece.square.row().abs_diff(target.row());
        let dc = piece.square.col().abs_diff(target.col());
        (dr, dc) == (1, 2) || (dr, dc) == (2, 1)
    }
}
