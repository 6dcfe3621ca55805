// Pawn: forward pushes and diagonal captures.
// White moves toward row 0, Black toward row 7. No en passant, no promotion:
// a pawn on the last row simply has no moves.
use crate::board::{Board, Color, Piece};
use crate::pieces::MoveRules;
use crate::square::Square;

pub struct PawnMoves;

impl PawnMoves {
    fn forward(color: Color) -> i8 {
        match color {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    fn start_row(color: Color) -> u8 {
        match color {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl MoveRules for PawnMoves {
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dr = Self::forward(piece.color);

        // Pushes only onto empty squares
        if let Some(one) = piece.square.offset(dr, 0) {
            if board.get_piece(one).is_none() {
                moves.push(one);
                if piece.square.row() == Self::start_row(piece.color) {
                    if let Some(two) = one.offset(dr, 0) {
                        if board.get_piece(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal steps only as captures
        for dc in [-1, 1] {
            if let Some(to) = piece.square.offset(dr, dc) {
                if matches!(board.get_piece(to), Some(p) if p.color != piece.color) {
                    moves.push(to);
                }
            }
        }

        moves
    }

    fn attacks(&self, _board: &Board, piece: &Piece, target: Square) -> bool {
        let dr = Self::forward(piece.color);
        [-1, 1]
            .into_iter()
            .any(|dc| piece.square.offset(dr, dc) == Some(target))
    }
}
