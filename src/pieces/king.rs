// King: one step in any of the eight directions
use crate::board::{Board, Piece};
use crate::pieces::{add_jump_moves, MoveRules, ALL_DIRECTIONS};
use crate::square::Square;

/// KingMoves is an Unit Struct, namespace for the king's movement rules.
pub struct KingMoves;

impl MoveRules for KingMoves {
    fn generate_moves(&self, board: &Board, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);
        add_jump_moves(&mut moves, board, piece.square, piece.color, &ALL_DIRECTIONS);
        moves
    }

    fn attacks(&self, _board: &Board, piece: &Piece, target: Square) -> bool {
        piece.square.is_adjacent_to(target)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_king_moves_center() {
        let mut board = Board::new();
        // Place King on e4 (row 4, col 4)
        let king = Piece::new(PieceType::King, Color::White, sq(4, 4));
        board.add_piece(king);

        let moves = KingMoves.generate_moves(&board, &king);

        // King in center should have 8 moves
        assert_eq!(moves.len(), 8, "King in center should have 8 moves");
        for (row, col) in [(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)] {
            assert!(moves.contains(&sq(row, col)), "Should move to {}", sq(row, col));
        }
    }

    #[test]
    fn test_king_moves_corner() {
        let mut board = Board::new();
        // Place King on a8 (row 0, col 0)
        let king = Piece::new(PieceType::King, Color::White, sq(0, 0));
        board.add_piece(king);

        let moves = KingMoves.generate_moves(&board, &king);
        assert_eq!(moves.len(), 3, "King in corner should have 3 moves");
    }

    #[test]
    fn test_king_blocked_by_own_piece() {
        let mut board = Board::new();
        let king = Piece::new(PieceType::King, Color::White, sq(4, 4));
        board.add_piece(king);
        // Own queen on e5
        board.add_piece(Piece::new(PieceType::Queen, Color::White, sq(3, 4)));

        let moves = KingMoves.generate_moves(&board, &king);

        assert!(!moves.contains(&sq(3, 4)), "Should not capture own piece");
        assert_eq!(moves.len(), 7, "King should have 7 moves (one blocked)");
    }

    #[test]
    fn test_king_can_capture_enemy() {
        let mut board = Board::new();
        let king = Piece::new(PieceType::King, Color::White, sq(4, 4));
        board.add_piece(king);
        board.add_piece(Piece::new(PieceType::Queen, Color::Black, sq(3, 4)));

        let moves = KingMoves.generate_moves(&board, &king);

        assert!(moves.contains(&sq(3, 4)), "Should be able to capture enemy piece");
        assert_eq!(moves.len(), 8, "King should still have 8 moves (can capture)");
    }

    #[test]
    fn test_king_attacks_adjacent_only() {
        let board = Board::new();
        let king = Piece::new(PieceType::King, Color::Black, sq(6, 4)); // e2

        assert!(KingMoves.attacks(&board, &king, sq(7, 4)), "e2 king attacks e1");
        assert!(KingMoves.attacks(&board, &king, sq(5, 5)), "e2 king attacks f3");
        assert!(!KingMoves.attacks(&board, &king, sq(4, 4)), "e2 king does not attack e4");
        assert!(!KingMoves.attacks(&board, &king, sq(6, 4)), "A king does not attack its own square");
    }
}
