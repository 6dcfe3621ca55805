// Board representation and piece logic
// Using Mailbox (8x8 array) approach for clarity and extensibility

use std::fmt;

use crate::error::BoardError;
use crate::pieces::{
    BishopMoves, KingMoves, KnightMoves, MoveRules, PawnMoves, QueenMoves, RookMoves,
};
use crate::square::Square;

// =============================================================================
// Type Definitions
// =============================================================================

/// Color of a piece
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Type of a chess piece
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Movement rules for this piece type
    pub fn rules(self) -> &'static dyn MoveRules {
        match self {
            PieceType::King => &KingMoves,
            PieceType::Queen => &QueenMoves,
            PieceType::Rook => &RookMoves,
            PieceType::Bishop => &BishopMoves,
            PieceType::Knight => &KnightMoves,
            PieceType::Pawn => &PawnMoves,
        }
    }

    /// Uppercase letter used in diagrams
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }
}

/// A chess piece with type, color and the square it stands on.
///
/// Only the board moves pieces; it rewrites `square` in place so the same
/// piece value travels with the move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub square: Square,
}

impl Piece {
    /// Create a new piece
    pub fn new(piece_type: PieceType, color: Color, square: Square) -> Self {
        Piece {
            piece_type,
            color,
            square,
        }
    }

    /// Pseudo-legal destinations: friendly squares excluded, self-check not considered
    pub fn generate_moves(&self, board: &Board) -> Vec<Square> {
        self.piece_type.rules().generate_moves(board, self)
    }

    /// True if this piece attacks `target` on `board`
    pub fn attacks(&self, board: &Board, target: Square) -> bool {
        self.piece_type.rules().attacks(board, self, target)
    }
}

/// A legal move returned by [`Board::legal_moves`]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Everything needed to take back a [`Board::make_move`].
///
/// Only `make_move` creates one, and `unmake_move` consumes it, so a token
/// can be spent once.
#[derive(PartialEq, Eq, Debug)]
#[must_use = "pass the token to Board::unmake_move to restore the position"]
pub struct MoveUndo {
    from: Square,
    to: Square,
    captured: Option<Piece>, // For unmake_move restoration
}

impl MoveUndo {
    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece that stood on `to` before the move
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
}

// =============================================================================
// Board Structure
// =============================================================================

/// Chess board using Mailbox representation (8x8 array)
///
/// Coordinate system:
/// - squares[0][0] = a8 (top-left from white's perspective)
/// - squares[7][7] = h1 (bottom-right from white's perspective)
/// - squares[row][col] where row = 7 - rank, col = file
///
/// Queries that test candidate moves (`is_checkmate`, `legal_moves`) make
/// and unmake moves on this board, so they need `&mut self`. They always
/// leave the board exactly as they found it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    /// 8x8 array of squares, each containing an optional piece
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    fn slot(&self, square: Square) -> &Option<Piece> {
        &self.squares[square.row() as usize][square.col() as usize]
    }

    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.row() as usize][square.col() as usize]
    }

    /// Place a piece on its own square, replacing whatever was there
    pub fn add_piece(&mut self, piece: Piece) {
        *self.slot_mut(piece.square) = Some(piece);
    }

    /// Get the piece at a given square
    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        self.slot(square).as_ref()
    }

    /// Take the piece off a square
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).take()
    }

    /// All pieces, row by row from a8 to h1
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    /// All pieces of one color, in the same order as [`Board::pieces`]
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Move the piece on `from` to `to`, capturing whatever stands on `to`.
    /// Returns the token that [`Board::unmake_move`] needs to restore the position.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveUndo, BoardError> {
        let mut piece = self
            .slot_mut(from)
            .take()
            .ok_or(BoardError::NoPieceAtSquare(from))?;
        piece.square = to;
        let captured = self.slot_mut(to).replace(piece);

        tracing::trace!(%from, %to, ?captured, "make_move");
        Ok(MoveUndo { from, to, captured })
    }

    /// Undo a move, restoring the mover and any captured piece.
    /// Fails without touching the board if nothing stands on the token's `to`.
    pub fn unmake_move(&mut self, undo: MoveUndo) -> Result<(), BoardError> {
        let mut piece = self
            .slot_mut(undo.to)
            .take()
            .ok_or(BoardError::NoPieceAtSquare(undo.to))?;
        piece.square = undo.from;

        *self.slot_mut(undo.to) = undo.captured;
        *self.slot_mut(undo.from) = Some(piece);
        tracing::trace!(from = %undo.from, to = %undo.to, "unmake_move");
        Ok(())
    }

    /// Find the King of the given color
    pub fn find_king(&self, color: Color) -> Result<&Piece, BoardError> {
        self.pieces_of(color)
            .find(|p| p.piece_type == PieceType::King)
            .ok_or(BoardError::NoKingFound(color))
    }

    /// Check if a square is attacked by any piece of the given color
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.pieces_of(by_color).any(|p| p.attacks(self, square))
    }

    /// Check if the King of the given color is in check
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let in_check = self.king_attacked(color)?;
        tracing::debug!(%color, in_check, "is_in_check");
        Ok(in_check)
    }

    // Same test without the event; runs once per simulated move
    fn king_attacked(&self, color: Color) -> Result<bool, BoardError> {
        let king_square = self.find_king(color)?.square;
        Ok(self.is_square_attacked(king_square, color.opposite()))
    }

    /// In check, and no move of any own piece gets the King out of it
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, BoardError> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }
        let escapes = self.scan_legal_moves(color, true)?;
        let checkmate = escapes.is_empty();
        tracing::debug!(%color, checkmate, "is_checkmate");
        Ok(checkmate)
    }

    /// Generate all legal moves for the given color
    pub fn legal_moves(&mut self, color: Color) -> Result<Vec<Move>, BoardError> {
        let moves = self.scan_legal_moves(color, false)?;
        tracing::debug!(%color, count = moves.len(), "legal_moves");
        Ok(moves)
    }

    /// Try every candidate move of `color`, keeping those that don't leave
    /// its King in check. With `stop_at_first` the scan ends at the first hit.
    fn scan_legal_moves(
        &mut self,
        color: Color,
        stop_at_first: bool,
    ) -> Result<Vec<Move>, BoardError> {
        self.find_king(color)?;

        // Snapshot first: the board is mutated while we iterate
        let own: Vec<Piece> = self.pieces_of(color).copied().collect();
        let mut legal_moves = Vec::new();

        for piece in own {
            let from = piece.square;
            for to in piece.generate_moves(self) {
                let undo = self.make_move(from, to)?;
                let exposed = self.king_attacked(color);
                self.unmake_move(undo)?;

                // Filter: only keep moves that don't leave King in check
                if !exposed? {
                    legal_moves.push(Move { from, to });
                    if stop_at_first {
                        return Ok(legal_moves);
                    }
                }
            }
        }

        Ok(legal_moves)
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// =============================================================================
// Display Implementation (for debugging)
// =============================================================================

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, "  +-+-+-+-+-+-+-+")?;

        for row in 0..8 {
            let rank = 8 - row; // Convert row to chess rank (8 to 1)
            write!(f, "{} ", rank)?;

            for col in 0..8 {
                let piece_char = match self.squares[row][col] {
                    None => '.',
                    Some(piece) => {
                        let c = piece.piece_type.symbol();
                        // Lowercase for black pieces
                        if piece.color == Color::Black {
                            c.to_ascii_lowercase()
                        } else {
                            c
                        }
                    }
                };
                write!(f, "{} ", piece_char)?;
            }
            writeln!(f, "| {}", rank)?;
        }

        writeln!(f, "  +-+-+-+-+-+-+-+")?;
        writeln!(f, "  a b c d e f g h")?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
