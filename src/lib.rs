// Chess position analysis library
// Board representation using Mailbox (8x8 array) approach:
// check, checkmate and legal-move queries over an arbitrary placement of pieces

pub mod board;
pub mod error;
pub mod pieces;
pub mod square;

pub use board::{Board, Color, Move, MoveUndo, Piece, PieceType};
pub use error::BoardError;
pub use square::Square;
