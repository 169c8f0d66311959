//! Core chess types for move ordering: squares, pieces, packed moves,
//! move lists, the [`Position`] interface, and a reference board.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod move_list;
mod piece;
mod piece_kind;
mod position;
mod square;
mod zobrist;

pub use board::{Board, MAX_PHASE};
pub use chess_move::{Move, MoveFlag, ScoredMove};
pub use color::Color;
pub use error::{FenError, MoveParseError};
pub use fen::STARTING_FEN;
pub use move_list::{MAX_MOVES, MoveList};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{MoveGuard, Position};
pub use square::Square;
