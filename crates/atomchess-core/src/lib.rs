//! Core chess types: the 0x88 board, pseudo-legal move enumeration, and move execution.

mod board;
mod cell;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use chess_move::{AppliedMove, Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, MoveParseError};
pub use fen::STARTING_FEN;
pub use make_move::Undo;
pub use movegen::{MoveList, MoveVisitor, generate_moves, visit_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{BOARD_CELLS, OFF_BOARD_MASK, Square, is_on_board};
