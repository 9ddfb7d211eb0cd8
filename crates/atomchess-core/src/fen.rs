//! FEN parsing into the 0x88 [`Board`].
//!
//! Only the piece placement and the en passant field shape the board. The
//! side, castling and counter fields are optional and only syntax-checked,
//! because the game loop tracks turns itself and castling is not generated.

use std::str::FromStr;

use crate::board::{Board, home_piece};
use crate::cell::Cell;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        // FEN ranks run from 8 down to 1, which is row 0 to row 7.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                let Some(sq) = Square::from_row_col(row as u8, col as u8) else {
                    return Err(FenError::BadRankLength {
                        rank_index: row,
                        length: col + 1,
                    });
                };
                let piece = if home_piece(sq) == Some(piece) {
                    piece.pristine()
                } else {
                    piece
                };
                board.put(sq, Cell::from(piece));
                col += 1;
            }

            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index: row,
                    length: col,
                });
            }
        }

        if let Some(&side) = fields.get(1)
            && side != "w"
            && side != "b"
        {
            return Err(FenError::InvalidColor {
                found: side.to_string(),
            });
        }

        if let Some(castling) = fields.get(2)
            && *castling != "-"
            && let Some(bad) = castling.chars().find(|c| !"KQkq".contains(*c))
        {
            return Err(FenError::InvalidCastlingChar { character: bad });
        }

        if let Some(&ep) = fields.get(3)
            && ep != "-"
        {
            board.set_en_passant(Some(parse_en_passant(&board, ep)?));
        }

        for (index, field) in [(4, "halfmove clock"), (5, "fullmove number")] {
            if let Some(&value) = fields.get(index)
                && value.parse::<u16>().is_err()
            {
                return Err(FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

/// Translate a FEN en passant square (the passed-over square) into the square
/// of the pawn that made the double advance.
fn parse_en_passant(board: &Board, text: &str) -> Result<Square, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: text.to_string(),
    };
    let passed = Square::from_algebraic(text).ok_or_else(invalid)?;
    let pusher = match passed.rank_char() {
        '3' => Color::White,
        '6' => Color::Black,
        _ => return Err(invalid()),
    };
    let pawn_square = passed.offset(pusher.forward()).ok_or_else(invalid)?;
    match board.piece_on(pawn_square) {
        Some(pawn) if pawn.kind() == PieceKind::Pawn && pawn.color() == pusher => Ok(pawn_square),
        _ => Err(invalid()),
    }
}
