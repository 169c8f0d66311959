//! FEN parsing for the reference [`Board`].

use std::str::FromStr;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string. Only placement and side to move are mandatory;
    /// castling is validated but not stored, and move counters are ignored.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(FenError::MissingFields { found: fields.len() });
        }

        let squares = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidColor { found: other.to_string() }),
        };

        if let Some(castling) = fields.get(2).filter(|&&c| c != "-") {
            if let Some(bad) = castling.chars().find(|c| !"KQkq".contains(*c)) {
                return Err(FenError::InvalidCastlingChar { character: bad });
            }
        }

        let en_passant = match fields.get(3).copied() {
            None | Some("-") => None,
            Some(s) => Some(
                Square::from_algebraic(s)
                    .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                    .ok_or_else(|| FenError::InvalidEnPassant { found: s.to_string() })?,
            ),
        };

        let board = Board::from_parts(squares, side_to_move, en_passant);
        trace!(fen, "parsed position");
        Ok(board)
    }
}

fn parse_placement(placement: &str) -> Result<[Option<Piece>; Square::COUNT], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut squares = [None; Square::COUNT];
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as u8;
                if file > 8 {
                    return Err(FenError::BadRankLength { rank_index, length: file as usize });
                }
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            squares[sq.index()] = Some(piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank_index, length: file as usize });
        }
    }

    for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
        let king = Some(Piece::new(PieceKind::King, color));
        let count = squares.iter().filter(|&&p| p == king).count();
        if count != 1 {
            return Err(FenError::InvalidKingCount { color: name, count });
        }
    }

    Ok(squares)
}

#[cfg(test)]
mod tests {
    use crate::{Board, Color, FenError, PieceKind, Position, STARTING_FEN, Square};

    #[test]
    fn starting_position_layout() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.piece_on(Square::E1), Some(PieceKind::King));
        assert_eq!(board.piece_on(Square::D8), Some(PieceKind::Queen));
        assert_eq!(board.piece_on(Square::E4), None);
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn two_field_fen_is_accepted() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 b".parse().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn en_passant_square_is_read() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        assert_eq!(board.en_passant(), Some(Square::D6));
    }

    #[test]
    fn rejects_malformed_fens() {
        let cases: [(&str, fn(&FenError) -> bool); 6] = [
            ("4k3/8/8/8/8/8/4K3 w", |e| matches!(e, FenError::WrongRankCount { found: 7 })),
            ("4k3/8/8/8/8/8/8/4K4 w", |e| matches!(e, FenError::BadRankLength { .. })),
            ("4k3/8/8/8/8/8/8/4X3 w", |e| matches!(e, FenError::InvalidPieceChar { character: 'X' })),
            ("4k3/8/8/8/8/8/8/4K3 x", |e| matches!(e, FenError::InvalidColor { .. })),
            ("4k3/8/8/8/8/8/8/4K3 w KZ", |e| matches!(e, FenError::InvalidCastlingChar { character: 'Z' })),
            ("4k3/8/8/8/8/8/8/8 w", |e| matches!(e, FenError::InvalidKingCount { color: "white", count: 0 })),
        ];
        for (fen, check) in cases {
            let err = fen.parse::<Board>().unwrap_err();
            assert!(check(&err), "{fen}: unexpected {err:?}");
        }
    }

    #[test]
    fn overlong_empty_run_is_a_bad_rank() {
        let fen = format!("{}/8/8/8/8/8/8/4K2k w - - 0 1", "8".repeat(40));
        let err = fen.parse::<Board>().unwrap_err();
        assert!(matches!(err, FenError::BadRankLength { rank_index: 0, .. }), "unexpected {err:?}");
    }

    #[test]
    fn rejects_en_passant_on_wrong_rank() {
        let err = "4k3/8/8/8/8/8/8/4K3 w - e4 0 1".parse::<Board>().unwrap_err();
        assert!(matches!(err, FenError::InvalidEnPassant { .. }));
    }
}
