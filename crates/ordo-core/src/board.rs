//! Mailbox reference board implementing [`Position`].
//!
//! This board knows just enough chess to drive move ordering: piece
//! placement, side to move, en passant, attack detection and reversible
//! move application. It does not generate moves or track castling rights.

use std::fmt;

use crate::chess_move::{Move, MoveFlag};
use crate::color::Color;
use crate::error::MoveParseError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::zobrist;

/// Phase value of a full set of non-pawn material.
pub const MAX_PHASE: i32 = 24;

const KNIGHT_DELTAS: [(i8, i8); 8] = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const KING_DELTAS: [(i8, i8); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// State saved by `push` and consumed by `pop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<(Square, Piece)>,
    en_passant: Option<Square>,
    hash: u64,
    phase: i32,
}

/// Position state plus the undo stack of pushed moves.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    en_passant: Option<Square>,
    hash: u64,
    /// Uncapped sum of phase weights, kept in step with `squares`.
    phase: i32,
    undo: Vec<Undo>,
}

impl Board {
    /// Build a board from a placement; used by FEN parsing.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Board {
        let mut board = Board {
            squares,
            side_to_move,
            en_passant,
            hash: 0,
            phase: 0,
            undo: Vec::with_capacity(64),
        };
        board.hash = board.hash_from_scratch();
        board.phase = board.phase_from_scratch();
        board
    }

    /// Colored piece on `sq`.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Number of moves currently pushed.
    #[inline]
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    fn hash_from_scratch(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some(piece) = self.piece_at(sq) {
                hash ^= zobrist::piece_square(piece, sq.index());
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= zobrist::side_to_move();
        }
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_file(ep.file());
        }
        hash
    }

    fn phase_from_scratch(&self) -> i32 {
        self.squares.iter().flatten().map(|p| p.kind.phase_weight()).sum()
    }

    #[inline]
    fn holds(&self, sq: Square, kind: PieceKind, color: Color) -> bool {
        self.piece_at(sq) == Some(Piece::new(kind, color))
    }

    /// A piece of `side` and `kind` attacking `target`, if any.
    fn attacker_of_kind(&self, target: Square, side: Color, kind: PieceKind) -> Option<Square> {
        match kind {
            PieceKind::Pawn => [-1, 1]
                .into_iter()
                .filter_map(|df| target.offset(df, -side.forward()))
                .find(|&sq| self.holds(sq, kind, side)),
            PieceKind::Knight => self.leaper(target, side, kind, &KNIGHT_DELTAS),
            PieceKind::King => self.leaper(target, side, kind, &KING_DELTAS),
            PieceKind::Bishop => self.slider(target, side, kind, &DIAGONALS),
            PieceKind::Rook => self.slider(target, side, kind, &ORTHOGONALS),
            PieceKind::Queen => self
                .slider(target, side, kind, &DIAGONALS)
                .or_else(|| self.slider(target, side, kind, &ORTHOGONALS)),
        }
    }

    fn leaper(&self, target: Square, side: Color, kind: PieceKind, deltas: &[(i8, i8)]) -> Option<Square> {
        deltas
            .iter()
            .filter_map(|&(df, dr)| target.offset(df, dr))
            .find(|&sq| self.holds(sq, kind, side))
    }

    /// First piece along each ray from `target`; blocked rays stop at the blocker.
    fn slider(&self, target: Square, side: Color, kind: PieceKind, rays: &[(i8, i8)]) -> Option<Square> {
        for &(df, dr) in rays {
            let mut cursor = target.offset(df, dr);
            while let Some(sq) = cursor {
                if self.piece_at(sq).is_some() {
                    if self.holds(sq, kind, side) {
                        return Some(sq);
                    }
                    break;
                }
                cursor = sq.offset(df, dr);
            }
        }
        None
    }

    /// Is `sq` attacked by any piece of `side`?
    pub fn is_attacked(&self, sq: Square, side: Color) -> bool {
        self.least_valuable_attacker(sq, side).is_some()
    }

    #[inline]
    fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
        self.hash ^= zobrist::piece_square(piece, sq.index());
        self.phase += piece.kind.phase_weight();
    }

    #[inline]
    fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.hash ^= zobrist::piece_square(piece, sq.index());
        self.phase -= piece.kind.phase_weight();
        Some(piece)
    }

    /// Rook origin and destination for a castle with the king landing on `king_dest`.
    fn castle_rook_squares(flag: MoveFlag, king_dest: Square) -> Option<(Square, Square)> {
        let rank = king_dest.rank();
        match flag {
            MoveFlag::CastleKingSide => Some((Square::from_coords(7, rank)?, Square::from_coords(5, rank)?)),
            MoveFlag::CastleQueenSide => Some((Square::from_coords(0, rank)?, Square::from_coords(3, rank)?)),
            _ => None,
        }
    }

    /// Resolve a UCI move string (`e2e4`, `e7e8q`) into a flagged [`Move`].
    ///
    /// The move kind is inferred from the position: captures, en passant,
    /// double pushes, castles and promotions are all recognised. Legality
    /// beyond piece ownership and pawn pushes onto or through occupied
    /// squares is not checked.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let malformed = || MoveParseError::Malformed { uci: uci.to_string() };
        if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
            return Err(malformed());
        }
        let source = Square::from_algebraic(&uci[0..2]).ok_or_else(malformed)?;
        let dest = Square::from_algebraic(&uci[2..4]).ok_or_else(malformed)?;

        let us = self.side_to_move;
        let moved = self
            .piece_at(source)
            .filter(|p| p.color == us)
            .ok_or_else(|| MoveParseError::EmptyOrigin { square: source.to_string() })?;

        let capture = match self.piece_at(dest) {
            Some(p) if p.color == us => {
                return Err(MoveParseError::OwnPieceCaptured { square: dest.to_string() });
            }
            Some(_) => true,
            None => false,
        };

        if moved.kind == PieceKind::Pawn && source.file() == dest.file() {
            // Straight pawn moves never capture.
            let passed = if source.rank().abs_diff(dest.rank()) == 2 {
                source.offset(0, us.forward())
            } else {
                None
            };
            if capture || passed.is_some_and(|sq| self.piece_at(sq).is_some()) {
                return Err(malformed());
            }
        }

        let invalid_promotion = || MoveParseError::InvalidPromotion { uci: uci.to_string() };
        let reaches_last_rank = moved.kind == PieceKind::Pawn && dest.rank() == us.promotion_rank();

        let flag = if let Some(c) = uci[4..].chars().next() {
            if !reaches_last_rank {
                return Err(invalid_promotion());
            }
            let kind = PieceKind::from_fen_char(c).ok_or_else(invalid_promotion)?;
            MoveFlag::promotion(kind, capture).ok_or_else(invalid_promotion)?
        } else if reaches_last_rank {
            return Err(invalid_promotion());
        } else if moved.kind == PieceKind::Pawn && !capture && source.file() != dest.file() {
            if self.en_passant != Some(dest) {
                return Err(malformed());
            }
            MoveFlag::EnPassant
        } else if moved.kind == PieceKind::Pawn && source.rank().abs_diff(dest.rank()) == 2 {
            MoveFlag::DoublePush
        } else if moved.kind == PieceKind::King && source.file().abs_diff(dest.file()) == 2 {
            if dest.file() > source.file() {
                MoveFlag::CastleKingSide
            } else {
                MoveFlag::CastleQueenSide
            }
        } else if capture {
            MoveFlag::Capture
        } else {
            MoveFlag::Quiet
        };

        Ok(Move::new(source, dest, flag))
    }
}

impl Position for Board {
    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).map(|p| p.kind)
    }

    fn least_valuable_attacker(&self, target: Square, side: Color) -> Option<Square> {
        PieceKind::ALL
            .into_iter()
            .find_map(|kind| self.attacker_of_kind(target, side, kind))
    }

    /// # Panics
    ///
    /// Panics if the origin square is empty.
    fn push(&mut self, mv: Move) {
        let us = self.side_to_move;
        let (source, dest, flag) = (mv.source(), mv.dest(), mv.flag());
        let saved_hash = self.hash;
        let saved_ep = self.en_passant;
        let saved_phase = self.phase;

        let Some(moved) = self.take(source) else {
            panic!("push of {mv} from empty square");
        };

        let captured_sq = if flag == MoveFlag::EnPassant {
            dest.offset(0, -us.forward())
        } else {
            Some(dest)
        };
        let captured = captured_sq.and_then(|sq| self.take(sq).map(|piece| (sq, piece)));

        let landed = match flag.promotion_piece() {
            Some(kind) => Piece::new(kind, us),
            None => moved,
        };
        self.put(dest, landed);

        if let Some((rook_from, rook_to)) = Board::castle_rook_squares(flag, dest) {
            if let Some(rook) = self.take(rook_from) {
                self.put(rook_to, rook);
            }
        }

        if let Some(ep) = self.en_passant.take() {
            self.hash ^= zobrist::en_passant_file(ep.file());
        }
        if flag == MoveFlag::DoublePush {
            self.en_passant = source.offset(0, us.forward());
            if let Some(ep) = self.en_passant {
                self.hash ^= zobrist::en_passant_file(ep.file());
            }
        }

        self.side_to_move = !us;
        self.hash ^= zobrist::side_to_move();

        self.undo.push(Undo {
            mv,
            moved,
            captured,
            en_passant: saved_ep,
            hash: saved_hash,
            phase: saved_phase,
        });
    }

    /// # Panics
    ///
    /// Panics if no move has been pushed.
    fn pop(&mut self) {
        let Some(undo) = self.undo.pop() else {
            panic!("pop without a matching push");
        };
        let (source, dest, flag) = (undo.mv.source(), undo.mv.dest(), undo.mv.flag());

        if let Some((rook_from, rook_to)) = Board::castle_rook_squares(flag, dest) {
            self.squares[rook_from.index()] = self.squares[rook_to.index()].take();
        }
        self.squares[dest.index()] = None;
        self.squares[source.index()] = Some(undo.moved);
        if let Some((sq, piece)) = undo.captured {
            self.squares[sq.index()] = Some(piece);
        }

        self.side_to_move = !self.side_to_move;
        self.en_passant = undo.en_passant;
        self.hash = undo.hash;
        self.phase = undo.phase;
    }

    #[inline]
    fn phase(&self) -> i32 {
        self.phase.min(MAX_PHASE)
    }

    #[inline]
    fn hash(&self) -> u64 {
        self.hash
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn least_valuable_attacker_prefers_pawn() {
        // d5 attacked by white pawn e4, knight c3 and queen d1
        let b = board("4k3/8/8/3p4/4P3/2N5/8/3QK3 w - - 0 1");
        assert_eq!(b.least_valuable_attacker(Square::D5, Color::White), Some(Square::E4));
    }

    #[test]
    fn sliders_are_blocked() {
        // Rook a1 looks at a8 through a4, which is occupied
        let b = board("r3k3/8/8/8/P7/8/8/R3K3 w - - 0 1");
        assert_eq!(b.least_valuable_attacker(Square::A8, Color::White), None);
        assert_eq!(b.least_valuable_attacker(Square::A4, Color::Black), Some(Square::A8));
    }

    #[test]
    fn black_pawns_attack_downwards() {
        let b = board("4k3/8/8/3p4/8/8/8/4K3 b - - 0 1");
        assert_eq!(b.least_valuable_attacker(Square::E4, Color::Black), Some(Square::D5));
        assert_eq!(b.least_valuable_attacker(Square::E6, Color::Black), None);
    }

    #[test]
    fn push_pop_restores_everything() {
        let mut b = board("r3k2r/pppq1ppp/8/3pP3/8/8/PPP2PPP/R3K2R w KQkq d6 0 1");
        let before = b.clone();
        for uci in ["e5d6", "e1g1", "e1c1", "a2a4", "e5e6"] {
            let mv = b.parse_move(uci).unwrap();
            b.push(mv);
            assert_ne!(b.hash(), before.hash(), "{uci} should change the hash");
            b.pop();
            assert_eq!(b, before, "{uci} was not undone exactly");
        }
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let mv = b.parse_move("e5d6").unwrap();
        assert_eq!(mv.flag(), MoveFlag::EnPassant);
        b.push(mv);
        assert_eq!(b.piece_on(Square::D5), None);
        assert_eq!(b.piece_on(Square::D6), Some(PieceKind::Pawn));
    }

    #[test]
    fn incremental_hash_matches_scratch() {
        let mut b = board("4k3/1P6/8/8/8/8/4P3/4K3 w - - 0 1");
        for uci in ["e2e4", "e8d7", "b7b8q"] {
            let mv = b.parse_move(uci).unwrap();
            b.push(mv);
            assert_eq!(b.hash(), b.hash_from_scratch(), "after {uci}");
        }
        assert_eq!(b.depth(), 3);
    }

    #[test]
    fn parse_move_infers_flags() {
        let b = board("r3k3/1P6/8/8/8/8/4P3/R3K2R w KQq - 0 1");
        assert_eq!(b.parse_move("e2e4").unwrap().flag(), MoveFlag::DoublePush);
        assert_eq!(b.parse_move("e2e3").unwrap().flag(), MoveFlag::Quiet);
        assert_eq!(b.parse_move("e1g1").unwrap().flag(), MoveFlag::CastleKingSide);
        assert_eq!(b.parse_move("e1c1").unwrap().flag(), MoveFlag::CastleQueenSide);
        assert_eq!(b.parse_move("a1a8").unwrap().flag(), MoveFlag::Capture);
        assert_eq!(b.parse_move("b7a8n").unwrap().flag(), MoveFlag::PromoteCaptureKnight);
        assert_eq!(b.parse_move("b7b8q").unwrap().flag(), MoveFlag::PromoteQueen);
    }

    #[test]
    fn parse_move_rejects_bad_input() {
        let b = board("4k3/1P6/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(matches!(b.parse_move("e2"), Err(MoveParseError::Malformed { .. })));
        assert!(matches!(b.parse_move("d2d4"), Err(MoveParseError::EmptyOrigin { .. })));
        assert!(matches!(b.parse_move("e1e2"), Err(MoveParseError::OwnPieceCaptured { .. })));
        assert!(matches!(b.parse_move("b7b8"), Err(MoveParseError::InvalidPromotion { .. })));
        assert!(matches!(b.parse_move("b7b8k"), Err(MoveParseError::InvalidPromotion { .. })));
        assert!(matches!(b.parse_move("e2e3q"), Err(MoveParseError::InvalidPromotion { .. })));
    }

    #[test]
    fn parse_move_rejects_blocked_pawn_pushes() {
        let b = board("4k3/8/8/4p3/4P3/3n4/3P4/4K3 w - - 0 1");
        assert!(matches!(b.parse_move("e4e5"), Err(MoveParseError::Malformed { .. })));
        assert!(matches!(b.parse_move("d2d3"), Err(MoveParseError::Malformed { .. })));
        assert!(matches!(b.parse_move("d2d4"), Err(MoveParseError::Malformed { .. })));
        assert_eq!(b.parse_move("e1d1").unwrap().flag(), MoveFlag::Quiet);

        let promo = board("1n2k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(promo.parse_move("b7b8q"), Err(MoveParseError::Malformed { .. })));
    }

    #[test]
    fn phase_counts_non_pawn_material() {
        assert_eq!(board(crate::STARTING_FEN).phase(), MAX_PHASE);
        assert_eq!(board("4k3/pppp4/8/8/8/8/8/4K3 w - - 0 1").phase(), 0);
        assert_eq!(board("3qk3/8/8/8/8/8/8/R3K3 w - - 0 1").phase(), 6);
    }

    #[test]
    fn incremental_phase_follows_captures_and_promotions() {
        let mut b = board("r3k3/1P6/8/3n4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(b.phase(), 3);
        for uci in ["e4d5", "e8d7", "b7a8q"] {
            let mv = b.parse_move(uci).unwrap();
            b.push(mv);
            assert_eq!(b.phase, b.phase_from_scratch(), "after {uci}");
        }
        assert_eq!(b.phase(), 4);
        for _ in 0..3 {
            b.pop();
            assert_eq!(b.phase, b.phase_from_scratch());
        }
        assert_eq!(b.phase(), 3);
    }
}
