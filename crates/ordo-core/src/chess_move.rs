//! Moves packed into 16 bits, plus the scored wrapper the orderer works on.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

const FROM_MASK: u16 = 0x003F;
const TO_MASK: u16 = 0x0FC0;
const TO_SHIFT: u32 = 6;
const FLAG_SHIFT: u32 = 12;

const CAPTURE_BIT: u8 = 0b0100;
const PROMOTION_BIT: u8 = 0b1000;

/// The move-kind tag stored in the top four bits of a [`Move`].
///
/// Bit 2 marks captures (en passant included), bit 3 marks promotions, and
/// the low two bits of a promotion select the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePush = 1,
    CastleKingSide = 2,
    CastleQueenSide = 3,
    Capture = 4,
    EnPassant = 5,
    PromoteKnight = 8,
    PromoteBishop = 9,
    PromoteRook = 10,
    PromoteQueen = 11,
    PromoteCaptureKnight = 12,
    PromoteCaptureBishop = 13,
    PromoteCaptureRook = 14,
    PromoteCaptureQueen = 15,
}

impl MoveFlag {
    const fn from_bits(bits: u8) -> MoveFlag {
        match bits & 0x0F {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::CastleKingSide,
            3 => MoveFlag::CastleQueenSide,
            4 => MoveFlag::Capture,
            5 => MoveFlag::EnPassant,
            8 => MoveFlag::PromoteKnight,
            9 => MoveFlag::PromoteBishop,
            10 => MoveFlag::PromoteRook,
            11 => MoveFlag::PromoteQueen,
            12 => MoveFlag::PromoteCaptureKnight,
            13 => MoveFlag::PromoteCaptureBishop,
            14 => MoveFlag::PromoteCaptureRook,
            15 => MoveFlag::PromoteCaptureQueen,
            // 6 and 7 are never encoded
            _ => MoveFlag::Quiet,
        }
    }

    /// Promotion flag for `kind`, with or without a capture.
    ///
    /// Returns `None` for pawns and kings.
    pub const fn promotion(kind: PieceKind, capture: bool) -> Option<MoveFlag> {
        let base = match kind {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Queen => 3,
            PieceKind::Pawn | PieceKind::King => return None,
        };
        let capture_bits = if capture { CAPTURE_BIT } else { 0 };
        Some(MoveFlag::from_bits(PROMOTION_BIT | capture_bits | base))
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self as u8 & CAPTURE_BIT != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self as u8 & PROMOTION_BIT != 0
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveFlag::CastleKingSide | MoveFlag::CastleQueenSide)
    }

    /// The piece a promotion creates.
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        if !self.is_promotion() {
            return None;
        }
        Some(match self as u8 & 0b11 {
            0 => PieceKind::Knight,
            1 => PieceKind::Bishop,
            2 => PieceKind::Rook,
            _ => PieceKind::Queen,
        })
    }
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  origin square      (0-63)
/// bits  6-11: destination square (0-63)
/// bits 12-15: MoveFlag
/// ```
///
/// Equality compares the raw encoding, so a move taken from a hash entry
/// or a killer slot matches the generated move it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u16);

impl Move {
    /// Empty-slot sentinel (a1a1, quiet). Never legal.
    pub const NULL: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Move {
        Move((from.index() as u16) | ((to.index() as u16) << TO_SHIFT) | ((flag as u16) << FLAG_SHIFT))
    }

    #[inline]
    pub const fn from_raw(raw: u16) -> Move {
        Move(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & TO_MASK) >> TO_SHIFT) as u8)
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits((self.0 >> FLAG_SHIFT) as u8)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// True for every capture, en passant and promotion-captures included.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flag().is_capture()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flag().is_promotion()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag(), MoveFlag::EnPassant)
    }

    /// Neither a capture nor a promotion.
    #[inline]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        self.flag().promotion_piece()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.source(), self.dest())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.flag())
    }
}

/// A move paired with the ordering priority written by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl ScoredMove {
    #[inline]
    pub const fn new(mv: Move) -> ScoredMove {
        ScoredMove { mv, score: 0 }
    }
}

impl From<Move> for ScoredMove {
    fn from(mv: Move) -> Self {
        ScoredMove::new(mv)
    }
}
