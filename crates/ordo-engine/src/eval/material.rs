//! Piece values shared by static exchange evaluation and capture ordering.

use ordo_core::PieceKind;

use crate::eval::score::{S, Score};

/// Material values indexed by [`PieceKind::index()`].
///
/// | Piece  | mg     | eg     |
/// |--------|--------|--------|
/// | Pawn   | 100    | 120    |
/// | Knight | 320    | 310    |
/// | Bishop | 330    | 320    |
/// | Rook   | 500    | 520    |
/// | Queen  | 900    | 950    |
/// | King   | 10 000 | 10 000 |
///
/// The king carries a prohibitive value so that exchanges never trade it.
pub const PIECE_VALUE: [Score; PieceKind::COUNT] = [
    S(100, 120),
    S(320, 310),
    S(330, 320),
    S(500, 520),
    S(900, 950),
    S(10_000, 10_000),
];

/// Packed material value of `kind`.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUE[kind.index()]
}

/// Ordinal values used only by MVV-LVA: pawn 100 up to king 600.
pub const ORDINAL_VALUE: [i32; PieceKind::COUNT] = [100, 200, 300, 400, 500, 600];
