//! Static Exchange Evaluation (SEE).
//!
//! Resolves the capture sequence on one square, each side always taking
//! with its least valuable attacker and free to stop when recapturing
//! would lose material. Moves are played on the position itself and
//! undone through [`MoveGuard`], so the position is unchanged on return.

use ordo_core::{Move, MoveFlag, MoveGuard, PieceKind, Position, Square};

use crate::eval::{Score, TaperedEval, piece_value};

/// Best material the side to move can win by starting captures on `target`.
///
/// Never negative: a side that would lose material simply does not capture.
/// Values are tapered for the phase at each step of the sequence.
pub fn see<P, E>(pos: &mut P, eval: &E, target: Square) -> i32
where
    P: Position + ?Sized,
    E: TaperedEval + ?Sized,
{
    let Some(attacker) = pos.least_valuable_attacker(target, pos.side_to_move()) else {
        return 0;
    };
    let victim = pos
        .piece_on(target)
        .map_or(0, |kind| eval.scaled(piece_value(kind), pos.phase()));

    // Each step removes the captured piece, so the recursion runs out of attackers
    let mut after = MoveGuard::new(pos, Move::new(attacker, target, MoveFlag::Capture));
    (victim - see(&mut *after, eval, target)).max(0)
}

/// Net material for the side to move of playing the capture or promotion
/// `mv` and letting the exchange on its destination run its course.
///
/// The gain is the captured piece (the passed pawn for en passant) plus the
/// promoted piece, tapered at the current phase, minus the opponent's best
/// exchange in reply.
///
/// # Panics
///
/// Panics if `mv` neither captures nor promotes.
pub fn see_capture<P, E>(pos: &mut P, eval: &E, mv: Move) -> i32
where
    P: Position + ?Sized,
    E: TaperedEval + ?Sized,
{
    assert!(
        mv.is_capture() || mv.is_promotion(),
        "see_capture called on quiet move {mv}"
    );

    let captured = if mv.is_en_passant() {
        Some(PieceKind::Pawn)
    } else {
        pos.piece_on(mv.dest())
    };
    let mut gain = captured.map_or(Score::ZERO, piece_value);
    if let Some(promoted) = mv.promotion_piece() {
        gain += piece_value(promoted);
    }
    let gain = eval.scaled(gain, pos.phase());

    let mut after = MoveGuard::new(pos, mv);
    gain - see(&mut *after, eval, mv.dest())
}

/// Does `mv` win at least `threshold` by [`see_capture`]?
///
/// The driver uses this to skip captures that lose material.
#[inline]
pub fn see_ge<P, E>(pos: &mut P, eval: &E, mv: Move, threshold: i32) -> bool
where
    P: Position + ?Sized,
    E: TaperedEval + ?Sized,
{
    see_capture(pos, eval, mv) >= threshold
}
