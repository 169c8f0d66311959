//! The board queries move ordering depends on.
//!
//! Move ordering never generates moves or evaluates positions itself; it
//! talks to the board only through [`Position`]. Any board representation
//! can drive the orderer by implementing this trait.

use std::ops::{Deref, DerefMut};

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A position that supports the ordering queries and reversible moves.
pub trait Position {
    fn side_to_move(&self) -> Color;

    /// Kind of the piece on `sq`, regardless of color.
    fn piece_on(&self, sq: Square) -> Option<PieceKind>;

    /// Origin of the cheapest piece of `side` attacking `target`.
    ///
    /// Ties between equally valued attackers may be broken arbitrarily.
    fn least_valuable_attacker(&self, target: Square, side: Color) -> Option<Square>;

    /// Play `mv`, saving enough state for [`Position::pop`] to restore it.
    fn push(&mut self, mv: Move);

    /// Undo the most recent [`Position::push`].
    fn pop(&mut self);

    /// Game phase used for evaluation tapering, `0` (bare endgame) to `24`.
    fn phase(&self) -> i32;

    /// Identity key used to probe the transposition table.
    fn hash(&self) -> u64;
}

/// A move played on a borrowed position, undone when the guard drops.
///
/// Every exit path of the scope holding the guard, early returns and
/// unwinding included, restores the position.
pub struct MoveGuard<'a, P: Position + ?Sized> {
    pos: &'a mut P,
}

impl<'a, P: Position + ?Sized> MoveGuard<'a, P> {
    #[inline]
    pub fn new(pos: &'a mut P, mv: Move) -> Self {
        pos.push(mv);
        MoveGuard { pos }
    }
}

impl<P: Position + ?Sized> Deref for MoveGuard<'_, P> {
    type Target = P;

    #[inline]
    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: Position + ?Sized> DerefMut for MoveGuard<'_, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: Position + ?Sized> Drop for MoveGuard<'_, P> {
    #[inline]
    fn drop(&mut self) {
        self.pos.pop();
    }
}
