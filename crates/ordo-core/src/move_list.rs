//! Fixed-capacity per-node move buffer.

use std::ops::{Index, IndexMut};

use crate::chess_move::{Move, ScoredMove};

/// Upper bound on legal moves in any chess position is 218.
pub const MAX_MOVES: usize = 256;

/// Stack-allocated list of scored moves in generation order.
///
/// The scorer writes priorities in place and the lazy selector reorders
/// entries in place, so the list is never reallocated during a node.
#[derive(Clone)]
pub struct MoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [ScoredMove::default(); MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move with a zero score.
    ///
    /// # Panics
    ///
    /// Panics if the list already holds [`MAX_MOVES`] entries.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = ScoredMove::new(mv);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ScoredMove] {
        &mut self.moves[..self.len]
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }

    /// The moves alone, in current list order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter().map(|sm| sm.mv)
    }

    /// Reset every priority to zero, keeping the moves.
    pub fn clear_scores(&mut self) {
        for entry in self.as_mut_slice() {
            entry.score = 0;
        }
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Index<usize> for MoveList {
    type Output = ScoredMove;

    #[inline]
    fn index(&self, index: usize) -> &ScoredMove {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for MoveList {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut ScoredMove {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a ScoredMove;
    type IntoIter = std::slice::Iter<'a, ScoredMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::MoveList;
    use crate::{Move, MoveFlag, Square};

    #[test]
    fn push_keeps_generation_order() {
        let a = Move::new(Square::E2, Square::E4, MoveFlag::DoublePush);
        let b = Move::new(Square::G1, Square::F3, MoveFlag::Quiet);
        let list: MoveList = [a, b].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert_eq!(list.moves().collect::<Vec<_>>(), vec![a, b]);
        assert!(list.iter().all(|sm| sm.score == 0));
    }

    #[test]
    fn index_mut_writes_scores() {
        let mut list = MoveList::new();
        list.push(Move::new(Square::A2, Square::A3, MoveFlag::Quiet));
        list[0].score = 42;
        assert_eq!(list[0].score, 42);
        list.clear_scores();
        assert_eq!(list[0].score, 0);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let list = MoveList::new();
        let _ = list[0];
    }
}
