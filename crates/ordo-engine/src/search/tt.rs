//! Transposition table, consulted here only for its best-move hint.

use ordo_core::Move;

/// Where the scorer gets the hash move for a position.
pub trait HashMoveProbe {
    /// Best move previously recorded for `hash`, if any.
    fn hash_move(&self, hash: u64) -> Option<Move>;
}

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Bound {
    /// Empty slot.
    #[default]
    None = 0,
    Exact = 1,
    LowerBound = 2,
    UpperBound = 3,
}

/// One table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TtEntry {
    pub key: u64,
    pub best_move: Move,
    pub depth: u8,
    pub score: i16,
    pub bound: Bound,
}

/// Single-threaded, power-of-two sized transposition table.
///
/// Each search worker owns one, like the rest of the ordering state.
pub struct TranspositionTable {
    entries: Box<[TtEntry]>,
    mask: u64,
}

impl TranspositionTable {
    /// Allocate roughly `mb` megabytes, rounded down to a power-of-two entry count.
    pub fn new(mb: usize) -> Self {
        let bytes = mb * 1024 * 1024;
        let entry_size = std::mem::size_of::<TtEntry>();
        let num_entries = ((bytes / entry_size).next_power_of_two() >> 1).max(1);
        Self::with_entries(num_entries)
    }

    /// Allocate exactly `num_entries` slots; must be a power of two.
    pub fn with_entries(num_entries: usize) -> Self {
        assert!(num_entries.is_power_of_two(), "entry count {num_entries} is not a power of two");
        Self {
            entries: vec![TtEntry::default(); num_entries].into_boxed_slice(),
            mask: (num_entries - 1) as u64,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a table has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.entries.fill(TtEntry::default());
    }

    /// Matching entry for `hash`, or `None` on a miss or key collision.
    pub fn probe(&self, hash: u64) -> Option<TtEntry> {
        let entry = self.entries[(hash & self.mask) as usize];
        (entry.bound != Bound::None && entry.key == hash).then_some(entry)
    }

    /// Store an entry, replacing the slot when it is empty, belongs to
    /// another position, holds a shallower search, or the new bound is exact.
    pub fn store(&mut self, hash: u64, depth: u8, score: i16, best_move: Move, bound: Bound) {
        let slot = &mut self.entries[(hash & self.mask) as usize];
        let replace = slot.bound == Bound::None
            || slot.key != hash
            || depth >= slot.depth
            || bound == Bound::Exact;
        if replace {
            *slot = TtEntry {
                key: hash,
                best_move,
                depth,
                score,
                bound,
            };
        }
    }
}

impl HashMoveProbe for TranspositionTable {
    #[inline]
    fn hash_move(&self, hash: u64) -> Option<Move> {
        self.probe(hash)
            .map(|entry| entry.best_move)
            .filter(|mv| !mv.is_null())
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
