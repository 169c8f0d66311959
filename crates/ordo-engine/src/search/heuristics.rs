//! Killer moves and the history heuristic for quiet move ordering.

use ordo_core::{Color, Move, Square};
use tracing::debug;

use crate::search::MAX_PLY;

/// Per side and ply, the last `N` quiet moves that caused a beta cutoff,
/// most recent first.
#[derive(Clone)]
pub struct KillerTable<const N: usize = 1> {
    slots: [[[Move; N]; MAX_PLY]; Color::COUNT],
}

impl<const N: usize> KillerTable<N> {
    const NON_EMPTY: () = assert!(N > 0, "killer table needs at least one slot per ply");

    /// Number of killers kept per (side, ply).
    pub const CAPACITY: usize = N;

    /// Create an empty killer table.
    pub fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            slots: [[[Move::NULL; N]; MAX_PLY]; Color::COUNT],
        }
    }

    /// Insert `mv` in front, shifting older killers back and dropping the oldest.
    ///
    /// # Panics
    ///
    /// Panics if `ply >= MAX_PLY`.
    pub fn record(&mut self, side: Color, ply: usize, mv: Move) {
        assert!(ply < MAX_PLY, "killer ply {ply} out of range");
        let slots = &mut self.slots[side.index()][ply];
        slots.copy_within(0..N - 1, 1);
        slots[0] = mv;
    }

    /// Is `mv` one of the killers stored for `side` at `ply`?
    ///
    /// # Panics
    ///
    /// Panics if `ply >= MAX_PLY`.
    #[inline]
    pub fn is_killer(&self, side: Color, ply: usize, mv: Move) -> bool {
        assert!(ply < MAX_PLY, "killer ply {ply} out of range");
        !mv.is_null() && self.slots[side.index()][ply].contains(&mv)
    }

    /// The killer slots for `side` at `ply`, most recent first; empty slots are [`Move::NULL`].
    pub fn killers(&self, side: Color, ply: usize) -> &[Move; N] {
        &self.slots[side.index()][ply]
    }

    /// Forget every killer.
    pub fn clear(&mut self) {
        for side in &mut self.slots {
            for ply in side.iter_mut() {
                ply.fill(Move::NULL);
            }
        }
    }
}

impl<const N: usize> Default for KillerTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// History cells are halved, all together, once any cell passes this.
pub const HISTORY_GUARD: i32 = i32::MAX / 2;

/// Cutoff history indexed by `[source][dest]`.
///
/// Cells only grow, by `depth²` per cutoff. Crossing [`HISTORY_GUARD`]
/// halves the whole table so relative order survives.
#[derive(Clone)]
pub struct HistoryTable {
    table: [[i32; Square::COUNT]; Square::COUNT],
}

impl HistoryTable {
    /// Create a zeroed history table.
    pub fn new() -> Self {
        Self {
            table: [[0; Square::COUNT]; Square::COUNT],
        }
    }

    /// Reward a quiet move that caused a beta cutoff at `depth`.
    pub fn record(&mut self, mv: Move, depth: u8) {
        let bonus = i32::from(depth) * i32::from(depth);
        let cell = &mut self.table[mv.source().index()][mv.dest().index()];
        *cell += bonus;
        if *cell > HISTORY_GUARD {
            self.rescale();
        }
    }

    fn rescale(&mut self) {
        debug!("history guard crossed, halving all cells");
        for row in &mut self.table {
            for cell in row.iter_mut() {
                *cell /= 2;
            }
        }
    }

    /// Accumulated history for `mv`'s source and destination squares.
    #[inline]
    pub fn score(&self, mv: Move) -> i32 {
        self.table[mv.source().index()][mv.dest().index()]
    }

    /// Divide every cell by `divisor` so older cutoffs count for less.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is not positive.
    pub fn age(&mut self, divisor: i32) {
        assert!(divisor > 0, "history aging divisor must be positive");
        for row in &mut self.table {
            for cell in row.iter_mut() {
                *cell /= divisor;
            }
        }
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        for row in &mut self.table {
            row.fill(0);
        }
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}
