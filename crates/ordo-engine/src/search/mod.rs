//! Move ordering for alpha-beta search.

pub mod heuristics;
pub mod orderer;
pub mod ordering;
pub mod see;
pub mod tt;

/// Deepest ply the per-ply tables track.
pub const MAX_PLY: usize = 128;

pub use heuristics::{HISTORY_GUARD, HistoryTable, KillerTable};
pub use orderer::MoveOrderer;
pub use ordering::{MVV_LVA, MovePicker, mvv_lva, score_moves, select_next_best};
pub use see::{see, see_capture, see_ge};
pub use tt::{Bound, HashMoveProbe, TranspositionTable, TtEntry};
