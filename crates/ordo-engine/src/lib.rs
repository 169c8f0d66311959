//! Move ordering for ordo: static exchange evaluation, MVV-LVA, killer and
//! history heuristics, and lazy best-first move selection.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::OrderingConfig;
pub use error::ConfigError;
pub use eval::{PhaseTaper, Score, TaperedEval};
pub use search::{MoveOrderer, MovePicker, TranspositionTable};
