//! Per-worker move ordering state.

use ordo_core::{Color, Move, MoveList, Position};
use tracing::debug;

use crate::config::OrderingConfig;
use crate::error::ConfigError;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering;
use crate::search::tt::HashMoveProbe;

/// Killer and history tables plus the score tiers that read them.
///
/// One orderer belongs to one search worker. The tables are plain owned
/// arrays, so parallel workers each build their own and share only the
/// transposition table.
#[derive(Clone)]
pub struct MoveOrderer<const N: usize = 1> {
    config: OrderingConfig,
    killers: KillerTable<N>,
    history: HistoryTable,
}

impl<const N: usize> MoveOrderer<N> {
    /// Create an orderer with empty tables.
    pub fn new(config: OrderingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(?config, killer_slots = N, "move orderer created");
        Ok(Self {
            config,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        })
    }

    /// Score tiers in use.
    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Killer table, read-only.
    pub fn killers(&self) -> &KillerTable<N> {
        &self.killers
    }

    /// History table, read-only.
    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    /// Score `moves` for `pos` at `ply`, taking the hash move from `tt`.
    pub fn score_moves<P, T>(&self, pos: &P, tt: &T, moves: &mut MoveList, ply: usize)
    where
        P: Position + ?Sized,
        T: HashMoveProbe + ?Sized,
    {
        let hash_move = tt.hash_move(pos.hash());
        ordering::score_moves(
            pos,
            moves,
            ply,
            hash_move,
            &self.killers,
            &self.history,
            &self.config,
        );
    }

    /// Record a beta cutoff by `mv`.
    ///
    /// Only quiet moves feed the killer and history tables; captures and
    /// promotions are already ordered by material.
    pub fn record_cutoff(&mut self, side: Color, ply: usize, mv: Move, depth: u8) {
        if !mv.is_quiet() {
            return;
        }
        self.killers.record(side, ply, mv);
        self.history.record(mv, depth);
    }

    /// Is `mv` a killer for `side` at `ply`?
    pub fn is_killer(&self, side: Color, ply: usize, mv: Move) -> bool {
        self.killers.is_killer(side, ply, mv)
    }

    /// Reset per-search state. History survives between searches.
    pub fn new_search(&mut self) {
        self.killers.clear();
        debug!("killers cleared for new search");
    }

    /// Reset everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.killers.clear();
        self.history.clear();
        debug!("killers and history cleared for new game");
    }

    /// Decay history by the configured divisor.
    pub fn age_history(&mut self) {
        self.history.age(self.config.history_aging_divisor);
        debug!(divisor = self.config.history_aging_divisor, "history aged");
    }
}

impl<const N: usize> Default for MoveOrderer<N> {
    fn default() -> Self {
        Self {
            config: OrderingConfig::default(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }
}
