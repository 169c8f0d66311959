//! Tunable score tiers for move ordering.

use crate::error::ConfigError;

/// Score tiers and decay rate used by the move orderer.
///
/// The bonuses add up per move, so a promotion-capture collects both the
/// capture and the promotion bonus. Quiet moves get their history score
/// capped at `killer_bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingConfig {
    /// Added to the transposition-table move.
    pub hash_move_bonus: i32,
    /// Added to any promotion.
    pub promotion_bonus: i32,
    /// Added to captures on top of their MVV-LVA score.
    pub capture_bonus: i32,
    /// Added to killers; also the cap on a quiet move's history score.
    pub killer_bonus: i32,
    /// History cells are divided by this between searches of one game.
    pub history_aging_divisor: i32,
}

impl OrderingConfig {
    /// Check that every tier sits strictly above the next one down.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_aging_divisor <= 0 {
            return Err(ConfigError::NonPositiveAgingDivisor {
                divisor: self.history_aging_divisor,
            });
        }

        let tiers = [
            ("hash move", self.hash_move_bonus),
            ("promotion", self.promotion_bonus),
            ("capture", self.capture_bonus),
            ("killer", self.killer_bonus),
            ("zero", 0),
        ];
        for pair in tiers.windows(2) {
            let ((upper, upper_value), (lower, lower_value)) = (pair[0], pair[1]);
            if upper_value <= lower_value {
                return Err(ConfigError::TierInversion {
                    upper,
                    upper_value,
                    lower,
                    lower_value,
                });
            }
        }
        Ok(())
    }
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            hash_move_bonus: 10_000,
            promotion_bonus: 5_000,
            capture_bonus: 200,
            killer_bonus: 90,
            history_aging_divisor: 8,
        }
    }
}
