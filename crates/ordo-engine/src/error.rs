//! Errors raised when validating ordering configuration.

/// A configuration that would break the ordering tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// History aging must divide by a positive number.
    #[error("history aging divisor must be positive, got {divisor}")]
    NonPositiveAgingDivisor {
        divisor: i32,
    },
    /// A bonus is not strictly above the tier beneath it.
    #[error("{upper} bonus ({upper_value}) must exceed {lower} bonus ({lower_value})")]
    TierInversion {
        upper: &'static str,
        upper_value: i32,
        lower: &'static str,
        lower_value: i32,
    },
}
