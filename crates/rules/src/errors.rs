use basalt_primitives::ParseError;
use thiserror::Error;

/// Fatal configuration error raised while building a fork schedule.
///
/// These are construction-time only; nothing in the per-block validation
/// path produces them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("epoch length must be greater than zero")]
    ZeroEpochLength,

    #[error("block reward cannot be negative")]
    NegativeBlockReward,

    #[error("mining beneficiary is not a valid address: {0}")]
    InvalidBeneficiary(#[from] ParseError),

    #[error("fork activation heights must be strictly increasing (height {0})")]
    UnorderedFork(u64),

    #[error("rule bundle incomplete: missing {0}")]
    IncompleteBundle(&'static str),

    #[error("invalid fork at height {height}: {source}")]
    InvalidFork {
        height: u64,
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Attaches the offending fork's activation height.
    pub(crate) fn at_fork(self, height: u64) -> ConfigError {
        match self {
            // Already attributed.
            err @ ConfigError::InvalidFork { .. } => err,
            err => ConfigError::InvalidFork {
                height,
                source: Box::new(err),
            },
        }
    }
}
