//! Consensus families and their rule appliers.

use std::sync::Arc;

use basalt_bft::{BftHeaderCodec, BftHeaderValidator, ConstantDifficulty};
use basalt_params::BftParams;
use basalt_primitives::Address;

use crate::{
    bundle::{RuleBundle, RuleBundleBuilder},
    errors::ConfigError,
    validators::StandardBodyValidator,
};

/// The consensus families this node knows how to build rules for.
///
/// Dispatch over the family happens exactly once, while the fork schedule
/// is built; nothing on the per-block path branches on it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConsensusFamily {
    Bft,
}

impl ConsensusFamily {
    /// Builds the rule bundle for one fork's effective configuration.
    pub fn build_bundle(&self, config: &BftParams) -> Result<RuleBundle, ConfigError> {
        match self {
            ConsensusFamily::Bft => apply_bft_rules(RuleBundleBuilder::new(), config)?.build(),
        }
    }
}

/// Overlays BFT-family rules onto a bundle builder.
///
/// Configuration is validated here, eagerly: a bad epoch length, a
/// negative reward, or a beneficiary string that does not parse as an
/// address all fail the build rather than surfacing during block
/// processing. No side effects beyond the returned builder; safe to call
/// once per fork.
pub(crate) fn apply_bft_rules(
    builder: RuleBundleBuilder,
    config: &BftParams,
) -> Result<RuleBundleBuilder, ConfigError> {
    if config.epoch_length == 0 {
        return Err(ConfigError::ZeroEpochLength);
    }

    let mut builder = builder;

    if let Some(reward) = config.block_reward {
        if reward < 0 {
            return Err(ConfigError::NegativeBlockReward);
        }
        // When a reward is configured as zero, skip issuance entirely
        // instead of writing a zero credit.
        builder = builder.block_reward(reward as u128).skip_zero_rewards(true);
    }

    if let Some(beneficiary_str) = &config.mining_beneficiary {
        // Parse now so a bad string fails the build, not a block import.
        let beneficiary = Address::from_hex(beneficiary_str)?;
        builder = builder.mining_beneficiary(beneficiary);
    }

    let ruleset = Arc::new(BftHeaderValidator::new(config.block_period_secs));

    Ok(builder
        .header_validator(ruleset.clone())
        .ommer_header_validator(ruleset.clone())
        .body_validator(Arc::new(StandardBodyValidator::new(ruleset)))
        .difficulty_calculator(Arc::new(ConstantDifficulty::ONE))
        .header_codec(Arc::new(BftHeaderCodec::new()))
        .epoch_length(config.epoch_length))
}
