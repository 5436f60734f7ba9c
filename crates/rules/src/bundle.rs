//! Resolved rule bundles.

use std::{fmt, sync::Arc};

use basalt_chain_types::{
    BlockHeader, BodyValidator, DifficultyCalculator, HeaderCodec, HeaderValidator,
};
use basalt_primitives::Address;

use crate::errors::ConfigError;

/// The reward to issue for a block: who gets it and how much.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RewardGrant {
    beneficiary: Address,
    amount: u128,
}

impl RewardGrant {
    pub fn new(beneficiary: Address, amount: u128) -> Self {
        Self {
            beneficiary,
            amount,
        }
    }

    pub fn beneficiary(&self) -> &Address {
        &self.beneficiary
    }

    pub fn amount(&self) -> u128 {
        self.amount
    }
}

/// The consensus rules in force over a height range.
///
/// Built once by a consensus family's rule applier and never mutated;
/// shared behind an [`Arc`] by the fork schedule.
#[derive(Clone)]
pub struct RuleBundle {
    header_validator: Arc<dyn HeaderValidator>,
    ommer_header_validator: Arc<dyn HeaderValidator>,
    body_validator: Arc<dyn BodyValidator>,
    header_codec: Arc<dyn HeaderCodec>,
    difficulty_calculator: Arc<dyn DifficultyCalculator>,
    block_reward: u128,
    mining_beneficiary: Option<Address>,
    skip_zero_rewards: bool,
    epoch_length: u64,
}

impl RuleBundle {
    pub fn header_validator(&self) -> &dyn HeaderValidator {
        &*self.header_validator
    }

    pub fn ommer_header_validator(&self) -> &dyn HeaderValidator {
        &*self.ommer_header_validator
    }

    pub fn body_validator(&self) -> &dyn BodyValidator {
        &*self.body_validator
    }

    pub fn header_codec(&self) -> &dyn HeaderCodec {
        &*self.header_codec
    }

    pub fn difficulty_calculator(&self) -> &dyn DifficultyCalculator {
        &*self.difficulty_calculator
    }

    pub fn block_reward(&self) -> u128 {
        self.block_reward
    }

    pub fn mining_beneficiary(&self) -> Option<&Address> {
        self.mining_beneficiary.as_ref()
    }

    pub fn skip_zero_rewards(&self) -> bool {
        self.skip_zero_rewards
    }

    pub fn epoch_length(&self) -> u64 {
        self.epoch_length
    }

    /// Resolves the reward for a block under this bundle.
    ///
    /// Returns `None` when the configured reward is zero and zero-reward
    /// issuance is being skipped, so processors avoid a pointless state
    /// write. A configured beneficiary overrides the header's declared
    /// one.
    pub fn reward_grant(&self, header: &BlockHeader) -> Option<RewardGrant> {
        if self.block_reward == 0 && self.skip_zero_rewards {
            return None;
        }
        let beneficiary = self.mining_beneficiary.unwrap_or(*header.beneficiary());
        Some(RewardGrant::new(beneficiary, self.block_reward))
    }
}

impl fmt::Debug for RuleBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBundle")
            .field("block_reward", &self.block_reward)
            .field("mining_beneficiary", &self.mining_beneficiary)
            .field("skip_zero_rewards", &self.skip_zero_rewards)
            .field("epoch_length", &self.epoch_length)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RuleBundle`].
///
/// Starts empty; a consensus family's rule applier populates every seam.
/// Building with a seam unset is a configuration error.
#[derive(Default)]
pub struct RuleBundleBuilder {
    header_validator: Option<Arc<dyn HeaderValidator>>,
    ommer_header_validator: Option<Arc<dyn HeaderValidator>>,
    body_validator: Option<Arc<dyn BodyValidator>>,
    header_codec: Option<Arc<dyn HeaderCodec>>,
    difficulty_calculator: Option<Arc<dyn DifficultyCalculator>>,
    block_reward: u128,
    mining_beneficiary: Option<Address>,
    skip_zero_rewards: bool,
    epoch_length: Option<u64>,
}

impl RuleBundleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_validator(mut self, v: Arc<dyn HeaderValidator>) -> Self {
        self.header_validator = Some(v);
        self
    }

    pub fn ommer_header_validator(mut self, v: Arc<dyn HeaderValidator>) -> Self {
        self.ommer_header_validator = Some(v);
        self
    }

    pub fn body_validator(mut self, v: Arc<dyn BodyValidator>) -> Self {
        self.body_validator = Some(v);
        self
    }

    pub fn header_codec(mut self, c: Arc<dyn HeaderCodec>) -> Self {
        self.header_codec = Some(c);
        self
    }

    pub fn difficulty_calculator(mut self, d: Arc<dyn DifficultyCalculator>) -> Self {
        self.difficulty_calculator = Some(d);
        self
    }

    pub fn block_reward(mut self, reward: u128) -> Self {
        self.block_reward = reward;
        self
    }

    pub fn mining_beneficiary(mut self, beneficiary: Address) -> Self {
        self.mining_beneficiary = Some(beneficiary);
        self
    }

    pub fn skip_zero_rewards(mut self, skip: bool) -> Self {
        self.skip_zero_rewards = skip;
        self
    }

    pub fn epoch_length(mut self, epoch_length: u64) -> Self {
        self.epoch_length = Some(epoch_length);
        self
    }

    pub fn build(self) -> Result<RuleBundle, ConfigError> {
        Ok(RuleBundle {
            header_validator: self
                .header_validator
                .ok_or(ConfigError::IncompleteBundle("header validator"))?,
            ommer_header_validator: self
                .ommer_header_validator
                .ok_or(ConfigError::IncompleteBundle("ommer header validator"))?,
            body_validator: self
                .body_validator
                .ok_or(ConfigError::IncompleteBundle("body validator"))?,
            header_codec: self
                .header_codec
                .ok_or(ConfigError::IncompleteBundle("header codec"))?,
            difficulty_calculator: self
                .difficulty_calculator
                .ok_or(ConfigError::IncompleteBundle("difficulty calculator"))?,
            block_reward: self.block_reward,
            mining_beneficiary: self.mining_beneficiary,
            skip_zero_rewards: self.skip_zero_rewards,
            epoch_length: self
                .epoch_length
                .ok_or(ConfigError::IncompleteBundle("epoch length"))?,
        })
    }
}

impl fmt::Debug for RuleBundleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBundleBuilder")
            .field("block_reward", &self.block_reward)
            .field("mining_beneficiary", &self.mining_beneficiary)
            .field("skip_zero_rewards", &self.skip_zero_rewards)
            .field("epoch_length", &self.epoch_length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use basalt_params::BftParams;
    use basalt_test_utils::ArbitraryGenerator;

    use super::*;
    use crate::family::ConsensusFamily;

    fn bft_config(reward: Option<i128>, beneficiary: Option<String>) -> BftParams {
        BftParams {
            block_period_secs: 2,
            epoch_length: 100,
            block_reward: reward,
            mining_beneficiary: beneficiary,
        }
    }

    fn header_with_beneficiary(beneficiary: Address) -> BlockHeader {
        let hdr: BlockHeader = ArbitraryGenerator::new().generate();
        BlockHeader::new(
            *hdr.parent_blkid(),
            hdr.height(),
            hdr.timestamp(),
            beneficiary,
            *hdr.state_root(),
            *hdr.txs_root(),
            *hdr.receipts_root(),
            *hdr.ommers_root(),
            hdr.difficulty(),
            hdr.extra_data().to_vec(),
        )
    }

    #[test]
    fn test_incomplete_bundle_errors() {
        let err = RuleBundleBuilder::new().build().unwrap_err();
        assert!(matches!(err, ConfigError::IncompleteBundle(_)));
    }

    #[test]
    fn test_zero_reward_with_skip_grants_nothing() {
        let bundle = ConsensusFamily::Bft
            .build_bundle(&bft_config(Some(0), None))
            .unwrap();
        let hdr = header_with_beneficiary(Address::from([3; 20]));
        assert!(bundle.skip_zero_rewards());
        assert_eq!(bundle.reward_grant(&hdr), None);
    }

    #[test]
    fn test_reward_defaults_to_header_beneficiary() {
        let bundle = ConsensusFamily::Bft
            .build_bundle(&bft_config(Some(5), None))
            .unwrap();
        let miner = Address::from([3; 20]);
        let grant = bundle.reward_grant(&header_with_beneficiary(miner)).unwrap();
        assert_eq!(*grant.beneficiary(), miner);
        assert_eq!(grant.amount(), 5);
    }

    #[test]
    fn test_configured_beneficiary_overrides_header() {
        let fixed = Address::from([0xaa; 20]);
        let bundle = ConsensusFamily::Bft
            .build_bundle(&bft_config(Some(5), Some(fixed.to_string())))
            .unwrap();
        let grant = bundle
            .reward_grant(&header_with_beneficiary(Address::from([3; 20])))
            .unwrap();
        assert_eq!(*grant.beneficiary(), fixed);
    }

    #[test]
    fn test_unconfigured_reward_grants_zero() {
        // No reward configured: issuance isn't skipped, the amount is
        // just zero.
        let bundle = ConsensusFamily::Bft
            .build_bundle(&bft_config(None, None))
            .unwrap();
        assert!(!bundle.skip_zero_rewards());
        let grant = bundle
            .reward_grant(&header_with_beneficiary(Address::from([3; 20])))
            .unwrap();
        assert_eq!(grant.amount(), 0);
    }
}
