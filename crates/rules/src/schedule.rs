//! The fork schedule: height → rules in force.

use std::{fmt, sync::Arc};

use basalt_params::ChainParams;
use tracing::debug;

use crate::{bundle::RuleBundle, errors::ConfigError, family::ConsensusFamily};

/// Ordered table of activation heights, each resolving to the rule bundle
/// in force from that height.
///
/// Built once at startup; a bundle at height 0 always exists, so
/// resolution never fails. Immutable afterwards and safe for concurrent
/// reads.
pub struct ForkSchedule {
    chain_id: u64,
    milestones: Vec<(u64, Arc<RuleBundle>)>,
}

impl ForkSchedule {
    /// Builds the schedule from chain parameters.
    ///
    /// The genesis bundle is built first from the genesis config; every
    /// subsequent fork that declares any override gets a derived bundle,
    /// with unset knobs inherited from the effective config of the most
    /// recent prior bundle. All configuration validation happens here,
    /// before any block is ever validated; the first offending fork aborts
    /// the build.
    pub fn build(params: &ChainParams, family: ConsensusFamily) -> Result<Self, ConfigError> {
        let genesis_bundle = family
            .build_bundle(&params.bft)
            .map_err(|e| e.at_fork(0))?;
        debug!(chain_id = params.chain_id, "built genesis rule bundle");

        let mut milestones = vec![(0u64, Arc::new(genesis_bundle))];
        let mut effective = params.bft.clone();
        let mut last_height = 0u64;

        for fork in &params.forks {
            if fork.activation_height == 0 || fork.activation_height <= last_height {
                return Err(ConfigError::UnorderedFork(fork.activation_height));
            }
            last_height = fork.activation_height;

            if !fork.has_overrides() {
                continue;
            }

            effective = effective.with_fork(fork);
            let bundle = family
                .build_bundle(&effective)
                .map_err(|e| e.at_fork(fork.activation_height))?;
            debug!(height = fork.activation_height, "built fork rule bundle");
            milestones.push((fork.activation_height, Arc::new(bundle)));
        }

        Ok(Self {
            chain_id: params.chain_id,
            milestones,
        })
    }

    /// Builds a single-bundle schedule with the given rules in force from
    /// genesis. Useful for fixed-rule chains and tests.
    pub fn single(chain_id: u64, bundle: RuleBundle) -> Self {
        Self {
            chain_id,
            milestones: vec![(0, Arc::new(bundle))],
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the bundle in force at the given height: the one with the
    /// greatest activation height that is `<= height`.
    pub fn resolve(&self, height: u64) -> &RuleBundle {
        let idx = self.milestones.partition_point(|(h, _)| *h <= height);
        // A milestone at height 0 always exists.
        self.milestones[idx - 1].1.as_ref()
    }

    /// Iterates the activation milestones in ascending height order.
    pub fn milestones(&self) -> impl Iterator<Item = (u64, &RuleBundle)> {
        self.milestones.iter().map(|(h, b)| (*h, b.as_ref()))
    }

    /// Whether rules change exactly at this height.
    pub fn is_milestone(&self, height: u64) -> bool {
        self.milestones.iter().any(|(h, _)| *h == height)
    }
}

impl fmt::Display for ForkSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heights: Vec<u64> = self.milestones.iter().map(|(h, _)| *h).collect();
        write!(f, "chain {} forks {:?}", self.chain_id, heights)
    }
}

impl fmt::Debug for ForkSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkSchedule")
            .field("chain_id", &self.chain_id)
            .field(
                "milestones",
                &self.milestones.iter().map(|(h, _)| *h).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use basalt_params::{BftForkParams, BftParams};
    use proptest::prelude::*;

    use super::*;

    fn base_params(forks: Vec<BftForkParams>) -> ChainParams {
        ChainParams {
            chain_id: 1337,
            bft: BftParams {
                block_period_secs: 2,
                epoch_length: 30_000,
                block_reward: None,
                mining_beneficiary: None,
            },
            forks,
        }
    }

    fn reward_fork(height: u64, reward: i128) -> BftForkParams {
        BftForkParams {
            activation_height: height,
            block_period_secs: None,
            epoch_length: None,
            block_reward: Some(reward),
            mining_beneficiary: None,
        }
    }

    #[test]
    fn test_resolve_at_genesis() {
        let schedule = ForkSchedule::build(&base_params(Vec::new()), ConsensusFamily::Bft).unwrap();
        assert_eq!(schedule.resolve(0).block_reward(), 0);
        assert_eq!(schedule.resolve(u64::MAX).block_reward(), 0);
    }

    #[test]
    fn test_unordered_forks_rejected() {
        let params = base_params(vec![reward_fork(20, 1), reward_fork(10, 2)]);
        let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedFork(10)));
    }

    #[test]
    fn test_duplicate_fork_heights_rejected() {
        let params = base_params(vec![reward_fork(10, 1), reward_fork(10, 2)]);
        let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedFork(10)));
    }

    #[test]
    fn test_fork_at_zero_rejected() {
        let params = base_params(vec![reward_fork(0, 1)]);
        let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedFork(0)));
    }

    #[test]
    fn test_fork_without_overrides_adds_no_milestone() {
        let noop = BftForkParams {
            activation_height: 10,
            block_period_secs: None,
            epoch_length: None,
            block_reward: None,
            mining_beneficiary: None,
        };
        let schedule =
            ForkSchedule::build(&base_params(vec![noop]), ConsensusFamily::Bft).unwrap();
        assert!(!schedule.is_milestone(10));
        assert_eq!(schedule.milestones().count(), 1);
    }

    #[test]
    fn test_milestone_listing() {
        let params = base_params(vec![reward_fork(10, 1), reward_fork(25, 2)]);
        let schedule = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap();

        let heights: Vec<u64> = schedule.milestones().map(|(h, _)| h).collect();
        assert_eq!(heights, vec![0, 10, 25]);
        assert!(schedule.is_milestone(0));
        assert!(schedule.is_milestone(25));
        assert!(!schedule.is_milestone(11));
        assert_eq!(schedule.to_string(), "chain 1337 forks [0, 10, 25]");
    }

    proptest! {
        #[test]
        fn test_resolve_is_floor_lookup(
            heights in proptest::collection::btree_set(1u64..10_000, 0..8),
            probe in 0u64..12_000,
        ) {
            // Each fork's reward encodes its activation height so the
            // resolved bundle identifies which fork it came from.
            let forks: Vec<BftForkParams> = heights
                .iter()
                .map(|h| reward_fork(*h, *h as i128))
                .collect();
            let schedule =
                ForkSchedule::build(&base_params(forks), ConsensusFamily::Bft).unwrap();

            let expected = heights.iter().copied().filter(|h| *h <= probe).max().unwrap_or(0);
            prop_assert_eq!(schedule.resolve(probe).block_reward(), expected as u128);
        }
    }
}
