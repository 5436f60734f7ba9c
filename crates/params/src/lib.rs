//! Chain configuration parameters.
//!
//! Provides JSON-serializable configuration for the consensus core: the
//! chain identifier, the genesis BFT knobs, and the ordered list of fork
//! overrides. Values here are plain data — semantic validation (epoch
//! length, reward sign, beneficiary address syntax) happens once, when the
//! fork schedule is built from these params.

use serde::{Deserialize, Serialize};

fn default_block_period() -> u64 {
    1
}

fn default_epoch_length() -> u64 {
    30_000
}

/// Top-level chain parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainParams {
    /// Chain identifier.
    pub chain_id: u64,

    /// Genesis BFT configuration, in force from height 0.
    pub bft: BftParams,

    /// Fork overrides, ordered by activation height. Defaults to none.
    #[serde(default)]
    pub forks: Vec<BftForkParams>,
}

impl ChainParams {
    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// BFT consensus knobs.
///
/// The reward is a signed integer in the smallest denomination so that a
/// misconfigured negative value survives parsing and is rejected with a
/// proper error at schedule build time. The beneficiary stays a string
/// here for the same reason.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BftParams {
    /// Target seconds between blocks. Defaults to 1.
    #[serde(default = "default_block_period")]
    pub block_period_secs: u64,

    /// Blocks between validator-set rotations. Defaults to 30000.
    #[serde(default = "default_epoch_length")]
    pub epoch_length: u64,

    /// Fixed block reward in smallest-denomination units, if any.
    #[serde(default)]
    pub block_reward: Option<i128>,

    /// Hex address credited with block rewards, overriding the header's
    /// declared beneficiary.
    #[serde(default)]
    pub mining_beneficiary: Option<String>,
}

impl BftParams {
    /// Returns the effective config after applying a fork's overrides.
    ///
    /// Knobs the fork leaves unset are inherited from `self`.
    pub fn with_fork(&self, fork: &BftForkParams) -> BftParams {
        BftParams {
            block_period_secs: fork.block_period_secs.unwrap_or(self.block_period_secs),
            epoch_length: fork.epoch_length.unwrap_or(self.epoch_length),
            block_reward: fork.block_reward.or(self.block_reward),
            mining_beneficiary: fork
                .mining_beneficiary
                .clone()
                .or_else(|| self.mining_beneficiary.clone()),
        }
    }
}

/// Per-fork overrides of the BFT knobs, activating at a block height.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BftForkParams {
    /// Height at which this fork activates.
    pub activation_height: u64,

    /// Overrides the target seconds between blocks.
    #[serde(default)]
    pub block_period_secs: Option<u64>,

    /// Overrides the validator-set rotation interval.
    #[serde(default)]
    pub epoch_length: Option<u64>,

    /// Overrides the fixed block reward.
    #[serde(default)]
    pub block_reward: Option<i128>,

    /// Overrides the reward beneficiary.
    #[serde(default)]
    pub mining_beneficiary: Option<String>,
}

impl BftForkParams {
    /// Whether this fork changes anything beyond its activation height.
    pub fn has_overrides(&self) -> bool {
        self.block_period_secs.is_some()
            || self.epoch_length.is_some()
            || self.block_reward.is_some()
            || self.mining_beneficiary.is_some()
    }
}
