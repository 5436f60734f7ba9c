//! Difficulty policy for BFT chains.

use basalt_chain_types::{BlockHeader, DifficultyCalculator};

/// A difficulty calculator that always returns the same value.
///
/// BFT chains carry no proof-of-work; their difficulty is fixed at 1.
#[derive(Copy, Clone, Debug)]
pub struct ConstantDifficulty(u128);

impl ConstantDifficulty {
    /// The BFT constant.
    pub const ONE: ConstantDifficulty = ConstantDifficulty(1);

    pub fn new(difficulty: u128) -> Self {
        Self(difficulty)
    }
}

impl DifficultyCalculator for ConstantDifficulty {
    fn next_difficulty(&self, _timestamp: u64, _parent: &BlockHeader) -> u128 {
        self.0
    }
}
