//! Structured BFT extra data.

use arbitrary::Arbitrary;
use basalt_primitives::{Address, Buf64};
use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

/// Error decoding a header's extra-data field.
#[derive(Debug, Error)]
pub enum ExtraDataError {
    #[error("malformed bft extra data")]
    Malformed,
}

/// The structured contents of a BFT header's extra-data field.
///
/// The validator set names the validators for the current epoch. The round
/// records which proposal attempt produced the block. Committed seals are
/// gathered from validators after proposal, so they (and the round) are
/// excluded from the canonical block hash.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct BftExtraData {
    validators: Vec<Address>,
    round: u32,
    committed_seals: Vec<Buf64>,
}

impl BftExtraData {
    pub fn new(validators: Vec<Address>, round: u32, committed_seals: Vec<Buf64>) -> Self {
        Self {
            validators,
            round,
            committed_seals,
        }
    }

    pub fn validators(&self) -> &[Address] {
        &self.validators
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn committed_seals(&self) -> &[Buf64] {
        &self.committed_seals
    }

    /// Encodes to the canonical byte form carried in a header.
    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("bft: enc extra data")
    }

    /// Decodes from a header's extra-data bytes.
    ///
    /// Rejects truncated input and trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExtraDataError> {
        Self::try_from_slice(bytes).map_err(|_| ExtraDataError::Malformed)
    }

    /// Returns the form hashed into the canonical block ID: the round
    /// zeroed and the committed seals stripped.
    pub fn for_onchain_hashing(&self) -> Self {
        Self {
            validators: self.validators.clone(),
            round: 0,
            committed_seals: Vec::new(),
        }
    }
}
