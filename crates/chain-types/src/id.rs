use std::fmt;

use arbitrary::Arbitrary;
use basalt_primitives::{impl_buf_wrapper, Buf32};
use borsh::{BorshDeserialize, BorshSerialize};
use const_hex as hex;
use serde::{Deserialize, Serialize};

/// ID of a block, the hash of its header under the active header codec.
#[derive(
    Copy,
    Clone,
    Eq,
    Default,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct BlockId(Buf32);

impl_buf_wrapper!(BlockId, Buf32, 32);

impl BlockId {
    /// Returns a dummy blkid that is all zeroes.
    pub fn null() -> Self {
        Self::from(Buf32::zero())
    }

    /// Checks to see if this is the dummy "zero" blkid.
    pub fn is_null(&self) -> bool {
        self.0.is_zero()
    }
}

/// Commits to a specific block at some height.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct BlockCommitment {
    height: u64,
    blkid: BlockId,
}

impl BlockCommitment {
    pub fn new(height: u64, blkid: BlockId) -> Self {
        Self { height, blkid }
    }

    pub fn null() -> Self {
        Self::new(0, BlockId::null())
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn blkid(&self) -> &BlockId {
        &self.blkid
    }

    pub fn is_null(&self) -> bool {
        self.height == 0 && self.blkid.is_null()
    }
}

impl fmt::Display for BlockCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show first 2 and last 2 bytes of the block ID.
        let hex = hex::encode(self.blkid.as_ref());
        write!(f, "{}@{}..{}", self.height, &hex[..4], &hex[60..])
    }
}

impl fmt::Debug for BlockCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockCommitment(height={}, blkid={:?})",
            self.height, self.blkid
        )
    }
}
