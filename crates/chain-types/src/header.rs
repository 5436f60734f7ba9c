use arbitrary::Arbitrary;
use basalt_primitives::{hash, Address, Buf32};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::id::BlockId;

/// A block header.
///
/// The `extra_data` field is opaque at this level; consensus families that
/// carry structured data there (validator sets, round seals) interpret it
/// through their own codec.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct BlockHeader {
    parent_blkid: BlockId,
    height: u64,
    timestamp: u64,
    beneficiary: Address,
    state_root: Buf32,
    txs_root: Buf32,
    receipts_root: Buf32,
    ommers_root: Buf32,
    difficulty: u128,
    extra_data: Vec<u8>,
}

impl BlockHeader {
    #[expect(clippy::too_many_arguments, reason = "headers carry this many fields")]
    pub fn new(
        parent_blkid: BlockId,
        height: u64,
        timestamp: u64,
        beneficiary: Address,
        state_root: Buf32,
        txs_root: Buf32,
        receipts_root: Buf32,
        ommers_root: Buf32,
        difficulty: u128,
        extra_data: Vec<u8>,
    ) -> Self {
        Self {
            parent_blkid,
            height,
            timestamp,
            beneficiary,
            state_root,
            txs_root,
            receipts_root,
            ommers_root,
            difficulty,
            extra_data,
        }
    }

    pub fn parent_blkid(&self) -> &BlockId {
        &self.parent_blkid
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn beneficiary(&self) -> &Address {
        &self.beneficiary
    }

    pub fn state_root(&self) -> &Buf32 {
        &self.state_root
    }

    pub fn txs_root(&self) -> &Buf32 {
        &self.txs_root
    }

    pub fn receipts_root(&self) -> &Buf32 {
        &self.receipts_root
    }

    pub fn ommers_root(&self) -> &Buf32 {
        &self.ommers_root
    }

    pub fn difficulty(&self) -> u128 {
        self.difficulty
    }

    pub fn extra_data(&self) -> &[u8] {
        &self.extra_data
    }

    /// Returns a copy of this header with the extra data replaced.
    ///
    /// Used by header codecs that hash a filtered form of the extra data.
    pub fn clone_with_extra_data(&self, extra_data: Vec<u8>) -> Self {
        let mut hdr = self.clone();
        hdr.extra_data = extra_data;
        hdr
    }

    /// Computes the block ID as the hash of the full header encoding.
    ///
    /// Consensus families with structured extra data define their own
    /// canonical hash through a header codec instead.
    pub fn compute_blkid(&self) -> BlockId {
        let buf = borsh::to_vec(self).expect("chain: enc block header");
        BlockId::from(hash::raw(&buf))
    }
}
