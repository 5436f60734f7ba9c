//! Collaborator traits the pipeline is driven against.

use basalt_chain_types::{
    Block, BlockExecutionOutput, BlockHeader, BlockId, Receipt, WorldState,
};
use basalt_primitives::Buf32;
use basalt_rules::RewardGrant;

use crate::errors::{ProcessingError, StoreError};

/// Read access to stored chain data.
pub trait ChainStore: Send + Sync {
    /// Fetches a block header by its canonical hash.
    fn get_header(&self, blkid: &BlockId) -> Option<BlockHeader>;
}

/// A chain store that accepts imported blocks.
pub trait MutableChainStore: ChainStore {
    /// Appends a fully-validated block and its receipts to the chain.
    fn append_block(
        &self,
        blkid: BlockId,
        block: Block,
        receipts: Vec<Receipt>,
    ) -> Result<(), StoreError>;
}

/// Access to historical world states.
pub trait StateArchive: Send + Sync {
    /// Returns an exclusively-owned mutable copy of the world state as of
    /// the given header's post-execution root, if available.
    fn get_mutable(&self, header: &BlockHeader) -> Option<Box<dyn WorldState>>;

    /// Returns a mutable copy addressed by an explicit state root and
    /// block hash pair.
    fn get_mutable_at(&self, state_root: &Buf32, blkid: &BlockId) -> Option<Box<dyn WorldState>>;

    /// Returns a fresh default state, for constrained contexts such as
    /// genesis construction.
    fn get_fresh(&self) -> Box<dyn WorldState>;
}

/// Executes a block's transactions against a working state.
///
/// Execution semantics live behind this seam. Implementations must leave
/// the working state committed, so its root reflects the execution, and
/// return the receipts plus the computed root. `reward` is the resolved
/// issuance for this block; `None` means issuance is skipped entirely.
pub trait BlockProcessor: Send + Sync {
    fn process_block(
        &self,
        store: &dyn ChainStore,
        state: &mut dyn WorldState,
        block: &Block,
        reward: Option<RewardGrant>,
    ) -> Result<BlockExecutionOutput, ProcessingError>;
}
