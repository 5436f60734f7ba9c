//! Strategy seams that rule bundles are assembled from.

use basalt_primitives::{Address, Buf32};

use crate::{
    block::Block, header::BlockHeader, id::BlockId, modes::HeaderValidationMode,
    output::BlockExecutionOutput,
};

/// Validates a header against its parent and chain context.
///
/// Implementations log the reason for a rejection; the boolean result is
/// what drives the validation pipeline.
pub trait HeaderValidator: Send + Sync {
    /// Validates a header against its parent at the given strictness.
    fn validate_header(
        &self,
        header: &BlockHeader,
        parent: &BlockHeader,
        mode: HeaderValidationMode,
    ) -> bool;

    /// Validates only the parent-independent rules of a header.
    ///
    /// Used for ommer headers, whose ancestors are not available.
    fn validate_header_detached(&self, header: &BlockHeader, mode: HeaderValidationMode) -> bool;
}

/// Validates a block body against the header and the execution output.
pub trait BodyValidator: Send + Sync {
    /// Checks the roots committed in the header against the body and the
    /// just-computed execution output, and validates ommers at the given
    /// strictness.
    fn validate_body(
        &self,
        block: &Block,
        output: &BlockExecutionOutput,
        state: &dyn WorldState,
        mode: HeaderValidationMode,
    ) -> bool;
}

/// Canonical serialization and hashing of headers.
///
/// Consensus families that carry structured extra data define the canonical
/// block hash over a filtered encoding.
pub trait HeaderCodec: Send + Sync {
    /// Produces the canonical encoding of a header for hashing.
    fn encode(&self, header: &BlockHeader) -> Vec<u8>;

    /// Computes the canonical block hash of a header.
    fn block_hash(&self, header: &BlockHeader) -> BlockId;
}

/// Computes the expected difficulty of a block from its parent.
pub trait DifficultyCalculator: Send + Sync {
    fn next_difficulty(&self, timestamp: u64, parent: &BlockHeader) -> u128;
}

/// An exclusively-owned, mutable working copy of the world state.
///
/// Obtained from the state archive for a single validation invocation and
/// never shared across invocations. Mutations are only reflected in
/// [`WorldState::state_root`] after a [`WorldState::commit`].
pub trait WorldState: Send {
    /// Returns the root as of the last commit.
    fn state_root(&self) -> Buf32;

    /// Credits an account balance.
    fn credit(&mut self, beneficiary: &Address, amount: u128);

    /// Recomputes and returns the state root after mutations.
    fn commit(&mut self) -> Buf32;
}
