//! Family-agnostic validators.

use std::sync::Arc;

use basalt_chain_types::{
    compute_ommers_root, compute_receipts_root, compute_txs_root, Block, BlockExecutionOutput,
    BodyValidator, HeaderValidationMode, HeaderValidator, WorldState,
};
use tracing::warn;

/// The standard body validator: checks the roots committed in the header
/// against the body and the execution output, then validates ommer headers
/// with the bundle's ommer ruleset.
///
/// Ommers have no ancestors available at this point, so they are checked
/// detached regardless of how strict the requested mode is.
#[expect(
    missing_debug_implementations,
    reason = "the ommer validator doesn't have a Debug impl"
)]
pub struct StandardBodyValidator {
    ommer_validator: Arc<dyn HeaderValidator>,
}

impl StandardBodyValidator {
    pub fn new(ommer_validator: Arc<dyn HeaderValidator>) -> Self {
        Self { ommer_validator }
    }
}

impl BodyValidator for StandardBodyValidator {
    fn validate_body(
        &self,
        block: &Block,
        output: &BlockExecutionOutput,
        state: &dyn WorldState,
        mode: HeaderValidationMode,
    ) -> bool {
        let header = block.header();
        let body = block.body();

        let txs_root = compute_txs_root(body.transactions());
        if txs_root != *header.txs_root() {
            warn!(height = header.height(), "transactions root mismatch");
            return false;
        }

        let receipts_root = compute_receipts_root(output.receipts());
        if receipts_root != *header.receipts_root() {
            warn!(height = header.height(), "receipts root mismatch");
            return false;
        }

        if *output.computed_state_root() != *header.state_root() {
            warn!(
                height = header.height(),
                computed = %output.computed_state_root(),
                declared = %header.state_root(),
                "computed state root mismatch with block state root"
            );
            return false;
        }

        if state.state_root() != *header.state_root() {
            warn!(height = header.height(), "working state root mismatch");
            return false;
        }

        let ommers_root = compute_ommers_root(body.ommers());
        if ommers_root != *header.ommers_root() {
            warn!(height = header.height(), "ommers root mismatch");
            return false;
        }

        let ommer_mode = mode.min(HeaderValidationMode::DetachedOnly);
        body.ommers()
            .iter()
            .all(|ommer| self.ommer_validator.validate_header_detached(ommer, ommer_mode))
    }
}
