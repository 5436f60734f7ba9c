//! Block import: validate, then append.

use std::sync::Arc;

use basalt_chain_types::{Block, BlockExecutionOutput, HeaderValidationMode};
use tracing::debug;

use crate::{
    errors::ImportError,
    traits::{BlockProcessor, MutableChainStore, StateArchive},
    validator::BlockValidator,
};

/// Imports candidate blocks: runs the validation pipeline and, only on
/// success, appends the block and its receipts to the chain store.
///
/// A failed validation leaves the chain store untouched; the only write on
/// that path is the bad-block record made by the validator.
#[expect(
    missing_debug_implementations,
    reason = "collaborators don't have Debug impls"
)]
pub struct BlockImporter<C, A, P> {
    validator: BlockValidator<C, A, P>,
    store: Arc<C>,
}

impl<C: MutableChainStore, A: StateArchive, P: BlockProcessor> BlockImporter<C, A, P> {
    pub fn new(validator: BlockValidator<C, A, P>, store: Arc<C>) -> Self {
        Self { validator, store }
    }

    pub fn validator(&self) -> &BlockValidator<C, A, P> {
        &self.validator
    }

    /// Validates and imports a candidate block.
    pub fn import_block(
        &self,
        block: &Block,
        header_mode: HeaderValidationMode,
        body_mode: HeaderValidationMode,
    ) -> Result<BlockExecutionOutput, ImportError> {
        let output = self
            .validator
            .validate_and_process(block, header_mode, body_mode)?;

        let header = block.header();
        let bundle = self.validator.schedule().resolve(header.height());
        let blkid = bundle.header_codec().block_hash(header);

        self.store
            .append_block(blkid, block.clone(), output.receipts().to_vec())?;
        debug!(%blkid, height = header.height(), "imported block");

        Ok(output)
    }
}
