//! The block validation pipeline.

use std::sync::Arc;

use basalt_chain_types::{Block, BlockExecutionOutput, HeaderValidationMode};
use basalt_rules::{ForkSchedule, RuleBundle};
use tracing::{debug, warn};

use crate::{
    bad_block::BadBlockCache,
    errors::{ValidationError, ValidationResult},
    traits::{BlockProcessor, ChainStore, StateArchive},
};

/// Per-call override for bad-block recording.
///
/// The validator carries a default toggle set at construction; a call can
/// force recording on or off regardless of that default.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BadBlockRecording {
    /// Use the validator's default.
    #[default]
    Default,

    /// Record on failure even if the validator default is off.
    Record,

    /// Do not record, even if the validator default is on.
    Suppress,
}

/// Validates candidate blocks against the rules in force at their height.
///
/// Runs the strictly-ordered pipeline: parent lookup, header validation,
/// world-state lookup, processing, post-execution body validation. The
/// first failing stage aborts the run; no stage is retried. On failure the
/// block is recorded into the bad-block cache (subject to the recording
/// policy) and nothing else is mutated.
///
/// Safe to invoke concurrently for distinct candidates — every invocation
/// gets its own working state. Concurrent validation of the *same* hash is
/// not deduplicated here; it is redundant work but not a hazard.
#[expect(
    missing_debug_implementations,
    reason = "collaborators don't have Debug impls"
)]
pub struct BlockValidator<C, A, P> {
    schedule: Arc<ForkSchedule>,
    store: Arc<C>,
    archive: Arc<A>,
    processor: Arc<P>,
    bad_blocks: Arc<BadBlockCache>,
    record_bad_blocks: bool,
}

impl<C: ChainStore, A: StateArchive, P: BlockProcessor> BlockValidator<C, A, P> {
    pub fn new(
        schedule: Arc<ForkSchedule>,
        store: Arc<C>,
        archive: Arc<A>,
        processor: Arc<P>,
        bad_blocks: Arc<BadBlockCache>,
    ) -> Self {
        Self {
            schedule,
            store,
            archive,
            processor,
            bad_blocks,
            record_bad_blocks: true,
        }
    }

    /// Sets the default bad-block recording toggle.
    pub fn with_recording_default(mut self, record: bool) -> Self {
        self.record_bad_blocks = record;
        self
    }

    pub fn schedule(&self) -> &ForkSchedule {
        &self.schedule
    }

    pub fn bad_blocks(&self) -> &BadBlockCache {
        &self.bad_blocks
    }

    /// Validates and executes a candidate block with default recording.
    ///
    /// `header_mode` is applied to the block's own header; `body_mode`
    /// selects the strictness of the post-execution body checks. On
    /// success returns the processing output (receipts, computed state
    /// root).
    pub fn validate_and_process(
        &self,
        block: &Block,
        header_mode: HeaderValidationMode,
        body_mode: HeaderValidationMode,
    ) -> ValidationResult<BlockExecutionOutput> {
        self.validate_and_process_with(block, header_mode, body_mode, BadBlockRecording::Default)
    }

    /// Validates and executes a candidate block with an explicit recording
    /// policy.
    pub fn validate_and_process_with(
        &self,
        block: &Block,
        header_mode: HeaderValidationMode,
        body_mode: HeaderValidationMode,
        recording: BadBlockRecording,
    ) -> ValidationResult<BlockExecutionOutput> {
        let bundle = self.schedule.resolve(block.header().height());

        match self.run_stages(bundle, block, header_mode, body_mode) {
            Ok(output) => Ok(output),
            Err(err) => {
                let blkid = bundle.header_codec().block_hash(block.header());
                warn!(%blkid, height = block.header().height(), %err, "block failed validation");

                if self.should_record(recording) {
                    self.bad_blocks.record(blkid, block.clone(), err.clone());
                    debug!(%blkid, "recorded bad block");
                }

                Err(err)
            }
        }
    }

    fn should_record(&self, recording: BadBlockRecording) -> bool {
        match recording {
            BadBlockRecording::Default => self.record_bad_blocks,
            BadBlockRecording::Record => true,
            BadBlockRecording::Suppress => false,
        }
    }

    fn run_stages(
        &self,
        bundle: &RuleBundle,
        block: &Block,
        header_mode: HeaderValidationMode,
        body_mode: HeaderValidationMode,
    ) -> ValidationResult<BlockExecutionOutput> {
        let header = block.header();

        // Stage 1: the declared parent must be known.
        let parent = self
            .store
            .get_header(header.parent_blkid())
            .ok_or(ValidationError::MissingParent(*header.parent_blkid()))?;

        // Stage 2: header rules at the requested strictness.
        if !bundle
            .header_validator()
            .validate_header(header, &parent, header_mode)
        {
            return Err(ValidationError::InvalidHeader(header_mode));
        }

        // Stage 3: an exclusively-owned copy of the parent's post-state.
        let mut state = self
            .archive
            .get_mutable(&parent)
            .ok_or(ValidationError::MissingParentState(*parent.state_root()))?;

        // Stage 4: execute against the working state.
        let reward = bundle.reward_grant(header);
        let output = self
            .processor
            .process_block(&*self.store, &mut *state, block, reward)?;

        // Stage 5: the output must match what the header committed to.
        if !bundle
            .body_validator()
            .validate_body(block, &output, &*state, body_mode)
        {
            return Err(ValidationError::InvalidBody);
        }

        Ok(output)
    }
}
