use basalt_chain_types::{BlockId, HeaderValidationMode};
use basalt_primitives::Buf32;
use thiserror::Error;

/// Why a candidate block was rejected.
///
/// These are expected, recoverable, per-block outcomes — never reasons to
/// abort the host process. Messages carry enough context (hashes, roots,
/// the validation mode used) for operator logs and the bad-block cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The block's declared parent is not in the chain store.
    #[error("parent block with hash {0} not present")]
    MissingParent(BlockId),

    /// The header failed validation at the given strictness.
    #[error("header validation failed ({0:?})")]
    InvalidHeader(HeaderValidationMode),

    /// The parent's post-execution world state is unavailable.
    #[error("parent world state {0} is not available")]
    MissingParentState(Buf32),

    /// The processor failed to execute the block.
    #[error("block processing failed: {0}")]
    ProcessingFailed(#[from] ProcessingError),

    /// The execution output contradicts what the header committed to.
    #[error("failed to validate output of processed block")]
    InvalidBody,
}

impl ValidationError {
    /// Whether the block itself is at fault, as opposed to a dependency
    /// (its parent, or the parent's state) simply not having arrived yet.
    ///
    /// Non-structural rejections may become valid later; the sync layer
    /// can use this to purge them from the bad-block cache once the
    /// dependency shows up.
    pub fn is_structural(&self) -> bool {
        match self {
            ValidationError::InvalidHeader(_)
            | ValidationError::ProcessingFailed(_)
            | ValidationError::InvalidBody => true,
            ValidationError::MissingParent(_) | ValidationError::MissingParentState(_) => false,
        }
    }
}

/// Failure reported by the block processor collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("transaction execution failed: {0}")]
    Execution(String),

    #[error("{0}")]
    Other(String),
}

/// Failure writing to the chain store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("chain store: {0}")]
pub struct StoreError(pub String);

/// Why a block import failed.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
