//! Block validation and import pipeline.
//!
//! This crate owns the per-block hot path of the consensus core: given a
//! candidate block, resolve the rules in force at its height from the fork
//! schedule, then run the strictly-ordered validation pipeline — parent
//! lookup, header validation, world-state lookup, processing, and
//! post-execution body validation — aborting on the first failure. Failed
//! candidates are remembered in the bad-block cache so identical
//! resubmissions short-circuit.
//!
//! Storage, execution semantics, and chain data access are collaborator
//! traits; the pipeline does minimal state tracking of its own and is
//! driven from the outside. It is safe to run concurrently for distinct
//! candidate blocks: each invocation obtains its own exclusively-owned
//! working state.

mod bad_block;
mod context;
mod errors;
mod importer;
mod traits;
mod validator;


pub use bad_block::{BadBlockCache, BadBlockRecord};
pub use context::{MemChainStore, MemStateArchive, MemWorldState};
pub use errors::{ImportError, ProcessingError, StoreError, ValidationError, ValidationResult};
pub use importer::BlockImporter;
pub use traits::{BlockProcessor, ChainStore, MutableChainStore, StateArchive};
pub use validator::{BadBlockRecording, BlockValidator};
