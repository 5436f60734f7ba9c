//! BFT consensus-family mechanics.
//!
//! BFT chains carry structured data in the header's extra-data field: the
//! validator set for the epoch, the proposal round, and the committed seals
//! gathered for the block. This crate owns the codec for that structure,
//! the canonical header hashing that must exclude the parts that accrete
//! after proposal, the block-period-aware header validation ruleset, and
//! the constant difficulty these chains use. The round/view-change
//! messaging protocol itself lives elsewhere.

mod difficulty;
mod epoch;
mod extra_data;
mod hashing;
mod validation;

pub use difficulty::ConstantDifficulty;
pub use epoch::EpochManager;
pub use extra_data::{BftExtraData, ExtraDataError};
pub use hashing::BftHeaderCodec;
pub use validation::BftHeaderValidator;
