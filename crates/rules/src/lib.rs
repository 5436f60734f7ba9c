//! Consensus rule resolution.
//!
//! Maps block heights to the consensus rules in force at that height. A
//! [`ForkSchedule`] is built once at node startup from static chain
//! parameters: the consensus family's rule-application function overlays
//! family-specific behavior (validators, reward policy, difficulty, header
//! hashing) onto a rule bundle builder, once per configured fork. After a
//! successful build the schedule and its bundles are immutable and safe to
//! read from any number of validation invocations.
//!
//! Configuration problems (zero epoch length, negative reward, malformed
//! beneficiary address) surface here, eagerly, as [`ConfigError`] — the
//! node must fail to start rather than run with an invalid schedule.

mod bundle;
mod errors;
mod family;
mod schedule;
mod validators;

#[cfg(test)]
mod tests;

pub use bundle::{RewardGrant, RuleBundle, RuleBundleBuilder};
pub use errors::ConfigError;
pub use family::ConsensusFamily;
pub use schedule::ForkSchedule;
pub use validators::StandardBodyValidator;
