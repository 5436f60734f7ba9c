//! End-to-end schedule construction from JSON chain parameters.

use basalt_params::ChainParams;
use basalt_primitives::Address;

use crate::{ConfigError, ConsensusFamily, ForkSchedule};

fn beneficiary_hex() -> String {
    format!("0x{}", "aa".repeat(20))
}

fn params_json() -> String {
    format!(
        r#"{{
            "chain_id": 1337,
            "bft": {{
                "block_period_secs": 2,
                "epoch_length": 30000,
                "block_reward": 5
            }},
            "forks": [
                {{
                    "activation_height": 10,
                    "block_reward": 2,
                    "mining_beneficiary": "{}"
                }}
            ]
        }}"#,
        beneficiary_hex()
    )
}

#[test]
fn test_resolves_fork_overrides_by_height() {
    let params = ChainParams::from_json(&params_json()).expect("parse params");
    let schedule = ForkSchedule::build(&params, ConsensusFamily::Bft).expect("build schedule");

    assert_eq!(schedule.chain_id(), 1337);

    // Before the fork: genesis reward, no beneficiary override.
    let before = schedule.resolve(5);
    assert_eq!(before.block_reward(), 5);
    assert!(before.mining_beneficiary().is_none());
    assert_eq!(before.epoch_length(), 30_000);

    // After the fork: overridden reward and beneficiary, inherited epoch.
    let after = schedule.resolve(15);
    assert_eq!(after.block_reward(), 2);
    assert_eq!(after.mining_beneficiary(), Some(&Address::from([0xaa; 20])));
    assert_eq!(after.epoch_length(), 30_000);

    // Exactly at the activation height the fork is already in force.
    assert_eq!(schedule.resolve(10).block_reward(), 2);
    assert!(schedule.is_milestone(10));
}

#[test]
fn test_resolve_at_genesis_always_succeeds() {
    let params = ChainParams::from_json(&params_json()).expect("parse params");
    let schedule = ForkSchedule::build(&params, ConsensusFamily::Bft).expect("build schedule");
    assert_eq!(schedule.resolve(0).block_reward(), 5);
}

#[test]
fn test_zero_epoch_length_fails_at_build() {
    let json = r#"{
        "chain_id": 1,
        "bft": { "epoch_length": 0 }
    }"#;
    let params = ChainParams::from_json(json).expect("parse params");
    let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
    match err {
        ConfigError::InvalidFork { height, source } => {
            assert_eq!(height, 0);
            assert!(matches!(*source, ConfigError::ZeroEpochLength));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_reward_at_fork_fails_at_build() {
    let json = r#"{
        "chain_id": 1,
        "bft": {},
        "forks": [ { "activation_height": 7, "block_reward": -5 } ]
    }"#;
    let params = ChainParams::from_json(json).expect("parse params");
    let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
    match err {
        ConfigError::InvalidFork { height, source } => {
            assert_eq!(height, 7);
            assert!(matches!(*source, ConfigError::NegativeBlockReward));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_beneficiary_fails_at_build() {
    // The bad address never reaches block processing; the build rejects it.
    let json = r#"{
        "chain_id": 1,
        "bft": {},
        "forks": [ { "activation_height": 3, "mining_beneficiary": "0x123" } ]
    }"#;
    let params = ChainParams::from_json(json).expect("parse params");
    let err = ForkSchedule::build(&params, ConsensusFamily::Bft).unwrap_err();
    match err {
        ConfigError::InvalidFork { height, source } => {
            assert_eq!(height, 3);
            assert!(matches!(*source, ConfigError::InvalidBeneficiary(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}
