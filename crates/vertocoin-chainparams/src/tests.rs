use crate::constants::{DEFAULT_SIGNET_CHALLENGE, GENESIS_COMMITMENT, TESTNET4_GENESIS_COMMITMENT};
use crate::deployments::{BuriedDeployment, DeploymentPos, StartTime, Timeout};
use crate::error::ErrorCode;
use crate::genesis::GenesisIdentity;
use crate::message_start::MessageStart;
use crate::networks;
use crate::options::{RegTestOptions, SigNetOptions, VersionBitsParameters};
use crate::params::ChainParams;
use crate::{ChainType, BLOCK_HEADER_BYTES};

const MAIN_GENESIS_BLOCK_HEX: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000",
    "00000000a690a0479035404ca802ff24c1a41a484d69de1856c02138d7fdad7c",
    "b8a67d6280f18166ffff7f200200000001010000000100000000000000000000",
    "00000000000000000000000000000000000000000000ffffffff4204ffff001d",
    "01043a566572746f636f696e202d2054686520667574757265206f6620666173",
    "74207472616e73616374696f6e73205b766572746f6d61782e636f6d5dffffff",
    "ff01000014bbf08ac602434104678afdb0fe5548271967f1a67130b7105cd6a8",
    "28e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384d",
    "f7ba0b8d578a4c702b6bf11d5fac00000000",
);

#[test]
fn main_genesis_serializes_exactly() {
    let p = ChainParams::main();
    let raw = p.genesis_block().serialize();
    assert_eq!(raw.len(), 274);
    assert_eq!(hex::encode(&raw), MAIN_GENESIS_BLOCK_HEX);
    assert_eq!(&raw[..BLOCK_HEADER_BYTES], &p.genesis_block().header.to_bytes());
}

#[test]
fn sealing_records_genesis_hash() {
    for chain in ChainType::ALL {
        let p = ChainParams::for_chain(chain);
        assert_eq!(p.consensus().hash_genesis_block, p.genesis_block().block_hash());
        assert_eq!(p.genesis_hash(), p.genesis_block().block_hash());
        assert_eq!(p.genesis_identity(), GenesisIdentity::Provisional);
        assert_eq!(p.chain_type(), chain);
    }
}

#[test]
fn construction_is_deterministic() {
    for chain in ChainType::ALL {
        let a = ChainParams::for_chain(chain);
        let b = ChainParams::for_chain(chain);
        assert_eq!(*a, *b);
    }
}

#[test]
fn genesis_commitments() {
    let commitment_of = |p: &ChainParams| {
        let script = p.genesis_block().txdata[0].inputs[0].script_sig.as_bytes().to_vec();
        // 5-byte bits push, 2-byte extra nonce push, 1-byte length
        script[8..].to_vec()
    };
    assert_eq!(commitment_of(&ChainParams::main()), GENESIS_COMMITMENT.as_bytes());
    assert_eq!(
        commitment_of(&ChainParams::testnet4()),
        TESTNET4_GENESIS_COMMITMENT.as_bytes()
    );
    assert_eq!(
        commitment_of(&ChainParams::regtest(&RegTestOptions::default())),
        GENESIS_COMMITMENT.as_bytes()
    );
}

#[test]
fn deployment_tables_are_sane_everywhere() {
    for chain in ChainType::ALL {
        let p = ChainParams::for_chain(chain);
        let deps = &p.consensus().deployments;
        assert!(deps.validate().is_ok(), "{chain}");
        assert_eq!(deps[DeploymentPos::TestDummy].bit, 28);
        assert_eq!(deps[DeploymentPos::Taproot].bit, 2);
        for (_, d) in deps.iter() {
            assert_eq!(d.timeout, Timeout::NoTimeout);
            assert_eq!(d.min_activation_height, 0);
        }
    }
}

#[test]
fn taproot_schedule_per_network() {
    let taproot = |p: &ChainParams| *p.consensus().deployments.get(DeploymentPos::Taproot);

    let main = taproot(&ChainParams::main());
    assert_eq!(main.start, StartTime::At(1_719_792_000));
    assert_eq!((main.threshold, main.period), (1815, 2016));

    let test = taproot(&ChainParams::testnet());
    assert_eq!(test.start, StartTime::At(1_719_792_000));
    assert_eq!((test.threshold, test.period), (1512, 2016));

    assert!(taproot(&ChainParams::testnet4()).is_always_active());
    assert!(taproot(&ChainParams::signet(&SigNetOptions::default())).is_always_active());

    let reg = taproot(&ChainParams::regtest(&RegTestOptions::default()));
    assert!(reg.is_always_active());
    assert_eq!((reg.threshold, reg.period), (108, 144));

    let dummy = *ChainParams::regtest(&RegTestOptions::default())
        .consensus()
        .deployments
        .get(DeploymentPos::TestDummy);
    assert_eq!(dummy.start, StartTime::At(0));
}

#[test]
fn regtest_overrides_apply_once_and_sparsely() {
    let mut opts = RegTestOptions::default();
    opts.activation_heights.insert(BuriedDeployment::Segwit, 500);
    opts.activation_heights.insert(BuriedDeployment::Cltv, 7);
    opts.version_bits_parameters.insert(
        DeploymentPos::TestDummy,
        VersionBitsParameters {
            start: StartTime::NeverActive,
            timeout: Timeout::At(10),
            min_activation_height: 288,
        },
    );
    opts.enforce_bip94 = true;
    opts.fastprune = true;

    let p = ChainParams::regtest(&opts);
    let c = p.consensus();
    assert_eq!(c.segwit_height, 500);
    assert_eq!(c.bip65_height, 7);
    assert_eq!(c.deployment_height(BuriedDeployment::Csv), 0);
    assert_eq!(c.deployment_height(BuriedDeployment::HeightInCb), 0);

    let dummy = c.deployments[DeploymentPos::TestDummy];
    assert_eq!(dummy.start, StartTime::NeverActive);
    assert_eq!(dummy.timeout, Timeout::At(10));
    assert_eq!(dummy.min_activation_height, 288);
    assert_eq!((dummy.bit, dummy.threshold, dummy.period), (28, 108, 144));
    assert!(c.deployments[DeploymentPos::Taproot].is_always_active());

    assert!(c.enforce_bip94);
    assert_eq!(p.prune_after_height(), 100);
    assert_eq!(
        ChainParams::regtest(&RegTestOptions::default()).prune_after_height(),
        1000
    );
}

#[test]
fn regtest_options_do_not_change_identity() {
    let mut opts = RegTestOptions::default();
    opts.activation_heights.insert(BuriedDeployment::DerSig, 1);
    let a = ChainParams::regtest(&opts);
    let b = ChainParams::regtest(&RegTestOptions::default());
    assert_eq!(a.message_start(), b.message_start());
    assert_eq!(a.genesis_hash(), b.genesis_hash());
}

#[test]
fn signet_default_profile() {
    let p = ChainParams::signet(&SigNetOptions::default());
    let c = p.consensus();
    assert!(c.signet_blocks);
    assert_eq!(c.signet_challenge, DEFAULT_SIGNET_CHALLENGE.to_vec());
    assert_eq!(
        p.message_start(),
        MessageStart::from_signet_challenge(&DEFAULT_SIGNET_CHALLENGE)
    );
    assert_eq!(p.message_start().to_string(), "0a03cf40");
    assert_eq!(p.dns_seeds(), ["explorer.vertomax.com.".to_string()]);
    assert_eq!(
        (p.assumed_blockchain_size(), p.assumed_chain_state_size()),
        (9, 1)
    );
    assert_eq!(p.tx_data().tx_count, 1);
    assert_eq!(p.bech32_hrp(), "tb");
}

#[test]
fn signet_custom_challenge_clears_defaults() {
    let p = ChainParams::signet(&SigNetOptions {
        challenge: Some(vec![0x51]),
        seeds: None,
    });
    assert_eq!(p.message_start().to_string(), "54d26fbd");
    assert_eq!(p.consensus().signet_challenge, vec![0x51]);
    assert!(p.dns_seeds().is_empty());
    assert!(!p.has_fixed_seeds());
    assert_eq!(
        (p.assumed_blockchain_size(), p.assumed_chain_state_size()),
        (0, 0)
    );
    assert_eq!(p.tx_data().time, 0);
    assert_eq!(p.tx_data().tx_rate, 0.0);
    assert!(p.consensus().minimum_chain_work.is_zero());
    // catalog and genesis do not depend on the challenge
    assert_eq!(p.available_snapshot_heights(), vec![160_000]);
    assert_eq!(
        p.genesis_hash(),
        ChainParams::signet(&SigNetOptions::default()).genesis_hash()
    );
}

#[test]
fn signet_seeds_override_regardless_of_challenge() {
    let seeds = vec!["seed.example.".to_string()];
    let default_challenge = ChainParams::signet(&SigNetOptions {
        challenge: None,
        seeds: Some(seeds.clone()),
    });
    assert_eq!(default_challenge.dns_seeds(), seeds.as_slice());

    let custom = ChainParams::signet(&SigNetOptions {
        challenge: Some(vec![0x51, 0x52]),
        seeds: Some(seeds.clone()),
    });
    assert_eq!(custom.dns_seeds(), seeds.as_slice());

    let empty = ChainParams::signet(&SigNetOptions {
        challenge: Some(Vec::new()),
        seeds: None,
    });
    assert_eq!(empty.message_start().to_string(), "1406e058");
}

#[test]
fn seal_rejects_bad_deployment_table() {
    let mut p = networks::regtest::build(&RegTestOptions::default()).unwrap();
    p.consensus.deployments.get_mut(DeploymentPos::Taproot).threshold = 145;
    let err = networks::seal(p, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParamsErrDeploymentThreshold);
}

#[test]
fn seal_rejects_wrong_pinned_genesis() {
    let p = networks::mainnet::build().unwrap();
    let real = p.genesis_hash();
    assert_eq!(
        networks::seal(p.clone(), Some(real)).unwrap().genesis_identity(),
        GenesisIdentity::Verified
    );
    let err = networks::seal(p, Some(crate::BlockHash::ZERO)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParamsErrGenesisMismatch);
}
