use crate::chain_type::ChainType;
use crate::consensus::ConsensusParams;
use crate::constants::{COIN, SEED_HOST, TESTNET4_DEFAULT_PORT, TESTNET4_GENESIS_COMMITMENT};
use crate::deployments::{Deployments, StartTime};
use crate::error::ParamsError;
use crate::genesis::{
    create_genesis_block, default_genesis_output_script, GenesisFields, GenesisIdentity,
};
use crate::message_start::MessageStart;
use crate::params::{Base58Prefixes, ChainParams, ChainTxData};
use crate::uint256::{BlockHash, Uint256};

use super::{
    deployment, seal, testnet, FIXED_SEEDS_TESTNET4, POW_TARGET_SPACING, POW_TARGET_TIMESPAN,
    SUBSIDY_HALVING_INTERVAL,
};

const MESSAGE_START: MessageStart = MessageStart::new([0xf0, 0xd9, 0xb7, 0xd4]);

const GENESIS: GenesisFields = GenesisFields {
    time: 1_719_792_000,
    nonce: 2_083_236_895,
    bits: 0x207fffff,
    version: 1,
    reward: 50 * COIN,
};

pub(crate) fn build() -> Result<ChainParams, ParamsError> {
    let consensus = ConsensusParams {
        hash_genesis_block: BlockHash::ZERO,
        subsidy_halving_interval: SUBSIDY_HALVING_INTERVAL,
        bip34_hash: BlockHash::ZERO,
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 0,
        segwit_height: 0,
        min_bip9_warning_height: 0,
        deployments: Deployments::new(
            deployment(28, StartTime::NeverActive, 1512, 2016),
            deployment(2, StartTime::AlwaysActive, 1512, 2016),
        ),
        pow_limit: testnet::POW_LIMIT,
        pow_allow_min_difficulty_blocks: true,
        enforce_bip94: false,
        pow_no_retargeting: false,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        minimum_chain_work: Uint256::ZERO,
        default_assume_valid: BlockHash::ZERO,
        signet_blocks: false,
        signet_challenge: Vec::new(),
    };

    let genesis = create_genesis_block(
        TESTNET4_GENESIS_COMMITMENT.as_bytes(),
        &default_genesis_output_script(),
        GENESIS,
    );

    let params = ChainParams {
        chain_type: ChainType::Testnet4,
        consensus,
        genesis,
        genesis_identity: GenesisIdentity::Provisional,
        message_start: MESSAGE_START,
        default_port: TESTNET4_DEFAULT_PORT,
        prune_after_height: 1000,
        assumed_blockchain_size: 10,
        assumed_chain_state_size: 1,
        seeds: vec![SEED_HOST.to_string()],
        fixed_seeds: FIXED_SEEDS_TESTNET4.to_vec(),
        base58_prefixes: Base58Prefixes::TESTNET,
        bech32_hrp: "tvto",
        default_consistency_checks: false,
        is_mockable_chain: false,
        assumeutxo_data: Vec::new(),
        chain_tx_data: ChainTxData {
            time: 1_719_792_000,
            tx_count: 1,
            tx_rate: 0.0,
        },
    };

    seal(params, None)
}
