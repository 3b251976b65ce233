use crate::chain_type::ChainType;
use crate::consensus::ConsensusParams;
use crate::constants::{COIN, MAINNET_DEFAULT_PORT, SEED_HOST};
use crate::deployments::{Deployments, StartTime};
use crate::error::ParamsError;
use crate::genesis::{create_default_genesis_block, GenesisFields, GenesisIdentity};
use crate::message_start::MessageStart;
use crate::params::{Base58Prefixes, ChainParams, ChainTxData};
use crate::uint256::{BlockHash, Uint256};

use super::{
    deployment, seal, FIXED_SEEDS_MAIN, POW_TARGET_SPACING, POW_TARGET_TIMESPAN,
    SUBSIDY_HALVING_INTERVAL,
};

const MESSAGE_START: MessageStart = MessageStart::new([0xf0, 0xd9, 0xb7, 0xd2]);

const POW_LIMIT: Uint256 =
    Uint256::from_hex_literal("7fffff0000000000000000000000000000000000000000000000000000000000");

/// Taproot signaling opens at the genesis timestamp.
const TAPROOT_START: i64 = 1_719_792_000;

const GENESIS: GenesisFields = GenesisFields {
    time: 1_719_792_000,
    nonce: 2,
    bits: 0x207fffff,
    version: 1,
    reward: 2_000_000_000 * COIN,
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
            deployment(28, StartTime::NeverActive, 1815, 2016),
            deployment(2, StartTime::At(TAPROOT_START), 1815, 2016),
        ),
        pow_limit: POW_LIMIT,
        pow_allow_min_difficulty_blocks: false,
        enforce_bip94: false,
        pow_no_retargeting: false,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        minimum_chain_work: Uint256::ZERO,
        default_assume_valid: BlockHash::ZERO,
        signet_blocks: false,
        signet_challenge: Vec::new(),
    };

    let params = ChainParams {
        chain_type: ChainType::Main,
        consensus,
        genesis: create_default_genesis_block(GENESIS),
        genesis_identity: GenesisIdentity::Provisional,
        message_start: MESSAGE_START,
        default_port: MAINNET_DEFAULT_PORT,
        prune_after_height: 100_000,
        assumed_blockchain_size: 10,
        assumed_chain_state_size: 1,
        seeds: vec![SEED_HOST.to_string()],
        fixed_seeds: FIXED_SEEDS_MAIN.to_vec(),
        base58_prefixes: Base58Prefixes::MAINNET,
        bech32_hrp: "vto",
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
