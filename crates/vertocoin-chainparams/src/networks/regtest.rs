use crate::assumeutxo::AssumeUtxoData;
use crate::chain_type::ChainType;
use crate::consensus::ConsensusParams;
use crate::constants::{COIN, REGTEST_DEFAULT_PORT};
use crate::deployments::{Deployments, StartTime};
use crate::error::ParamsError;
use crate::genesis::{create_default_genesis_block, GenesisFields, GenesisIdentity};
use crate::message_start::MessageStart;
use crate::options::RegTestOptions;
use crate::params::{Base58Prefixes, ChainParams, ChainTxData};
use crate::uint256::{BlockHash, Uint256};

use super::{deployment, seal, POW_TARGET_SPACING, POW_TARGET_TIMESPAN};

const MESSAGE_START: MessageStart = MessageStart::new([0xfa, 0xbf, 0xb5, 0xdb]);

const POW_LIMIT: Uint256 =
    Uint256::from_hex_literal("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

const GENESIS: GenesisFields = GenesisFields {
    time: 1_296_688_602,
    nonce: 2,
    bits: 0x207fffff,
    version: 1,
    reward: 50 * COIN,
};

const ASSUMEUTXO: [AssumeUtxoData; 3] = [
    AssumeUtxoData::new(
        110,
        "b952555c8ab81fec46f3d4253b7af256d766ceb39fb7752b9d18cdf4a0141327",
        111,
        "6affe030b7965ab538f820a56ef56c8149b7dc1d1c144af57113be080db7c397",
    ),
    AssumeUtxoData::new(
        200,
        "17dcc016d188d16068907cdeb38b75691a118d43053b8cd6a25969419381d13a",
        201,
        "385901ccbd69dff6bbd00065d01fb8a9e464dede7cfe0372443884f9b1dcf6b9",
    ),
    AssumeUtxoData::new(
        299,
        "d2b051ff5e8eef46520350776f4100dd710a63447a8e01d917e92e79751a63e2",
        334,
        "7cc695046fec709f8c9394b6f928f81e81fd3ac20977bb68760fa1faa7916ea2",
    ),
];

pub(crate) fn build(options: &RegTestOptions) -> Result<ChainParams, ParamsError> {
    let mut consensus = ConsensusParams {
        hash_genesis_block: BlockHash::ZERO,
        subsidy_halving_interval: 150,
        bip34_hash: BlockHash::ZERO,
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 0,
        segwit_height: 0,
        min_bip9_warning_height: 0,
        deployments: Deployments::new(
            deployment(28, StartTime::At(0), 108, 144),
            deployment(2, StartTime::AlwaysActive, 108, 144),
        ),
        pow_limit: POW_LIMIT,
        pow_allow_min_difficulty_blocks: true,
        enforce_bip94: options.enforce_bip94,
        pow_no_retargeting: true,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        minimum_chain_work: Uint256::ZERO,
        default_assume_valid: BlockHash::ZERO,
        signet_blocks: false,
        signet_challenge: Vec::new(),
    };

    for (&dep, &height) in &options.activation_heights {
        consensus.set_deployment_height(dep, height);
    }
    for (&pos, vb) in &options.version_bits_parameters {
        let d = consensus.deployments.get_mut(pos);
        d.start = vb.start;
        d.timeout = vb.timeout;
        d.min_activation_height = vb.min_activation_height;
    }

    let params = ChainParams {
        chain_type: ChainType::Regtest,
        consensus,
        genesis: create_default_genesis_block(GENESIS),
        genesis_identity: GenesisIdentity::Provisional,
        message_start: MESSAGE_START,
        default_port: REGTEST_DEFAULT_PORT,
        prune_after_height: if options.fastprune { 100 } else { 1000 },
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        seeds: vec!["dummySeed.invalid.".to_string()],
        fixed_seeds: Vec::new(),
        base58_prefixes: Base58Prefixes::TESTNET,
        bech32_hrp: "rvto",
        default_consistency_checks: true,
        is_mockable_chain: true,
        assumeutxo_data: ASSUMEUTXO.to_vec(),
        chain_tx_data: ChainTxData {
            time: 0,
            tx_count: 0,
            tx_rate: 0.001,
        },
    };

    seal(params, None)
}
