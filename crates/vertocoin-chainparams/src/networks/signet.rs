use tracing::info;

use crate::assumeutxo::AssumeUtxoData;
use crate::chain_type::ChainType;
use crate::consensus::ConsensusParams;
use crate::constants::{COIN, DEFAULT_SIGNET_CHALLENGE, SEED_HOST, SIGNET_DEFAULT_PORT};
use crate::deployments::{Deployments, StartTime};
use crate::error::ParamsError;
use crate::genesis::{create_default_genesis_block, GenesisFields, GenesisIdentity};
use crate::message_start::MessageStart;
use crate::options::SigNetOptions;
use crate::params::{Base58Prefixes, ChainParams, ChainTxData};
use crate::uint256::{BlockHash, Uint256};

use super::{
    deployment, seal, FIXED_SEEDS_SIGNET, POW_TARGET_SPACING, POW_TARGET_TIMESPAN,
    SUBSIDY_HALVING_INTERVAL,
};

const POW_LIMIT: Uint256 =
    Uint256::from_hex_literal("00000377ae000000000000000000000000000000000000000000000000000000");

const GENESIS: GenesisFields = GenesisFields {
    time: 1_598_918_400,
    nonce: 52_613_770,
    bits: 0x1e0377ae,
    version: 1,
    reward: 50 * COIN,
};

const ASSUMEUTXO: [AssumeUtxoData; 1] = [AssumeUtxoData::new(
    160_000,
    "fe0a44309b74d6b5883d246cb419c6221bcccf0b308c9b59b7d70783dbdf928a",
    2_289_496,
    "0000003ca3c99aff040f2563c2ad8f8ec88bd0fd6b8f0895cfaf1ef90353a62c",
)];

pub(crate) fn build(options: &SigNetOptions) -> Result<ChainParams, ParamsError> {
    let (challenge, mut seeds, fixed_seeds, sizes, chain_tx_data) = match &options.challenge {
        None => (
            DEFAULT_SIGNET_CHALLENGE.to_vec(),
            vec![SEED_HOST.to_string()],
            FIXED_SEEDS_SIGNET.to_vec(),
            (9, 1),
            ChainTxData {
                time: 1_719_792_000,
                tx_count: 1,
                tx_rate: 0.0,
            },
        ),
        Some(custom) => {
            info!(challenge = %hex::encode(custom), "signet with custom challenge");
            (
                custom.clone(),
                Vec::new(),
                Vec::new(),
                (0, 0),
                ChainTxData::default(),
            )
        }
    };
    if let Some(s) = &options.seeds {
        seeds = s.clone();
    }

    let message_start = MessageStart::from_signet_challenge(&challenge);

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
            deployment(2, StartTime::AlwaysActive, 1815, 2016),
        ),
        pow_limit: POW_LIMIT,
        pow_allow_min_difficulty_blocks: false,
        enforce_bip94: false,
        pow_no_retargeting: false,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        minimum_chain_work: Uint256::ZERO,
        default_assume_valid: BlockHash::ZERO,
        signet_blocks: true,
        signet_challenge: challenge,
    };

    let params = ChainParams {
        chain_type: ChainType::Signet,
        consensus,
        genesis: create_default_genesis_block(GENESIS),
        genesis_identity: GenesisIdentity::Provisional,
        message_start,
        default_port: SIGNET_DEFAULT_PORT,
        prune_after_height: 1000,
        assumed_blockchain_size: sizes.0,
        assumed_chain_state_size: sizes.1,
        seeds,
        fixed_seeds,
        base58_prefixes: Base58Prefixes::TESTNET,
        bech32_hrp: "tb",
        default_consistency_checks: false,
        is_mockable_chain: false,
        // The catalog does not depend on the challenge.
        assumeutxo_data: ASSUMEUTXO.to_vec(),
        chain_tx_data,
    };

    seal(params, None)
}
