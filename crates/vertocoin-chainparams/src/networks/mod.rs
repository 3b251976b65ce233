//! One builder per network. Each returns a sealed [`ChainParams`]: the
//! deployment table validated and the genesis hash recorded.

pub(crate) mod mainnet;
pub(crate) mod regtest;
pub(crate) mod signet;
pub(crate) mod testnet;
pub(crate) mod testnet4;

use tracing::debug;

use crate::deployments::{Bip9Deployment, StartTime, Timeout};
use crate::error::ParamsError;
use crate::genesis::check_genesis;
use crate::params::ChainParams;
use crate::uint256::BlockHash;

/// Retarget window shared by every network: 30 minutes of 30-second blocks.
pub(crate) const POW_TARGET_TIMESPAN: i64 = 30 * 60;
pub(crate) const POW_TARGET_SPACING: i64 = 30;

/// Halving interval of every public network, about four years of blocks.
pub(crate) const SUBSIDY_HALVING_INTERVAL: u32 = 4_204_800;

/// Compiled peer address lists. No network ships any yet.
pub(crate) const FIXED_SEEDS_MAIN: &[u8] = &[];
pub(crate) const FIXED_SEEDS_TEST: &[u8] = &[];
pub(crate) const FIXED_SEEDS_TESTNET4: &[u8] = &[];
pub(crate) const FIXED_SEEDS_SIGNET: &[u8] = &[];

pub(crate) fn deployment(bit: u8, start: StartTime, threshold: u32, period: u32) -> Bip9Deployment {
    Bip9Deployment {
        bit,
        start,
        timeout: Timeout::NoTimeout,
        min_activation_height: 0,
        threshold,
        period,
    }
}

/// Validates `params` and fills in its genesis hash and identity.
///
/// `expected` is the pinned genesis hash, if the network has one.
pub(crate) fn seal(
    mut params: ChainParams,
    expected: Option<BlockHash>,
) -> Result<ChainParams, ParamsError> {
    params.consensus.validate()?;
    params.genesis_identity = check_genesis(params.chain_type, &params.genesis, expected)?;
    params.consensus.hash_genesis_block = params.genesis.block_hash();

    debug!(
        chain = %params.chain_type,
        magic = %params.message_start,
        genesis = %params.consensus.hash_genesis_block,
        identity = ?params.genesis_identity,
        "built chain parameters"
    );
    Ok(params)
}
