use serde::Serialize;

use crate::deployments::{BuriedDeployment, Deployments};
use crate::error::ParamsError;
use crate::uint256::{BlockHash, Uint256};

/// Consensus constants of one network.
///
/// Heights of buried deployments are stored flat; `0` means enforced from
/// genesis. Everything here is fixed once the owning
/// [`ChainParams`](crate::ChainParams) is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: BlockHash,
    pub subsidy_halving_interval: u32,
    /// Hash of the block at `bip34_height`. Zero when BIP34 is active from genesis.
    pub bip34_hash: BlockHash,
    pub bip34_height: u32,
    pub bip65_height: u32,
    pub bip66_height: u32,
    pub csv_height: u32,
    pub segwit_height: u32,
    /// Do not warn about unknown versionbits before this height.
    pub min_bip9_warning_height: u32,
    pub deployments: Deployments,

    pub pow_limit: Uint256,
    pub pow_allow_min_difficulty_blocks: bool,
    /// Enforce the timewarp fix and difficulty rule of BIP94.
    pub enforce_bip94: bool,
    pub pow_no_retargeting: bool,
    pub pow_target_spacing: i64,
    pub pow_target_timespan: i64,

    pub minimum_chain_work: Uint256,
    pub default_assume_valid: BlockHash,

    pub signet_blocks: bool,
    #[serde(with = "hex::serde")]
    pub signet_challenge: Vec<u8>,
}

impl ConsensusParams {
    pub fn deployment_height(&self, dep: BuriedDeployment) -> u32 {
        match dep {
            BuriedDeployment::HeightInCb => self.bip34_height,
            BuriedDeployment::Cltv => self.bip65_height,
            BuriedDeployment::DerSig => self.bip66_height,
            BuriedDeployment::Csv => self.csv_height,
            BuriedDeployment::Segwit => self.segwit_height,
        }
    }

    pub(crate) fn set_deployment_height(&mut self, dep: BuriedDeployment, height: u32) {
        let slot = match dep {
            BuriedDeployment::HeightInCb => &mut self.bip34_height,
            BuriedDeployment::Cltv => &mut self.bip65_height,
            BuriedDeployment::DerSig => &mut self.bip66_height,
            BuriedDeployment::Csv => &mut self.csv_height,
            BuriedDeployment::Segwit => &mut self.segwit_height,
        };
        *slot = height;
    }

    /// Blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.deployments.validate()
    }
}
