//! Chain parameters for every Vertocoin network: consensus constants, BIP9
//! deployments, genesis blocks, wire magic and the assumeutxo catalog.

pub mod assumeutxo;
pub mod block;
pub mod chain_type;
mod compactsize;
pub mod consensus;
pub mod constants;
pub mod deployments;
pub mod error;
pub mod genesis;
mod hash;
pub mod merkle;
pub mod message_start;
pub mod network_id;
mod networks;
pub mod options;
pub mod params;
pub mod script;
pub mod tx;
pub mod uint256;
mod util;

pub use assumeutxo::{AssumeUtxoData, AssumeUtxoHash};
pub use block::{Block, BlockHeader, BLOCK_HEADER_BYTES};
pub use chain_type::ChainType;
pub use consensus::ConsensusParams;
pub use deployments::{Bip9Deployment, BuriedDeployment, DeploymentPos, Deployments, StartTime, Timeout};
pub use error::{ErrorCode, OptionsError, ParamsError, ParseHexError};
pub use genesis::{
    check_genesis, create_default_genesis_block, create_genesis_block, GenesisFields,
    GenesisIdentity,
};
pub use hash::sha256d;
pub use merkle::merkle_root;
pub use message_start::{MessageStart, MESSAGE_START_SIZE};
pub use network_id::{network_for_magic, NetworkIdentifier};
pub use options::{RegTestOptions, SigNetOptions, VersionBitsParameters};
pub use params::{Base58Prefixes, Base58Type, ChainParams, ChainTxData};
pub use uint256::{BlockHash, Txid, Uint256};

#[cfg(test)]
mod tests;
