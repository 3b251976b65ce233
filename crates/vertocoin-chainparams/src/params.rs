use std::sync::Arc;

use serde::Serialize;

use crate::assumeutxo::{self, AssumeUtxoData};
use crate::block::Block;
use crate::chain_type::ChainType;
use crate::consensus::ConsensusParams;
use crate::error::ParamsError;
use crate::genesis::GenesisIdentity;
use crate::message_start::MessageStart;
use crate::networks;
use crate::options::{RegTestOptions, SigNetOptions};
use crate::uint256::BlockHash;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Version prefixes for base58check-encoded addresses and keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    #[serde(with = "hex::serde")]
    pub ext_public_key: [u8; 4],
    #[serde(with = "hex::serde")]
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub const MAINNET: Self = Self {
        pubkey_address: 71,
        script_address: 8,
        secret_key: 199,
        ext_public_key: [0x04, 0x88, 0xb2, 0x1f],
        ext_secret_key: [0x04, 0x88, 0xad, 0xe5],
    };

    /// Shared by every test network.
    pub const TESTNET: Self = Self {
        pubkey_address: 111,
        script_address: 196,
        secret_key: 239,
        ext_public_key: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: [0x04, 0x35, 0x83, 0x94],
    };

    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => core::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => core::slice::from_ref(&self.script_address),
            Base58Type::SecretKey => core::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Chain statistics at a known point, used to estimate sync progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known transaction count.
    pub time: i64,
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

/// Everything one network fixes: consensus rules, genesis block, wire magic,
/// ports, seeds, address encodings and the assumeutxo catalog.
///
/// Built once through one of the per-network constructors and shared behind
/// an [`Arc`]. There is no way to mutate a built value.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub(crate) chain_type: ChainType,
    pub(crate) consensus: ConsensusParams,
    pub(crate) genesis: Block,
    pub(crate) genesis_identity: GenesisIdentity,
    pub(crate) message_start: MessageStart,
    pub(crate) default_port: u16,
    pub(crate) prune_after_height: u64,
    pub(crate) assumed_blockchain_size: u64,
    pub(crate) assumed_chain_state_size: u64,
    pub(crate) seeds: Vec<String>,
    pub(crate) fixed_seeds: Vec<u8>,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) bech32_hrp: &'static str,
    pub(crate) default_consistency_checks: bool,
    pub(crate) is_mockable_chain: bool,
    pub(crate) assumeutxo_data: Vec<AssumeUtxoData>,
    pub(crate) chain_tx_data: ChainTxData,
}

fn or_abort(r: Result<Arc<ChainParams>, ParamsError>) -> Arc<ChainParams> {
    r.unwrap_or_else(|e| panic!("invalid chain parameters: {e}"))
}

impl ChainParams {
    pub fn try_main() -> Result<Arc<Self>, ParamsError> {
        networks::mainnet::build().map(Arc::new)
    }

    pub fn try_testnet() -> Result<Arc<Self>, ParamsError> {
        networks::testnet::build().map(Arc::new)
    }

    pub fn try_testnet4() -> Result<Arc<Self>, ParamsError> {
        networks::testnet4::build().map(Arc::new)
    }

    pub fn try_signet(options: &SigNetOptions) -> Result<Arc<Self>, ParamsError> {
        networks::signet::build(options).map(Arc::new)
    }

    pub fn try_regtest(options: &RegTestOptions) -> Result<Arc<Self>, ParamsError> {
        networks::regtest::build(options).map(Arc::new)
    }

    /// Builds `chain` with default options.
    pub fn try_for_chain(chain: ChainType) -> Result<Arc<Self>, ParamsError> {
        match chain {
            ChainType::Main => Self::try_main(),
            ChainType::Testnet => Self::try_testnet(),
            ChainType::Testnet4 => Self::try_testnet4(),
            ChainType::Signet => Self::try_signet(&SigNetOptions::default()),
            ChainType::Regtest => Self::try_regtest(&RegTestOptions::default()),
        }
    }

    /// # Panics
    ///
    /// If the compiled-in parameters are inconsistent.
    pub fn main() -> Arc<Self> {
        or_abort(Self::try_main())
    }

    pub fn testnet() -> Arc<Self> {
        or_abort(Self::try_testnet())
    }

    pub fn testnet4() -> Arc<Self> {
        or_abort(Self::try_testnet4())
    }

    /// # Panics
    ///
    /// If the options produce an inconsistent deployment table. Use
    /// [`ChainParams::try_signet`] for options taken from user input.
    pub fn signet(options: &SigNetOptions) -> Arc<Self> {
        or_abort(Self::try_signet(options))
    }

    /// # Panics
    ///
    /// See [`ChainParams::try_regtest`].
    pub fn regtest(options: &RegTestOptions) -> Arc<Self> {
        or_abort(Self::try_regtest(options))
    }

    pub fn for_chain(chain: ChainType) -> Arc<Self> {
        or_abort(Self::try_for_chain(chain))
    }

    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> BlockHash {
        self.consensus.hash_genesis_block
    }

    pub fn genesis_identity(&self) -> GenesisIdentity {
        self.genesis_identity
    }

    pub fn message_start(&self) -> MessageStart {
        self.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Minimum free space (GB) needed for the block files.
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Minimum free space (GB) needed for the chainstate.
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.seeds
    }

    pub fn fixed_seeds(&self) -> &[u8] {
        &self.fixed_seeds
    }

    pub fn has_fixed_seeds(&self) -> bool {
        !self.fixed_seeds.is_empty()
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn bech32_hrp(&self) -> &str {
        self.bech32_hrp
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    /// Whether tests may mock the clock and mining on this chain.
    pub fn is_mockable_chain(&self) -> bool {
        self.is_mockable_chain
    }

    pub fn is_test_chain(&self) -> bool {
        self.chain_type.is_test_chain()
    }

    pub fn tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    pub fn assumeutxo(&self) -> &[AssumeUtxoData] {
        &self.assumeutxo_data
    }

    /// Snapshot heights in the order the catalog lists them.
    pub fn available_snapshot_heights(&self) -> Vec<u32> {
        assumeutxo::snapshot_heights(&self.assumeutxo_data)
    }

    pub fn assumeutxo_for_height(&self, height: u32) -> Option<&AssumeUtxoData> {
        assumeutxo::find_by_height(&self.assumeutxo_data, height)
    }

    pub fn assumeutxo_for_blockhash(&self, blockhash: &BlockHash) -> Option<&AssumeUtxoData> {
        assumeutxo::find_by_blockhash(&self.assumeutxo_data, blockhash)
    }
}
