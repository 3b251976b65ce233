//! Genesis block synthesis.
//!
//! The genesis block is the only block without a predecessor. Its hash, along
//! with the message start, is what distinguishes one network from another, so
//! every node must rebuild it byte for byte from the same inputs.

use serde::Serialize;
use tracing::debug;

use crate::block::{Block, BlockHeader};
use crate::chain_type::ChainType;
use crate::constants::{
    GENESIS_COMMITMENT, GENESIS_OUTPUT_PUBKEY, GENESIS_SCRIPT_SIG_BITS,
    GENESIS_SCRIPT_SIG_EXTRA_NONCE,
};
use crate::error::ParamsError;
use crate::script::{Script, ScriptBuilder};
use crate::tx::{OutPoint, Transaction, TxIn, TxOut, SEQUENCE_FINAL};
use crate::uint256::{BlockHash, Uint256};

/// Header fields and reward of a network's genesis block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisFields {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: i64,
}

/// Whether a network's genesis hash has been pinned and matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenesisIdentity {
    /// The built hash equals the compiled expected hash.
    Verified,
    /// No expected hash is compiled in yet. Peer sync must treat the
    /// network's identity as unconfirmed.
    Provisional,
}

impl GenesisIdentity {
    pub fn is_verified(self) -> bool {
        self == GenesisIdentity::Verified
    }
}

/// `push(0x1d00ffff) push(4) push(commitment)`.
pub fn coinbase_script_sig(commitment: &[u8]) -> Script {
    ScriptBuilder::new()
        .push_int(GENESIS_SCRIPT_SIG_BITS)
        .push_num(GENESIS_SCRIPT_SIG_EXTRA_NONCE)
        .push_slice(commitment)
        .into_script()
}

pub fn default_genesis_output_script() -> Script {
    Script::p2pk(&GENESIS_OUTPUT_PUBKEY)
}

/// Builds a genesis block from an arbitrary commitment and payout script.
pub fn create_genesis_block(commitment: &[u8], output_script: &Script, fields: GenesisFields) -> Block {
    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: coinbase_script_sig(commitment),
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: fields.reward,
            script_pubkey: output_script.clone(),
        }],
        lock_time: 0,
    };

    // Single-leaf tree: the root is the coinbase txid.
    let merkle_root = coinbase.txid();

    Block {
        header: BlockHeader {
            version: fields.version,
            prev_blockhash: BlockHash::ZERO,
            merkle_root,
            time: fields.time,
            bits: fields.bits,
            nonce: fields.nonce,
        },
        txdata: vec![coinbase],
    }
}

/// Builds a genesis block with the standard Vertocoin commitment and payout.
pub fn create_default_genesis_block(fields: GenesisFields) -> Block {
    create_genesis_block(
        GENESIS_COMMITMENT.as_bytes(),
        &default_genesis_output_script(),
        fields,
    )
}

/// Compares a built genesis block against its compiled expectation.
pub fn check_genesis(
    chain: ChainType,
    block: &Block,
    expected: Option<BlockHash>,
) -> Result<GenesisIdentity, ParamsError> {
    let computed = block.block_hash();
    match expected {
        Some(expected) if expected != computed => Err(ParamsError::GenesisMismatch {
            chain,
            computed,
            expected,
        }),
        Some(_) => Ok(GenesisIdentity::Verified),
        None => {
            debug!(%chain, genesis = %computed, "genesis hash not pinned, identity is provisional");
            Ok(GenesisIdentity::Provisional)
        }
    }
}

/// Merkle root a genesis header must carry: the txid of its sole transaction.
pub fn genesis_merkle_root(block: &Block) -> Option<Uint256> {
    match block.txdata.as_slice() {
        [coinbase] => Some(coinbase.txid()),
        _ => None,
    }
}
