use core::fmt;

use serde::Serialize;

use crate::uint256::{BlockHash, Uint256};

/// Hash of a serialized UTXO set, as written into a snapshot file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssumeUtxoHash(pub Uint256);

impl fmt::Display for AssumeUtxoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A trusted UTXO snapshot a node may load instead of validating history
/// up to `height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssumeUtxoData {
    pub height: u32,
    pub hash_serialized: AssumeUtxoHash,
    /// Transactions in the chain up to and including the snapshot block.
    pub chain_tx_count: u64,
    pub blockhash: BlockHash,
}

impl AssumeUtxoData {
    pub const fn new(
        height: u32,
        hash_serialized: &str,
        chain_tx_count: u64,
        blockhash: &str,
    ) -> Self {
        Self {
            height,
            hash_serialized: AssumeUtxoHash(Uint256::from_hex_literal(hash_serialized)),
            chain_tx_count,
            blockhash: BlockHash::from_hex_literal(blockhash),
        }
    }
}

/// Snapshot heights in authored order.
pub fn snapshot_heights(catalog: &[AssumeUtxoData]) -> Vec<u32> {
    catalog.iter().map(|d| d.height).collect()
}

pub fn find_by_height(catalog: &[AssumeUtxoData], height: u32) -> Option<&AssumeUtxoData> {
    catalog.iter().find(|d| d.height == height)
}

pub fn find_by_blockhash<'a>(
    catalog: &'a [AssumeUtxoData],
    blockhash: &BlockHash,
) -> Option<&'a AssumeUtxoData> {
    catalog.iter().find(|d| d.blockhash == *blockhash)
}
