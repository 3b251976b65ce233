use crate::compactsize::encode_compact_size;
use crate::hash::sha256d;
use crate::merkle::merkle_root;
use crate::tx::Transaction;
use crate::uint256::{BlockHash, Uint256};

pub const BLOCK_HEADER_BYTES: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_blockhash: BlockHash,
    pub merkle_root: Uint256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_BYTES] {
        let mut out = [0u8; BLOCK_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_blockhash.as_le_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_le_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Proof-of-work header hash.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::from_le_bytes(sha256d(&self.to_bytes()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub txdata: Vec<Transaction>,
}

impl Block {
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Merkle root recomputed from the transactions, `None` for an empty block.
    pub fn compute_merkle_root(&self) -> Option<Uint256> {
        let txids: Vec<_> = self.txdata.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    /// Header followed by the CompactSize transaction count and each transaction.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BLOCK_HEADER_BYTES + 256);
        out.extend_from_slice(&self.header.to_bytes());
        encode_compact_size(self.txdata.len() as u64, &mut out);
        for tx in &self.txdata {
            tx.serialize_into(&mut out);
        }
        out
    }
}
