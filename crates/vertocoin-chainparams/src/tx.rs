use crate::compactsize::{encode_compact_size, encode_var_bytes};
use crate::hash::sha256d;
use crate::script::Script;
use crate::uint256::Txid;

pub const COINBASE_PREVOUT_INDEX: u32 = 0xffff_ffff;
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub txid: Txid,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends: no real prior output.
    pub const fn null() -> Self {
        Self {
            txid: Txid::ZERO,
            vout: COINBASE_PREVOUT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == COINBASE_PREVOUT_INDEX
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Legacy (non-witness) serialization, the preimage of the txid.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        encode_compact_size(self.inputs.len() as u64, out);
        for input in &self.inputs {
            out.extend_from_slice(input.previous_output.txid.as_le_bytes());
            out.extend_from_slice(&input.previous_output.vout.to_le_bytes());
            encode_var_bytes(input.script_sig.as_bytes(), out);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        encode_compact_size(self.outputs.len() as u64, out);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            encode_var_bytes(output.script_pubkey.as_bytes(), out);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.serialize_into(&mut out);
        out
    }

    pub fn txid(&self) -> Txid {
        Txid::from_le_bytes(sha256d(&self.serialize()))
    }
}
