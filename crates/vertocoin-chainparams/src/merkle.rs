use crate::hash::sha256d;
use crate::uint256::Uint256;

/// Bitcoin-style merkle root over txids. An odd node is paired with itself.
/// A single-leaf tree's root is the leaf itself.
pub fn merkle_root(txids: &[Uint256]) -> Option<Uint256> {
    if txids.is_empty() {
        return None;
    }

    let mut level: Vec<Uint256> = txids.to_vec();
    let mut preimage = [0u8; 64];
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let left = pair[0];
            let right = pair.get(1).copied().unwrap_or(left);
            preimage[..32].copy_from_slice(left.as_le_bytes());
            preimage[32..].copy_from_slice(right.as_le_bytes());
            next.push(Uint256::from_le_bytes(sha256d(&preimage)));
        }
        level = next;
    }

    Some(level[0])
}
