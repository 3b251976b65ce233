use sha2::{Digest, Sha256};

/// Double SHA-256, the hash behind txids, block hashes and the signet magic.
pub fn sha256d(b: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(b);
    let second = Sha256::digest(first);
    let mut r = [0u8; 32];
    r.copy_from_slice(&second);
    r
}
