#![no_main]

use libfuzzer_sys::fuzz_target;
use vertocoin_chainparams::{merkle_root, Uint256};

fuzz_target!(|data: &[u8]| {
    // Interpret raw bytes as consecutive 32-byte txids.
    let txids: Vec<Uint256> = data
        .chunks_exact(32)
        .map(|c| {
            let mut id = [0u8; 32];
            id.copy_from_slice(c);
            Uint256::from_le_bytes(id)
        })
        .collect();

    let r1 = merkle_root(&txids);
    let r2 = merkle_root(&txids);
    if r1 != r2 {
        panic!("merkle_root non-deterministic: {r1:?} != {r2:?}");
    }
    match (txids.as_slice(), r1) {
        ([], None) => {}
        ([one], Some(root)) if *one == root => {}
        ([_, ..], Some(_)) if txids.len() > 1 => {}
        _ => panic!("merkle_root shape mismatch for {} leaves", txids.len()),
    }
});
