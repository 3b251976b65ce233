#![no_main]

use libfuzzer_sys::fuzz_target;
use vertocoin_chainparams::{ChainParams, MessageStart, SigNetOptions};

fuzz_target!(|data: &[u8]| {
    let opts = SigNetOptions {
        challenge: Some(data.to_vec()),
        seeds: None,
    };
    let p = ChainParams::signet(&opts);
    if p.message_start() != MessageStart::from_signet_challenge(data) {
        panic!("signet magic does not follow the challenge");
    }
    if !p.dns_seeds().is_empty() {
        panic!("custom signet kept default seeds");
    }
});
