#![no_main]

use libfuzzer_sys::fuzz_target;
use vertocoin_chainparams::{network_for_magic, ChainParams, MessageStart};

fuzz_target!(|data: [u8; 4]| {
    let magic = MessageStart::new(data);
    if let Some(chain) = network_for_magic(&magic) {
        let p = ChainParams::for_chain(chain);
        if p.message_start() != magic {
            panic!("{chain} identified by {magic} but uses {}", p.message_start());
        }
    }
});
