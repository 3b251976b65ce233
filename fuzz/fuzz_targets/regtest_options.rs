#![no_main]

use libfuzzer_sys::fuzz_target;
use vertocoin_chainparams::{ChainParams, RegTestOptions};

// Arbitrary option text must either be rejected or yield a valid profile.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (heights, vbparams): (Vec<&str>, Vec<&str>) = s.lines().partition(|l| l.contains('@'));
    let Ok(opts) = RegTestOptions::from_args(heights, vbparams) else {
        return;
    };
    let p = match ChainParams::try_regtest(&opts) {
        Ok(p) => p,
        Err(e) => panic!("options accepted but profile rejected: {e}"),
    };
    for (dep, height) in &opts.activation_heights {
        if p.consensus().deployment_height(*dep) != *height {
            panic!("override for {dep} lost");
        }
    }
});
