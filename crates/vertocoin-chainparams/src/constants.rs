/// Base units per VTO.
pub const COIN: i64 = 100_000_000;

pub const GENESIS_COMMITMENT: &str = "Vertocoin - The future of fast transactions [vertomax.com]";
pub const TESTNET4_GENESIS_COMMITMENT: &str =
    "Vertocoin Testnet4 - Fast transactions for everyone [vertomax.com]";

/// Uncompressed key paid by every genesis coinbase. The output is unspendable
/// in practice: the genesis coinbase never enters the UTXO set.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = crate::util::hex_literal(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
);

/// First push of every genesis script-sig (0x1d00ffff as a script number).
pub const GENESIS_SCRIPT_SIG_BITS: i64 = 486_604_799;
pub const GENESIS_SCRIPT_SIG_EXTRA_NONCE: i64 = 4;

/// 2-of-2 multisig challenge of the default signet.
pub const DEFAULT_SIGNET_CHALLENGE: [u8; 71] = crate::util::hex_literal(
    "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae",
);

pub const VERSIONBITS_TOP_BITS: u32 = 0x2000_0000;
pub const VERSIONBITS_TOP_MASK: u32 = 0xe000_0000;
/// Signaling bits available below the top-bits marker.
pub const VERSIONBITS_NUM_BITS: u8 = 29;

pub const MAINNET_DEFAULT_PORT: u16 = 9333;
pub const TESTNET_DEFAULT_PORT: u16 = 19333;
pub const TESTNET4_DEFAULT_PORT: u16 = 49333;
pub const SIGNET_DEFAULT_PORT: u16 = 38333;
pub const REGTEST_DEFAULT_PORT: u16 = 19444;

pub const SEED_HOST: &str = "explorer.vertomax.com.";
