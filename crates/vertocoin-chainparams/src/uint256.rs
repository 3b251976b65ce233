use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseHexError;
use crate::util::hex_literal;

/// An opaque 256-bit value: block hashes, txids, targets and chain work.
///
/// Bytes are held in internal (little-endian) order, the order they take on
/// the wire. The hex form is byte-reversed, so `"0000...01"` is the number 1.
/// Ordering is numeric.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint256([u8; 32]);

pub type BlockHash = Uint256;
pub type Txid = Uint256;

impl Uint256 {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn from_le_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub const fn as_le_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut b = self.0;
        b.reverse();
        b
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parses a 64-digit hex literal at compile time. Malformed input fails the
    /// build when used in a `const` item.
    pub const fn from_hex_literal(s: &str) -> Self {
        let be: [u8; 32] = hex_literal(s);
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[31 - i] = be[i];
            i += 1;
        }
        Self(out)
    }

    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        if s.len() != 64 {
            return Err(ParseHexError::Length {
                expected: 64,
                got: s.len(),
            });
        }
        let mut b = [0u8; 32];
        hex::decode_to_slice(s, &mut b)?;
        b.reverse();
        Ok(Self(b))
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({self})")
    }
}

impl FromStr for Uint256 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_runtime_parse_agree() {
        const LIMIT: Uint256 = Uint256::from_hex_literal(
            "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        );
        let parsed: Uint256 = "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            .parse()
            .unwrap();
        assert_eq!(LIMIT, parsed);
        assert_eq!(parsed.as_le_bytes()[31], 0x00);
        assert_eq!(parsed.as_le_bytes()[0], 0xff);
    }

    #[test]
    fn ordering_is_numeric() {
        let one = Uint256::from_hex_literal(
            "0000000000000000000000000000000000000000000000000000000000000001",
        );
        let high = Uint256::from_hex_literal(
            "1000000000000000000000000000000000000000000000000000000000000000",
        );
        assert!(Uint256::ZERO < one);
        assert!(one < high);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = Uint256::from_hex("abcd").unwrap_err();
        assert_eq!(err, ParseHexError::Length { expected: 64, got: 4 });
    }

    #[test]
    fn serde_uses_display_hex() {
        let v = Uint256::from_hex_literal(
            "7fffff0000000000000000000000000000000000000000000000000000000000",
        );
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            json,
            "\"7fffff0000000000000000000000000000000000000000000000000000000000\""
        );
        let back: Uint256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
