use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compactsize::encode_var_bytes;
use crate::error::ParseHexError;
use crate::hash::sha256d;

pub const MESSAGE_START_SIZE: usize = 4;

/// The four bytes prefixing every peer message and every block-file record.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MessageStart([u8; MESSAGE_START_SIZE]);

impl MessageStart {
    pub const fn new(b: [u8; MESSAGE_START_SIZE]) -> Self {
        Self(b)
    }

    pub const fn to_bytes(self) -> [u8; MESSAGE_START_SIZE] {
        self.0
    }

    /// Signet magic: the first four bytes of the double-SHA256 of the
    /// challenge script serialized as a byte vector (CompactSize length
    /// followed by the script bytes).
    pub fn from_signet_challenge(challenge: &[u8]) -> Self {
        let mut preimage = Vec::with_capacity(challenge.len() + 9);
        encode_var_bytes(challenge, &mut preimage);
        let h = sha256d(&preimage);
        let mut b = [0u8; MESSAGE_START_SIZE];
        b.copy_from_slice(&h[..MESSAGE_START_SIZE]);
        Self(b)
    }

    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        if s.len() != MESSAGE_START_SIZE * 2 {
            return Err(ParseHexError::Length {
                expected: MESSAGE_START_SIZE * 2,
                got: s.len(),
            });
        }
        let mut b = [0u8; MESSAGE_START_SIZE];
        hex::decode_to_slice(s, &mut b)?;
        Ok(Self(b))
    }
}

impl From<[u8; MESSAGE_START_SIZE]> for MessageStart {
    fn from(b: [u8; MESSAGE_START_SIZE]) -> Self {
        Self(b)
    }
}

impl AsRef<[u8]> for MessageStart {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageStart({self})")
    }
}

impl FromStr for MessageStart {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for MessageStart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MessageStart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
