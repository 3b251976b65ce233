use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// The network a process is bound to. Fixed for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChainType {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "test")]
    Testnet,
    #[serde(rename = "testnet4")]
    Testnet4,
    #[serde(rename = "signet")]
    Signet,
    #[serde(rename = "regtest")]
    Regtest,
}

impl ChainType {
    pub const ALL: [ChainType; 5] = [
        ChainType::Main,
        ChainType::Testnet,
        ChainType::Testnet4,
        ChainType::Signet,
        ChainType::Regtest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChainType::Main => "main",
            ChainType::Testnet => "test",
            ChainType::Testnet4 => "testnet4",
            ChainType::Signet => "signet",
            ChainType::Regtest => "regtest",
        }
    }

    pub fn is_test_chain(self) -> bool {
        self != ChainType::Main
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownChain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for chain in ChainType::ALL {
            assert_eq!(chain.as_str().parse::<ChainType>().unwrap(), chain);
        }
        assert_eq!(ChainType::Testnet.to_string(), "test");
        assert!("testnet".parse::<ChainType>().is_err());
    }

    #[test]
    fn serde_matches_display() {
        for chain in ChainType::ALL {
            let json = serde_json::to_string(&chain).unwrap();
            assert_eq!(json, format!("\"{chain}\""));
        }
    }

    #[test]
    fn only_main_is_not_a_test_chain() {
        let test_chains: Vec<_> = ChainType::ALL
            .into_iter()
            .filter(|c| c.is_test_chain())
            .collect();
        assert_eq!(test_chains.len(), 4);
        assert!(!ChainType::Main.is_test_chain());
    }
}
