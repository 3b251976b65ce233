use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::chain_type::ChainType;
use crate::error::ParamsError;
use crate::message_start::MessageStart;
use crate::options::{RegTestOptions, SigNetOptions};
use crate::params::ChainParams;

/// Reverse lookup from message start to network.
///
/// Built from a fixed set of profiles. Two profiles sharing a magic would make
/// the lookup ambiguous, so construction rejects them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkIdentifier {
    entries: Vec<(MessageStart, ChainType)>,
}

impl NetworkIdentifier {
    /// Identifier over all five networks with default options.
    pub fn new() -> Result<Self, ParamsError> {
        let profiles = [
            ChainParams::try_main()?,
            ChainParams::try_testnet()?,
            ChainParams::try_testnet4()?,
            ChainParams::try_regtest(&RegTestOptions::default())?,
            ChainParams::try_signet(&SigNetOptions::default())?,
        ];
        Self::from_params(&profiles)
    }

    /// Identifier over an arbitrary set of built profiles, for example one
    /// that includes a signet with a custom challenge.
    pub fn from_params(profiles: &[Arc<ChainParams>]) -> Result<Self, ParamsError> {
        let mut entries: Vec<(MessageStart, ChainType)> = Vec::with_capacity(profiles.len());
        for p in profiles {
            let magic = p.message_start();
            if let Some(&(_, first)) = entries.iter().find(|(m, _)| *m == magic) {
                return Err(ParamsError::DuplicateMessageStart {
                    magic,
                    first,
                    second: p.chain_type(),
                });
            }
            entries.push((magic, p.chain_type()));
        }
        Ok(Self { entries })
    }

    pub fn identify(&self, magic: &MessageStart) -> Option<ChainType> {
        self.entries
            .iter()
            .find(|(m, _)| m == magic)
            .map(|&(_, chain)| chain)
    }

    pub fn magic_for(&self, chain: ChainType) -> Option<MessageStart> {
        self.entries
            .iter()
            .find(|(_, c)| *c == chain)
            .map(|&(m, _)| m)
    }
}

static DEFAULT_IDENTIFIER: LazyLock<NetworkIdentifier> = LazyLock::new(|| {
    let id = NetworkIdentifier::new()
        .unwrap_or_else(|e| panic!("default network identifier: {e}"));
    debug!(networks = id.entries.len(), "default network identifier ready");
    id
});

/// Network whose default profile uses `magic`, if any.
pub fn network_for_magic(magic: &MessageStart) -> Option<ChainType> {
    DEFAULT_IDENTIFIER.identify(magic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn default_magics_round_trip() {
        for chain in ChainType::ALL {
            let p = ChainParams::for_chain(chain);
            assert_eq!(network_for_magic(&p.message_start()), Some(chain));
        }
    }

    #[test]
    fn unknown_magic() {
        assert_eq!(network_for_magic(&MessageStart::new([0, 0, 0, 0])), None);
        assert_eq!(network_for_magic(&MessageStart::new([0xf9, 0xbe, 0xb4, 0xd9])), None);
    }

    #[test]
    fn duplicate_magic_rejected() {
        let main = ChainParams::main();
        let err = NetworkIdentifier::from_params(&[main.clone(), main]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParamsErrDuplicateMessageStart);
    }

    #[test]
    fn custom_signet_identified_only_by_custom_identifier() {
        let custom = ChainParams::signet(&SigNetOptions {
            challenge: Some(vec![0x51]),
            seeds: None,
        });
        let magic = custom.message_start();
        assert_eq!(network_for_magic(&magic), None);

        let id = NetworkIdentifier::from_params(&[ChainParams::main(), custom]).unwrap();
        assert_eq!(id.identify(&magic), Some(ChainType::Signet));
        assert_eq!(id.magic_for(ChainType::Signet), Some(magic));
        assert_eq!(id.magic_for(ChainType::Regtest), None);
    }
}
