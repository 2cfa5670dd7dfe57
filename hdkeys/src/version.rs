use crate::error::{Bip32Error, Result};

// Version constants for serialization
const VERSION_MAINNET_PUBLIC: u32 = 0x0488_B21E;
const VERSION_MAINNET_PRIVATE: u32 = 0x0488_ADE4;
const VERSION_TESTNET_PUBLIC: u32 = 0x0435_87CF;
const VERSION_TESTNET_PRIVATE: u32 = 0x0435_8394;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Public,
    Private,
}

/// The (network, key kind) pair multiplexed into the 4-byte version field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    pub network: Network,
    pub kind: KeyKind,
}

impl Version {
    pub const fn new(network: Network, kind: KeyKind) -> Self {
        Version { network, kind }
    }

    pub const fn to_u32(self) -> u32 {
        match (self.network, self.kind) {
            (Network::Mainnet, KeyKind::Public) => VERSION_MAINNET_PUBLIC,
            (Network::Mainnet, KeyKind::Private) => VERSION_MAINNET_PRIVATE,
            (Network::Testnet, KeyKind::Public) => VERSION_TESTNET_PUBLIC,
            (Network::Testnet, KeyKind::Private) => VERSION_TESTNET_PRIVATE,
        }
    }

    pub fn from_u32(version: u32) -> Result<Self> {
        let (network, kind) = match version {
            VERSION_MAINNET_PUBLIC => (Network::Mainnet, KeyKind::Public),
            VERSION_MAINNET_PRIVATE => (Network::Mainnet, KeyKind::Private),
            VERSION_TESTNET_PUBLIC => (Network::Testnet, KeyKind::Public),
            VERSION_TESTNET_PRIVATE => (Network::Testnet, KeyKind::Private),
            other => return Err(Bip32Error::InvalidVersion(other)),
        };
        Ok(Version { network, kind })
    }

    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.to_u32().to_be_bytes()
    }
}
