use crate::key::{KeyPair, PUBLIC_KEY_SIZE};
use crate::version::{KeyKind, Network, Version};
use crypto_utils::hash::hash160;

/// Size of a chain code.
pub const CHAIN_CODE_SIZE: usize = 32;

/// A key plus its chain code and position in the derivation tree.
///
/// Whether this is an xprv or an xpub follows from the key: the version is
/// computed from `network` and the presence of a private scalar, so the two can
/// never disagree. Fields are public; a record built by hand must keep a
/// 32-byte chain code and, at depth 0, a zero index and parent fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedKey {
    pub key: KeyPair,
    pub chain_code: [u8; CHAIN_CODE_SIZE],
    pub index: u32,
    pub network: Network,
    pub parent_fingerprint: [u8; 4],
    pub depth: u8,
}

/// 4-byte fingerprint: HASH160(pubkey)[0..4]
pub(crate) fn fingerprint_of(pubkey: &[u8; PUBLIC_KEY_SIZE]) -> [u8; 4] {
    let identifier = hash160(pubkey);
    let mut fp = [0u8; 4];
    fp.copy_from_slice(&identifier[..4]);
    fp
}

impl ExtendedKey {
    pub fn version(&self) -> Version {
        let kind = if self.key.has_private() {
            KeyKind::Private
        } else {
            KeyKind::Public
        };
        Version::new(self.network, kind)
    }

    pub fn is_private(&self) -> bool {
        self.key.has_private()
    }

    pub fn is_master(&self) -> bool {
        self.depth == 0 && self.index == 0 && self.parent_fingerprint == [0u8; 4]
    }

    /// HASH160 of the compressed public key.
    pub fn identifier(&self) -> [u8; 20] {
        hash160(&self.key.public_key_bytes())
    }

    /// Fingerprint this key stamps into its children.
    pub fn fingerprint(&self) -> [u8; 4] {
        fingerprint_of(&self.key.public_key_bytes())
    }

    /// The public-only projection (xpub) of this key.
    pub fn to_public(&self) -> Self {
        ExtendedKey {
            key: self.key.to_public(),
            chain_code: self.chain_code,
            index: self.index,
            network: self.network,
            parent_fingerprint: self.parent_fingerprint,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use secp256k1::Secp256k1;

    fn master() -> ExtendedKey {
        let secp = Secp256k1::new();
        ExtendedKey::new_master(&secp, &hex!("000102030405060708090a0b0c0d0e0f")).unwrap()
    }

    #[test]
    fn identifier_and_fingerprint() {
        let m = master();
        assert_eq!(
            m.identifier(),
            hex!("3442193e1bb70916e914552172cd4e2dbc9df811")
        );
        assert_eq!(m.fingerprint(), hex!("3442193e"));
        assert_eq!(m.to_public().fingerprint(), m.fingerprint());
    }

    #[test]
    fn version_follows_key_kind() {
        let m = master();
        assert!(m.is_private());
        assert_eq!(m.version(), Version::new(Network::Mainnet, KeyKind::Private));

        let m_pub = m.to_public();
        assert!(!m_pub.is_private());
        assert_eq!(
            m_pub.version(),
            Version::new(Network::Mainnet, KeyKind::Public)
        );
    }

    #[test]
    fn public_projection_keeps_metadata() {
        let m = master();
        let m_pub = m.to_public();
        assert!(m_pub.is_master());
        assert_eq!(m_pub.chain_code, m.chain_code);
        assert_eq!(m_pub.network, m.network);
        assert_eq!(m_pub.key.public_key_bytes(), m.key.public_key_bytes());
    }
}
