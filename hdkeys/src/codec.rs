//! The 78-byte BIP32 extended key layout.
//!
//! ```text
//! version (4) | depth (1) | parent fingerprint (4) | index (4) | chain code (32) | key data (33)
//! ```
//!
//! Key data is a compressed public key, or a zero byte followed by the private
//! scalar. All integers are big-endian.

use crate::error::{Bip32Error, Result};
use crate::extended_key::{CHAIN_CODE_SIZE, ExtendedKey};
use crate::key::{KeyPair, PUBLIC_KEY_SIZE};
use crate::version::{KeyKind, Version};
use log::debug;
use secp256k1::{All, Secp256k1};
use zeroize::Zeroizing;

/// Size of a serialized extended key.
pub const EXTENDED_KEY_SIZE: usize = 78;
/// Size of the checksum a caller may leave appended; it is not verified here.
pub const CHECKSUM_SIZE: usize = 4;

const KEY_DATA_OFFSET: usize = EXTENDED_KEY_SIZE - PUBLIC_KEY_SIZE;

impl ExtendedKey {
    fn write_header(&self, kind: KeyKind, out: &mut [u8; EXTENDED_KEY_SIZE]) {
        out[0..4].copy_from_slice(&Version::new(self.network, kind).to_be_bytes());
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.index.to_be_bytes());
        out[13..KEY_DATA_OFFSET].copy_from_slice(&self.chain_code);
    }

    /// Serialize as an xpub/tpub, whatever kind of key this is.
    pub fn serialize_public(&self) -> [u8; EXTENDED_KEY_SIZE] {
        let mut out = [0u8; EXTENDED_KEY_SIZE];
        self.write_header(KeyKind::Public, &mut out);
        out[KEY_DATA_OFFSET..].copy_from_slice(&self.key.public_key_bytes());
        out
    }

    /// Serialize as an xprv/tprv. Fails for a public-only key.
    pub fn serialize_private(&self) -> Result<Zeroizing<[u8; EXTENDED_KEY_SIZE]>> {
        let secret = self.key.secret_bytes().ok_or(Bip32Error::MissingPrivateKey)?;
        let mut out = Zeroizing::new([0u8; EXTENDED_KEY_SIZE]);
        self.write_header(KeyKind::Private, &mut out);
        out[KEY_DATA_OFFSET] = 0;
        out[KEY_DATA_OFFSET + 1..].copy_from_slice(&secret[..]);
        Ok(out)
    }

    /// Parse a serialized extended key.
    ///
    /// Accepts 78 bytes, or 82 bytes with a trailing checksum that is ignored.
    pub fn deserialize(secp: &Secp256k1<All>, data: &[u8]) -> Result<Self> {
        if data.len() != EXTENDED_KEY_SIZE && data.len() != EXTENDED_KEY_SIZE + CHECKSUM_SIZE {
            debug!("rejecting {}-byte extended key", data.len());
            return Err(Bip32Error::InvalidLength(data.len()));
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&data[0..4]);
        let version = Version::from_u32(u32::from_be_bytes(version))?;
        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let mut index = [0u8; 4];
        index.copy_from_slice(&data[9..13]);
        let index = u32::from_be_bytes(index);
        if depth == 0 && (parent_fingerprint != [0u8; 4] || index != 0) {
            return Err(Bip32Error::InvalidMasterKey);
        }
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(&data[13..KEY_DATA_OFFSET]);

        let key_data = &data[KEY_DATA_OFFSET..EXTENDED_KEY_SIZE];
        let key = match version.kind {
            KeyKind::Public => KeyPair::from_public_bytes(key_data)?,
            KeyKind::Private => match key_data[0] {
                0 => KeyPair::from_secret_bytes(secp, &key_data[1..])?,
                padding => return Err(Bip32Error::InvalidPadding(padding)),
            },
        };

        Ok(ExtendedKey {
            key,
            chain_code,
            index,
            network: version.network,
            parent_fingerprint,
            depth,
        })
    }
}
