use crate::{
    error::{Bip32Error, Result},
    extended_key::{CHAIN_CODE_SIZE, ExtendedKey, fingerprint_of},
    key::{PUBLIC_KEY_SIZE, SECRET_KEY_SIZE},
    tweak::add_tweak,
};
use crypto_utils::hmac::hmac_sha512;
use log::{debug, trace};
use secp256k1::{All, Secp256k1};
use zeroize::Zeroizing;

/// Indices with this bit set derive hardened children.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

pub const fn is_hardened(index: u32) -> bool {
    index & HARDENED_OFFSET != 0
}

/// Hardened index `n'`.
pub const fn hardened(index: u32) -> u32 {
    index | HARDENED_OFFSET
}

impl ExtendedKey {
    /// Child key derivation (CKDpriv for private parents, CKDpub for public ones).
    ///
    /// The child has the same kind as the parent. Hardened indices require the
    /// parent to hold its private scalar.
    pub fn derive_child(&self, secp: &Secp256k1<All>, index: u32) -> Result<Self> {
        let depth = self.depth.checked_add(1).ok_or(Bip32Error::DepthOverflow)?;
        let parent_pub = self.key.public_key_bytes();

        // data for HMAC
        // Hardened: 1-byte 0x00 + 32-byte privkey + 4-byte index
        // Normal: 33-byte compressed pubkey + 4-byte index
        let mut data = Zeroizing::new([0u8; PUBLIC_KEY_SIZE + 4]);
        if is_hardened(index) {
            let secret = self.key.secret_bytes().ok_or_else(|| {
                debug!("hardened child {index:#x} requested from a public-only key");
                Bip32Error::UnsupportedDerivation
            })?;
            data[1..1 + SECRET_KEY_SIZE].copy_from_slice(&secret[..]);
        } else {
            data[..PUBLIC_KEY_SIZE].copy_from_slice(&parent_pub);
        }
        data[PUBLIC_KEY_SIZE..].copy_from_slice(&index.to_be_bytes());

        let i = Zeroizing::new(hmac_sha512(&self.chain_code, &data[..])?);
        let mut il = Zeroizing::new([0u8; 32]);
        il.copy_from_slice(&i[..32]);

        let key = add_tweak(secp, &self.key, &il).inspect_err(|e| {
            debug!("child {index:#x} at depth {depth} is invalid: {e}");
        })?;

        // Child chain code = IR
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(&i[32..]);

        trace!("derived child {index:#x} at depth {depth}");
        Ok(ExtendedKey {
            key,
            chain_code,
            index,
            network: self.network,
            parent_fingerprint: fingerprint_of(&parent_pub),
            depth,
        })
    }

    /// Derive along a sequence of child indices, starting at this key.
    pub fn derive_path(&self, secp: &Secp256k1<All>, path: &[u32]) -> Result<Self> {
        let mut key = self.clone();
        for &index in path {
            key = key.derive_child(secp, index)?;
        }
        Ok(key)
    }
}
