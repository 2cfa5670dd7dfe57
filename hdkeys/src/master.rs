use crate::error::Result;
use crate::extended_key::{CHAIN_CODE_SIZE, ExtendedKey};
use crate::key::KeyPair;
use crate::version::Network;
use crypto_utils::hmac::hmac_sha512;
use log::{debug, trace};
use secp256k1::{All, Secp256k1};
use zeroize::Zeroizing;

/// HMAC key used to turn a seed into a master key.
pub const MASTER_KEY_LABEL: &[u8] = b"Bitcoin seed";

impl ExtendedKey {
    /// Master extended private key from a seed, on mainnet.
    pub fn new_master(secp: &Secp256k1<All>, seed: &[u8]) -> Result<Self> {
        Self::new_master_for(secp, seed, Network::Mainnet)
    }

    /// Master extended private key from a seed of any length.
    ///
    /// Fails with `InvalidScalar` when the left half of the HMAC output is zero
    /// or not below the curve order.
    pub fn new_master_for(secp: &Secp256k1<All>, seed: &[u8], network: Network) -> Result<Self> {
        let i = Zeroizing::new(hmac_sha512(MASTER_KEY_LABEL, seed)?);
        let (il, ir) = i.split_at(32);
        let key = KeyPair::from_secret_bytes(secp, il).inspect_err(|e| {
            debug!("seed produced an unusable master key: {e}");
        })?;
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(ir);
        trace!("generated {network:?} master key");
        Ok(ExtendedKey {
            key,
            chain_code,
            index: 0,
            network,
            parent_fingerprint: [0u8; 4],
            depth: 0,
        })
    }
}
