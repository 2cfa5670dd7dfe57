//! Offsetting a key by `tweak·G`.

use crate::error::{Bip32Error, Result};
use crate::key::{ErasingSecretKey, KeyPair};
use log::debug;
use secp256k1::{All, PublicKey, Scalar, Secp256k1};
use zeroize::Zeroizing;

/// Parse a 32-byte big-endian tweak, rejecting values not below the curve order.
pub fn parse_tweak(bytes: &[u8; 32]) -> Result<Scalar> {
    Scalar::from_be_bytes(*bytes).map_err(|_| Bip32Error::InvalidScalar)
}

/// Returns `key + tweak·G` as a key of the same kind as `key`.
///
/// A public-only key yields a public-only key. A key with a private scalar `d`
/// yields `(d + tweak) mod n` together with its public point, which must agree
/// with the public-only result before it is accepted.
pub fn add_tweak(secp: &Secp256k1<All>, key: &KeyPair, tweak: &[u8; 32]) -> Result<KeyPair> {
    let scalar = parse_tweak(tweak)?;

    let tweaked_public = key
        .public_key()
        .add_exp_tweak(secp, &scalar)
        .map_err(|e| {
            debug!("public key tweak failed: {e}");
            Bip32Error::PrimitiveFailure("public key tweak")
        })?;

    if !key.has_private() {
        return Ok(KeyPair::Public(tweaked_public));
    }

    let parent_secret = key.secret_key()?;
    let tweaked_secret = parent_secret.add_tweak(&scalar).map_err(|e| {
        debug!("private key tweak failed: {e}");
        Bip32Error::PrimitiveFailure("private key tweak")
    })?;
    let tweaked_secret = ErasingSecretKey::new(tweaked_secret);
    let secret = Zeroizing::new(tweaked_secret.secret_bytes());
    let public = PublicKey::from_secret_key(secp, &tweaked_secret);

    let tweaked = KeyPair::Private { secret, public };
    if public != tweaked_public || !tweaked.is_consistent(secp) {
        debug!("tweaked private key does not match tweaked public key");
        return Err(Bip32Error::PrimitiveFailure("key consistency check"));
    }
    Ok(tweaked)
}
