use crate::error::{Bip32Error, Result};
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use std::{fmt, ops::Deref};
use zeroize::Zeroizing;

/// Size of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of a secp256k1 private scalar.
pub const SECRET_KEY_SIZE: usize = 32;

/// A secp256k1 key that either carries a private scalar or is public-only.
///
/// The private scalar is kept in zeroizing storage so the bytes are scrubbed
/// when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyPair {
    Public(PublicKey),
    Private {
        secret: Zeroizing<[u8; SECRET_KEY_SIZE]>,
        public: PublicKey,
    },
}

impl KeyPair {
    /// Load a private scalar, deriving its public point.
    pub fn from_secret_bytes(secp: &Secp256k1<All>, bytes: &[u8]) -> Result<Self> {
        let secret_key = ErasingSecretKey::from_slice(bytes)?;
        Ok(Self::from_secret_key(secp, &secret_key))
    }

    pub fn from_secret_key(secp: &Secp256k1<All>, secret_key: &SecretKey) -> Self {
        KeyPair::Private {
            secret: Zeroizing::new(secret_key.secret_bytes()),
            public: PublicKey::from_secret_key(secp, secret_key),
        }
    }

    /// Load a 33-byte compressed public point.
    pub fn from_public_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Bip32Error::InvalidKeyData);
        }
        let public = PublicKey::from_slice(bytes).map_err(|_| Bip32Error::InvalidKeyData)?;
        Ok(KeyPair::Public(public))
    }

    pub fn has_private(&self) -> bool {
        matches!(self, KeyPair::Private { .. })
    }

    pub fn public_key(&self) -> &PublicKey {
        match self {
            KeyPair::Public(public) | KeyPair::Private { public, .. } => public,
        }
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public_key().serialize()
    }

    /// Copy of the private scalar, or `None` for a public-only key.
    pub fn secret_bytes(&self) -> Option<Zeroizing<[u8; SECRET_KEY_SIZE]>> {
        match self {
            KeyPair::Public(_) => None,
            KeyPair::Private { secret, .. } => Some(secret.clone()),
        }
    }

    /// The private scalar as a `SecretKey` that is erased when dropped.
    pub fn secret_key(&self) -> Result<ErasingSecretKey> {
        match self {
            KeyPair::Public(_) => Err(Bip32Error::MissingPrivateKey),
            KeyPair::Private { secret, .. } => ErasingSecretKey::from_slice(&secret[..]),
        }
    }

    /// Drop the private scalar, keeping only the public point.
    pub fn to_public(&self) -> Self {
        KeyPair::Public(*self.public_key())
    }

    /// Checks that a private scalar and its stored public point agree.
    pub fn is_consistent(&self, secp: &Secp256k1<All>) -> bool {
        match self {
            KeyPair::Public(_) => true,
            KeyPair::Private { public, .. } => match self.secret_key() {
                Ok(secret_key) => PublicKey::from_secret_key(secp, &secret_key) == *public,
                Err(_) => false,
            },
        }
    }
}

/// A `SecretKey` whose bytes are overwritten when it goes out of scope.
pub struct ErasingSecretKey(SecretKey);

impl ErasingSecretKey {
    pub fn new(secret_key: SecretKey) -> Self {
        ErasingSecretKey(secret_key)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretKey::from_slice(bytes)
            .map(ErasingSecretKey)
            .map_err(|_| Bip32Error::InvalidScalar)
    }

    fn erase(&mut self) {
        self.0.non_secure_erase();
    }
}

impl Deref for ErasingSecretKey {
    type Target = SecretKey;

    fn deref(&self) -> &SecretKey {
        &self.0
    }
}

impl Drop for ErasingSecretKey {
    fn drop(&mut self) {
        self.erase();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPair::Public(public) => f.debug_tuple("Public").field(public).finish(),
            KeyPair::Private { public, .. } => f
                .debug_struct("Private")
                .field("secret", &"<redacted>")
                .field("public", public)
                .finish(),
        }
    }
}
