use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bip32Error {
    #[error("invalid extended key length {0}, expected 78 or 82 bytes")]
    InvalidLength(usize),
    #[error("unknown extended key version {0:#010x}")]
    InvalidVersion(u32),
    #[error("invalid key data")]
    InvalidKeyData,
    #[error("non-zero private key padding byte {0:#04x}")]
    InvalidPadding(u8),
    #[error("master key with non-zero parent fingerprint or index")]
    InvalidMasterKey,
    #[error("scalar is zero or not below the curve order")]
    InvalidScalar,
    #[error("hardened derivation requires a private key")]
    UnsupportedDerivation,
    #[error("extended key has no private key")]
    MissingPrivateKey,
    #[error("maximum derivation depth exceeded")]
    DepthOverflow,
    #[error("primitive failure: {0}")]
    PrimitiveFailure(&'static str),
}

impl From<hmac::digest::InvalidLength> for Bip32Error {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Bip32Error::PrimitiveFailure("hmac key length")
    }
}

pub type Result<T> = std::result::Result<T, Bip32Error>;
