//! Hierarchical deterministic (BIP32) key trees over secp256k1.
//!
//! A seed produces a master [`ExtendedKey`]; any extended key derives children
//! by index, and every extended key round-trips through the 78-byte wire
//! format.

pub mod codec;
pub mod derivation;
pub mod error;
pub mod extended_key;
pub mod key;
pub mod master;
pub mod tweak;
pub mod version;

pub use derivation::{HARDENED_OFFSET, hardened, is_hardened};
pub use error::{Bip32Error, Result};
pub use extended_key::ExtendedKey;
pub use key::KeyPair;
pub use version::{KeyKind, Network, Version};
