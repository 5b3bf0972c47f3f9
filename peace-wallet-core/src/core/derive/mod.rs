//! Chain key derivers
//!
//! Each supported chain implements [`ChainKeyDeriver`]: given a 64-byte
//! BIP-39 seed and a derivation path, produce the chain's encoded keypair.
//! Two variants exist, one per curve and derivation standard:
//!
//! - [`Ed25519Deriver`]: SLIP-0010 hardened-only derivation (Solana)
//! - [`Secp256k1Deriver`]: BIP-32 derivation (Ethereum)

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::shared::error::WalletError;
use crate::shared::types::{Chain, KeyPair};

/// Capability shared by all chain derivers
pub trait ChainKeyDeriver {
    /// The chain this deriver produces keys for
    fn chain(&self) -> Chain;

    /// Derive the keypair at `path` from a 64-byte seed
    ///
    /// Deterministic: identical `(seed, path)` inputs always return the
    /// identical keypair.
    fn derive_keypair(&self, seed: &[u8], path: &str) -> Result<KeyPair, WalletError>;
}

/// Reject paths whose coin-type component does not match the deriver's chain
pub(crate) fn expect_coin_type(
    path: &str,
    components: &[(u32, bool)],
    expected: u32,
) -> Result<(), WalletError> {
    match components.get(1) {
        Some((coin, _)) if *coin == expected => Ok(()),
        Some((coin, _)) => Err(WalletError::derivation(format!(
            "Coin type mismatch in path '{}': expected {}, found {}",
            path, expected, coin
        ))),
        None => Err(WalletError::derivation(format!(
            "Derivation path '{}' is missing a coin type component",
            path
        ))),
    }
}
