//! Shared types for the key-derivation core

use serde::{Deserialize, Serialize};

use crate::shared::constants::{ETHEREUM_COIN_TYPE, SOLANA_COIN_TYPE};

/// Supported chains
///
/// Each chain pins a signature scheme, a hierarchical derivation standard,
/// and a public-key encoding:
///
/// - `Solana`: Ed25519, SLIP-0010 (hardened-only), base58 keys
/// - `Ethereum`: secp256k1, BIP-32/BIP-44, EIP-55 checksummed address
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Chain {
    Solana,
    Ethereum,
}

impl Chain {
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
        }
    }

    /// SLIP-44 registered coin type, the second BIP-44 path component
    pub fn coin_type(&self) -> u32 {
        match self {
            Chain::Solana => SOLANA_COIN_TYPE,
            Chain::Ethereum => ETHEREUM_COIN_TYPE,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A derived keypair in its chain-specific string encoding
///
/// Immutable once produced. Solana keys are base58 (32-byte public key,
/// 64-byte secret-then-public keypair bytes); Ethereum keys are the EIP-55
/// checksummed address and a 0x-prefixed hex private key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
    pub chain: Chain,
}

/// One registry entry: a derived keypair plus its reveal flag
///
/// The flag starts hidden; the presentation layer flips it per entry.
/// Keeping it on the entry avoids index drift against a side map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub keypair: KeyPair,
    pub revealed: bool,
}

impl RegistryEntry {
    pub fn new(keypair: KeyPair) -> Self {
        Self {
            keypair,
            revealed: false,
        }
    }
}
