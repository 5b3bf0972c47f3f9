//! Error handling for the key-derivation core
//!
//! This module defines the error types used throughout the derivation engine.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Entropy source error: {0}")]
    EntropySource(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Derivation error: {0}")]
    Derivation(String),

    #[error("Invalid registry entry: {0}")]
    InvalidEntry(String),
}

impl WalletError {
    /// Create an entropy source error
    pub fn entropy_source(message: impl Into<String>) -> Self {
        Self::EntropySource(message.into())
    }

    /// Create an invalid mnemonic error
    pub fn invalid_mnemonic(message: impl Into<String>) -> Self {
        Self::InvalidMnemonic(message.into())
    }

    /// Create a derivation error
    pub fn derivation(message: impl Into<String>) -> Self {
        Self::Derivation(message.into())
    }

    /// Create an invalid registry entry error
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self::InvalidEntry(message.into())
    }
}

// Cryptographic error conversions
impl From<bip39::Error> for WalletError {
    fn from(err: bip39::Error) -> Self {
        Self::invalid_mnemonic(format!("BIP39 error: {}", err))
    }
}

impl From<bip32::Error> for WalletError {
    fn from(err: bip32::Error) -> Self {
        Self::derivation(format!("BIP32 error: {}", err))
    }
}

impl From<secp256k1::Error> for WalletError {
    fn from(err: secp256k1::Error) -> Self {
        Self::derivation(format!("Secp256k1 error: {}", err))
    }
}

impl From<rand::Error> for WalletError {
    fn from(err: rand::Error) -> Self {
        Self::entropy_source(format!("RNG error: {}", err))
    }
}
