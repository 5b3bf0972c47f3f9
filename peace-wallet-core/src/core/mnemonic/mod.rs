//! Seed phrase generation and validation
//!
//! BIP-39 mnemonic handling: fresh phrases from the OS entropy source and
//! checksum validation of caller-supplied phrases.

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::shared::constants::ENTROPY_SIZE;
use crate::shared::error::WalletError;

/// Mnemonic service for seed phrase operations
pub struct MnemonicService;

impl MnemonicService {
    /// Generate a fresh 12-word mnemonic from 128 bits of OS entropy
    pub fn generate() -> Result<Mnemonic, WalletError> {
        let mut entropy = [0u8; ENTROPY_SIZE];
        OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|e| WalletError::entropy_source(format!("OS entropy source unavailable: {}", e)))?;

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .map_err(|e| WalletError::invalid_mnemonic(format!("Failed to encode entropy: {}", e)))?;
        entropy.zeroize();

        log::debug!("Generated a fresh {}-word mnemonic", mnemonic.word_count());
        Ok(mnemonic)
    }

    /// Parse a caller-supplied phrase, checking the wordlist and checksum
    pub fn parse(phrase: &str) -> Result<Mnemonic, WalletError> {
        Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| WalletError::invalid_mnemonic(format!("Invalid BIP39 seed phrase: {}", e)))
    }

    /// Validate a phrase without constructing a mnemonic
    pub fn validate(phrase: &str) -> bool {
        Self::parse(phrase).is_ok()
    }
}
