//! Seed expansion
//!
//! Turns a validated mnemonic plus an optional passphrase into the 64-byte
//! binary seed that roots all hierarchical derivation. The stretching is
//! BIP-39 standard: PBKDF2-HMAC-SHA512, 2048 iterations, salt
//! `"mnemonic" + passphrase`.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::core::mnemonic::MnemonicService;
use crate::shared::constants::SEED_SIZE;
use crate::shared::error::WalletError;

/// Seed expander for mnemonic-to-seed stretching
pub struct SeedExpander;

impl SeedExpander {
    /// Expand a phrase into a 64-byte seed, validating the checksum first
    ///
    /// Pure and deterministic: the same (phrase, passphrase) always yields
    /// a byte-identical seed.
    pub fn expand(
        phrase: &str,
        passphrase: &str,
    ) -> Result<Zeroizing<[u8; SEED_SIZE]>, WalletError> {
        let mnemonic = MnemonicService::parse(phrase)?;
        Ok(Self::expand_mnemonic(&mnemonic, passphrase))
    }

    /// Expand an already-validated mnemonic; cannot fail
    pub fn expand_mnemonic(
        mnemonic: &Mnemonic,
        passphrase: &str,
    ) -> Zeroizing<[u8; SEED_SIZE]> {
        Zeroizing::new(mnemonic.to_seed_normalized(passphrase))
    }
}
