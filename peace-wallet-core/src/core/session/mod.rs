//! Session-scoped wallet registry
//!
//! [`WalletSession`] owns all mutable state: the current mnemonic and its
//! expanded seed, the append-only registry of derived keypairs, and one
//! index counter per chain. Execution is single-threaded and synchronous;
//! `&mut self` methods are the only mutators, and a failed derivation
//! leaves both the registry and the counters untouched.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::core::derive::{ChainKeyDeriver, Ed25519Deriver, Secp256k1Deriver};
use crate::core::mnemonic::MnemonicService;
use crate::core::paths;
use crate::core::seed::SeedExpander;
use crate::shared::constants::SEED_SIZE;
use crate::shared::error::WalletError;
use crate::shared::types::{Chain, KeyPair, RegistryEntry};

/// Session state for multi-chain key generation
pub struct WalletSession {
    mnemonic: Option<Mnemonic>,
    seed: Option<Zeroizing<[u8; SEED_SIZE]>>,
    entries: Vec<RegistryEntry>,
    solana_index: u32,
    ethereum_index: u32,
    ed25519: Ed25519Deriver,
    secp256k1: Secp256k1Deriver,
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            mnemonic: None,
            seed: None,
            entries: Vec::new(),
            solana_index: 0,
            ethereum_index: 0,
            ed25519: Ed25519Deriver::new(),
            secp256k1: Secp256k1Deriver::new(),
        }
    }

    /// Generate a fresh mnemonic and make it the session's active one
    ///
    /// Existing registry entries and both index counters are kept: keys
    /// already derived from an earlier mnemonic stay listed, and counters
    /// keep climbing so no index is ever reused within a session.
    pub fn generate_mnemonic(&mut self) -> Result<String, WalletError> {
        let mnemonic = MnemonicService::generate()?;
        let phrase = mnemonic.to_string();
        self.seed = Some(SeedExpander::expand_mnemonic(&mnemonic, ""));
        self.mnemonic = Some(mnemonic);
        log::info!("Session mnemonic replaced; registry and counters retained");
        Ok(phrase)
    }

    /// Adopt a caller-supplied phrase after checksum validation
    pub fn import_mnemonic(&mut self, phrase: &str, passphrase: &str) -> Result<(), WalletError> {
        let mnemonic = MnemonicService::parse(phrase)?;
        self.seed = Some(SeedExpander::expand_mnemonic(&mnemonic, passphrase));
        self.mnemonic = Some(mnemonic);
        Ok(())
    }

    /// Derive the next keypair for a chain and append it to the registry
    ///
    /// Reads the chain's counter, builds the account path, dispatches to
    /// the matching deriver, appends a hidden entry, and only then
    /// increments the counter. No two calls for the same chain reuse an
    /// index; entries interleave across chains in generation order.
    pub fn generate_for(&mut self, chain: Chain) -> Result<KeyPair, WalletError> {
        let seed = self.seed.as_ref().ok_or_else(|| {
            WalletError::invalid_mnemonic("No seed phrase active; generate or import one first")
        })?;

        let index = self.index_for(chain);
        let path = paths::account_path(chain, index);
        let keypair = match chain {
            Chain::Solana => self.ed25519.derive_keypair(seed.as_ref(), &path)?,
            Chain::Ethereum => self.secp256k1.derive_keypair(seed.as_ref(), &path)?,
        };

        self.entries.push(RegistryEntry::new(keypair.clone()));
        match chain {
            Chain::Solana => self.solana_index += 1,
            Chain::Ethereum => self.ethereum_index += 1,
        }
        log::debug!("Derived {} keypair at {}", chain, path);
        Ok(keypair)
    }

    /// Flip one entry's reveal flag, returning the new state
    pub fn toggle_visibility(&mut self, entry_index: usize) -> Result<bool, WalletError> {
        let entry = self.entries.get_mut(entry_index).ok_or_else(|| {
            WalletError::invalid_entry(format!("No registry entry at index {}", entry_index))
        })?;
        entry.revealed = !entry.revealed;
        Ok(entry.revealed)
    }

    /// Registry entries in generation order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// The chain's next account index
    pub fn index_for(&self, chain: Chain) -> u32 {
        match chain {
            Chain::Solana => self.solana_index,
            Chain::Ethereum => self.ethereum_index,
        }
    }

    /// The active phrase, if one has been generated or imported
    pub fn mnemonic_phrase(&self) -> Option<String> {
        self.mnemonic.as_ref().map(|m| m.to_string())
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}
