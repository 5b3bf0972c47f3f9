//! Peace Wallet Core
//!
//! Deterministic multi-chain HD key-derivation core for Peace Wallet.
//! From one BIP-39 seed phrase it derives an unbounded, reproducible
//! sequence of independent keypairs for two chains:
//!
//! - **Solana**: Ed25519 via SLIP-0010 hardened-only derivation at
//!   `m/44'/501'/{index}'/0'`, base58-encoded keys
//! - **Ethereum**: secp256k1 via BIP-32/BIP-44 at `m/44'/60'/{index}'/0'`,
//!   EIP-55 checksummed address and 0x-hex private key
//!
//! ## Architecture
//!
//! - **Core**: mnemonic service, seed expansion, path building, chain key
//!   derivers, and the session-scoped registry
//! - **Shared**: common types, constants, and errors
//!
//! Nothing is persisted or transmitted: seeds and private keys live only in
//! memory for the lifetime of a [`WalletSession`], and sensitive buffers are
//! zeroized on drop.
//!
//! ## Usage
//!
//! ```rust
//! use peace_wallet_core::{Chain, WalletSession};
//!
//! let mut session = WalletSession::new();
//! session.generate_mnemonic()?;
//!
//! let solana = session.generate_for(Chain::Solana)?;
//! let ethereum = session.generate_for(Chain::Ethereum)?;
//! assert_ne!(solana.public_key, ethereum.public_key);
//! # Ok::<(), peace_wallet_core::WalletError>(())
//! ```

pub mod core;
pub mod shared;

// Re-export the main types for easy access
pub use crate::core::derive::{ChainKeyDeriver, Ed25519Deriver, Secp256k1Deriver};
pub use crate::core::mnemonic::MnemonicService;
pub use crate::core::paths::account_path;
pub use crate::core::seed::SeedExpander;
pub use crate::core::session::WalletSession;
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{Chain, KeyPair, RegistryEntry};

/// Initialize logging for the host application
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init()?;
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
