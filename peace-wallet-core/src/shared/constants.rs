//! Constants for the key-derivation core
//!
//! This module contains all constants used throughout the derivation engine.

// BIP-44 path layout
pub const PURPOSE: u32 = 44;
pub const SOLANA_COIN_TYPE: u32 = 501;
pub const ETHEREUM_COIN_TYPE: u32 = 60;
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// BIP-39 defaults
pub const ENTROPY_SIZE: usize = 16; // 128 bits -> 12 words
pub const MNEMONIC_WORD_COUNT: usize = 12;
pub const SEED_SIZE: usize = 64;

// Key material sizes
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const CHAIN_CODE_SIZE: usize = 32;
pub const ED25519_KEYPAIR_SIZE: usize = 64;
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;
pub const ADDRESS_SIZE: usize = 20;
