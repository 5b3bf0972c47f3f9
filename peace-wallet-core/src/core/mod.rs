//! Core key-derivation functionality
//!
//! Mnemonic handling, seed expansion, path building, chain key derivers,
//! and the session-scoped wallet registry.

pub mod derive;
pub mod mnemonic;
pub mod paths;
pub mod seed;
pub mod session;
