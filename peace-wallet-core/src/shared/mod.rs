//! Shared types, constants, and errors
//!
//! Common definitions used throughout the key-derivation core.

pub mod constants;
pub mod error;
pub mod types;
