//! Derivation path building
//!
//! BIP-44 account paths per chain. The templates are fixed for
//! interoperability with standard wallets:
//!
//! - Solana:   `m/44'/501'/{index}'/0'` (SLIP-0010, every component hardened)
//! - Ethereum: `m/44'/60'/{index}'/0'`

use crate::shared::constants::{HARDENED_OFFSET, PURPOSE};
use crate::shared::error::WalletError;
use crate::shared::types::Chain;

/// Build the account path for a chain at the given account index
///
/// Pure and infallible; account indices stay far below the hardened limit
/// of 2^31 - 1 in practice.
pub fn account_path(chain: Chain, index: u32) -> String {
    format!("m/{}'/{}'/{}'/0'", PURPOSE, chain.coin_type(), index)
}

/// Split a textual path into `(index, hardened)` components
///
/// Accepts both `'` and `h` hardening markers. Rejects empty paths, missing
/// `m` prefixes, non-numeric components, and indices at or above 2^31.
pub(crate) fn parse_components(path: &str) -> Result<Vec<(u32, bool)>, WalletError> {
    let mut parts = path.trim().split('/');
    if parts.next() != Some("m") {
        return Err(WalletError::derivation(format!(
            "Derivation path must start with 'm': '{}'",
            path
        )));
    }

    let mut components = Vec::new();
    for part in parts {
        let (digits, hardened) = match part.strip_suffix('\'').or_else(|| part.strip_suffix('h')) {
            Some(d) => (d, true),
            None => (part, false),
        };
        let index: u32 = digits.parse().map_err(|_| {
            WalletError::derivation(format!("Invalid path component '{}' in '{}'", part, path))
        })?;
        if index >= HARDENED_OFFSET {
            return Err(WalletError::derivation(format!(
                "Path component {} exceeds the hardened index limit",
                index
            )));
        }
        components.push((index, hardened));
    }

    if components.is_empty() {
        return Err(WalletError::derivation(format!(
            "Empty derivation path: '{}'",
            path
        )));
    }
    Ok(components)
}
