//! secp256k1 key derivation for Ethereum (BIP-32 / BIP-44)
//!
//! Builds the BIP-32 root extended key from the seed, walks the path with
//! hardened or non-hardened child derivation per component, then encodes
//! the result Ethereum-style: the address is the lower 160 bits of the
//! Keccak-256 hash of the uncompressed public key, rendered with the
//! EIP-55 mixed-case checksum.

use std::str::FromStr;

use bip32::{DerivationPath, XPrv};
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use zeroize::Zeroize;

use crate::core::derive::{expect_coin_type, ChainKeyDeriver};
use crate::core::paths;
use crate::shared::constants::ETHEREUM_COIN_TYPE;
use crate::shared::error::WalletError;
use crate::shared::types::{Chain, KeyPair};

/// secp256k1 key deriver (BIP-32)
pub struct Secp256k1Deriver {
    secp: Secp256k1<All>,
}

impl Secp256k1Deriver {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Deriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainKeyDeriver for Secp256k1Deriver {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn derive_keypair(&self, seed: &[u8], path: &str) -> Result<KeyPair, WalletError> {
        let components = paths::parse_components(path)?;
        expect_coin_type(path, &components, ETHEREUM_COIN_TYPE)?;

        let root = XPrv::new(seed)
            .map_err(|e| WalletError::derivation(format!("Failed to create master key: {}", e)))?;
        let derivation_path = DerivationPath::from_str(path)
            .map_err(|e| WalletError::derivation(format!("Invalid derivation path '{}': {}", path, e)))?;

        let mut child = root;
        for child_number in derivation_path.into_iter() {
            child = child.derive_child(child_number).map_err(|e| {
                WalletError::derivation(format!("Child derivation failed: {}", e))
            })?;
        }

        // An out-of-range scalar surfaces here as an error; the caller keeps
        // its counters untouched and may retry at the next index.
        let mut key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        let secret_key = SecretKey::from_byte_array(key_bytes)
            .map_err(|e| WalletError::derivation(format!("Derived key is invalid: {}", e)))?;

        let public_key = PublicKey::from_secret_key(&self.secp, &secret_key);
        let uncompressed = public_key.serialize_uncompressed();

        // Drop the 0x04 prefix before hashing
        let hash = keccak256(&uncompressed[1..]);
        let address = to_checksum_address(&hash[12..]);
        let private_key = format!("0x{}", hex::encode(key_bytes));
        key_bytes.zeroize();

        Ok(KeyPair {
            public_key: address,
            private_key,
            chain: Chain::Ethereum,
        })
    }
}

/// Keccak-256 hash
fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Render 20 address bytes with the EIP-55 mixed-case checksum
fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut checksummed = String::with_capacity(2 + lower.len());
    checksummed.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if nibble >= 8 {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }
    checksummed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::SeedExpander;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    // Published fixture for the test mnemonic at the default external path
    #[test]
    fn test_known_ethereum_vector() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Secp256k1Deriver::new();
        let keypair = deriver
            .derive_keypair(seed.as_ref(), "m/44'/60'/0'/0/0")
            .unwrap();

        assert_eq!(
            keypair.public_key,
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
        assert_eq!(
            keypair.private_key,
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_keypair_is_deterministic() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Secp256k1Deriver::new();

        let a = deriver.derive_keypair(seed.as_ref(), "m/44'/60'/0'/0'").unwrap();
        let b = deriver.derive_keypair(seed.as_ref(), "m/44'/60'/0'/0'").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_indices_produce_distinct_addresses() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Secp256k1Deriver::new();

        let addresses: Vec<_> = (0..5)
            .map(|i| {
                deriver
                    .derive_keypair(seed.as_ref(), &format!("m/44'/60'/{}'/0'", i))
                    .unwrap()
                    .public_key
            })
            .collect();
        for i in 0..addresses.len() {
            for j in (i + 1)..addresses.len() {
                assert_ne!(addresses[i], addresses[j], "Index {} and {} collided", i, j);
            }
        }
    }

    #[test]
    fn test_address_shape() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Secp256k1Deriver::new();
        let keypair = deriver.derive_keypair(seed.as_ref(), "m/44'/60'/1'/0'").unwrap();

        assert!(keypair.public_key.starts_with("0x"));
        assert_eq!(keypair.public_key.len(), 42);
        assert!(keypair.private_key.starts_with("0x"));
        assert_eq!(keypair.private_key.len(), 66);
        assert_eq!(keypair.chain, deriver.chain());
    }

    #[test]
    fn test_wrong_coin_type_rejected() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Secp256k1Deriver::new();

        let err = deriver
            .derive_keypair(seed.as_ref(), "m/44'/501'/0'/0'")
            .unwrap_err();
        assert!(matches!(err, WalletError::Derivation(_)));
    }

    // EIP-55 reference vectors
    #[test]
    fn test_checksum_address_vectors() {
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];
        for expected in vectors {
            let raw = hex::decode(expected[2..].to_lowercase()).unwrap();
            assert_eq!(to_checksum_address(&raw), expected);
        }
    }
}
