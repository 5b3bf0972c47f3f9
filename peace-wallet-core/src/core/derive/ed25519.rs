//! Ed25519 key derivation for Solana (SLIP-0010)
//!
//! SLIP-0010 for this curve supports hardened child derivation only, so
//! every path component is forced hardened regardless of notation. The
//! derived 32-byte key expands into an Ed25519 signing keypair; both halves
//! are base58-encoded the way Solana wallets exchange them.

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::core::derive::{expect_coin_type, ChainKeyDeriver};
use crate::core::paths;
use crate::shared::constants::{HARDENED_OFFSET, PRIVATE_KEY_SIZE, SOLANA_COIN_TYPE};
use crate::shared::error::WalletError;
use crate::shared::types::{Chain, KeyPair};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key derivation constant for the Ed25519 curve
const MASTER_SECRET: &[u8] = b"ed25519 seed";

/// Ed25519 key deriver (SLIP-0010)
#[derive(Debug, Default)]
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    pub fn new() -> Self {
        Self
    }

    /// Walk the hardened index chain from the master key down
    fn derive(
        seed: &[u8],
        indices: &[u32],
    ) -> Result<Zeroizing<[u8; PRIVATE_KEY_SIZE]>, WalletError> {
        let (mut key, mut chain_code) = Self::master_key(seed)?;

        for index in indices {
            let (child_key, child_chain) = Self::child_key(&key, &chain_code, *index)?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// I = HMAC-SHA512(key = "ed25519 seed", data = seed)
    fn master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32]), WalletError> {
        let mut mac = HmacSha512::new_from_slice(MASTER_SECRET)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;
        mac.update(seed);
        Ok(Self::split_digest(&mac.finalize().into_bytes()))
    }

    /// I = HMAC-SHA512(key = chain_code, data = 0x00 || key || ser32(index))
    fn child_key(
        key: &[u8; 32],
        chain_code: &[u8; 32],
        index: u32,
    ) -> Result<([u8; 32], [u8; 32]), WalletError> {
        let mut mac = HmacSha512::new_from_slice(chain_code)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;
        mac.update(&[0u8]);
        mac.update(key);
        mac.update(&index.to_be_bytes());
        Ok(Self::split_digest(&mac.finalize().into_bytes()))
    }

    /// IL is the derived key, IR the next chain code
    fn split_digest(digest: &[u8]) -> ([u8; 32], [u8; 32]) {
        let mut buf = [0u8; 64];
        buf.copy_from_slice(digest);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        buf.zeroize();

        (key, chain_code)
    }
}

impl ChainKeyDeriver for Ed25519Deriver {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn derive_keypair(&self, seed: &[u8], path: &str) -> Result<KeyPair, WalletError> {
        let components = paths::parse_components(path)?;
        expect_coin_type(path, &components, SOLANA_COIN_TYPE)?;

        // No non-hardened derivation exists for this curve; harden everything.
        let indices: Vec<u32> = components
            .iter()
            .map(|(index, _)| index | HARDENED_OFFSET)
            .collect();

        let derived = Self::derive(seed, &indices)?;
        let signing_key = SigningKey::from_bytes(&derived);

        Ok(KeyPair {
            public_key: bs58::encode(signing_key.verifying_key().to_bytes()).into_string(),
            private_key: bs58::encode(signing_key.to_keypair_bytes()).into_string(),
            chain: Chain::Solana,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::SeedExpander;
    use crate::shared::constants::ED25519_KEYPAIR_SIZE;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    // SLIP-0010 test vector 1 for ed25519: seed 000102...0f, chain m/0'
    #[test]
    fn test_slip10_vector_m_0h() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = Ed25519Deriver::derive(&seed, &[HARDENED_OFFSET]).unwrap();

        assert_eq!(
            hex::encode(key.as_ref()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );

        let signing_key = SigningKey::from_bytes(&key);
        assert_eq!(
            hex::encode(signing_key.verifying_key().to_bytes()),
            "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
        );
    }

    #[test]
    fn test_keypair_is_deterministic() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();

        let a = deriver.derive_keypair(seed.as_ref(), "m/44'/501'/0'/0'").unwrap();
        let b = deriver.derive_keypair(seed.as_ref(), "m/44'/501'/0'/0'").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_indices_produce_distinct_keys() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();

        let keys: Vec<_> = (0..5)
            .map(|i| {
                deriver
                    .derive_keypair(seed.as_ref(), &format!("m/44'/501'/{}'/0'", i))
                    .unwrap()
                    .public_key
            })
            .collect();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "Index {} and {} collided", i, j);
            }
        }
    }

    #[test]
    fn test_encoding_shapes() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();
        let keypair = deriver.derive_keypair(seed.as_ref(), "m/44'/501'/0'/0'").unwrap();

        let public = bs58::decode(&keypair.public_key).into_vec().unwrap();
        let private = bs58::decode(&keypair.private_key).into_vec().unwrap();
        assert_eq!(public.len(), PRIVATE_KEY_SIZE);
        assert_eq!(private.len(), ED25519_KEYPAIR_SIZE);
        // Keypair bytes carry the public key in the upper half
        assert_eq!(&private[32..], public.as_slice());
        assert_eq!(keypair.chain, deriver.chain());
    }

    #[test]
    fn test_hardening_is_forced() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();

        let marked = deriver.derive_keypair(seed.as_ref(), "m/44'/501'/0'/0'").unwrap();
        let unmarked = deriver.derive_keypair(seed.as_ref(), "m/44/501/0/0").unwrap();
        assert_eq!(marked, unmarked);
    }

    #[test]
    fn test_wrong_coin_type_rejected() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();

        let err = deriver
            .derive_keypair(seed.as_ref(), "m/44'/60'/0'/0'")
            .unwrap_err();
        assert!(matches!(err, WalletError::Derivation(_)));
    }

    #[test]
    fn test_empty_path_rejected() {
        let seed = SeedExpander::expand(TEST_MNEMONIC, "").unwrap();
        let deriver = Ed25519Deriver::new();
        assert!(deriver.derive_keypair(seed.as_ref(), "m").is_err());
    }
}
