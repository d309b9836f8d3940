//! Deterministic shielded key derivation.
//!
//! The chain is anchored in the wallet's Ed25519 public key, so the same
//! wallet always re-derives the same shielded keys and nothing needs to be
//! persisted:
//!
//! ```text
//! spending_key = SHA-512("ZelanaShieldedSpendingKey" || wallet_pk)[0..32]
//! viewing_key  = SHA-512("ZelanaIVK" || spending_key)[0..32]
//! public_key   = MiMC_hash3(PK_DOMAIN, spending_key, 0)   (via the engine)
//! ```

use sha2::{Digest, Sha512};

use crate::engine::WitnessEngine;

const SPENDING_KEY_DOMAIN: &[u8] = b"ZelanaShieldedSpendingKey";
const VIEWING_KEY_DOMAIN: &[u8] = b"ZelanaIVK";

fn domain_hash(domain: &[u8], input: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    hasher.update(domain);
    hasher.update(input);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..32]);
    out
}

/// Derive the spending key from the wallet's raw Ed25519 public key.
pub fn derive_spending_key(wallet_pk: &[u8; 32]) -> [u8; 32] {
    domain_hash(SPENDING_KEY_DOMAIN, wallet_pk)
}

/// Derive the viewing key (read-only access) from the spending key.
pub fn derive_viewing_key(spending_key: &[u8; 32]) -> [u8; 32] {
    domain_hash(VIEWING_KEY_DOMAIN, spending_key)
}

/// The shielded keypair for one wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldedKeys {
    pub spending_key: [u8; 32],
    pub viewing_key: [u8; 32],
    pub public_key: [u8; 32],
}

impl ShieldedKeys {
    /// Run the full derivation chain for a wallet public key.
    pub fn derive(wallet_pk: &[u8; 32], engine: &WitnessEngine) -> Self {
        let spending_key = derive_spending_key(wallet_pk);
        let viewing_key = derive_viewing_key(&spending_key);
        let public_key = engine.derive_public_key_bytes(&spending_key);
        Self {
            spending_key,
            viewing_key,
            public_key,
        }
    }

    /// Hex shielded address (the public key).
    pub fn address(&self) -> String {
        hex::encode(self.public_key)
    }
}
