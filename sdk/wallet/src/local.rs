//! A local Ed25519 keypair implementing the wallet capability.
//!
//! Used by the CLI and by tests; browser wallets satisfy the same trait
//! through their extension adapters. Keypair files use the Solana `id.json`
//! format: a JSON array of 64 bytes, seed followed by public key.

use std::fs;
use std::path::Path;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand_core::{OsRng, TryRngCore};

use crate::{SignatureReply, Wallet, WalletError};

pub struct LocalWallet {
    key: SigningKey,
    address: String,
}

impl LocalWallet {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let key = SigningKey::from_bytes(&seed);
        let address = bs58::encode(key.verifying_key().to_bytes()).into_string();
        Self { key, address }
    }

    /// Generate a wallet from the OS RNG.
    pub fn generate() -> Result<Self, WalletError> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| WalletError::Keystore(format!("system rng unavailable: {e}")))?;
        Ok(Self::from_seed(seed))
    }

    /// Load a keypair from a Solana-format JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let raw = fs::read_to_string(path)?;
        let bytes: Vec<u8> = serde_json::from_str(&raw)?;
        if bytes.len() != 64 {
            return Err(WalletError::Keystore(format!(
                "keypair file holds {} bytes, expected 64",
                bytes.len()
            )));
        }

        let seed: [u8; 32] = bytes[0..32].try_into().expect("length checked");
        let wallet = Self::from_seed(seed);

        // The trailing 32 bytes must be the matching public key.
        if wallet.key.verifying_key().to_bytes() != bytes[32..64] {
            return Err(WalletError::Keystore(
                "public key in file does not match seed".to_string(),
            ));
        }
        Ok(wallet)
    }

    /// Write the keypair in the Solana JSON format, owner-readable only.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WalletError> {
        let mut bytes = self.key.to_bytes().to_vec();
        bytes.extend_from_slice(&self.key.verifying_key().to_bytes());
        fs::write(&path, serde_json::to_string(&bytes)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

impl Wallet for LocalWallet {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &[u8]) -> Result<SignatureReply, WalletError> {
        let signature = self.key.sign(message);
        Ok(SignatureReply::Bytes(signature.to_bytes().to_vec()))
    }
}
