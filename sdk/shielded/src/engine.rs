//! The witness engine: the circuit-facing hash surface.
//!
//! In the web client this sits behind a WASM module fetched once per session;
//! here it is an explicitly-owned handle whose process-wide instance is
//! lazily initialized through [`tokio::sync::OnceCell`], so concurrent
//! callers share one initialization instead of racing. Construction warms the
//! MiMC round-constant table.

use std::sync::Arc;

use ark_bn254::Fr;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::field::{field_from_bytes, field_from_hex, field_to_bytes, field_to_hex};
use crate::{ShieldedError, mimc};

static SHARED: OnceCell<Arc<WitnessEngine>> = OnceCell::const_new();

pub struct WitnessEngine {
    _priv: (),
}

/// The public witness fields needed to request an ownership proof. Hex keys
/// match the JSON shape the WASM module returns to the web client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessOutput {
    pub owner_pk: String,
    pub commitment: String,
    pub nullifier: String,
    pub blinded_proxy: String,
}

impl WitnessEngine {
    pub fn new() -> Self {
        let _ = mimc::constants();
        Self { _priv: () }
    }

    /// The process-wide engine instance.
    pub async fn shared() -> Arc<WitnessEngine> {
        SHARED
            .get_or_init(|| async { Arc::new(WitnessEngine::new()) })
            .await
            .clone()
    }

    // ------------------------------------------------------------------
    // Field-element operations
    // ------------------------------------------------------------------

    /// pk = MiMC_hash3(PK_DOMAIN, spending_key, 0)
    pub fn derive_public_key_field(&self, spending_key: Fr) -> Fr {
        mimc::hash_3(mimc::pk_domain(), spending_key, Fr::from(0u64))
    }

    /// commitment = MiMC_hash3(owner_pk, value, blinding)
    pub fn commitment_field(&self, owner_pk: Fr, value: u64, blinding: Fr) -> Fr {
        mimc::hash_3(owner_pk, Fr::from(value), blinding)
    }

    /// nullifier = MiMC_hash4(NULLIFIER_DOMAIN, spending_key, commitment, position)
    pub fn nullifier_field(&self, spending_key: Fr, commitment: Fr, position: u64) -> Fr {
        mimc::hash_4(
            mimc::nullifier_domain(),
            spending_key,
            commitment,
            Fr::from(position),
        )
    }

    /// blinded_proxy = MiMC_hash3(DELEGATE_DOMAIN, commitment, position)
    pub fn blinded_proxy_field(&self, commitment: Fr, position: u64) -> Fr {
        mimc::hash_3(mimc::delegate_domain(), commitment, Fr::from(position))
    }

    pub fn derive_public_key_bytes(&self, spending_key: &[u8; 32]) -> [u8; 32] {
        field_to_bytes(self.derive_public_key_field(field_from_bytes(spending_key)))
    }

    // ------------------------------------------------------------------
    // Hex operations (the shape the web client consumes)
    // ------------------------------------------------------------------

    pub fn derive_public_key(&self, spending_key_hex: &str) -> Result<String, ShieldedError> {
        let sk = field_from_hex(spending_key_hex)?;
        Ok(field_to_hex(self.derive_public_key_field(sk)))
    }

    pub fn compute_commitment(
        &self,
        owner_pk_hex: &str,
        value: u64,
        blinding_hex: &str,
    ) -> Result<String, ShieldedError> {
        let owner_pk = field_from_hex(owner_pk_hex)?;
        let blinding = field_from_hex(blinding_hex)?;
        Ok(field_to_hex(self.commitment_field(owner_pk, value, blinding)))
    }

    pub fn compute_nullifier(
        &self,
        spending_key_hex: &str,
        commitment_hex: &str,
        position: u64,
    ) -> Result<String, ShieldedError> {
        let sk = field_from_hex(spending_key_hex)?;
        let commitment = field_from_hex(commitment_hex)?;
        Ok(field_to_hex(self.nullifier_field(sk, commitment, position)))
    }

    pub fn compute_blinded_proxy(
        &self,
        commitment_hex: &str,
        position: u64,
    ) -> Result<String, ShieldedError> {
        let commitment = field_from_hex(commitment_hex)?;
        Ok(field_to_hex(self.blinded_proxy_field(commitment, position)))
    }

    /// Compute every public witness field in one call.
    pub fn generate_witness(
        &self,
        spending_key_hex: &str,
        value: u64,
        blinding_hex: &str,
        position: u64,
    ) -> Result<WitnessOutput, ShieldedError> {
        let sk = field_from_hex(spending_key_hex)?;
        let blinding = field_from_hex(blinding_hex)?;

        let owner_pk = self.derive_public_key_field(sk);
        let commitment = self.commitment_field(owner_pk, value, blinding);
        let nullifier = self.nullifier_field(sk, commitment, position);
        let blinded_proxy = self.blinded_proxy_field(commitment, position);

        Ok(WitnessOutput {
            owner_pk: field_to_hex(owner_pk),
            commitment: field_to_hex(commitment),
            nullifier: field_to_hex(nullifier),
            blinded_proxy: field_to_hex(blinded_proxy),
        })
    }
}

impl Default for WitnessEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_surface_matches_field_surface() {
        let engine = WitnessEngine::new();
        let sk_hex = "11".repeat(32);

        let pk_hex = engine.derive_public_key(&sk_hex).unwrap();
        assert_eq!(pk_hex.len(), 64);

        let pk_field = engine.derive_public_key_field(field_from_hex(&sk_hex).unwrap());
        assert_eq!(pk_hex, field_to_hex(pk_field));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        let engine = WitnessEngine::new();
        assert!(engine.derive_public_key("nothex").is_err());
        assert!(engine.compute_blinded_proxy("aa", 0).is_err());
    }

    #[tokio::test]
    async fn shared_instance_is_memoized() {
        let a = WitnessEngine::shared().await;
        let b = WitnessEngine::shared().await;
        assert!(Arc::ptr_eq(&a, &b));
    }
}
