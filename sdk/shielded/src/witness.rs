//! Ownership witness assembly and the prover-coordinator wire types.
//!
//! The witness bundles the private inputs (spending key, value, blinding,
//! position) with the public outputs the circuit exposes. Only the public
//! fields and the resulting proof ever leave the client; the coordinator
//! receives field elements as decimal strings on `POST /v2/ownership/prove`.

use ark_bn254::Fr;
use rand_core::{OsRng, TryRngCore};
use serde::{Deserialize, Serialize};

use crate::ShieldedError;
use crate::engine::WitnessEngine;
use crate::field::field_to_decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipWitness {
    /// Private: spending key.
    pub spending_key: Fr,
    /// Private: note value in lamports.
    pub note_value: u64,
    /// Private: note blinding factor.
    pub note_blinding: Fr,
    /// Private: position in the commitment tree.
    pub note_position: u64,
    /// Public: note commitment.
    pub commitment: Fr,
    /// Public: nullifier.
    pub nullifier: Fr,
    /// Public: blinded proxy.
    pub blinded_proxy: Fr,
}

impl OwnershipWitness {
    /// Compute all public outputs from the private inputs.
    pub fn from_private_inputs(
        engine: &WitnessEngine,
        spending_key: Fr,
        note_value: u64,
        note_blinding: Fr,
        note_position: u64,
    ) -> Self {
        let owner_pk = engine.derive_public_key_field(spending_key);
        let commitment = engine.commitment_field(owner_pk, note_value, note_blinding);
        let nullifier = engine.nullifier_field(spending_key, commitment, note_position);
        let blinded_proxy = engine.blinded_proxy_field(commitment, note_position);

        Self {
            spending_key,
            note_value,
            note_blinding,
            note_position,
            commitment,
            nullifier,
            blinded_proxy,
        }
    }

    /// Sanity-check the public outputs against the private inputs before
    /// requesting a proof.
    pub fn verify(&self, engine: &WitnessEngine) -> bool {
        let owner_pk = engine.derive_public_key_field(self.spending_key);
        let commitment = engine.commitment_field(owner_pk, self.note_value, self.note_blinding);
        let nullifier = engine.nullifier_field(self.spending_key, commitment, self.note_position);
        let blinded_proxy = engine.blinded_proxy_field(commitment, self.note_position);

        commitment == self.commitment
            && nullifier == self.nullifier
            && blinded_proxy == self.blinded_proxy
    }

    /// The JSON payload for the prover coordinator.
    pub fn prove_request(&self) -> OwnershipProveRequest {
        OwnershipProveRequest {
            spending_key: field_to_decimal(self.spending_key),
            note_value: self.note_value.to_string(),
            note_blinding: field_to_decimal(self.note_blinding),
            note_position: self.note_position.to_string(),
            commitment: field_to_decimal(self.commitment),
            nullifier: field_to_decimal(self.nullifier),
            blinded_proxy: field_to_decimal(self.blinded_proxy),
        }
    }
}

/// Request body for `POST /v2/ownership/prove`. Field elements travel as
/// decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipProveRequest {
    pub spending_key: String,
    pub note_value: String,
    pub note_blinding: String,
    pub note_position: String,
    pub commitment: String,
    pub nullifier: String,
    pub blinded_proxy: String,
}

/// Response from the prover coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipProofResult {
    /// Groth16 proof bytes, hex encoded.
    pub proof_bytes: String,
    /// Public witness bytes, hex encoded.
    pub public_witness_bytes: String,
    pub commitment: String,
    pub nullifier: String,
    pub blinded_proxy: String,
    pub proving_time_ms: u64,
}

/// Fresh note blinding factor from the OS RNG.
pub fn random_blinding() -> Result<[u8; 32], ShieldedError> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ShieldedError::Rng(e.to_string()))?;
    Ok(bytes)
}
