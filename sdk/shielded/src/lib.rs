//! Shielded key derivation and ownership witness construction.
//!
//! Derives the privacy-layer keypair (spending key, viewing key, public key)
//! deterministically from a wallet's Ed25519 public key, and computes the
//! public fields of an ownership witness — commitment, nullifier, blinded
//! proxy — with the same MiMC hash the proving circuit uses. The private
//! witness fields never leave this crate's caller; proof generation itself is
//! delegated to the prover coordinator.

pub mod engine;
pub mod field;
pub mod keys;
pub mod mimc;
pub mod session;
pub mod witness;

pub use engine::{WitnessEngine, WitnessOutput};
pub use keys::{ShieldedKeys, derive_spending_key, derive_viewing_key};
pub use session::{SessionState, ShieldedSession};
pub use witness::{OwnershipProofResult, OwnershipProveRequest, OwnershipWitness, random_blinding};

#[derive(Debug, thiserror::Error)]
pub enum ShieldedError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
    #[error("system rng unavailable: {0}")]
    Rng(String),
}
