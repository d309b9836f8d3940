//! Binary codec for Zelana L2 transactions.
//!
//! The sequencer deserializes submitted transactions with a fixed struct
//! layout: every integer is little-endian, fixed-width fields carry no length
//! prefix, and only genuinely variable-length fields (shielded proof and
//! ciphertext bytes) are written as a u64 LE length followed by raw bytes.
//! The offsets here are a wire contract shared with the sequencer; reordering
//! a field breaks compatibility.

use serde::{Deserialize, Serialize};

mod encode;
mod hexutil;

pub use hexutil::{bytes_to_hex, hex_to_bytes, hex_to_bytes32, hex_to_bytes64};

/// Errors raised by the codec. Length errors signal caller bugs (a signature
/// that is not 64 bytes), hex errors signal malformed user input.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
}

/// The L2 account identifier: the raw bytes of the holder's Solana Ed25519
/// public key. There is no separate L2 identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        Ok(Self(hex_to_bytes32(s)?))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The payload a user signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: u64,
    pub nonce: u64,
    /// Replay protection ID (e.g. 1 for Mainnet, 2 for Devnet)
    pub chain_id: u64,
}

/// The authenticated wrapper around TransactionData.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub data: TransactionData,
    /// The Ed25519 signature of the serialized `data`. Always 64 bytes.
    pub signature: Vec<u8>,
    /// The raw public key of the signer.
    pub signer_pubkey: [u8; 32],
}

/// A shielded transaction: proof plus the public values the circuit exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateTransaction {
    pub proof: Vec<u8>,
    pub nullifier: [u8; 32],
    pub commitment: [u8; 32],
    /// Encrypted note data for the recipient.
    pub ciphertext: Vec<u8>,
    /// Ephemeral public key for note decryption.
    pub ephemeral_key: [u8; 32],
}

/// A deposit event detected on L1 (Solana) and bridged to L2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositEvent {
    pub to: AccountId,
    pub amount: u64,
    pub l1_seq: u64,
}

/// A withdrawal moving funds back to L1, in its binary wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawPayload {
    pub from: AccountId,
    pub to_l1_address: [u8; 32],
    pub amount: u64,
    pub nonce: u64,
    /// Always 64 bytes.
    pub signature: Vec<u8>,
    pub signer_pubkey: [u8; 32],
}

/// The enum for all inputs to the L2 State Machine. The wire discriminant is
/// the variant index as a u32 LE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionType {
    /// A private note spend with a ZK proof.
    Shielded(PrivateTransaction),

    /// A standard transfer submitted by a user.
    Transfer(SignedTransaction),

    /// A deposit event bridged from L1.
    Deposit(DepositEvent),

    /// A withdrawal request to move funds back to L1.
    Withdraw(WithdrawPayload),
}

impl TransactionType {
    /// Wire discriminant of the active variant.
    pub fn discriminant(&self) -> u32 {
        match self {
            TransactionType::Shielded(_) => 0,
            TransactionType::Transfer(_) => 1,
            TransactionType::Deposit(_) => 2,
            TransactionType::Withdraw(_) => 3,
        }
    }
}

/// The top-level submission envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: [u8; 32],
    pub tx_type: TransactionType,
    /// Envelope signature. Always 64 bytes.
    pub signature: Vec<u8>,
}
