//! Fixed-layout encoders.
//!
//! A Transfer envelope is always 284 bytes:
//! sender(32) + discriminant(4) + data(88) + signature(64) + pubkey(32) + envelope signature(64).

use crate::{
    CodecError, DepositEvent, PrivateTransaction, SignedTransaction, Transaction, TransactionData,
    TransactionType, WithdrawPayload,
};

impl TransactionData {
    /// Encoded size: from(32) + to(32) + amount(8) + nonce(8) + chain_id(8).
    pub const ENCODED_LEN: usize = 88;

    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[0..32].copy_from_slice(&self.from.0);
        out[32..64].copy_from_slice(&self.to.0);
        out[64..72].copy_from_slice(&self.amount.to_le_bytes());
        out[72..80].copy_from_slice(&self.nonce.to_le_bytes());
        out[80..88].copy_from_slice(&self.chain_id.to_le_bytes());
        out
    }
}

impl SignedTransaction {
    /// Encoded size: data(88) + signature(64) + signer_pubkey(32).
    pub const ENCODED_LEN: usize = TransactionData::ENCODED_LEN + 64 + 32;

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.data.encode());
        write_signature(&mut out, &self.signature)?;
        out.extend_from_slice(&self.signer_pubkey);
        Ok(out)
    }
}

impl PrivateTransaction {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_vec(&mut out, &self.proof);
        out.extend_from_slice(&self.nullifier);
        out.extend_from_slice(&self.commitment);
        write_vec(&mut out, &self.ciphertext);
        out.extend_from_slice(&self.ephemeral_key);
        out
    }
}

impl DepositEvent {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(48);
        out.extend_from_slice(&self.to.0);
        out.extend_from_slice(&self.amount.to_le_bytes());
        out.extend_from_slice(&self.l1_seq.to_le_bytes());
        out
    }
}

impl WithdrawPayload {
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(32 + 32 + 8 + 8 + 64 + 32);
        out.extend_from_slice(&self.from.0);
        out.extend_from_slice(&self.to_l1_address);
        out.extend_from_slice(&self.amount.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        write_signature(&mut out, &self.signature)?;
        out.extend_from_slice(&self.signer_pubkey);
        Ok(out)
    }
}

impl Transaction {
    /// Total wire size of a Transfer envelope.
    pub const TRANSFER_ENCODED_LEN: usize = 32 + 4 + SignedTransaction::ENCODED_LEN + 64;

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(Self::TRANSFER_ENCODED_LEN);
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.tx_type.discriminant().to_le_bytes());
        match &self.tx_type {
            TransactionType::Shielded(tx) => out.extend_from_slice(&tx.encode()),
            TransactionType::Transfer(tx) => out.extend_from_slice(&tx.encode()?),
            TransactionType::Deposit(event) => out.extend_from_slice(&event.encode()),
            TransactionType::Withdraw(payload) => out.extend_from_slice(&payload.encode()?),
        }
        write_signature(&mut out, &self.signature)?;
        Ok(out)
    }
}

/// Signatures are fixed 64-byte fields on the wire, never length-prefixed.
fn write_signature(out: &mut Vec<u8>, signature: &[u8]) -> Result<(), CodecError> {
    if signature.len() != 64 {
        return Err(CodecError::Length {
            expected: 64,
            got: signature.len(),
        });
    }
    out.extend_from_slice(signature);
    Ok(())
}

/// Variable-length fields: u64 LE length then raw bytes.
fn write_vec(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountId;

    fn sample_data() -> TransactionData {
        TransactionData {
            from: AccountId([1u8; 32]),
            to: AccountId([2u8; 32]),
            amount: 1_000_000_000,
            nonce: 5,
            chain_id: 1,
        }
    }

    #[test]
    fn data_layout_offsets() {
        let bytes = sample_data().encode();
        assert_eq!(bytes.len(), 88);
        assert_eq!(&bytes[0..32], &[1u8; 32]);
        assert_eq!(&bytes[32..64], &[2u8; 32]);
        assert_eq!(bytes[64..72], 1_000_000_000u64.to_le_bytes());
        assert_eq!(bytes[72..80], 5u64.to_le_bytes());
        assert_eq!(bytes[80..88], 1u64.to_le_bytes());
    }

    #[test]
    fn data_encoding_deterministic() {
        assert_eq!(sample_data().encode(), sample_data().encode());
    }

    #[test]
    fn signed_transaction_is_184_bytes() {
        let signed = SignedTransaction {
            data: sample_data(),
            signature: vec![7u8; 64],
            signer_pubkey: [1u8; 32],
        };
        let bytes = signed.encode().unwrap();
        assert_eq!(bytes.len(), 184);
        assert_eq!(&bytes[88..152], &[7u8; 64][..]);
        assert_eq!(&bytes[152..184], &[1u8; 32][..]);
    }

    #[test]
    fn transfer_envelope_is_284_bytes() {
        let tx = Transaction {
            sender: [1u8; 32],
            tx_type: TransactionType::Transfer(SignedTransaction {
                data: sample_data(),
                signature: vec![7u8; 64],
                signer_pubkey: [1u8; 32],
            }),
            signature: vec![9u8; 64],
        };
        let bytes = tx.encode().unwrap();
        assert_eq!(bytes.len(), Transaction::TRANSFER_ENCODED_LEN);
        assert_eq!(bytes.len(), 284);
        // Discriminant for Transfer is 1, u32 LE at offset 32.
        assert_eq!(bytes[32..36], 1u32.to_le_bytes());
        // Envelope signature trails the payload.
        assert_eq!(&bytes[220..284], &[9u8; 64][..]);
    }

    #[test]
    fn bad_signature_length_rejected() {
        let signed = SignedTransaction {
            data: sample_data(),
            signature: vec![7u8; 63],
            signer_pubkey: [1u8; 32],
        };
        assert!(matches!(
            signed.encode(),
            Err(CodecError::Length {
                expected: 64,
                got: 63
            })
        ));
    }

    #[test]
    fn shielded_payload_length_prefixes() {
        let tx = PrivateTransaction {
            proof: vec![1, 2, 3],
            nullifier: [4u8; 32],
            commitment: [5u8; 32],
            ciphertext: vec![6, 7],
            ephemeral_key: [8u8; 32],
        };
        let bytes = tx.encode();
        assert_eq!(bytes[0..8], 3u64.to_le_bytes());
        assert_eq!(&bytes[8..11], &[1, 2, 3][..]);
        // Nullifier and commitment are fixed-width, no prefix.
        assert_eq!(&bytes[11..43], &[4u8; 32][..]);
        assert_eq!(&bytes[43..75], &[5u8; 32][..]);
        assert_eq!(bytes[75..83], 2u64.to_le_bytes());
    }

    #[test]
    fn discriminants_match_wire_contract() {
        let shielded = TransactionType::Shielded(PrivateTransaction {
            proof: vec![],
            nullifier: [0u8; 32],
            commitment: [0u8; 32],
            ciphertext: vec![],
            ephemeral_key: [0u8; 32],
        });
        let deposit = TransactionType::Deposit(DepositEvent {
            to: AccountId([0u8; 32]),
            amount: 1,
            l1_seq: 1,
        });
        let withdraw = TransactionType::Withdraw(WithdrawPayload {
            from: AccountId([0u8; 32]),
            to_l1_address: [0u8; 32],
            amount: 1,
            nonce: 0,
            signature: vec![0u8; 64],
            signer_pubkey: [0u8; 32],
        });
        assert_eq!(shielded.discriminant(), 0);
        assert_eq!(deposit.discriminant(), 2);
        assert_eq!(withdraw.discriminant(), 3);
    }
}
