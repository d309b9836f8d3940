//! Canonical signing messages for transfer and withdrawal intents.
//!
//! Users sign a human-readable UTF-8 message instead of raw transaction
//! bytes, so wallet software never mistakes the payload for a native Solana
//! transaction. The sequencer rebuilds the identical string from the request
//! fields and verifies the signature against it, which makes every byte of
//! these templates a wire contract: field order, labels, whitespace and line
//! endings must not change without a protocol version bump.
//!
//! L2 peer addresses render as lowercase hex; L1 destinations render as
//! base58, the alphabet the receiving Solana program expects.

use serde::{Deserialize, Serialize};
use zelana_txcodec::AccountId;

/// Build the message a user signs to authorize an L2 transfer.
///
/// Amounts and nonces render as plain base-10 integers with no separators.
pub fn transfer_message(
    from: &AccountId,
    to: &AccountId,
    amount: u64,
    nonce: u64,
    chain_id: u64,
) -> String {
    format!(
        "Zelana L2 Transfer\n\
         \n\
         From: {}\n\
         To: {}\n\
         Amount: {} lamports\n\
         Nonce: {}\n\
         Chain ID: {}\n\
         \n\
         Sign this message to authorize the transfer.",
        from.to_hex(),
        to.to_hex(),
        amount,
        nonce,
        chain_id,
    )
}

/// Build the message a user signs to authorize a withdrawal to L1.
pub fn withdraw_message(from: &AccountId, to_l1_address: &[u8; 32], amount: u64, nonce: u64) -> String {
    format!(
        "Zelana L2 Withdrawal\n\
         \n\
         From: {}\n\
         To L1: {}\n\
         Amount: {} lamports\n\
         Nonce: {}\n\
         \n\
         Sign this message to authorize the withdrawal.",
        from.to_hex(),
        bs58::encode(to_l1_address).into_string(),
        amount,
        nonce,
    )
}

/// A signed transfer intent, ready for submission to the sequencer API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: [u8; 32],
    pub to: [u8; 32],
    pub amount: u64,
    pub nonce: u64,
    pub chain_id: u64,
    /// Ed25519 signature over the UTF-8 bytes of [`transfer_message`].
    pub signature: Vec<u8>,
    pub signer_pubkey: [u8; 32],
}

/// A signed withdrawal intent, ready for submission to the sequencer API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub from: [u8; 32],
    pub to_l1_address: [u8; 32],
    pub amount: u64,
    pub nonce: u64,
    /// Ed25519 signature over the UTF-8 bytes of [`withdraw_message`].
    pub signature: Vec<u8>,
    pub signer_pubkey: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_message_golden() {
        let from = AccountId([0u8; 32]);
        let to = AccountId([1u8; 32]);
        let msg = transfer_message(&from, &to, 1_000_000_000, 5, 1);

        let expected = "Zelana L2 Transfer\n\
            \n\
            From: 0000000000000000000000000000000000000000000000000000000000000000\n\
            To: 0101010101010101010101010101010101010101010101010101010101010101\n\
            Amount: 1000000000 lamports\n\
            Nonce: 5\n\
            Chain ID: 1\n\
            \n\
            Sign this message to authorize the transfer.";
        assert_eq!(msg, expected);
    }

    #[test]
    fn withdraw_message_renders_l1_address_as_base58() {
        let from = AccountId([0u8; 32]);
        let msg = withdraw_message(&from, &[0u8; 32], 500_000_000, 3);

        // 32 zero bytes in base58 is the Solana system program address.
        let expected = "Zelana L2 Withdrawal\n\
            \n\
            From: 0000000000000000000000000000000000000000000000000000000000000000\n\
            To L1: 11111111111111111111111111111111\n\
            Amount: 500000000 lamports\n\
            Nonce: 3\n\
            \n\
            Sign this message to authorize the withdrawal.";
        assert_eq!(msg, expected);
    }

    #[test]
    fn amounts_render_without_separators() {
        let from = AccountId([0u8; 32]);
        let to = AccountId([0u8; 32]);
        let msg = transfer_message(&from, &to, u64::MAX, u64::MAX, u64::MAX);
        assert!(msg.contains("Amount: 18446744073709551615 lamports"));
        assert!(msg.contains("Nonce: 18446744073709551615"));
    }

    #[test]
    fn transfer_request_json_shape() {
        let req = TransferRequest {
            from: [0u8; 32],
            to: [1u8; 32],
            amount: 10,
            nonce: 0,
            chain_id: 1,
            signature: vec![7u8; 64],
            signer_pubkey: [0u8; 32],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("from").is_some());
        assert!(value.get("chain_id").is_some());
        assert_eq!(value["amount"], 10);
    }
}
