//! Wallet signing adapter.
//!
//! Wraps a wallet's raw "sign arbitrary message" capability behind a uniform
//! interface and builds the signed transfer/withdrawal requests the sequencer
//! accepts. The wallet's base58 address and the hex L2 account id are the
//! same Ed25519 public key in two alphabets; no derived address mapping
//! exists between the layers.

mod local;

pub use local::LocalWallet;

use log::debug;
use zelana_message::{TransferRequest, WithdrawRequest, transfer_message, withdraw_message};
use zelana_txcodec::AccountId;

/// Chain ID used when the caller does not specify one.
pub const DEFAULT_CHAIN_ID: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("wallet address is not valid base58")]
    BadAddress,
    #[error("decoded wallet address is {0} bytes, expected 32")]
    AddressLength(usize),
    #[error("wallet returned an unsupported signature shape")]
    UnsupportedSignatureShape,
    #[error("signature is {0} bytes, expected 64")]
    SignatureLength(usize),
    #[error("wallet rejected the signing request: {0}")]
    Rejected(String),
    #[error("keystore: {0}")]
    Keystore(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The shapes wallet SDKs return from a message-signing call. Normalization
/// happens in exactly one place instead of duck-typing at every call site.
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureReply {
    /// Raw signature bytes.
    Bytes(Vec<u8>),
    /// `{ signature: <bytes> }` object shape.
    Object { signature: Vec<u8> },
    /// `{ signature: <base58 string> }` object shape.
    ObjectBase58 { signature: String },
}

impl SignatureReply {
    /// Collapse any supported reply shape to raw 64-byte output.
    pub fn normalize(self) -> Result<[u8; 64], WalletError> {
        let bytes = match self {
            SignatureReply::Bytes(bytes) | SignatureReply::Object { signature: bytes } => bytes,
            SignatureReply::ObjectBase58 { signature } => bs58::decode(&signature)
                .into_vec()
                .map_err(|_| WalletError::UnsupportedSignatureShape)?,
        };
        let len = bytes.len();
        bytes
            .try_into()
            .map_err(|_| WalletError::SignatureLength(len))
    }
}

/// The capability a connected wallet exposes: its base58 address and an
/// async raw message signer. Signing latency is user-interaction-bound and
/// unbounded; no retries happen at this layer.
#[allow(async_fn_in_trait)]
pub trait Wallet {
    fn address(&self) -> &str;

    async fn sign_message(&self, message: &[u8]) -> Result<SignatureReply, WalletError>;
}

/// Domain-specific signing built on a [`Wallet`].
pub struct WalletSigner<W> {
    wallet: W,
    pubkey: [u8; 32],
}

impl<W: Wallet> WalletSigner<W> {
    /// Fails fast if the wallet's address does not decode to exactly 32
    /// bytes. The decoded key is cached for the signer's lifetime.
    pub fn new(wallet: W) -> Result<Self, WalletError> {
        let decoded = bs58::decode(wallet.address())
            .into_vec()
            .map_err(|_| WalletError::BadAddress)?;
        let len = decoded.len();
        let pubkey = decoded
            .try_into()
            .map_err(|_| WalletError::AddressLength(len))?;
        Ok(Self { wallet, pubkey })
    }

    /// The wallet's Ed25519 public key, which doubles as the L2 account id.
    pub fn pubkey(&self) -> &[u8; 32] {
        &self.pubkey
    }

    /// Hex rendering, the L2 address space.
    pub fn pubkey_hex(&self) -> String {
        hex::encode(self.pubkey)
    }

    /// Base58 rendering, the L1 Solana address space.
    pub fn pubkey_base58(&self) -> String {
        bs58::encode(self.pubkey).into_string()
    }

    /// Sign raw message bytes, normalizing whatever reply shape the wallet
    /// produces. A rejection propagates immediately.
    pub async fn sign(&self, message: &[u8]) -> Result<[u8; 64], WalletError> {
        self.wallet.sign_message(message).await?.normalize()
    }

    /// Build, sign and assemble a transfer request.
    pub async fn sign_transfer(
        &self,
        to: AccountId,
        amount: u64,
        nonce: u64,
        chain_id: u64,
    ) -> Result<TransferRequest, WalletError> {
        let from = AccountId(self.pubkey);
        let message = transfer_message(&from, &to, amount, nonce, chain_id);
        debug!("signing transfer: to={} amount={}", to.to_hex(), amount);
        let signature = self.sign(message.as_bytes()).await?;

        Ok(TransferRequest {
            from: self.pubkey,
            to: to.0,
            amount,
            nonce,
            chain_id,
            signature: signature.to_vec(),
            signer_pubkey: self.pubkey,
        })
    }

    /// [`Self::sign_transfer`] with [`DEFAULT_CHAIN_ID`].
    pub async fn sign_transfer_default(
        &self,
        to: AccountId,
        amount: u64,
        nonce: u64,
    ) -> Result<TransferRequest, WalletError> {
        self.sign_transfer(to, amount, nonce, DEFAULT_CHAIN_ID).await
    }

    /// Build, sign and assemble a withdrawal request.
    pub async fn sign_withdrawal(
        &self,
        to_l1_address: [u8; 32],
        amount: u64,
        nonce: u64,
    ) -> Result<WithdrawRequest, WalletError> {
        let from = AccountId(self.pubkey);
        let message = withdraw_message(&from, &to_l1_address, amount, nonce);
        debug!(
            "signing withdrawal: to_l1={} amount={}",
            bs58::encode(to_l1_address).into_string(),
            amount
        );
        let signature = self.sign(message.as_bytes()).await?;

        Ok(WithdrawRequest {
            from: self.pubkey,
            to_l1_address,
            amount,
            nonce,
            signature: signature.to_vec(),
            signer_pubkey: self.pubkey,
        })
    }
}
