//! Wallet-connection lifecycle for shielded keys.
//!
//! Keys are recomputed on every wallet connection and cleared when the wallet
//! changes. A generation counter guards the async derivation: if the wallet
//! changes mid-derivation, the stale task's result is discarded silently
//! rather than overwriting the newer wallet's keys — showing the user an
//! error for a wallet they already left would be misleading.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::engine::WitnessEngine;
use crate::keys::{ShieldedKeys, derive_spending_key, derive_viewing_key};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Disconnected,
    Deriving,
    Ready(ShieldedKeys),
    Error(String),
}

struct Inner {
    state: SessionState,
    generation: u64,
}

/// Per-wallet shielded key session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ShieldedSession {
    inner: Arc<Mutex<Inner>>,
}

impl ShieldedSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::Disconnected,
                generation: 0,
            })),
        }
    }

    /// Start deriving keys for a newly connected wallet. Returns the task
    /// handle so callers can await completion; the session state moves to
    /// `Ready` or `Error` unless a newer connection superseded this one.
    pub async fn connect(&self, wallet_pk: [u8; 32]) -> JoinHandle<()> {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = SessionState::Deriving;
            inner.generation
        };

        let session = self.clone();
        tokio::spawn(async move {
            let spending_key = derive_spending_key(&wallet_pk);
            let viewing_key = derive_viewing_key(&spending_key);

            let engine = WitnessEngine::shared().await;
            let result = engine
                .derive_public_key(&hex::encode(spending_key))
                .and_then(|pk_hex| crate::field::parse_hex32(&pk_hex));

            let mut inner = session.inner.lock().await;
            if inner.generation != generation {
                info!("discarding stale shielded derivation (wallet changed)");
                return;
            }

            inner.state = match result {
                Ok(public_key) => SessionState::Ready(ShieldedKeys {
                    spending_key,
                    viewing_key,
                    public_key,
                }),
                Err(e) => {
                    warn!("shielded key derivation failed: {e}");
                    SessionState::Error(e.to_string())
                }
            };
        })
    }

    /// Clear keys; any in-flight derivation becomes stale.
    pub async fn disconnect(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state = SessionState::Disconnected;
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    pub async fn keys(&self) -> Option<ShieldedKeys> {
        match &self.inner.lock().await.state {
            SessionState::Ready(keys) => Some(keys.clone()),
            _ => None,
        }
    }

    /// Hex shielded address, once keys are ready.
    pub async fn shielded_address(&self) -> Option<String> {
        self.keys().await.map(|keys| keys.address())
    }
}

impl Default for ShieldedSession {
    fn default() -> Self {
        Self::new()
    }
}
