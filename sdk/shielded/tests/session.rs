use zelana_shielded::{SessionState, ShieldedKeys, ShieldedSession, WitnessEngine};

#[tokio::test]
async fn connect_reaches_ready_with_expected_keys() {
    let session = ShieldedSession::new();
    let wallet_pk = [1u8; 32];

    let handle = session.connect(wallet_pk).await;
    handle.await.unwrap();

    let keys = session.keys().await.expect("keys should be ready");
    let engine = WitnessEngine::shared().await;
    assert_eq!(keys, ShieldedKeys::derive(&wallet_pk, &engine));
    assert_eq!(
        session.shielded_address().await.unwrap(),
        hex::encode(keys.public_key)
    );
}

#[tokio::test]
async fn disconnect_clears_keys() {
    let session = ShieldedSession::new();
    session.connect([1u8; 32]).await.await.unwrap();
    assert!(session.keys().await.is_some());

    session.disconnect().await;
    assert_eq!(session.state().await, SessionState::Disconnected);
    assert!(session.keys().await.is_none());
}

#[tokio::test]
async fn newer_connection_supersedes_inflight_derivation() {
    let session = ShieldedSession::new();
    let first_pk = [1u8; 32];
    let second_pk = [2u8; 32];

    // Fire two connections back to back; whichever way the tasks interleave,
    // only the second wallet's keys may be committed.
    let first = session.connect(first_pk).await;
    let second = session.connect(second_pk).await;
    first.await.unwrap();
    second.await.unwrap();

    let engine = WitnessEngine::shared().await;
    let expected = ShieldedKeys::derive(&second_pk, &engine);
    assert_eq!(session.keys().await, Some(expected));
}

#[tokio::test]
async fn disconnect_during_derivation_discards_result() {
    let session = ShieldedSession::new();
    let handle = session.connect([3u8; 32]).await;
    session.disconnect().await;
    handle.await.unwrap();

    // The derivation either committed before the disconnect bumped the
    // generation (then disconnect cleared it) or was discarded as stale.
    assert_eq!(session.state().await, SessionState::Disconnected);
}
