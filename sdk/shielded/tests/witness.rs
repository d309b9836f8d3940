use zelana_shielded::{WitnessEngine, derive_spending_key, derive_viewing_key};

#[test]
fn aggregate_witness_matches_individual_calls() {
    let engine = WitnessEngine::new();

    let sk_hex = "aa".repeat(32);
    let blinding_hex = "bb".repeat(32);
    let value = 1_000_000_000u64;
    let position = 4u64;

    let owner_pk = engine.derive_public_key(&sk_hex).unwrap();
    let commitment = engine
        .compute_commitment(&owner_pk, value, &blinding_hex)
        .unwrap();
    let nullifier = engine
        .compute_nullifier(&sk_hex, &commitment, position)
        .unwrap();
    let blinded_proxy = engine.compute_blinded_proxy(&commitment, position).unwrap();

    let aggregate = engine
        .generate_witness(&sk_hex, value, &blinding_hex, position)
        .unwrap();

    assert_eq!(aggregate.owner_pk, owner_pk);
    assert_eq!(aggregate.commitment, commitment);
    assert_eq!(aggregate.nullifier, nullifier);
    assert_eq!(aggregate.blinded_proxy, blinded_proxy);
}

#[test]
fn witness_fields_are_fixed_width_hex() {
    let engine = WitnessEngine::new();
    let out = engine
        .generate_witness(&"01".repeat(32), 5, &"02".repeat(32), 0)
        .unwrap();

    for field in [&out.owner_pk, &out.commitment, &out.nullifier, &out.blinded_proxy] {
        assert_eq!(field.len(), 64);
        assert!(field.bytes().all(|b| b.is_ascii_hexdigit()));
    }
}

#[test]
fn key_chain_is_deterministic_and_sensitive() {
    let wallet_pk = [0x5au8; 32];

    let sk = derive_spending_key(&wallet_pk);
    let vk = derive_viewing_key(&sk);
    assert_eq!(sk, derive_spending_key(&wallet_pk));
    assert_eq!(vk, derive_viewing_key(&sk));

    let mut flipped = wallet_pk;
    flipped[31] ^= 0x80;
    assert_ne!(sk, derive_spending_key(&flipped));
}

#[test]
fn witness_json_uses_camel_case_keys() {
    let engine = WitnessEngine::new();
    let out = engine
        .generate_witness(&"01".repeat(32), 5, &"02".repeat(32), 0)
        .unwrap();

    let json = serde_json::to_value(&out).unwrap();
    assert!(json.get("ownerPk").is_some());
    assert!(json.get("blindedProxy").is_some());
    assert!(json.get("blinded_proxy").is_none());
}
