//! MiMC hash over the BN254 scalar field.
//!
//! This must produce identical outputs to the ownership circuit: x^7 round
//! function, 91 rounds, round constants RC[i] = (i+1)^3 + (i+1), and a
//! sponge that absorbs an arity tag ahead of the inputs. Any divergence here
//! yields witnesses the circuit rejects.

use std::sync::LazyLock;

use ark_bn254::Fr;

/// Rounds for ~256-bit security.
pub const ROUNDS: usize = 91;

/// Domain tag for nullifier derivation.
pub fn nullifier_domain() -> Fr {
    Fr::from(3u64)
}

/// Domain tag for delegated Merkle-path fetching ("DELE").
pub fn delegate_domain() -> Fr {
    Fr::from(0x4445_4c45u64)
}

/// Domain tag for shielded public key derivation ("PK").
pub fn pk_domain() -> Fr {
    Fr::from(0x504bu64)
}

static CONSTANTS: LazyLock<Vec<Fr>> = LazyLock::new(|| {
    (0..ROUNDS as u64)
        .map(|i| {
            let idx = Fr::from(i + 1);
            idx * idx * idx + idx
        })
        .collect()
});

/// The round-constant schedule, materialized once per process.
pub fn constants() -> &'static [Fr] {
    &CONSTANTS
}

/// One round: x -> (x + k + c)^7.
fn round(x: Fr, k: Fr, c: Fr) -> Fr {
    let t = x + k + c;
    let t2 = t * t;
    let t4 = t2 * t2;
    t4 * t2 * t
}

/// Keyed permutation with a trailing key addition.
fn permute(x: Fr, k: Fr) -> Fr {
    let mut state = x;
    for &c in constants() {
        state = round(state, k, c);
    }
    state + k
}

/// Sponge absorption over a zero-initialized state.
fn absorb(inputs: &[Fr]) -> Fr {
    let mut state = Fr::from(0u64);
    for &input in inputs {
        state = permute(state + input, Fr::from(0u64));
    }
    state
}

/// Hash two field elements (Merkle tree pairs).
pub fn hash_2(left: Fr, right: Fr) -> Fr {
    absorb(&[Fr::from(2u64), left, right])
}

/// Hash three field elements.
pub fn hash_3(a: Fr, b: Fr, c: Fr) -> Fr {
    absorb(&[Fr::from(3u64), a, b, c])
}

/// Hash four field elements.
pub fn hash_4(a: Fr, b: Fr, c: Fr, d: Fr) -> Fr {
    absorb(&[Fr::from(4u64), a, b, c, d])
}
