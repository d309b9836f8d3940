//! BN254 field element conversions.
//!
//! Hex values are 32-byte little-endian serializations of Fr; the prover
//! coordinator API additionally wants decimal-string renderings.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};

use crate::ShieldedError;

pub fn field_from_bytes(bytes: &[u8; 32]) -> Fr {
    Fr::from_le_bytes_mod_order(bytes)
}

pub fn field_to_bytes(f: Fr) -> [u8; 32] {
    let le_bytes = f.into_bigint().to_bytes_le();
    let mut out = [0u8; 32];
    let n = le_bytes.len().min(32);
    out[..n].copy_from_slice(&le_bytes[..n]);
    out
}

pub fn field_to_hex(f: Fr) -> String {
    hex::encode(field_to_bytes(f))
}

/// Decimal rendering used by the prover coordinator API.
pub fn field_to_decimal(f: Fr) -> String {
    f.into_bigint().to_string()
}

/// Parse a 64-hex-char (optionally `0x`-prefixed) string into 32 bytes.
pub fn parse_hex32(s: &str) -> Result<[u8; 32], ShieldedError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ShieldedError::Length { expected: 32, got })
}

pub fn field_from_hex(s: &str) -> Result<Fr, ShieldedError> {
    Ok(field_from_bytes(&parse_hex32(s)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip_through_field() {
        // Small values survive the modular reduction untouched.
        let mut bytes = [0u8; 32];
        bytes[0] = 0x39;
        bytes[1] = 0x30;
        let f = field_from_bytes(&bytes);
        assert_eq!(f, Fr::from(12345u64));
        assert_eq!(field_to_bytes(f), bytes);
    }

    #[test]
    fn decimal_rendering() {
        assert_eq!(field_to_decimal(Fr::from(1_000_000_000u64)), "1000000000");
    }

    #[test]
    fn hex_parsing_rejects_wrong_width() {
        assert!(matches!(
            parse_hex32("aabb"),
            Err(ShieldedError::Length {
                expected: 32,
                got: 2
            })
        ));
        assert!(parse_hex32("not hex").is_err());
    }

    #[test]
    fn hex_parsing_accepts_0x_prefix() {
        let plain = "11".repeat(32);
        let prefixed = format!("0x{plain}");
        assert_eq!(parse_hex32(&plain).unwrap(), parse_hex32(&prefixed).unwrap());
    }
}
