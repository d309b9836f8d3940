//! Lowercase hex helpers.
//!
//! Decoding rejects odd-length input and non-hex characters. Fixed-width
//! variants additionally reject the wrong decoded length and accept an
//! optional `0x` prefix.

use crate::CodecError;

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(s)?)
}

pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], CodecError> {
    fixed::<32>(s)
}

pub fn hex_to_bytes64(s: &str) -> Result<[u8; 64], CodecError> {
    fixed::<64>(s)
}

fn fixed<const N: usize>(s: &str) -> Result<[u8; N], CodecError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CodecError::Length { expected: N, got })
}
