//! Textual encodings for addresses and secrets.
//!
//! Every encoder here is a pure function. Decoders exist so encoded output
//! can be checked against its source; the derivation path never needs them.

use bech32::primitives::decode::{CheckedHrpstring, CheckedHrpstringError};
use bech32::{Bech32, Fe32, Hrp};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::hash::{double_sha256, keccak256};

/// Errors raised by the encoders and decoders in this module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodingError {
    /// Input contains characters outside the Base58 alphabet.
    #[error("invalid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// The embedded checksum does not match the payload.
    #[error("checksum mismatch")]
    InvalidChecksum,

    /// Decoded data has the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// Input is not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A version or flag byte does not match the expected one.
    #[error("invalid version byte: expected {expected:#04x}, got {actual:#04x}")]
    InvalidVersion {
        /// Expected version byte.
        expected: u8,
        /// Version byte found in the input.
        actual: u8,
    },

    /// Unexpected or malformed Bech32 human-readable part.
    #[error("invalid human-readable part {0:?}")]
    InvalidHrp(String),

    /// Witness version outside 0..=16.
    #[error("invalid witness version {0}")]
    InvalidWitnessVersion(u8),

    /// Bech32 encoding failure.
    #[error("bech32 encode: {0}")]
    Bech32Encode(#[from] bech32::EncodeError),

    /// Malformed Bech32 string or checksum, including Bech32m input.
    #[error("bech32 decode: {0}")]
    Bech32Decode(#[from] CheckedHrpstringError),

    /// Segwit address encoding failure.
    #[error("segwit encode: {0}")]
    SegwitEncode(#[from] bech32::segwit::EncodeError),

    /// Malformed segwit address.
    #[error("segwit decode: {0}")]
    SegwitDecode(#[from] bech32::segwit::DecodeError),
}

/// Result alias for encoding operations.
pub type Result<T> = core::result::Result<T, EncodingError>;

/// Encode bytes as plain Base58 (Bitcoin alphabet).
#[inline]
#[must_use]
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode plain Base58.
pub fn base58_decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(encoded).into_vec()?)
}

/// Encode `payload` with a trailing 4-byte double-SHA-256 checksum.
///
/// Version bytes are part of `payload`.
#[must_use]
pub fn base58check_encode(payload: &[u8]) -> String {
    // payload may be a WIF key
    let mut data = Zeroizing::new(Vec::with_capacity(payload.len() + 4));
    data.extend_from_slice(payload);
    let checksum = double_sha256(payload);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(&*data).into_string()
}

/// Decode Base58Check and verify the checksum, returning the full payload.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data = base58_decode(encoded)?;
    if data.len() < 4 {
        return Err(EncodingError::InvalidLength {
            expected: 4,
            actual: data.len(),
        });
    }

    let split = data.len() - 4;
    let computed = double_sha256(&data[..split]);
    if data[split..] != computed[..4] {
        return Err(EncodingError::InvalidChecksum);
    }
    data.truncate(split);
    Ok(data)
}

fn parse_hrp(hrp: &str) -> Result<Hrp> {
    Hrp::parse(hrp).map_err(|_| EncodingError::InvalidHrp(hrp.to_owned()))
}

/// Encode bytes as Bech32 (BIP-173 checksum) under `hrp`.
pub fn bech32_encode(hrp: &str, data: &[u8]) -> Result<String> {
    Ok(bech32::encode::<Bech32>(parse_hrp(hrp)?, data)?)
}

/// Decode a Bech32 string into its lowercase human-readable part and data.
///
/// Only the BIP-173 checksum is accepted; Bech32m strings are rejected.
pub fn bech32_decode(encoded: &str) -> Result<(String, Vec<u8>)> {
    let checked = CheckedHrpstring::new::<Bech32>(encoded)?;
    Ok((checked.hrp().to_lowercase(), checked.byte_iter().collect()))
}

/// Encode a segwit address (Bech32 for v0, Bech32m for v1 and up).
pub fn segwit_encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    let version = Fe32::try_from(witness_version)
        .map_err(|_| EncodingError::InvalidWitnessVersion(witness_version))?;
    Ok(bech32::segwit::encode(parse_hrp(hrp)?, version, program)?)
}

/// Decode a segwit address into (hrp, witness version, witness program).
pub fn segwit_decode(encoded: &str) -> Result<(String, u8, Vec<u8>)> {
    let (hrp, version, program) = bech32::segwit::decode(encoded)?;
    Ok((hrp.to_lowercase(), version.to_u8(), program))
}

/// Decode hex, tolerating an optional `0x` prefix.
pub fn hex_decode(encoded: &str) -> Result<Vec<u8>> {
    let digits = encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded);
    Ok(hex::decode(digits)?)
}

/// EIP-55 mixed-case checksum encoding of a 20-byte account address.
#[must_use]
pub fn eip55_checksum(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
