//! Error types for seed stretching and key derivation.

use thiserror::Error;

use crate::curve::Curve;
use crate::encoding::EncodingError;

/// A convenient Result type alias for dcoin-core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while turning a mnemonic into key material.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The mnemonic failed wordlist or checksum validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] bip39::Error),

    /// Invalid word count for a generated mnemonic.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// A path segment collides with the hardened offset.
    #[error("invalid {name} {value}: must be below 2^31")]
    InvalidPathSegment {
        /// Which segment was rejected (purpose, coin, account, change, index, or segment).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A textual derivation path could not be parsed.
    #[error("invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    /// The derived scalar is zero or not below the secp256k1 group order.
    #[error("derived key at depth {depth} is not a valid secp256k1 scalar")]
    InvalidChildKey {
        /// Depth of the key that failed (0 for the master key).
        depth: u8,
    },

    /// A 32-byte private key supplied from outside is not usable on the curve.
    #[error("invalid {0} private key")]
    InvalidPrivateKey(Curve),

    /// Non-hardened derivation was requested on a hardened-only curve.
    #[error("non-hardened index {index} is not supported on {curve}")]
    UnsupportedDerivation {
        /// Curve the derivation was requested on.
        curve: Curve,
        /// The offending raw index.
        index: u32,
    },

    /// The operation is not defined for this curve.
    #[error("{operation} is not supported on {curve}")]
    UnsupportedCurve {
        /// Curve the operation was requested on.
        curve: Curve,
        /// Short description of the operation.
        operation: &'static str,
    },

    /// Malformed input to an encoder or decoder.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
