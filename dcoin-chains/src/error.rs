//! Error types for chain backends.

use dcoin_core::{Curve, EncodingError};
use thiserror::Error;

use crate::chain::Chain;

/// A convenient Result type alias for dcoin-chains operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while resolving a secret or an address.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Seed, path or encoding failure from the derivation engine.
    #[error(transparent)]
    Core(#[from] dcoin_core::Error),

    /// The chain has no address format for this purpose.
    #[error("{chain} has no address format for purpose {purpose}")]
    UnsupportedPurpose {
        /// Chain the address was requested for.
        chain: Chain,
        /// The rejected purpose.
        purpose: u32,
    },

    /// A key on the wrong curve was handed to a chain encoder.
    #[error("{chain} expects a {expected} key, got {actual}")]
    CurveMismatch {
        /// Chain doing the encoding.
        chain: Chain,
        /// Curve the chain is configured for.
        expected: Curve,
        /// Curve of the key that was supplied.
        actual: Curve,
    },

    /// A chain identifier did not match any supported chain.
    #[error("unknown chain {0:?}")]
    UnknownChain(String),

    /// A secret string decoded but does not describe a usable key.
    #[error("invalid {chain} secret: {reason}")]
    InvalidSecret {
        /// Chain the secret was decoded for.
        chain: Chain,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl From<EncodingError> for Error {
    fn from(err: EncodingError) -> Self {
        Self::Core(err.into())
    }
}
