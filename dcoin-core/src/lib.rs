//! # dcoin-core - chain-agnostic HD key derivation
//!
//! The shared engine behind every dcoin chain backend:
//!
//! - [`seed`]: BIP-39 mnemonic validation and PBKDF2-HMAC-SHA512 seed stretching
//! - [`hdpath`]: derivation paths built from [`ChildIndex`] segments
//! - [`extended_key`]: BIP-32 (secp256k1) and SLIP-0010 (ed25519) child derivation
//! - [`encoding`]: Base58, Base58Check, Bech32 and EIP-55 encoders
//! - [`hash`]: SHA-256, RIPEMD-160, Keccak-256, Blake2b-256 and HMAC-SHA512
//!
//! Every operation is a pure function of its inputs. Nothing is cached and
//! secret buffers are wiped when they go out of scope.
//!
//! ```
//! use dcoin_core::{derive_key, derive_seed, Curve, DerivationPath};
//!
//! let seed = derive_seed(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     "",
//! )?;
//! let path: DerivationPath = "m/44'/501'/0'/0'".parse()?;
//! let key = derive_key(&seed, &path, Curve::Ed25519)?;
//! assert_eq!(key.depth(), 4);
//! # Ok::<(), dcoin_core::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![forbid(unsafe_code)]

mod bip32;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod extended_key;
pub mod hash;
pub mod hdpath;
pub mod seed;
mod slip10;

pub use curve::{public_key_of, Curve, PublicKey};
pub use encoding::EncodingError;
pub use error::{Error, Result};
pub use extended_key::{derive_key, ExtendedKey};
pub use hdpath::{ChildIndex, DerivationPath, Index};
#[cfg(feature = "rand")]
pub use seed::generate_mnemonic;
pub use seed::{derive_seed, Seed};
