//! # dcoin-chains - per-network backends for the dcoin engine
//!
//! Each supported network is a [`Chain`] with an immutable
//! [`ChainDescriptor`]: curve, default purpose and coin type, and the rules
//! for rendering a derived key as a secret and as an address.
//!
//! | chain            | curve     | path                | secret            | address                 |
//! |------------------|-----------|---------------------|-------------------|-------------------------|
//! | `btc`            | secp256k1 | `m/84'/0'/…`        | WIF               | P2PKH / P2SH-P2WPKH / bech32 |
//! | `btc-testnet`    | secp256k1 | `m/84'/1'/…`        | WIF               | as above, testnet       |
//! | `doge`           | secp256k1 | `m/44'/3'/…`        | WIF               | P2PKH                   |
//! | `eth`            | secp256k1 | `m/44'/60'/…`       | `0x` hex          | EIP-55                  |
//! | `trx`            | secp256k1 | `m/44'/195'/…`      | hex               | Base58Check `T…`        |
//! | `sol`            | ed25519   | `m/44'/501'/…`      | Base58 keypair    | Base58 public key       |
//! | `sui`            | ed25519   | `m/44'/784'/…`      | `suiprivkey1…`    | Blake2b `0x` hex        |
//!
//! Every segment of the path is hardened.
//!
//! ```
//! use dcoin_chains::{resolve, AccountParams, Chain};
//! use dcoin_core::derive_seed;
//!
//! let seed = derive_seed(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     "",
//! )?;
//! let params = AccountParams::for_chain(Chain::Ethereum);
//! let address = resolve(&seed, Chain::Ethereum, &params, false)?;
//! assert_eq!(address.as_str(), "0xcf6335E1C68B1F7C9D8Aa84c647FFcd9595f0b03");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![forbid(unsafe_code)]

pub mod address;
pub mod bitcoin;
pub mod chain;
pub mod descriptor;
pub mod dogecoin;
pub mod error;
pub mod ethereum;
pub mod params;
pub mod resolve;
pub mod secret;
pub mod solana;
pub mod sui;
pub mod tron;

pub use address::encode_address;
pub use chain::Chain;
pub use descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};
pub use error::{Error, Result};
pub use params::AccountParams;
pub use resolve::{address_from_secret, derive_account, derive_many, resolve, DerivedAccount};
pub use secret::{decode_secret, encode_secret};
