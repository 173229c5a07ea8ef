//! Solana: ed25519 under coin type 501.
//!
//! The secret is the 64-byte keypair (seed then public key) in Base58, the
//! form wallet apps import; the address is the Base58 public key.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// Solana mainnet.
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Solana",
    curve: Curve::Ed25519,
    purpose: 44,
    coin: 501,
    secret: SecretEncoding::Base58Keypair,
    address: AddressEncoding::Base58PublicKey,
};
