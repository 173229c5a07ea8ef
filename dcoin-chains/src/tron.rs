//! Tron: secp256k1, coin type 195, Base58Check addresses with version 0x41.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// Tron mainnet.
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Tron",
    curve: Curve::Secp256k1,
    purpose: 44,
    coin: 195,
    secret: SecretEncoding::Hex { prefix: "" },
    address: AddressEncoding::Tron { version: 0x41 },
};
