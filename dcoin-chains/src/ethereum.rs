//! Ethereum: secp256k1, coin type 60, EIP-55 addresses.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// Ethereum mainnet (and any EVM network sharing its key format).
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Ethereum",
    curve: Curve::Secp256k1,
    purpose: 44,
    coin: 60,
    secret: SecretEncoding::Hex { prefix: "0x" },
    address: AddressEncoding::Eip55,
};
