//! Sui: ed25519 under coin type 784.
//!
//! The scheme flag for ed25519 is `0x00`; it prefixes the key in both the
//! `suiprivkey` secret and the hashed address.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// ed25519 signature scheme flag.
const ED25519_FLAG: u8 = 0x00;

/// Sui mainnet.
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Sui",
    curve: Curve::Ed25519,
    purpose: 44,
    coin: 784,
    secret: SecretEncoding::Bech32 {
        hrp: "suiprivkey",
        flag: ED25519_FLAG,
    },
    address: AddressEncoding::Blake2bHex { flag: ED25519_FLAG },
};
