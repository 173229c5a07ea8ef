//! Dogecoin mainnet: secp256k1, coin type 3, legacy P2PKH only.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// Dogecoin mainnet.
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Dogecoin",
    curve: Curve::Secp256k1,
    purpose: 44,
    coin: 3,
    secret: SecretEncoding::Wif { version: 0x9e },
    address: AddressEncoding::Utxo {
        p2pkh: 0x1e,
        p2sh: None,
        segwit_hrp: None,
    },
};
