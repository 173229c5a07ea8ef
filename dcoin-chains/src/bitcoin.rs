//! Bitcoin mainnet and testnet.
//!
//! Keys live on secp256k1 under coin type 0 (mainnet) or 1 (testnet).
//! The purpose picks the script type: 44 for legacy P2PKH, 49 for
//! P2SH-wrapped P2WPKH and 84 (the default) for native segwit v0.

use dcoin_core::Curve;

use crate::descriptor::{AddressEncoding, ChainDescriptor, SecretEncoding};

/// Bitcoin mainnet.
pub const MAINNET: ChainDescriptor = ChainDescriptor {
    name: "Bitcoin",
    curve: Curve::Secp256k1,
    purpose: 84,
    coin: 0,
    secret: SecretEncoding::Wif { version: 0x80 },
    address: AddressEncoding::Utxo {
        p2pkh: 0x00,
        p2sh: Some(0x05),
        segwit_hrp: Some("bc"),
    },
};

/// Bitcoin testnet.
pub const TESTNET: ChainDescriptor = ChainDescriptor {
    name: "Bitcoin Testnet",
    curve: Curve::Secp256k1,
    purpose: 84,
    coin: 1,
    secret: SecretEncoding::Wif { version: 0xef },
    address: AddressEncoding::Utxo {
        p2pkh: 0x6f,
        p2sh: Some(0xc4),
        segwit_hrp: Some("tb"),
    },
};

#[cfg(test)]
mod tests {
    use dcoin_core::{derive_seed, Seed};

    use crate::{resolve, AccountParams, Chain};

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        derive_seed(TEST_MNEMONIC, "").unwrap()
    }

    fn both(chain: Chain, params: AccountParams) -> (String, String) {
        let seed = test_seed();
        let secret = resolve(&seed, chain, &params, true).unwrap();
        let address = resolve(&seed, chain, &params, false).unwrap();
        (secret.to_string(), address.to_string())
    }

    #[test]
    fn test_native_segwit_default() {
        let (secret, address) = both(Chain::Bitcoin, AccountParams::for_chain(Chain::Bitcoin));
        assert_eq!(secret, "L2ZTpLjGhwakVDTpYX5ezgDmWqfvNgCQGfQGkyjLNFs4rKdopJYq");
        assert_eq!(address, "bc1q8d2x9494zdyx6ka8pp4p94xe8jpsef77pzl7td");
    }

    #[test]
    fn test_native_segwit_second_index() {
        let params = AccountParams::for_chain(Chain::Bitcoin).with_index(1);
        let (secret, address) = both(Chain::Bitcoin, params);
        assert_eq!(secret, "KxbnyGea3MvhmYfJ7UYLM4J1XdYCGq46A7yyv68qmGc7jYvC7Dqx");
        assert_eq!(address, "bc1qaqw9zun4ysc4etc7pg36xfxgwzppcl6m0vxatg");
    }

    #[test]
    fn test_legacy() {
        let params = AccountParams::for_chain(Chain::Bitcoin).with_purpose(44);
        let (secret, address) = both(Chain::Bitcoin, params);
        assert_eq!(secret, "L2615eU77SzVNcKM7mcf1H33Jftek5CxYnCPBXTmKNfJ9C4fHiCg");
        assert_eq!(address, "1D1K6N2whXuxnhGzs61W4xswPgECL9zBVh");
    }

    #[test]
    fn test_nested_segwit() {
        let params = AccountParams::for_chain(Chain::Bitcoin).with_purpose(49);
        let (secret, address) = both(Chain::Bitcoin, params);
        assert_eq!(secret, "Kyyq6otfumZF2EfdXcscPyca4Cctjf46N2VjEgSypmhsfq2ZyneB");
        assert_eq!(address, "3B6FhHq6kEWCP9WXZUfRYLN5gRUrm13Eu4");
    }

    #[test]
    fn test_testnet() {
        let (secret, address) = both(
            Chain::BitcoinTestnet,
            AccountParams::for_chain(Chain::BitcoinTestnet),
        );
        assert_eq!(secret, "cNytvrQizEKRpCHWtihioXZKBVRVPBtDSJn4G7d7SbXyuj4y7GJ1");
        assert_eq!(address, "tb1qxasg6rjj2a4xgrj6uxhlkam2l2ceqehkzlnmgk");

        let params = AccountParams::for_chain(Chain::BitcoinTestnet).with_purpose(44);
        let (_, legacy) = both(Chain::BitcoinTestnet, params);
        assert_eq!(legacy, "mi3p3yFTDhod5snx7M8Mj6c99ecfKwmb1o");
    }
}
