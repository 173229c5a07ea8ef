//! Immutable per-network configuration.
//!
//! A backend is nothing more than a [`ChainDescriptor`]: the curve, default
//! path segments and a tag for each of the two encoders. The encoders in
//! [`crate::secret`] and [`crate::address`] dispatch on these tags.

use dcoin_core::Curve;

/// How a leaf private key is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretEncoding {
    /// Wallet Import Format: `Base58Check(version || key || 0x01)`.
    Wif {
        /// Network version byte.
        version: u8,
    },
    /// Lowercase hex of the 32-byte scalar after a fixed prefix.
    Hex {
        /// Text placed before the hex digits (may be empty).
        prefix: &'static str,
    },
    /// `Base58(seed || public key)`, the 64-byte keypair form.
    Base58Keypair,
    /// `Bech32(hrp, flag || seed)`.
    Bech32 {
        /// Human-readable part.
        hrp: &'static str,
        /// Signature scheme flag byte.
        flag: u8,
    },
}

/// How a leaf public key is rendered as an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressEncoding {
    /// Bitcoin-family addresses chosen by purpose: 44 is P2PKH, 49 is
    /// P2SH-wrapped P2WPKH and 84 is native segwit v0.
    Utxo {
        /// P2PKH version byte.
        p2pkh: u8,
        /// P2SH version byte, if the network has P2SH-P2WPKH.
        p2sh: Option<u8>,
        /// Segwit human-readable part, if the network has segwit.
        segwit_hrp: Option<&'static str>,
    },
    /// EIP-55 checksummed `0x` + last 20 bytes of Keccak-256.
    Eip55,
    /// `Base58Check(version || last 20 bytes of Keccak-256)`.
    Tron {
        /// Address version byte.
        version: u8,
    },
    /// Base58 of the raw public key.
    Base58PublicKey,
    /// `0x` + hex of `Blake2b-256(flag || public key)`.
    Blake2bHex {
        /// Signature scheme flag byte.
        flag: u8,
    },
}

impl AddressEncoding {
    /// Whether an address exists for `purpose`.
    ///
    /// Only the Bitcoin family picks its format by purpose; every other
    /// encoding ignores it.
    #[must_use]
    pub const fn supports_purpose(&self, purpose: u32) -> bool {
        match self {
            Self::Utxo {
                p2sh, segwit_hrp, ..
            } => match purpose {
                44 => true,
                49 => p2sh.is_some() && segwit_hrp.is_some(),
                84 => segwit_hrp.is_some(),
                _ => false,
            },
            _ => true,
        }
    }
}

/// Fixed configuration of one supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Human-readable network name.
    pub name: &'static str,
    /// Curve keys are derived on.
    pub curve: Curve,
    /// Default BIP-44 purpose.
    pub purpose: u32,
    /// SLIP-0044 coin type.
    pub coin: u32,
    /// Secret encoder tag.
    pub secret: SecretEncoding,
    /// Address encoder tag.
    pub address: AddressEncoding,
}
