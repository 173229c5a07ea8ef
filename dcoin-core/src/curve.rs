//! Curve families and public key computation.

use core::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::error::{Error, Result};

/// The elliptic curve family a derivation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp256k1 with BIP-32 derivation (hardened and normal children).
    Secp256k1,
    /// ed25519 with SLIP-0010 derivation (hardened children only).
    Ed25519,
}

impl Curve {
    /// HMAC key used to compute the master key from a seed.
    #[inline]
    #[must_use]
    pub const fn master_hmac_key(self) -> &'static [u8] {
        match self {
            Self::Secp256k1 => b"Bitcoin seed",
            Self::Ed25519 => b"ed25519 seed",
        }
    }

    /// Whether non-hardened child derivation is defined on this curve.
    #[inline]
    #[must_use]
    pub const fn supports_normal_derivation(self) -> bool {
        matches!(self, Self::Secp256k1)
    }

    /// Lowercase curve name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A public key on one of the supported curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// secp256k1 point.
    Secp256k1(k256::PublicKey),
    /// ed25519 point.
    Ed25519(VerifyingKey),
}

impl PublicKey {
    /// Curve this key lives on.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        match self {
            Self::Secp256k1(_) => Curve::Secp256k1,
            Self::Ed25519(_) => Curve::Ed25519,
        }
    }

    /// Canonical byte form: 33-byte compressed SEC1 for secp256k1,
    /// 32-byte compressed Edwards point for ed25519.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Secp256k1(pk) => pk.to_encoded_point(true).as_bytes().to_vec(),
            Self::Ed25519(pk) => pk.to_bytes().to_vec(),
        }
    }

    /// 65-byte uncompressed SEC1 form (`0x04 || x || y`), secp256k1 only.
    #[must_use]
    pub fn to_uncompressed_bytes(&self) -> Option<[u8; 65]> {
        match self {
            Self::Secp256k1(pk) => {
                let point = pk.to_encoded_point(false);
                let mut out = [0u8; 65];
                out.copy_from_slice(point.as_bytes());
                Some(out)
            }
            Self::Ed25519(_) => None,
        }
    }

    /// Canonical bytes as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Compute the public key for 32 bytes of private key material.
///
/// secp256k1 multiplies the generator by the scalar; ed25519 expands the
/// 32-byte seed into a signing key the RFC 8032 way.
pub fn public_key_of(private_key: &[u8; 32], curve: Curve) -> Result<PublicKey> {
    match curve {
        Curve::Secp256k1 => {
            let secret = k256::SecretKey::from_slice(private_key)
                .map_err(|_| Error::InvalidPrivateKey(curve))?;
            Ok(PublicKey::Secp256k1(secret.public_key()))
        }
        Curve::Ed25519 => {
            let signing_key = SigningKey::from_bytes(private_key);
            Ok(PublicKey::Ed25519(signing_key.verifying_key()))
        }
    }
}
