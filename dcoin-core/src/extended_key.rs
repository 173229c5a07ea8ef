//! Extended keys and the curve derivation engine.
//!
//! [`ExtendedKey`] pairs 32 bytes of private key material with a chain code
//! at some depth of the key tree. The curve decides how children are
//! derived: BIP-32 for secp256k1, SLIP-0010 (hardened only) for ed25519.

use core::fmt;

use zeroize::Zeroizing;

use crate::curve::{public_key_of, Curve, PublicKey};
use crate::encoding::base58check_encode;
use crate::error::{Error, Result};
use crate::hash::hash160;
use crate::hdpath::{ChildIndex, DerivationPath};
use crate::seed::Seed;
use crate::{bip32, slip10};

/// BIP-32 mainnet private extended key version (`xprv`).
const XPRV_VERSION: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

/// Key material and chain code produced by one HMAC step.
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Node {
    pub(crate) key: Zeroizing<[u8; 32]>,
    pub(crate) chain_code: Zeroizing<[u8; 32]>,
}

impl Node {
    /// Split an HMAC-SHA512 output into `(IL, IR)`.
    pub(crate) fn split(out: &[u8; 64]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&out[..32]);
        chain_code.copy_from_slice(&out[32..]);
        Self { key, chain_code }
    }
}

/// A private extended key on either supported curve.
///
/// Private material and chain code are wiped on drop.
#[derive(Clone)]
pub struct ExtendedKey {
    curve: Curve,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    /// Compute the master key for `seed` on `curve`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChildKey`] with depth 0 if the secp256k1
    /// master scalar is out of range.
    pub fn master(seed: &[u8], curve: Curve) -> Result<Self> {
        let node = match curve {
            Curve::Secp256k1 => bip32::master(seed)?,
            Curve::Ed25519 => slip10::master(seed),
        };
        Ok(Self::from_node(node, curve, 0, [0u8; 4], 0))
    }

    fn from_node(
        node: Node,
        curve: Curve,
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: u32,
    ) -> Self {
        Self {
            curve,
            depth,
            parent_fingerprint,
            child_number,
            private_key: node.key,
            chain_code: node.chain_code,
        }
    }

    fn node(&self) -> Node {
        Node {
            key: self.private_key.clone(),
            chain_code: self.chain_code.clone(),
        }
    }

    /// Derive the direct child at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedDerivation`] for a normal index on ed25519
    /// - [`Error::InvalidChildKey`] if the secp256k1 child is unusable
    /// - [`Error::InvalidDerivationPath`] past depth 255
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        let depth = self
            .depth
            .checked_add(1)
            .ok_or_else(|| Error::InvalidDerivationPath("depth exceeds 255".into()))?;

        let parent = self.node();
        let child = match self.curve {
            Curve::Secp256k1 => bip32::derive_child(&parent, index, depth)?,
            Curve::Ed25519 => slip10::derive_child(&parent, index)?,
        };

        Ok(Self::from_node(
            child,
            self.curve,
            depth,
            self.fingerprint()?,
            index.to_u32(),
        ))
    }

    /// Derive every segment of `path` in order, starting from this key.
    ///
    /// On ed25519 the whole path is checked for normal segments before any
    /// HMAC is computed, so a bad path never produces intermediate keys.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        if !self.curve.supports_normal_derivation() {
            if let Some(index) = path.first_normal() {
                return Err(Error::UnsupportedDerivation {
                    curve: self.curve,
                    index: index.to_u32(),
                });
            }
        }

        let mut current = self.clone();
        for index in path.indices() {
            current = current.derive_child(*index)?;
        }
        Ok(current)
    }

    /// Curve this key belongs to.
    #[inline]
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Depth in the tree; 0 for the master key.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// First four bytes of the parent's key identifier.
    #[inline]
    #[must_use]
    pub const fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    /// Raw child number this key was derived at (hardened offset included).
    #[inline]
    #[must_use]
    pub const fn child_number(&self) -> u32 {
        self.child_number
    }

    /// The 32-byte private key material.
    ///
    /// A secp256k1 scalar or an ed25519 seed depending on [`Self::curve`].
    #[inline]
    #[must_use]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// The 32-byte chain code.
    #[inline]
    #[must_use]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Public key for this key's private material.
    pub fn public_key(&self) -> Result<PublicKey> {
        public_key_of(&self.private_key, self.curve)
    }

    /// First four bytes of HASH160 over the serialised public key.
    ///
    /// ed25519 keys are serialised as `0x00 || pubkey`.
    pub fn fingerprint(&self) -> Result<[u8; 4]> {
        let public = self.public_key()?;
        let id = match public {
            PublicKey::Secp256k1(_) => hash160(&public.to_bytes()),
            PublicKey::Ed25519(pk) => {
                let mut data = [0u8; 33];
                data[1..].copy_from_slice(pk.as_bytes());
                hash160(&data)
            }
        };
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&id[..4]);
        Ok(fingerprint)
    }

    /// Serialise as a BIP-32 `xprv` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCurve`] for ed25519 keys, which have no
    /// standard extended serialisation.
    pub fn to_xprv(&self) -> Result<Zeroizing<String>> {
        if self.curve != Curve::Secp256k1 {
            return Err(Error::UnsupportedCurve {
                curve: self.curve,
                operation: "xprv serialisation",
            });
        }

        let mut data = Zeroizing::new(Vec::with_capacity(78));
        data.extend_from_slice(&XPRV_VERSION);
        data.push(self.depth);
        data.extend_from_slice(&self.parent_fingerprint);
        data.extend_from_slice(&self.child_number.to_be_bytes());
        data.extend_from_slice(&*self.chain_code);
        data.push(0x00);
        data.extend_from_slice(&*self.private_key);
        Ok(Zeroizing::new(base58check_encode(&data)))
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("curve", &self.curve)
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .field("private_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Derive the extended key at `path` below the master key of `seed`.
///
/// The result depends only on the three inputs.
pub fn derive_key(seed: &Seed, path: &DerivationPath, curve: Curve) -> Result<ExtendedKey> {
    let master = ExtendedKey::master(seed.as_bytes(), curve)?;
    let key = master.derive_path(path)?;
    tracing::debug!(%curve, %path, depth = key.depth(), "derived extended key");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_seed;
    use hex_literal::hex;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    const TV1_SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    fn test_seed() -> Seed {
        derive_seed(TEST_MNEMONIC, "").unwrap()
    }

    fn path(s: &str) -> DerivationPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_master_from_abandon_seed() {
        let master = derive_key(&test_seed(), &DerivationPath::master(), Curve::Secp256k1).unwrap();
        assert_eq!(
            master.private_key(),
            &hex!("1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67")
        );
        assert_eq!(
            master.chain_code(),
            &hex!("7923408dadd3c7b56eed15567707ae5e5dca089de972e07f3b860450e2a3b70e")
        );
        assert_eq!(
            master.to_xprv().unwrap().as_str(),
            "xprv9s21ZrQH143K3GJpoapnV8SFfukcVBSfeCficPSGfubmSFDxo1kuHnLisriDvSnRRuL2Qrg5ggqHKNVpxR86QEC8w35uxmGoggxtQTPvfUu"
        );
    }

    #[test]
    fn test_vector1_xprv_chain() {
        let master = ExtendedKey::master(&TV1_SEED, Curve::Secp256k1).unwrap();
        assert_eq!(
            master.to_xprv().unwrap().as_str(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );

        let child = master.derive_path(&path("m/0'")).unwrap();
        assert_eq!(
            child.to_xprv().unwrap().as_str(),
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
        );
        assert_eq!(child.parent_fingerprint(), hex!("3442193e"));

        let grandchild = child.derive_child(ChildIndex::normal(1).unwrap()).unwrap();
        assert_eq!(
            grandchild.to_xprv().unwrap().as_str(),
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
        );
    }

    #[test]
    fn test_bip44_bitcoin_leaf() {
        let key = derive_key(&test_seed(), &path("m/44'/0'/0'/0/0"), Curve::Secp256k1).unwrap();
        assert_eq!(key.depth(), 5);
        assert_eq!(key.child_number(), 0);
        assert_eq!(
            key.public_key().unwrap().to_hex(),
            "03aaeb52dd7494c361049de67cc680e83ebcbbbdbeb13637d92cd845f70308af5e"
        );
    }

    #[test]
    fn test_bip44_ethereum_leaf() {
        let key = derive_key(&test_seed(), &path("m/44'/60'/0'/0/0"), Curve::Secp256k1).unwrap();
        assert_eq!(
            key.private_key(),
            &hex!("1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727")
        );
    }

    #[test]
    fn test_fully_hardened_ethereum_leaf() {
        let key = derive_key(&test_seed(), &path("m/44'/60'/0'/0'/0'"), Curve::Secp256k1).unwrap();
        assert_eq!(
            key.private_key(),
            &hex!("cbf330e6b543631f5a5b8c1b6f567660819fec9cc4d86f8131a0a58f76f8c158")
        );
        assert_eq!(key.child_number(), 0x8000_0000);
    }

    #[test]
    fn test_ed25519_vector1_via_engine() {
        let master = ExtendedKey::master(&TV1_SEED, Curve::Ed25519).unwrap();
        let key = master.derive_path(&path("m/0'/1'/2'/2'/1000000000'")).unwrap();
        assert_eq!(
            key.private_key(),
            &hex!("8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793")
        );
        assert_eq!(key.depth(), 5);
    }

    #[test]
    fn test_ed25519_rejects_normal_segment_anywhere() {
        let seed = test_seed();
        for p in ["m/0", "m/44'/0", "m/44'/501'/0'/0/0'", "m/1/2/3"] {
            let err = derive_key(&seed, &path(p), Curve::Ed25519).unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedDerivation { curve: Curve::Ed25519, .. }),
                "{p}"
            );
        }
    }

    #[test]
    fn test_ed25519_has_no_xprv() {
        let key = derive_key(&test_seed(), &path("m/44'/501'"), Curve::Ed25519).unwrap();
        assert!(matches!(key.to_xprv(), Err(Error::UnsupportedCurve { .. })));
    }

    #[test]
    fn test_cross_curve_isolation() {
        let seed = test_seed();
        let p = path("m/44'/0'/0'/0'/0'");
        let secp = derive_key(&seed, &p, Curve::Secp256k1).unwrap();
        let ed = derive_key(&seed, &p, Curve::Ed25519).unwrap();
        assert_ne!(secp.private_key(), ed.private_key());
        assert_ne!(secp.chain_code(), ed.chain_code());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = derive_key(&test_seed(), &DerivationPath::master(), Curve::Ed25519).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&hex::encode(key.private_key())));
    }
}
