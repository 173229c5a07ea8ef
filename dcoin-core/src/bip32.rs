//! BIP-32 child key derivation on secp256k1.
//!
//! Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use zeroize::Zeroizing;

use crate::curve::{public_key_of, Curve};
use crate::error::{Error, Result};
use crate::extended_key::Node;
use crate::hash::hmac_sha512;
use crate::hdpath::ChildIndex;

/// Parse 32 bytes as a scalar strictly below the group order.
fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    Scalar::from_repr(FieldBytes::from(*bytes)).into()
}

/// `(IL + k) mod n` for a child at `depth`.
///
/// `IL >= n`, an out-of-range parent or a zero sum is an invalid child.
fn add_tweak(il: &[u8; 32], parent: &[u8; 32], depth: u8) -> Result<Zeroizing<[u8; 32]>> {
    let invalid = || Error::InvalidChildKey { depth };
    let il = Zeroizing::new(parse_scalar(il).ok_or_else(invalid)?);
    let parent = Zeroizing::new(parse_scalar(parent).ok_or_else(invalid)?);
    let sum = Zeroizing::new(*il + *parent);
    if bool::from(sum.is_zero()) {
        return Err(invalid());
    }

    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&sum.to_bytes());
    Ok(key)
}

/// Master node: `HMAC-SHA512(Key = "Bitcoin seed", Data = seed)`.
///
/// Fails when the left half is zero or not below n.
pub(crate) fn master(seed: &[u8]) -> Result<Node> {
    let node = Node::split(&hmac_sha512(Curve::Secp256k1.master_hmac_key(), &[seed]));
    match parse_scalar(&node.key) {
        Some(k) if !bool::from(k.is_zero()) => Ok(node),
        _ => Err(Error::InvalidChildKey { depth: 0 }),
    }
}

/// Derive the child of `parent` at `index`; `depth` is the child's depth.
///
/// Hardened: `HMAC-SHA512(Key = c, Data = 0x00 || k || i)`.
/// Normal:   `HMAC-SHA512(Key = c, Data = serP(k*G) || i)`.
/// The child key is `(IL + k) mod n`. `IL >= n` or a zero child is
/// reported as [`Error::InvalidChildKey`]; no next index is tried.
pub(crate) fn derive_child(parent: &Node, index: ChildIndex, depth: u8) -> Result<Node> {
    let raw = index.to_u32().to_be_bytes();
    let out = if index.is_hardened() {
        hmac_sha512(&*parent.chain_code, &[&[0x00], &*parent.key, &raw])
    } else {
        let public = public_key_of(&parent.key, Curve::Secp256k1)?.to_bytes();
        hmac_sha512(&*parent.chain_code, &[&public, &raw])
    };
    let mut child = Node::split(&out);
    child.key = add_tweak(&child.key, &parent.key, depth)?;
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const N: [u8; 32] = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const N_MINUS_1: [u8; 32] =
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140");

    fn scalar_bytes(value: u8) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        bytes
    }

    fn walk(path: &[u32]) -> Node {
        let mut node = master(&SEED).unwrap();
        for (i, raw) in path.iter().enumerate() {
            node = derive_child(&node, ChildIndex::from_raw(*raw), (i + 1) as u8).unwrap();
        }
        node
    }

    #[test]
    fn test_vector1_master() {
        let node = walk(&[]);
        assert_eq!(
            *node.key,
            hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35")
        );
        assert_eq!(
            *node.chain_code,
            hex!("873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508")
        );
    }

    #[test]
    fn test_vector1_hardened_child() {
        let node = walk(&[0x8000_0000]);
        assert_eq!(
            *node.key,
            hex!("edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea")
        );
        assert_eq!(
            *node.chain_code,
            hex!("47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141")
        );
    }

    #[test]
    fn test_vector1_normal_child() {
        let node = walk(&[0x8000_0000, 1]);
        assert_eq!(
            *node.key,
            hex!("3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368")
        );
        assert_eq!(
            *node.chain_code,
            hex!("2a7857631386ba23dacac34180dd1983734e444fdbf774041578e9b6adb37c19")
        );
    }

    #[test]
    fn test_vector1_deep_path() {
        let node = walk(&[0x8000_0000, 1, 0x8000_0002, 2, 1_000_000_000]);
        assert_eq!(
            *node.key,
            hex!("471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8")
        );
        assert_eq!(
            *node.chain_code,
            hex!("c783e67b921d2beb8f6b389cc646d7263b4145701dadd2161548a8b078e65e9e")
        );
    }

    #[test]
    fn test_parse_scalar_bounds() {
        // n, the group order, is out of range; n - 1 is the largest valid scalar
        assert!(parse_scalar(&N).is_none());
        assert!(parse_scalar(&N_MINUS_1).is_some());
    }

    #[test]
    fn test_add_tweak_il_at_order() {
        // IL == n is not reduced to zero
        assert!(matches!(
            add_tweak(&N, &scalar_bytes(1), 3),
            Err(Error::InvalidChildKey { depth: 3 })
        ));
    }

    #[test]
    fn test_add_tweak_zero_child() {
        // (n - 1) + 1 wraps to zero
        assert!(matches!(
            add_tweak(&N_MINUS_1, &scalar_bytes(1), 4),
            Err(Error::InvalidChildKey { depth: 4 })
        ));
    }

    #[test]
    fn test_add_tweak_wraps_mod_n() {
        assert_eq!(*add_tweak(&scalar_bytes(1), &scalar_bytes(1), 1).unwrap(), scalar_bytes(2));
        assert_eq!(*add_tweak(&N_MINUS_1, &scalar_bytes(2), 1).unwrap(), scalar_bytes(1));
    }
}
