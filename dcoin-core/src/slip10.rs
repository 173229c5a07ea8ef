//! SLIP-0010 ed25519 key derivation.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::extended_key::Node;
use crate::hash::hmac_sha512;
use crate::hdpath::ChildIndex;

/// Master node: `HMAC-SHA512(Key = "ed25519 seed", Data = seed)`.
pub(crate) fn master(seed: &[u8]) -> Node {
    Node::split(&hmac_sha512(Curve::Ed25519.master_hmac_key(), &[seed]))
}

/// Hardened child: `HMAC-SHA512(Key = c, Data = 0x00 || k || i)`.
///
/// Every 32-byte string is a valid ed25519 seed, so the left half is
/// used as-is.
pub(crate) fn derive_child(parent: &Node, index: ChildIndex) -> Result<Node> {
    if !index.is_hardened() {
        return Err(Error::UnsupportedDerivation {
            curve: Curve::Ed25519,
            index: index.to_u32(),
        });
    }
    let raw = index.to_u32().to_be_bytes();
    let out = hmac_sha512(&*parent.chain_code, &[&[0x00], &*parent.key, &raw]);
    Ok(Node::split(&out))
}
