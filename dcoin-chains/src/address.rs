//! Address encoders.

use dcoin_core::encoding::{base58_encode, base58check_encode, eip55_checksum, segwit_encode};
use dcoin_core::hash::{blake2b256, hash160, keccak256};
use dcoin_core::{Curve, PublicKey};

use crate::chain::Chain;
use crate::descriptor::AddressEncoding;
use crate::error::{Error, Result};

/// Render `public_key` as an address on `chain`.
///
/// `purpose` selects the script type on Bitcoin-family chains and is
/// ignored elsewhere.
///
/// # Errors
///
/// - [`Error::CurveMismatch`] if the key is not on the chain's curve
/// - [`Error::UnsupportedPurpose`] if the chain has no format for `purpose`
pub fn encode_address(chain: Chain, purpose: u32, public_key: &PublicKey) -> Result<String> {
    let descriptor = chain.descriptor();
    if public_key.curve() != descriptor.curve {
        return Err(Error::CurveMismatch {
            chain,
            expected: descriptor.curve,
            actual: public_key.curve(),
        });
    }

    match descriptor.address {
        AddressEncoding::Utxo {
            p2pkh,
            p2sh,
            segwit_hrp,
        } => {
            let key_hash = hash160(&public_key.to_bytes());
            match (purpose, p2sh, segwit_hrp) {
                (44, _, _) => Ok(versioned(p2pkh, &key_hash)),
                (49, Some(p2sh), Some(_)) => {
                    // OP_0 PUSH20 <key hash>
                    let mut redeem_script = [0u8; 22];
                    redeem_script[0] = 0x00;
                    redeem_script[1] = 0x14;
                    redeem_script[2..].copy_from_slice(&key_hash);
                    Ok(versioned(p2sh, &hash160(&redeem_script)))
                }
                (84, _, Some(hrp)) => Ok(segwit_encode(hrp, 0, &key_hash)?),
                _ => Err(Error::UnsupportedPurpose { chain, purpose }),
            }
        }
        AddressEncoding::Eip55 => Ok(eip55_checksum(&account_hash(chain, public_key)?)),
        AddressEncoding::Tron { version } => {
            Ok(versioned(version, &account_hash(chain, public_key)?))
        }
        AddressEncoding::Base58PublicKey => Ok(base58_encode(&public_key.to_bytes())),
        AddressEncoding::Blake2bHex { flag } => {
            let mut data = Vec::with_capacity(33);
            data.push(flag);
            data.extend_from_slice(&public_key.to_bytes());
            Ok(format!("0x{}", hex::encode(blake2b256(&data))))
        }
    }
}

/// `Base58Check(version || hash)`.
fn versioned(version: u8, hash: &[u8; 20]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    base58check_encode(&payload)
}

/// Last 20 bytes of Keccak-256 over the uncompressed point without its
/// `0x04` tag.
fn account_hash(chain: Chain, public_key: &PublicKey) -> Result<[u8; 20]> {
    let uncompressed = public_key
        .to_uncompressed_bytes()
        .ok_or(Error::CurveMismatch {
            chain,
            expected: Curve::Secp256k1,
            actual: public_key.curve(),
        })?;
    let hash = keccak256(&uncompressed[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[12..]);
    Ok(out)
}
