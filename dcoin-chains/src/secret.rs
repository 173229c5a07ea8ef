//! Secret encoders and their inverses.

use dcoin_core::encoding::{
    base58_decode, base58_encode, base58check_decode, base58check_encode, bech32_decode,
    bech32_encode, hex_decode,
};
use dcoin_core::{public_key_of, EncodingError};
use zeroize::Zeroizing;

use crate::chain::Chain;
use crate::descriptor::SecretEncoding;
use crate::error::{Error, Result};

/// Trailing WIF byte marking a compressed public key.
const WIF_COMPRESSED: u8 = 0x01;

/// Render 32 bytes of private key material in `chain`'s secret format.
pub fn encode_secret(chain: Chain, private_key: &[u8; 32]) -> Result<Zeroizing<String>> {
    let descriptor = chain.descriptor();
    let encoded = match descriptor.secret {
        SecretEncoding::Wif { version } => {
            let mut payload = Zeroizing::new([0u8; 34]);
            payload[0] = version;
            payload[1..33].copy_from_slice(private_key);
            payload[33] = WIF_COMPRESSED;
            base58check_encode(&*payload)
        }
        SecretEncoding::Hex { prefix } => {
            let digits = Zeroizing::new(hex::encode(private_key));
            let mut out = String::with_capacity(prefix.len() + digits.len());
            out.push_str(prefix);
            out.push_str(&digits);
            out
        }
        SecretEncoding::Base58Keypair => {
            let public = public_key_of(private_key, descriptor.curve)?.to_bytes();
            let mut keypair = Zeroizing::new([0u8; 64]);
            keypair[..32].copy_from_slice(private_key);
            keypair[32..].copy_from_slice(&public);
            base58_encode(&*keypair)
        }
        SecretEncoding::Bech32 { hrp, flag } => {
            let mut payload = Zeroizing::new([0u8; 33]);
            payload[0] = flag;
            payload[1..].copy_from_slice(private_key);
            bech32_encode(hrp, &*payload)?
        }
    };
    Ok(Zeroizing::new(encoded))
}

/// Recover the 32-byte private key from a secret in `chain`'s format.
///
/// Version bytes, flags, human-readable parts and embedded public keys
/// are all checked.
pub fn decode_secret(chain: Chain, secret: &str) -> Result<Zeroizing<[u8; 32]>> {
    let descriptor = chain.descriptor();
    let secret = secret.trim();
    let mut key = Zeroizing::new([0u8; 32]);

    match descriptor.secret {
        SecretEncoding::Wif { version } => {
            let payload = Zeroizing::new(base58check_decode(secret)?);
            expect_len(&payload, 34)?;
            expect_byte(version, payload[0])?;
            if payload[33] != WIF_COMPRESSED {
                return Err(Error::InvalidSecret {
                    chain,
                    reason: "uncompressed WIF keys are not supported",
                });
            }
            key.copy_from_slice(&payload[1..33]);
        }
        SecretEncoding::Hex { prefix } => {
            let digits = secret.strip_prefix(prefix).unwrap_or(secret);
            let bytes = Zeroizing::new(hex_decode(digits)?);
            expect_len(&bytes, 32)?;
            key.copy_from_slice(&bytes);
        }
        SecretEncoding::Base58Keypair => {
            let keypair = Zeroizing::new(base58_decode(secret)?);
            expect_len(&keypair, 64)?;
            key.copy_from_slice(&keypair[..32]);
            let public = public_key_of(&key, descriptor.curve)?.to_bytes();
            if public[..] != keypair[32..] {
                return Err(Error::InvalidSecret {
                    chain,
                    reason: "public half does not match the private half",
                });
            }
        }
        SecretEncoding::Bech32 { hrp, flag } => {
            let (found_hrp, payload) = bech32_decode(secret)?;
            let payload = Zeroizing::new(payload);
            if found_hrp != hrp {
                return Err(EncodingError::InvalidHrp(found_hrp).into());
            }
            expect_len(&payload, 33)?;
            expect_byte(flag, payload[0])?;
            key.copy_from_slice(&payload[1..]);
        }
    }

    // Catches out-of-range secp256k1 scalars.
    public_key_of(&key, descriptor.curve)?;
    Ok(key)
}

fn expect_len(data: &[u8], expected: usize) -> core::result::Result<(), EncodingError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(EncodingError::InvalidLength {
            expected,
            actual: data.len(),
        })
    }
}

fn expect_byte(expected: u8, actual: u8) -> core::result::Result<(), EncodingError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EncodingError::InvalidVersion { expected, actual })
    }
}
