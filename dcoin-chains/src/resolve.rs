//! From seed and account parameters to a secret or an address.

use core::fmt;

use dcoin_core::{derive_key, public_key_of, DerivationPath, ExtendedKey, Seed};
use zeroize::Zeroizing;

use crate::address::encode_address;
use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::params::AccountParams;
use crate::secret::{decode_secret, encode_secret};

/// Derive the leaf key for `params` and render either its secret or its
/// address.
///
/// Every segment of `params` is validated, and on Bitcoin-family chains
/// the purpose is checked against the supported script types, before any
/// derivation work starts.
///
/// # Errors
///
/// Returns `InvalidPathSegment`, `UnsupportedPurpose`, `InvalidChildKey`
/// or an encoding error. No partial output is produced.
pub fn resolve(
    seed: &Seed,
    chain: Chain,
    params: &AccountParams,
    reveal_secret: bool,
) -> Result<Zeroizing<String>> {
    let path = params.derivation_path(chain)?;
    if !reveal_secret {
        check_purpose(chain, params.purpose)?;
    }
    tracing::debug!(%chain, %path, reveal_secret, "resolving");

    let key = leaf_key(seed, chain, &path)?;
    if reveal_secret {
        encode_secret(chain, key.private_key())
    } else {
        let address = encode_address(chain, params.purpose, &key.public_key()?)?;
        Ok(Zeroizing::new(address))
    }
}

/// Everything known about one derived leaf.
#[derive(Clone)]
pub struct DerivedAccount {
    /// Chain the account belongs to.
    pub chain: Chain,
    /// Full derivation path, e.g. `m/44'/501'/0'/0'/0'`.
    pub path: DerivationPath,
    /// Address in the chain's format.
    pub address: String,
    /// Canonical public key bytes as lowercase hex.
    pub public_key_hex: String,
    /// Secret in the chain's format (zeroized on drop).
    pub secret: Zeroizing<String>,
}

impl fmt::Debug for DerivedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedAccount")
            .field("chain", &self.chain)
            .field("path", &self.path.to_string())
            .field("address", &self.address)
            .field("public_key_hex", &self.public_key_hex)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Derive secret, address and public key for `params` in one pass.
pub fn derive_account(seed: &Seed, chain: Chain, params: &AccountParams) -> Result<DerivedAccount> {
    let path = params.derivation_path(chain)?;
    check_purpose(chain, params.purpose)?;

    let key = leaf_key(seed, chain, &path)?;
    let public_key = key.public_key()?;
    Ok(DerivedAccount {
        chain,
        address: encode_address(chain, params.purpose, &public_key)?,
        public_key_hex: public_key.to_hex(),
        secret: encode_secret(chain, key.private_key())?,
        path,
    })
}

/// Derive `count` consecutive address indices starting at `params.index`.
///
/// # Errors
///
/// Fails on the first index that cannot be derived, including one that
/// runs past 2^31 - 1.
pub fn derive_many(
    seed: &Seed,
    chain: Chain,
    params: &AccountParams,
    count: u32,
) -> Result<Vec<DerivedAccount>> {
    (0..count)
        .map(|offset| {
            let params = params.with_index(params.index.saturating_add(offset));
            derive_account(seed, chain, &params)
        })
        .collect()
}

/// Re-derive the address of a decoded secret.
///
/// For a secret produced by [`resolve`] this yields the same address
/// `resolve` gives for the same parameters.
pub fn address_from_secret(chain: Chain, purpose: u32, secret: &str) -> Result<String> {
    let private_key = decode_secret(chain, secret)?;
    let public_key = public_key_of(&private_key, chain.descriptor().curve)?;
    encode_address(chain, purpose, &public_key)
}

fn check_purpose(chain: Chain, purpose: u32) -> Result<()> {
    if chain.descriptor().address.supports_purpose(purpose) {
        Ok(())
    } else {
        Err(Error::UnsupportedPurpose { chain, purpose })
    }
}

fn leaf_key(seed: &Seed, chain: Chain, path: &DerivationPath) -> Result<ExtendedKey> {
    Ok(derive_key(seed, path, chain.descriptor().curve)?)
}
