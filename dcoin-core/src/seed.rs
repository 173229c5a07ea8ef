//! BIP-39 seed derivation.
//!
//! A [`Seed`] is the 64-byte root of every key tree. It is produced by
//! stretching a checksum-validated mnemonic with PBKDF2-HMAC-SHA512.

use core::fmt;

use bip39::Mnemonic;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::Result;
#[cfg(feature = "rand")]
use crate::error::Error;

/// PBKDF2 iteration count fixed by BIP-39.
const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix fixed by BIP-39; the passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte BIP-39 seed, wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    /// Seed length in bytes.
    pub const LEN: usize = 64;

    /// Wrap raw seed bytes, e.g. a published test vector.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// The seed bytes.
    ///
    /// **Security Warning**: anyone holding these bytes can derive every
    /// key of the wallet.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Stretch a mnemonic and optional passphrase into a [`Seed`].
///
/// The phrase must consist of English wordlist words with a valid checksum.
/// Any passphrase is accepted; it is NFKD-normalised before use.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`](crate::Error::InvalidMnemonic) if the
/// phrase fails wordlist or checksum validation.
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    // Mnemonic wipes its word indices on drop.
    let parsed: Mnemonic = mnemonic.parse()?;
    let password = Zeroizing::new(parsed.to_string());
    tracing::debug!(
        words = parsed.word_count(),
        with_passphrase = !passphrase.is_empty(),
        "stretching mnemonic"
    );

    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.extend(passphrase.nfkd());

    let mut seed = Seed([0u8; 64]);
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed.0);
    Ok(seed)
}

/// Generate a fresh English mnemonic of `word_count` words.
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] unless `word_count` is 12, 15, 18,
/// 21 or 24.
#[cfg(feature = "rand")]
pub fn generate_mnemonic(word_count: usize) -> Result<Zeroizing<String>> {
    if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
        return Err(Error::InvalidWordCount(word_count));
    }
    let mnemonic = Mnemonic::generate(word_count)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}
