//! Account parameters and path assembly.

use dcoin_core::{DerivationPath, Index};

use crate::chain::Chain;
use crate::error::Result;

/// The caller-chosen BIP-44 segments of a leaf key, before the hardened
/// offset.
///
/// The coin type is not among them: it is fixed per chain and always
/// taken from the chain's descriptor. Values are checked when the path is
/// assembled, so a bad segment is reported before any key material is
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountParams {
    /// BIP-44 purpose (44, 49, 84, ...).
    pub purpose: u32,
    /// Account number.
    pub account: u32,
    /// Change branch.
    pub change: u32,
    /// Address index.
    pub index: u32,
}

impl AccountParams {
    /// The chain's default purpose with account, change and index all zero.
    #[must_use]
    pub const fn for_chain(chain: Chain) -> Self {
        Self {
            purpose: chain.descriptor().purpose,
            account: 0,
            change: 0,
            index: 0,
        }
    }

    /// Set the purpose.
    #[must_use]
    pub const fn with_purpose(mut self, purpose: u32) -> Self {
        self.purpose = purpose;
        self
    }

    /// Set the account.
    #[must_use]
    pub const fn with_account(mut self, account: u32) -> Self {
        self.account = account;
        self
    }

    /// Set the change branch.
    #[must_use]
    pub const fn with_change(mut self, change: u32) -> Self {
        self.change = change;
        self
    }

    /// Set the address index.
    #[must_use]
    pub const fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Assemble `m/purpose'/coin'/account'/change'/index'` with `chain`'s
    /// coin type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPathSegment` naming the first segment at or above 2^31.
    pub fn derivation_path(&self, chain: Chain) -> Result<DerivationPath> {
        Ok(DerivationPath::bip44_hardened(
            Index::new("purpose", self.purpose)?,
            Index::new("coin", chain.descriptor().coin)?,
            Index::new("account", self.account)?,
            Index::new("change", self.change)?,
            Index::new("index", self.index)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let params = AccountParams::for_chain(Chain::Sui);
        assert_eq!(params.purpose, 44);
        assert_eq!(
            params.derivation_path(Chain::Sui).unwrap().to_string(),
            "m/44'/784'/0'/0'/0'"
        );
    }

    #[test]
    fn test_builders() {
        let params = AccountParams::for_chain(Chain::Bitcoin)
            .with_purpose(49)
            .with_account(2)
            .with_change(1)
            .with_index(7);
        assert_eq!(
            params.derivation_path(Chain::Bitcoin).unwrap().to_string(),
            "m/49'/0'/2'/1'/7'"
        );
    }

    #[test]
    fn test_each_segment_is_validated() {
        let base = AccountParams::for_chain(Chain::Ethereum);
        let cases = [
            ("purpose", AccountParams { purpose: 0x8000_0000, ..base }),
            ("account", AccountParams { account: 0x8000_0000, ..base }),
            ("change", AccountParams { change: 0x8000_0000, ..base }),
            ("index", AccountParams { index: u32::MAX, ..base }),
        ];
        for (expected, params) in cases {
            match params.derivation_path(Chain::Ethereum) {
                Err(Error::Core(dcoin_core::Error::InvalidPathSegment { name, .. })) => {
                    assert_eq!(name, expected);
                }
                other => panic!("{expected}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_largest_segment_accepted() {
        let params = AccountParams::for_chain(Chain::Solana).with_index(0x7fff_ffff);
        assert!(params.derivation_path(Chain::Solana).is_ok());
    }

    #[test]
    fn test_coin_comes_from_chain() {
        // The same parameters land under each chain's own coin type.
        let params = AccountParams::for_chain(Chain::Sui).with_index(4);
        for chain in Chain::ALL {
            let path = params.derivation_path(chain).unwrap();
            let coin = path.indices()[1];
            assert!(coin.is_hardened());
            assert_eq!(coin.index().get(), chain.descriptor().coin, "{chain}");
        }
    }
}
