//! The closed set of supported chains.

use core::fmt;
use core::str::FromStr;

use crate::descriptor::ChainDescriptor;
use crate::error::Error;
use crate::{bitcoin, dogecoin, ethereum, solana, sui, tron};

/// A supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// Bitcoin mainnet.
    Bitcoin,
    /// Bitcoin testnet.
    BitcoinTestnet,
    /// Dogecoin mainnet.
    Dogecoin,
    /// Ethereum and EVM-compatible networks.
    Ethereum,
    /// Tron mainnet.
    Tron,
    /// Solana mainnet.
    Solana,
    /// Sui mainnet.
    Sui,
}

impl Chain {
    /// Every supported chain, in listing order.
    pub const ALL: [Self; 7] = [
        Self::Bitcoin,
        Self::BitcoinTestnet,
        Self::Dogecoin,
        Self::Ethereum,
        Self::Tron,
        Self::Solana,
        Self::Sui,
    ];

    /// Static configuration of this chain.
    #[inline]
    #[must_use]
    pub const fn descriptor(self) -> &'static ChainDescriptor {
        match self {
            Self::Bitcoin => &bitcoin::MAINNET,
            Self::BitcoinTestnet => &bitcoin::TESTNET,
            Self::Dogecoin => &dogecoin::MAINNET,
            Self::Ethereum => &ethereum::MAINNET,
            Self::Tron => &tron::MAINNET,
            Self::Solana => &solana::MAINNET,
            Self::Sui => &sui::MAINNET,
        }
    }

    /// Short identifier, e.g. `btc` or `sol`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bitcoin => "btc",
            Self::BitcoinTestnet => "btc-testnet",
            Self::Dogecoin => "doge",
            Self::Ethereum => "eth",
            Self::Tron => "trx",
            Self::Solana => "sol",
            Self::Sui => "sui",
        }
    }

    /// Human-readable name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Chain {
    type Err = Error;

    /// Accepts the short identifier or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = slug(s);
        Self::ALL
            .into_iter()
            .find(|chain| wanted == chain.id() || wanted == slug(chain.name()))
            .ok_or_else(|| Error::UnknownChain(s.to_owned()))
    }
}

fn slug(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(' ', "-")
}
