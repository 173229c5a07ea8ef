//! BIP-32 derivation paths.
//!
//! Segments are a sum type of normal and hardened indices over a 31-bit
//! [`Index`], so a value that would collide with the hardened offset can
//! never be represented.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// A path segment value below 2^31.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u32);

impl Index {
    /// Largest representable index (2^31 - 1).
    pub const MAX: Self = Self(ChildIndex::HARDENED_OFFSET - 1);

    /// Validate `value` as a segment named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSegment`] if `value >= 2^31`.
    #[inline]
    pub fn new(name: &'static str, value: u32) -> Result<Self> {
        if value >= ChildIndex::HARDENED_OFFSET {
            Err(Error::InvalidPathSegment { name, value })
        } else {
            Ok(Self(value))
        }
    }

    /// The raw 31-bit value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A child index in a derivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) child, raw value `n`.
    Normal(Index),
    /// Hardened child, raw value `n + 2^31`.
    Hardened(Index),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        Index::new("segment", index).map(Self::Normal)
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        Index::new("segment", index).map(Self::Hardened)
    }

    /// Split a raw 32-bit index on the hardened bit.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        if raw >= Self::HARDENED_OFFSET {
            Self::Hardened(Index(raw - Self::HARDENED_OFFSET))
        } else {
            Self::Normal(Index(raw))
        }
    }

    /// Check if this is a hardened index.
    #[inline]
    #[must_use]
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// The index without the hardened flag.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> Index {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Raw value fed into the child derivation HMAC.
    #[inline]
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => i.0,
            Self::Hardened(i) => i.0 + Self::HARDENED_OFFSET,
        }
    }
}

impl From<ChildIndex> for u32 {
    fn from(index: ChildIndex) -> Self {
        index.to_u32()
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDerivationPath(format!("bad segment {s:?}")));
        }
        let value: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidDerivationPath(format!("segment {s:?} out of range")))?;
        if hardened {
            Self::hardened(value)
        } else {
            Self::normal(value)
        }
    }
}

/// A BIP-32 derivation path such as `m/44'/60'/0'/0/0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The empty path (master key).
    #[must_use]
    pub const fn master() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Build a path from its segments.
    #[must_use]
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// The five-level fully hardened path
    /// `m/purpose'/coin'/account'/change'/index'`.
    #[must_use]
    pub fn bip44_hardened(
        purpose: Index,
        coin: Index,
        account: Index,
        change: Index,
        index: Index,
    ) -> Self {
        Self::new(
            [purpose, coin, account, change, index]
                .into_iter()
                .map(ChildIndex::Hardened)
                .collect(),
        )
    }

    /// Parse a path string.
    ///
    /// Accepts an optional leading `m` and the `'`, `h` and `H` hardened
    /// markers: `m/44'/60'/0'/0/0`, `m/44h/60h/0h/0/0`, `44'/60'/0'/0/0`
    /// and `m` alone are all valid.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() {
            return Err(Error::InvalidDerivationPath("empty path".into()));
        }

        let rest = match path.strip_prefix(['m', 'M']) {
            Some("") => return Ok(Self::master()),
            Some(rest) => rest.strip_prefix('/').ok_or_else(|| {
                Error::InvalidDerivationPath(format!("expected '/' after 'm' in {path:?}"))
            })?,
            None => path,
        };

        let indices = rest
            .split('/')
            .map(ChildIndex::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    /// The segments in derivation order.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Number of segments.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether this is the master path.
    #[inline]
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// First non-hardened segment, if any.
    #[must_use]
    pub fn first_normal(&self) -> Option<ChildIndex> {
        self.indices.iter().copied().find(|c| !c.is_hardened())
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<ChildIndex>> for DerivationPath {
    fn from(indices: Vec<ChildIndex>) -> Self {
        Self::new(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bound() {
        assert_eq!(Index::new("account", 0x7fff_ffff).unwrap(), Index::MAX);
        let err = Index::new("account", 0x8000_0000).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPathSegment {
                name: "account",
                value: 0x8000_0000
            }
        ));
    }

    #[test]
    fn test_child_index_raw() {
        assert_eq!(ChildIndex::normal(5).unwrap().to_u32(), 5);
        assert_eq!(ChildIndex::hardened(44).unwrap().to_u32(), 0x8000_002c);
        assert_eq!(ChildIndex::from_raw(0x8000_002c), ChildIndex::hardened(44).unwrap());
        assert_eq!(ChildIndex::from_raw(7), ChildIndex::normal(7).unwrap());
        assert!(ChildIndex::hardened(0x8000_0000).is_err());
    }

    #[test]
    fn test_child_index_parse() {
        assert_eq!("0'".parse::<ChildIndex>().unwrap(), ChildIndex::hardened(0).unwrap());
        assert_eq!("12h".parse::<ChildIndex>().unwrap(), ChildIndex::hardened(12).unwrap());
        assert_eq!("3H".parse::<ChildIndex>().unwrap(), ChildIndex::hardened(3).unwrap());
        assert_eq!("9".parse::<ChildIndex>().unwrap(), ChildIndex::normal(9).unwrap());
        assert!("".parse::<ChildIndex>().is_err());
        assert!("'".parse::<ChildIndex>().is_err());
        assert!("+1".parse::<ChildIndex>().is_err());
        assert!("x".parse::<ChildIndex>().is_err());
        assert!(matches!(
            "2147483648".parse::<ChildIndex>(),
            Err(Error::InvalidPathSegment { .. })
        ));
        assert!(matches!(
            "99999999999".parse::<ChildIndex>(),
            Err(Error::InvalidDerivationPath(_))
        ));
    }

    #[test]
    fn test_parse_path() {
        let path = DerivationPath::parse("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(path.depth(), 5);
        assert_eq!(path.indices()[0], ChildIndex::hardened(44).unwrap());
        assert_eq!(path.indices()[4], ChildIndex::normal(0).unwrap());
        assert_eq!(path.first_normal(), Some(ChildIndex::normal(0).unwrap()));
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
    }

    #[test]
    fn test_parse_variants() {
        let a = DerivationPath::parse("m/44h/501h/0h/0h").unwrap();
        let b = DerivationPath::parse("44'/501'/0'/0'").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.first_normal(), None);
        assert!(DerivationPath::parse("m").unwrap().is_master());
        assert_eq!(DerivationPath::master().to_string(), "m");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DerivationPath::parse("").is_err());
        assert!(DerivationPath::parse("m/").is_err());
        assert!(DerivationPath::parse("m//0").is_err());
        assert!(DerivationPath::parse("m44'").is_err());
        assert!(DerivationPath::parse("m/abc").is_err());
    }

    #[test]
    fn test_bip44_hardened() {
        let i = |v| Index::new("segment", v).unwrap();
        let path = DerivationPath::bip44_hardened(i(44), i(784), i(0), i(0), i(3));
        assert_eq!(path.to_string(), "m/44'/784'/0'/0'/3'");
        assert!(path.indices().iter().all(ChildIndex::is_hardened));
    }
}
