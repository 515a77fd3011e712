use std::{cmp::Ordering, fmt, str::FromStr};

#[cfg(test)]
use proptest_derive::Arbitrary;
#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{VersionFormatError, parse};

/// A language version, e.g. `2.19`.
///
/// Both parts are within `MIN_VALUE..=MAX_VALUE`, which is checked once, on construction.
/// Versions order by major part, then by minor part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
#[cfg_attr(test, derive(Arbitrary))]
pub struct LanguageVersion {
    #[cfg_attr(test, proptest(strategy = "0..=LanguageVersion::MAX_VALUE"))]
    major: u32,
    #[cfg_attr(test, proptest(strategy = "0..=LanguageVersion::MAX_VALUE"))]
    minor: u32,
}

impl LanguageVersion {
    pub const MIN_VALUE: u32 = 0;
    pub const MAX_VALUE: u32 = i32::MAX as u32;

    /// Build a version from its parts.
    ///
    /// # Panics
    ///
    /// If either part is greater than [`Self::MAX_VALUE`]. Use [`parse`] for untrusted input.
    pub fn new(major: u32, minor: u32) -> Self {
        assert!(
            Self::in_range(major),
            "major version {major} is not between {} and {}",
            Self::MIN_VALUE,
            Self::MAX_VALUE
        );
        assert!(
            Self::in_range(minor),
            "minor version {minor} is not between {} and {}",
            Self::MIN_VALUE,
            Self::MAX_VALUE
        );
        Self { major, minor }
    }

    pub(crate) fn in_range(part: u32) -> bool {
        (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&part)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }
}

impl Ord for LanguageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
    }
}

impl PartialOrd for LanguageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for LanguageVersion {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for LanguageVersion {
    type Error = VersionFormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}
