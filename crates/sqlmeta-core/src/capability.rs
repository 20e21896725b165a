//! Metadata facets a reader can reliably populate.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A metadata facet a driver family can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// AUTO_INCREMENT detection on integer columns.
    DetectAutoincrement,
    /// Primary key detection.
    DetectPrimaryKey,
    /// Column default values.
    DetectColumnDefault,
    /// Exact maximum character length of string columns.
    DetectCharMaxLength,
    /// UNSIGNED detection on numeric columns.
    DetectNumericUnsigned,
    /// Aggregate (GROUP BY) result detection.
    DetectGroupFunction,
}

impl Capability {
    /// All capabilities known to the library.
    pub const BUILTIN: [Self; 6] = [
        Self::DetectAutoincrement,
        Self::DetectCharMaxLength,
        Self::DetectColumnDefault,
        Self::DetectNumericUnsigned,
        Self::DetectPrimaryKey,
        Self::DetectGroupFunction,
    ];

    /// Returns the capability name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DetectAutoincrement => "detect_autoincrement",
            Self::DetectPrimaryKey => "detect_primary_key",
            Self::DetectColumnDefault => "detect_column_default",
            Self::DetectCharMaxLength => "detect_char_max_length",
            Self::DetectNumericUnsigned => "detect_numeric_unsigned",
            Self::DetectGroupFunction => "detect_group_function",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown capability name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability '{0}'")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::BUILTIN
            .into_iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

/// Set of capabilities advertised by a reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    caps: BTreeSet<Capability>,
}

impl Capabilities {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability.
    pub fn add(&mut self, cap: Capability) {
        self.caps.insert(cap);
    }

    /// Returns whether the capability is advertised.
    #[must_use]
    pub fn has(&self, cap: Capability) -> bool {
        self.caps.contains(&cap)
    }

    /// Returns whether the capability with this name is advertised.
    /// Unknown names are never advertised.
    #[must_use]
    pub fn has_named(&self, name: &str) -> bool {
        name.parse().is_ok_and(|cap| self.has(cap))
    }

    /// Iterates over advertised capabilities.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.caps.iter().copied()
    }

    /// Returns the names of advertised capabilities.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Capability::as_str).collect()
    }

    /// Returns the number of advertised capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    /// Returns whether nothing is advertised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            caps: iter.into_iter().collect(),
        }
    }
}
