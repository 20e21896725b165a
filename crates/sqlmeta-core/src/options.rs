//! Reader configuration.

use serde::{Deserialize, Serialize};

use crate::reconcile::DuplicateAliasPolicy;

/// Options shared by every metadata reader.
///
/// Deserializable so an embedding application can keep it in its own
/// configuration file; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Memoize resolved metadata per raw query text.
    pub static_cache: bool,
    /// Tie-break for duplicate aliases with matching definitions.
    pub duplicate_alias_policy: DuplicateAliasPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            static_cache: true,
            duplicate_alias_policy: DuplicateAliasPolicy::default(),
        }
    }
}

impl ReaderOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the metadata cache.
    #[must_use]
    pub const fn static_cache(mut self, enabled: bool) -> Self {
        self.static_cache = enabled;
        self
    }

    /// Sets the duplicate alias policy.
    #[must_use]
    pub const fn duplicate_alias_policy(mut self, policy: DuplicateAliasPolicy) -> Self {
        self.duplicate_alias_policy = policy;
        self
    }
}
