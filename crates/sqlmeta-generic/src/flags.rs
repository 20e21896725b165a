//! Flag token lists of the generic layer.

use sqlmeta_core::{FieldFlags, FlagDecoder};

/// Token reported for NOT NULL columns.
pub const NOT_NULL: &str = "not_null";
/// Token reported for primary key columns.
pub const PRIMARY_KEY: &str = "primary_key";

/// Decodes flag token lists. Only nullability and primary key membership
/// are known; every other predicate stays unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenFlags;

impl TokenFlags {
    /// Creates a decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FlagDecoder for TokenFlags {
    type Raw = [String];

    fn decode(&self, raw: &[String]) -> FieldFlags {
        let has = |token: &str| Some(raw.iter().any(|t| t == token));
        FieldFlags {
            not_null: has(NOT_NULL),
            primary_key: has(PRIMARY_KEY),
            ..FieldFlags::unknown()
        }
    }
}
