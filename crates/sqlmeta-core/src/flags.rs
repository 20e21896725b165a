//! Named predicates decoded from driver field flags.
//!
//! Drivers expose column flags either as a bitmask or as a list of string
//! tokens. A [`FlagDecoder`] turns either into the same [`FieldFlags`]
//! surface. Predicates a driver has no representation for stay `None`:
//! reporting them as `false` would assert metadata nobody measured.

/// Flag predicates of one result field. `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    /// The column is declared NOT NULL.
    pub not_null: Option<bool>,
    /// The column is part of the primary key.
    pub primary_key: Option<bool>,
    /// The column is AUTO_INCREMENT.
    pub auto_increment: Option<bool>,
    /// The column is UNSIGNED.
    pub unsigned: Option<bool>,
    /// The column is an ENUM.
    pub is_enum: Option<bool>,
    /// The column is a SET.
    pub is_set: Option<bool>,
    /// The field is an aggregate (GROUP BY) result.
    pub group: Option<bool>,
}

impl FieldFlags {
    /// Returns flags with every predicate unknown.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            not_null: None,
            primary_key: None,
            auto_increment: None,
            unsigned: None,
            is_enum: None,
            is_set: None,
            group: None,
        }
    }

    /// Returns whether the column is known to be NOT NULL.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        self.not_null == Some(true)
    }

    /// Returns whether the column is known to be part of the primary key.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key == Some(true)
    }

    /// Returns whether the column is known to be an ENUM.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.is_enum == Some(true)
    }

    /// Returns whether the column is known to be a SET.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.is_set == Some(true)
    }
}

/// Decodes a driver-shaped flag representation.
pub trait FlagDecoder {
    /// Raw flag representation reported by the driver.
    type Raw: ?Sized;

    /// Decodes raw flags into named predicates.
    fn decode(&self, raw: &Self::Raw) -> FieldFlags;
}
