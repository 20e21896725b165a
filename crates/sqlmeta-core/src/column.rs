//! Canonical column definitions.
//!
//! A [`ColumnDefinition`] is the driver-independent description of one
//! output column. Its [`ColumnKind`] is both the canonical type tag and the
//! payload of attributes that only make sense for that type (precision for
//! decimals, maximum length for strings, ...).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Driver-independent type classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalDataType {
    /// Character strings (CHAR, VARCHAR, ENUM, SET).
    String,
    /// Integers of any width.
    Integer,
    /// Approximate numerics (FLOAT, DOUBLE).
    Float,
    /// Exact numerics.
    Decimal,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time (DATETIME, TIMESTAMP).
    Datetime,
    /// Binary and text large objects.
    Blob,
    /// Bit fields.
    Bit,
    /// Boolean.
    Boolean,
    /// Spatial types (GEOMETRY, POINT, POLYGON, ...).
    SpatialGeometry,
    /// Type of an untyped `NULL` literal.
    Null,
}

impl CanonicalDataType {
    /// Returns the label of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Decimal => "DECIMAL",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Datetime => "DATETIME",
            Self::Blob => "BLOB",
            Self::Bit => "BIT",
            Self::Boolean => "BOOLEAN",
            Self::SpatialGeometry => "SPATIAL_GEOMETRY",
            Self::Null => "NULL",
        }
    }

    /// Returns whether the type carries a numeric sign.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }
}

impl fmt::Display for CanonicalDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of integer columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerDetails {
    /// Whether the column is UNSIGNED, if the driver can tell.
    pub unsigned: Option<bool>,
    /// Whether the column is AUTO_INCREMENT, if the driver can tell.
    pub auto_increment: Option<bool>,
}

/// Attributes of exact numeric columns.
///
/// `precision` holds the number of decimals and `scale` the digit width
/// derived from the reported display length. This is the reverse of the
/// usual SQL wording and is kept for compatibility with existing consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalDetails {
    /// Number of digits after the decimal point.
    pub precision: Option<u64>,
    /// Number of significant digits.
    pub scale: Option<u64>,
    /// Whether the column is UNSIGNED, if the driver can tell.
    pub unsigned: Option<bool>,
}

/// Attributes of approximate numeric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatDetails {
    /// Whether the column is UNSIGNED, if the driver can tell.
    pub unsigned: Option<bool>,
}

/// Attributes of character columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringDetails {
    /// Maximum length in bytes as reported by the driver. Multi-byte
    /// character sets inflate it beyond the character count.
    pub character_maximum_length: Option<u64>,
}

/// Attributes of large object columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobDetails {
    /// Maximum length in bytes.
    pub character_octet_length: Option<u64>,
}

/// Canonical type of a column together with its type-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKind {
    /// Character column with its length.
    String(StringDetails),
    /// Integer column with its sign and auto increment attributes.
    Integer(IntegerDetails),
    /// Approximate numeric column.
    Float(FloatDetails),
    /// Exact numeric column with precision and scale.
    Decimal(DecimalDetails),
    /// Large object column with its byte length.
    Blob(BlobDetails),
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time, including timestamps.
    Datetime,
    /// Bit field.
    Bit,
    /// Boolean.
    Boolean,
    /// Spatial geometry.
    SpatialGeometry,
    /// Null literal.
    Null,
}

impl ColumnKind {
    /// Creates the kind for a canonical type with an empty payload.
    #[must_use]
    pub fn new(data_type: CanonicalDataType) -> Self {
        match data_type {
            CanonicalDataType::String => Self::String(StringDetails::default()),
            CanonicalDataType::Integer => Self::Integer(IntegerDetails::default()),
            CanonicalDataType::Float => Self::Float(FloatDetails::default()),
            CanonicalDataType::Decimal => Self::Decimal(DecimalDetails::default()),
            CanonicalDataType::Date => Self::Date,
            CanonicalDataType::Time => Self::Time,
            CanonicalDataType::Datetime => Self::Datetime,
            CanonicalDataType::Blob => Self::Blob(BlobDetails::default()),
            CanonicalDataType::Bit => Self::Bit,
            CanonicalDataType::Boolean => Self::Boolean,
            CanonicalDataType::SpatialGeometry => Self::SpatialGeometry,
            CanonicalDataType::Null => Self::Null,
        }
    }

    /// Returns the canonical type tag.
    #[must_use]
    pub const fn data_type(&self) -> CanonicalDataType {
        match self {
            Self::String(_) => CanonicalDataType::String,
            Self::Integer(_) => CanonicalDataType::Integer,
            Self::Float(_) => CanonicalDataType::Float,
            Self::Decimal(_) => CanonicalDataType::Decimal,
            Self::Date => CanonicalDataType::Date,
            Self::Time => CanonicalDataType::Time,
            Self::Datetime => CanonicalDataType::Datetime,
            Self::Blob(_) => CanonicalDataType::Blob,
            Self::Bit => CanonicalDataType::Bit,
            Self::Boolean => CanonicalDataType::Boolean,
            Self::SpatialGeometry => CanonicalDataType::SpatialGeometry,
            Self::Null => CanonicalDataType::Null,
        }
    }
}

impl From<CanonicalDataType> for ColumnKind {
    fn from(data_type: CanonicalDataType) -> Self {
        Self::new(data_type)
    }
}

/// Resolved metadata of one output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Underlying column name (the alias for computed columns).
    pub name: String,
    /// Externally visible name of the column.
    pub alias: String,
    /// Originating table, `None` for computed columns.
    pub table_name: Option<String>,
    /// Alias of the originating table in the query.
    pub table_alias: Option<String>,
    /// Schema (database) of the originating table.
    pub schema_name: Option<String>,
    /// Catalog name.
    pub catalog: Option<String>,
    /// 1-based position in the SELECT list.
    pub ordinal_position: usize,
    /// Canonical type and type-specific attributes.
    pub kind: ColumnKind,
    /// Driver-specific type label (VARCHAR, BIGINT, ...).
    pub native_data_type: Option<String>,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column is part of the primary key.
    pub primary: bool,
    /// Whether the column is an aggregate result, if the driver can tell.
    pub group: Option<bool>,
    /// Default value.
    pub column_default: Option<String>,
}

impl ColumnDefinition {
    /// Creates a column definition of the given canonical type.
    #[must_use]
    pub fn new(
        data_type: CanonicalDataType,
        name: impl Into<String>,
        table_name: Option<String>,
        schema_name: Option<String>,
    ) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            table_name,
            table_alias: None,
            schema_name,
            catalog: None,
            ordinal_position: 0,
            kind: ColumnKind::new(data_type),
            native_data_type: None,
            nullable: true,
            primary: false,
            group: None,
            column_default: None,
        }
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets the table alias.
    #[must_use]
    pub fn with_table_alias(mut self, table_alias: Option<String>) -> Self {
        self.table_alias = table_alias;
        self
    }

    /// Sets the catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Option<String>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets the 1-based ordinal position.
    #[must_use]
    pub fn with_ordinal_position(mut self, position: usize) -> Self {
        self.ordinal_position = position;
        self
    }

    /// Sets the native type label.
    #[must_use]
    pub fn with_native_data_type(mut self, native: Option<String>) -> Self {
        self.native_data_type = native;
        self
    }

    /// Sets nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the primary key flag.
    #[must_use]
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Sets the group flag.
    #[must_use]
    pub fn with_group(mut self, group: Option<bool>) -> Self {
        self.group = group;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_column_default(mut self, default: Option<String>) -> Self {
        self.column_default = default;
        self
    }

    /// Sets UNSIGNED on numeric columns. No-op for other kinds.
    #[must_use]
    pub fn with_numeric_unsigned(mut self, unsigned: Option<bool>) -> Self {
        match &mut self.kind {
            ColumnKind::Integer(details) => details.unsigned = unsigned,
            ColumnKind::Decimal(details) => details.unsigned = unsigned,
            ColumnKind::Float(details) => details.unsigned = unsigned,
            _ => {}
        }
        self
    }

    /// Sets AUTO_INCREMENT on integer columns. No-op for other kinds.
    #[must_use]
    pub fn with_auto_increment(mut self, auto_increment: Option<bool>) -> Self {
        if let ColumnKind::Integer(details) = &mut self.kind {
            details.auto_increment = auto_increment;
        }
        self
    }

    /// Sets precision and scale on decimal columns. No-op for other kinds.
    #[must_use]
    pub fn with_numeric_precision_scale(mut self, precision: u64, scale: u64) -> Self {
        if let ColumnKind::Decimal(details) = &mut self.kind {
            details.precision = Some(precision);
            details.scale = Some(scale);
        }
        self
    }

    /// Sets the maximum length of string columns. No-op for other kinds.
    #[must_use]
    pub fn with_character_maximum_length(mut self, length: u64) -> Self {
        if let ColumnKind::String(details) = &mut self.kind {
            details.character_maximum_length = Some(length);
        }
        self
    }

    /// Sets the octet length of blob columns. No-op for other kinds.
    #[must_use]
    pub fn with_character_octet_length(mut self, length: u64) -> Self {
        if let ColumnKind::Blob(details) = &mut self.kind {
            details.character_octet_length = Some(length);
        }
        self
    }

    /// Returns the canonical type.
    #[must_use]
    pub const fn data_type(&self) -> CanonicalDataType {
        self.kind.data_type()
    }

    /// Returns whether the column has no originating table.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.table_name.is_none()
    }

    /// Returns whether the column is an aggregate result, if known.
    #[must_use]
    pub const fn is_group(&self) -> Option<bool> {
        self.group
    }

    /// Returns the AUTO_INCREMENT flag of integer columns.
    #[must_use]
    pub const fn is_auto_increment(&self) -> Option<bool> {
        match &self.kind {
            ColumnKind::Integer(details) => details.auto_increment,
            _ => None,
        }
    }

    /// Returns the UNSIGNED flag of numeric columns.
    #[must_use]
    pub const fn numeric_unsigned(&self) -> Option<bool> {
        match &self.kind {
            ColumnKind::Integer(details) => details.unsigned,
            ColumnKind::Decimal(details) => details.unsigned,
            ColumnKind::Float(details) => details.unsigned,
            _ => None,
        }
    }

    /// Returns the precision of decimal columns.
    #[must_use]
    pub const fn numeric_precision(&self) -> Option<u64> {
        match &self.kind {
            ColumnKind::Decimal(details) => details.precision,
            _ => None,
        }
    }

    /// Returns the scale of decimal columns.
    #[must_use]
    pub const fn numeric_scale(&self) -> Option<u64> {
        match &self.kind {
            ColumnKind::Decimal(details) => details.scale,
            _ => None,
        }
    }

    /// Returns the maximum length of string columns.
    #[must_use]
    pub const fn character_maximum_length(&self) -> Option<u64> {
        match &self.kind {
            ColumnKind::String(details) => details.character_maximum_length,
            _ => None,
        }
    }

    /// Returns the octet length of blob columns.
    #[must_use]
    pub const fn character_octet_length(&self) -> Option<u64> {
        match &self.kind {
            ColumnKind::Blob(details) => details.character_octet_length,
            _ => None,
        }
    }
}
