//! Native type names of the generic layer and their canonical mapping.

use sqlmeta_core::{CanonicalDataType, TypeMapEntry};

/// Looks up the canonical mapping of a native type name, ignoring case.
#[must_use]
pub fn lookup(native: &str) -> Option<TypeMapEntry> {
    use CanonicalDataType as T;

    let entry = match native.to_ascii_uppercase().as_str() {
        "STRING" => TypeMapEntry::new(T::String, "CHAR"),
        "VAR_STRING" => TypeMapEntry::new(T::String, "VARCHAR"),
        "BLOB" => TypeMapEntry::new(T::Blob, "BLOB"),
        "TINY_BLOB" => TypeMapEntry::new(T::Blob, "TINY_BLOB"),
        "MEDIUM_BLOB" => TypeMapEntry::new(T::Blob, "MEDIUM_BLOB"),
        "LONG_BLOB" => TypeMapEntry::new(T::Blob, "LONG_BLOB"),
        "TINY" => TypeMapEntry::new(T::Integer, "TINYINT"),
        "SHORT" => TypeMapEntry::new(T::Integer, "SMALLINT"),
        "INT24" => TypeMapEntry::new(T::Integer, "MEDIUMINT"),
        "LONG" => TypeMapEntry::new(T::Integer, "INTEGER"),
        "LONGLONG" => TypeMapEntry::new(T::Integer, "BIGINT"),
        "TIMESTAMP" => TypeMapEntry::new(T::Datetime, "TIMESTAMP"),
        "DATETIME" => TypeMapEntry::new(T::Datetime, "DATETIME"),
        "DATE" | "NEWDATE" => TypeMapEntry::new(T::Date, "DATE"),
        "TIME" => TypeMapEntry::new(T::Time, "TIME"),
        "DECIMAL" | "NEWDECIMAL" => TypeMapEntry::new(T::Decimal, "DECIMAL"),
        "FLOAT" => TypeMapEntry::new(T::Float, "FLOAT"),
        "DOUBLE" => TypeMapEntry::new(T::Float, "DOUBLE"),
        "BIT" => TypeMapEntry::new(T::Bit, "BIT"),
        "BOOLEAN" => TypeMapEntry::new(T::Boolean, "BOOLEAN"),
        "GEOMETRY" => TypeMapEntry::unlabeled(T::SpatialGeometry),
        "NULL" => TypeMapEntry::new(T::Null, "NULL"),
        _ => return None,
    };
    Some(entry)
}
