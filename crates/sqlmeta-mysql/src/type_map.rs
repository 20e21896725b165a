//! Native protocol type codes and their canonical mapping.

use sqlmeta_core::{CanonicalDataType, TypeMapEntry};

/// Column type codes of the MySQL client protocol.
pub mod type_code {
    pub const DECIMAL: u8 = 0;
    pub const TINY: u8 = 1;
    pub const SHORT: u8 = 2;
    pub const LONG: u8 = 3;
    pub const FLOAT: u8 = 4;
    pub const DOUBLE: u8 = 5;
    pub const NULL: u8 = 6;
    pub const TIMESTAMP: u8 = 7;
    pub const LONGLONG: u8 = 8;
    pub const INT24: u8 = 9;
    pub const DATE: u8 = 10;
    pub const TIME: u8 = 11;
    pub const DATETIME: u8 = 12;
    pub const YEAR: u8 = 13;
    pub const NEWDATE: u8 = 14;
    pub const VARCHAR: u8 = 15;
    pub const BIT: u8 = 16;
    pub const JSON: u8 = 245;
    pub const NEWDECIMAL: u8 = 246;
    pub const ENUM: u8 = 247;
    pub const SET: u8 = 248;
    pub const TINY_BLOB: u8 = 249;
    pub const MEDIUM_BLOB: u8 = 250;
    pub const LONG_BLOB: u8 = 251;
    pub const BLOB: u8 = 252;
    pub const VAR_STRING: u8 = 253;
    pub const STRING: u8 = 254;
    pub const GEOMETRY: u8 = 255;
}

/// Looks up the canonical mapping of a native type code.
#[must_use]
pub const fn lookup(code: u8) -> Option<TypeMapEntry> {
    use type_code as c;
    use CanonicalDataType as T;

    let entry = match code {
        c::DECIMAL | c::NEWDECIMAL => TypeMapEntry::new(T::Decimal, "DECIMAL"),
        c::TINY => TypeMapEntry::new(T::Integer, "TINYINT"),
        c::SHORT => TypeMapEntry::new(T::Integer, "SMALLINT"),
        c::INT24 => TypeMapEntry::new(T::Integer, "MEDIUMINT"),
        c::LONG => TypeMapEntry::new(T::Integer, "INTEGER"),
        c::LONGLONG => TypeMapEntry::new(T::Integer, "BIGINT"),
        c::YEAR => TypeMapEntry::new(T::Integer, "YEAR"),
        c::FLOAT => TypeMapEntry::new(T::Float, "FLOAT"),
        c::DOUBLE => TypeMapEntry::new(T::Float, "DOUBLE"),
        c::NULL => TypeMapEntry::new(T::Null, "NULL"),
        c::TIMESTAMP => TypeMapEntry::new(T::Datetime, "TIMESTAMP"),
        c::DATETIME => TypeMapEntry::new(T::Datetime, "DATETIME"),
        c::DATE | c::NEWDATE => TypeMapEntry::new(T::Date, "DATE"),
        c::TIME => TypeMapEntry::new(T::Time, "TIME"),
        c::VARCHAR | c::VAR_STRING | c::STRING => TypeMapEntry::new(T::String, "VARCHAR"),
        c::ENUM => TypeMapEntry::new(T::String, "ENUM"),
        c::SET => TypeMapEntry::new(T::String, "SET"),
        c::BIT => TypeMapEntry::new(T::Bit, "BIT"),
        c::TINY_BLOB => TypeMapEntry::new(T::Blob, "TINYBLOB"),
        c::MEDIUM_BLOB => TypeMapEntry::new(T::Blob, "MEDIUMBLOB"),
        c::LONG_BLOB => TypeMapEntry::new(T::Blob, "LONGBLOB"),
        c::BLOB => TypeMapEntry::new(T::Blob, "BLOB"),
        c::GEOMETRY => TypeMapEntry::unlabeled(T::SpatialGeometry),
        _ => return None,
    };
    Some(entry)
}
