//! # sqlmeta-mysql
//!
//! Column metadata reader for connections speaking the native MySQL client
//! protocol, where result fields carry a numeric type code and a flag
//! bitmask.
//!
//! The protocol reports every predicate the core model knows about, so this
//! reader backs primary key, unsigned, auto increment and aggregate
//! detection.
//!
//! - **Type codes**: see [`type_code`]. `JSON` (245) has no canonical
//!   mapping and fails with `UnsupportedType`.
//! - **CHAR columns** are reported as `STRING` (254) and read as
//!   `VARCHAR`.
//! - **ENUM and SET** columns arrive as strings with the `ENUM` or `SET`
//!   flag, which overrides the native label.

pub mod family;
pub mod flags;
pub mod reader;
pub mod type_map;

pub use family::NativeProtocol;
pub use flags::{field_flag, BitmaskFlags};
pub use reader::MysqlMetadataReader;
pub use type_map::type_code;

/// Field descriptor reported by native protocol connections.
pub type NativeField = sqlmeta_core::FamilyField<NativeProtocol>;
