//! # sqlmeta-generic
//!
//! Column metadata reader for generic database abstraction layers, where
//! each result field is described by a type name, a single table name and
//! a list of flag tokens.
//!
//! Such layers serve many databases, so the reader checks at construction
//! that the connection is bound to MySQL.
//!
//! # What the generic layer cannot tell
//!
//! - Only `not_null` and `primary_key` flag tokens are reported: unsigned,
//!   auto increment and aggregate detection stay unknown (`None`).
//! - The table name is the alias used in the query; the underlying table
//!   name is not available.
//! - `CHAR`, `ENUM` and `SET` columns are all reported as `STRING` and read
//!   as `CHAR`.
//! - No catalog, schema or default value is reported.

pub mod family;
pub mod field;
pub mod flags;
pub mod reader;
pub mod type_map;

pub use family::GenericProtocol;
pub use field::{ColumnMeta, GenericField};
pub use flags::{TokenFlags, NOT_NULL, PRIMARY_KEY};
pub use reader::GenericMetadataReader;
