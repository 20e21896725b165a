//! # sqlmeta-core
//!
//! Column metadata of arbitrary SQL queries, resolved from the result field
//! descriptors a database driver reports.
//!
//! A query is rewritten into a zero-row probe, prepared and executed on a
//! [`Connection`], and each reported field is mapped to a
//! [`ColumnDefinition`] with a canonical type. Driver crates implement
//! [`DriverFamily`] for their client protocol and wrap [`ProbeReader`].
//!
//! ```rust
//! use sqlmeta_core::normalize;
//!
//! let probe = normalize("SELECT id FROM users LIMIT 10").unwrap();
//! assert_eq!(probe, "select id from users limit 0");
//! ```

pub mod cache;
pub mod capability;
pub mod column;
pub mod connection;
pub mod error;
pub mod field;
pub mod flags;
pub mod metadata;
pub mod normalize;
pub mod options;
pub mod probe;
pub mod reader;
pub mod reconcile;
pub mod resolver;

pub use cache::MetadataCache;
pub use capability::{Capabilities, Capability, UnknownCapability};
pub use column::{
    BlobDetails, CanonicalDataType, ColumnDefinition, ColumnKind, DecimalDetails, FloatDetails,
    IntegerDetails, StringDetails,
};
pub use connection::{
    Connection, DriverError, DriverErrorKind, DriverFamily, DriverName, FamilyField, TypeMapEntry,
};
pub use error::{MetadataError, Result};
pub use field::RawFieldDescriptor;
pub use flags::{FieldFlags, FlagDecoder};
pub use metadata::ColumnsMetadata;
pub use normalize::normalize;
pub use options::ReaderOptions;
pub use probe::{describe_query, read_columns_metadata};
pub use reader::{MetadataReader, ProbeReader};
pub use reconcile::{reconcile, DuplicateAliasPolicy};
pub use resolver::{resolve_column, resolve_columns};
