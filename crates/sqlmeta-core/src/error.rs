//! Error types for metadata resolution.

use thiserror::Error;

/// Errors raised while resolving column metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The query was blank.
    #[error("cannot read fields for an empty query")]
    EmptyQuery,

    /// The driver rejected the probe query (syntax error, missing object).
    #[error("invalid query: {sql} ({message})")]
    InvalidQuery {
        /// The normalized probe query sent to the driver.
        sql: String,
        /// Error text reported by the driver.
        message: String,
    },

    /// The table passed to a table-level lookup does not exist.
    #[error("table \"{table}\" does not exist ({source})")]
    TableNotFound {
        /// Requested table name.
        table: String,
        /// The underlying query failure.
        #[source]
        source: Box<MetadataError>,
    },

    /// Driver or transport failure unrelated to the query content.
    #[error("connection error: {0}")]
    Connection(String),

    /// The driver reported a native type with no mapping.
    #[error(
        "cannot get type for field '{column}': native type [{native_type}] has no mapping for driver {driver}"
    )]
    UnsupportedType {
        /// Column whose type could not be mapped.
        column: String,
        /// Native type as reported by the driver.
        native_type: String,
        /// Driver family name.
        driver: &'static str,
    },

    /// Two output columns share an alias but disagree on type.
    #[error("non unique column '{0}' found in query with different definitions")]
    AmbiguousColumn(String),

    /// A reader was bound to a connection of the wrong driver.
    #[error("{reader} supports only the mysql driver, '{driver}' given")]
    UnsupportedDriver {
        /// Reader type name.
        reader: &'static str,
        /// Driver name declared by the connection.
        driver: String,
    },

    /// Lookup of an alias that is not part of the resolved metadata.
    #[error("column '{0}' does not exist in metadata")]
    UnexistentColumn(String),
}

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
