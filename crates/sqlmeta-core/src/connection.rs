//! Collaborator contracts implemented by driver crates.
//!
//! A [`DriverFamily`] bundles what differs between client protocols: the
//! native type vocabulary, the flag representation, the type mapping table
//! and the capabilities it can back. A [`Connection`] is the minimal
//! statement API a reader needs to describe a query.

use core::fmt;

use crate::capability::Capabilities;
use crate::column::CanonicalDataType;
use crate::field::RawFieldDescriptor;
use crate::flags::FieldFlags;

/// One row of a driver family's type mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapEntry {
    /// Canonical type the native type maps to.
    pub data_type: CanonicalDataType,
    /// Native type label, `None` when the driver label is not meaningful.
    pub native: Option<&'static str>,
}

impl TypeMapEntry {
    /// Creates an entry with a native label.
    #[must_use]
    pub const fn new(data_type: CanonicalDataType, native: &'static str) -> Self {
        Self {
            data_type,
            native: Some(native),
        }
    }

    /// Creates an entry without native label.
    #[must_use]
    pub const fn unlabeled(data_type: CanonicalDataType) -> Self {
        Self {
            data_type,
            native: None,
        }
    }
}

/// A client protocol family.
pub trait DriverFamily: 'static {
    /// Family name used in error messages and logs.
    const NAME: &'static str;

    /// Native type representation (type code or type name).
    type NativeType: fmt::Display;

    /// Raw flag representation.
    type Flags;

    /// Looks up the mapping of a native type.
    fn type_entry(native: &Self::NativeType) -> Option<TypeMapEntry>;

    /// Decodes raw field flags.
    fn decode_flags(flags: &Self::Flags) -> FieldFlags;

    /// Capabilities this family can back.
    fn capabilities() -> Capabilities;
}

/// Field descriptor shape of a driver family.
pub type FamilyField<F> =
    RawFieldDescriptor<<F as DriverFamily>::NativeType, <F as DriverFamily>::Flags>;

/// Classification of driver failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverErrorKind {
    /// The statement was rejected (syntax error, unknown table or column).
    Query,
    /// Transport or session failure.
    Connection,
}

/// Error reported by a driver connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DriverError {
    /// Failure classification.
    pub kind: DriverErrorKind,
    /// Driver error text.
    pub message: String,
}

impl DriverError {
    /// Creates a statement rejection.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self {
            kind: DriverErrorKind::Query,
            message: message.into(),
        }
    }

    /// Creates a transport failure.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            kind: DriverErrorKind::Connection,
            message: message.into(),
        }
    }
}

/// Statement API of a database connection.
///
/// Calls are blocking and must not run concurrently on the same
/// connection, hence `&mut self`.
pub trait Connection {
    /// Driver family of this connection.
    type Family: DriverFamily;

    /// Prepared statement handle.
    type Statement;

    /// Prepares a statement.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the statement is rejected.
    fn prepare(&mut self, sql: &str) -> Result<Self::Statement, DriverError>;

    /// Executes a prepared statement.
    ///
    /// # Errors
    ///
    /// Returns the driver error if execution fails.
    fn execute(&mut self, stmt: &mut Self::Statement) -> Result<(), DriverError>;

    /// Describes the result fields of an executed statement.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the result metadata is unavailable.
    fn describe(
        &mut self,
        stmt: &Self::Statement,
    ) -> Result<Vec<FamilyField<Self::Family>>, DriverError>;

    /// Releases a statement and its result.
    fn close(&mut self, stmt: Self::Statement);
}

/// Connections of abstraction layers that serve several databases and
/// declare which one they are bound to.
pub trait DriverName {
    /// Returns the name of the underlying database driver.
    fn driver_name(&self) -> &str;
}
