//! Runs the zero-row probe of a query and resolves its fields.

use tracing::debug;

use crate::connection::{Connection, DriverError, DriverErrorKind, FamilyField};
use crate::error::{MetadataError, Result};
use crate::metadata::ColumnsMetadata;
use crate::normalize::normalize;
use crate::reconcile::{reconcile, DuplicateAliasPolicy};
use crate::resolver::resolve_columns;

/// Prepared statement that is closed when dropped.
struct PreparedProbe<'c, C: Connection> {
    conn: &'c mut C,
    stmt: Option<C::Statement>,
}

impl<'c, C: Connection> PreparedProbe<'c, C> {
    fn prepare(conn: &'c mut C, sql: &str) -> std::result::Result<Self, DriverError> {
        let stmt = conn.prepare(sql)?;
        Ok(Self {
            conn,
            stmt: Some(stmt),
        })
    }

    fn fields(&mut self) -> std::result::Result<Vec<FamilyField<C::Family>>, DriverError> {
        let stmt = self
            .stmt
            .as_mut()
            .ok_or_else(|| DriverError::connection("statement already closed"))?;
        self.conn.execute(stmt)?;
        self.conn.describe(stmt)
    }
}

impl<C: Connection> Drop for PreparedProbe<'_, C> {
    fn drop(&mut self) {
        if let Some(stmt) = self.stmt.take() {
            self.conn.close(stmt);
        }
    }
}

fn classify(sql: &str, err: DriverError) -> MetadataError {
    match err.kind {
        DriverErrorKind::Query => MetadataError::InvalidQuery {
            sql: sql.to_string(),
            message: err.message,
        },
        DriverErrorKind::Connection => MetadataError::Connection(err.message),
    }
}

/// Describes the result fields of `sql` by running its zero-row probe.
///
/// The prepared statement is released on every path, including failures
/// after a successful prepare.
///
/// # Errors
///
/// Returns [`MetadataError::EmptyQuery`] for blank input,
/// [`MetadataError::InvalidQuery`] when the driver rejects the probe and
/// [`MetadataError::Connection`] on transport failures.
pub fn describe_query<C: Connection>(
    conn: &mut C,
    sql: &str,
) -> Result<Vec<FamilyField<C::Family>>> {
    let probe = normalize(sql)?;
    debug!(sql = %probe, "Describing probe query");

    let mut prepared = PreparedProbe::prepare(conn, &probe).map_err(|e| classify(&probe, e))?;
    let fields = prepared.fields().map_err(|e| classify(&probe, e))?;
    drop(prepared);

    debug!(fields = fields.len(), "Probe described");
    Ok(fields)
}

/// Reads the column metadata of `sql` from the connection, bypassing any
/// cache.
///
/// # Errors
///
/// Propagates [`describe_query`] failures, plus
/// [`MetadataError::UnsupportedType`] and [`MetadataError::AmbiguousColumn`]
/// from resolution.
pub fn read_columns_metadata<C: Connection>(
    conn: &mut C,
    sql: &str,
    policy: DuplicateAliasPolicy,
) -> Result<ColumnsMetadata> {
    let fields = describe_query(conn, sql)?;
    let columns = resolve_columns::<C::Family>(&fields)?;
    reconcile(columns, policy)
}
