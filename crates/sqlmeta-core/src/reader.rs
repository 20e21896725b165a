//! Metadata reader trait and the shared probe-and-cache machinery.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::cache::MetadataCache;
use crate::capability::{Capabilities, Capability};
use crate::connection::{Connection, DriverFamily};
use crate::error::{MetadataError, Result};
use crate::metadata::ColumnsMetadata;
use crate::options::ReaderOptions;
use crate::probe::read_columns_metadata;

/// Reads column metadata of queries and tables.
pub trait MetadataReader {
    /// Returns the metadata of every column produced by `sql`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::EmptyQuery`], [`MetadataError::InvalidQuery`],
    /// [`MetadataError::Connection`], [`MetadataError::UnsupportedType`] or
    /// [`MetadataError::AmbiguousColumn`].
    fn columns_metadata(&self, sql: &str) -> Result<Arc<ColumnsMetadata>>;

    /// Returns the metadata of every column of `table`.
    ///
    /// # Errors
    ///
    /// A rejected probe is reported as [`MetadataError::TableNotFound`]
    /// carrying the driver rejection. Other failures are returned as for
    /// [`MetadataReader::columns_metadata`].
    fn table_metadata(&self, table: &str) -> Result<Arc<ColumnsMetadata>> {
        self.columns_metadata(&format!("select * from {table}"))
            .map_err(|err| match err {
                MetadataError::InvalidQuery { .. } => MetadataError::TableNotFound {
                    table: table.to_string(),
                    source: Box::new(err),
                },
                other => other,
            })
    }

    /// Enables or disables memoization of resolved metadata.
    fn set_static_cache(&mut self, enabled: bool);

    /// Returns whether resolved metadata is memoized.
    fn static_cache_enabled(&self) -> bool;

    /// Returns the capabilities this reader backs.
    fn capabilities(&self) -> Capabilities;

    /// Returns whether this reader backs `capability`.
    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().has(capability)
    }
}

/// Connection, options and cache of a reader.
///
/// Driver readers wrap this and add their construction rules.
pub struct ProbeReader<C: Connection> {
    conn: Mutex<C>,
    options: ReaderOptions,
    cache: Arc<MetadataCache<C::Family>>,
}

impl<C: Connection> ProbeReader<C> {
    /// Creates a reader with its own cache.
    #[must_use]
    pub fn new(conn: C, options: ReaderOptions) -> Self {
        Self::with_cache(conn, options, Arc::new(MetadataCache::new()))
    }

    /// Creates a reader sharing `cache` with other readers of the family.
    #[must_use]
    pub fn with_cache(
        conn: C,
        options: ReaderOptions,
        cache: Arc<MetadataCache<C::Family>>,
    ) -> Self {
        Self {
            conn: Mutex::new(conn),
            options,
            cache,
        }
    }

    /// Returns the reader options.
    #[must_use]
    pub const fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Returns the cache backing this reader.
    #[must_use]
    pub fn cache(&self) -> &Arc<MetadataCache<C::Family>> {
        &self.cache
    }

    /// Consumes the reader and returns its connection.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.conn.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self, sql: &str) -> Result<ColumnsMetadata> {
        let mut conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        read_columns_metadata(&mut *conn, sql, self.options.duplicate_alias_policy)
    }
}

impl<C: Connection> MetadataReader for ProbeReader<C> {
    fn columns_metadata(&self, sql: &str) -> Result<Arc<ColumnsMetadata>> {
        if !self.options.static_cache {
            return self.read(sql).map(Arc::new);
        }

        if let Some(metadata) = self.cache.get(sql) {
            debug!(family = C::Family::NAME, cache = "hit", sql = %sql, "Reading column metadata");
            return Ok(metadata);
        }

        debug!(family = C::Family::NAME, cache = "miss", sql = %sql, "Reading column metadata");
        self.cache.get_or_try_insert_with(sql, || self.read(sql))
    }

    fn set_static_cache(&mut self, enabled: bool) {
        self.options.static_cache = enabled;
    }

    fn static_cache_enabled(&self) -> bool {
        self.options.static_cache
    }

    fn capabilities(&self) -> Capabilities {
        C::Family::capabilities()
    }
}
