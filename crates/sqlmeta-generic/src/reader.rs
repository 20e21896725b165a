//! Metadata reader for generic layer connections.

use std::sync::Arc;

use sqlmeta_core::{
    Capabilities, ColumnsMetadata, Connection, DriverName, MetadataCache, MetadataError,
    MetadataReader, ProbeReader, ReaderOptions, Result,
};
use tracing::{debug, warn};

use crate::family::GenericProtocol;

const SUPPORTED_DRIVER: &str = "mysql";

/// Reads column metadata through a generic abstraction layer connection
/// bound to MySQL.
pub struct GenericMetadataReader<C: Connection<Family = GenericProtocol>> {
    inner: ProbeReader<C>,
}

impl<C> GenericMetadataReader<C>
where
    C: Connection<Family = GenericProtocol> + DriverName,
{
    /// Creates a reader with default options.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnsupportedDriver`] unless the connection is
    /// bound to the `mysql` driver.
    pub fn new(conn: C) -> Result<Self> {
        Self::with_options(conn, ReaderOptions::default())
    }

    /// Creates a reader with the given options and its own cache.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnsupportedDriver`] unless the connection is
    /// bound to the `mysql` driver.
    pub fn with_options(conn: C, options: ReaderOptions) -> Result<Self> {
        Self::with_cache(conn, options, Arc::new(MetadataCache::new()))
    }

    /// Creates a reader sharing `cache` with other generic layer readers.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnsupportedDriver`] unless the connection is
    /// bound to the `mysql` driver.
    pub fn with_cache(
        conn: C,
        options: ReaderOptions,
        cache: Arc<MetadataCache<GenericProtocol>>,
    ) -> Result<Self> {
        let driver = conn.driver_name();
        if !driver.eq_ignore_ascii_case(SUPPORTED_DRIVER) {
            warn!(driver = %driver, "Rejecting connection of unsupported driver");
            return Err(MetadataError::UnsupportedDriver {
                reader: "GenericMetadataReader",
                driver: driver.to_string(),
            });
        }

        debug!(static_cache = options.static_cache, "Creating generic metadata reader");
        Ok(Self {
            inner: ProbeReader::with_cache(conn, options, cache),
        })
    }
}

impl<C: Connection<Family = GenericProtocol>> GenericMetadataReader<C> {
    /// Returns the reader options.
    #[must_use]
    pub const fn options(&self) -> &ReaderOptions {
        self.inner.options()
    }

    /// Returns the cache backing this reader.
    #[must_use]
    pub fn cache(&self) -> &Arc<MetadataCache<GenericProtocol>> {
        self.inner.cache()
    }

    /// Consumes the reader and returns its connection.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C: Connection<Family = GenericProtocol>> MetadataReader for GenericMetadataReader<C> {
    fn columns_metadata(&self, sql: &str) -> Result<Arc<ColumnsMetadata>> {
        self.inner.columns_metadata(sql)
    }

    fn set_static_cache(&mut self, enabled: bool) {
        self.inner.set_static_cache(enabled);
    }

    fn static_cache_enabled(&self) -> bool {
        self.inner.static_cache_enabled()
    }

    fn capabilities(&self) -> Capabilities {
        self.inner.capabilities()
    }
}
