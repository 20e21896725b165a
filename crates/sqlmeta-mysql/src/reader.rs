//! Metadata reader for native protocol connections.

use std::sync::Arc;

use sqlmeta_core::{
    Capabilities, ColumnsMetadata, Connection, MetadataCache, MetadataReader, ProbeReader,
    ReaderOptions, Result,
};
use tracing::debug;

use crate::family::NativeProtocol;

/// Reads column metadata through a native protocol connection.
///
/// ```rust,ignore
/// use sqlmeta_core::MetadataReader;
/// use sqlmeta_mysql::MysqlMetadataReader;
///
/// let reader = MysqlMetadataReader::new(conn);
/// let md = reader.columns_metadata("select id, title from posts")?;
/// assert!(md.get_column("id")?.primary);
/// ```
pub struct MysqlMetadataReader<C: Connection<Family = NativeProtocol>> {
    inner: ProbeReader<C>,
}

impl<C: Connection<Family = NativeProtocol>> MysqlMetadataReader<C> {
    /// Creates a reader with default options.
    #[must_use]
    pub fn new(conn: C) -> Self {
        Self::with_options(conn, ReaderOptions::default())
    }

    /// Creates a reader with the given options and its own cache.
    #[must_use]
    pub fn with_options(conn: C, options: ReaderOptions) -> Self {
        Self::with_cache(conn, options, Arc::new(MetadataCache::new()))
    }

    /// Creates a reader sharing `cache` with other native protocol readers.
    #[must_use]
    pub fn with_cache(
        conn: C,
        options: ReaderOptions,
        cache: Arc<MetadataCache<NativeProtocol>>,
    ) -> Self {
        debug!(static_cache = options.static_cache, "Creating mysql metadata reader");
        Self {
            inner: ProbeReader::with_cache(conn, options, cache),
        }
    }

    /// Returns the reader options.
    #[must_use]
    pub const fn options(&self) -> &ReaderOptions {
        self.inner.options()
    }

    /// Returns the cache backing this reader.
    #[must_use]
    pub fn cache(&self) -> &Arc<MetadataCache<NativeProtocol>> {
        self.inner.cache()
    }

    /// Consumes the reader and returns its connection.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C: Connection<Family = NativeProtocol>> MetadataReader for MysqlMetadataReader<C> {
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
