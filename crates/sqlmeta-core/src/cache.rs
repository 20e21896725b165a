//! Memoization of resolved metadata.
//!
//! Describing a query costs a round-trip, so readers keep resolved
//! metadata keyed by the raw query text. Each key has its own slot lock:
//! concurrent callers asking for the same uncached query wait for the
//! first computation instead of running the query again.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::connection::DriverFamily;
use crate::metadata::ColumnsMetadata;

type Slot = Mutex<Option<Arc<ColumnsMetadata>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking computation leaves the slot empty; the data stays valid.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Metadata cache for readers of one driver family.
///
/// The family parameter keeps entries of different families apart: the
/// same query resolves differently per family.
pub struct MetadataCache<F: DriverFamily> {
    slots: Mutex<HashMap<String, Arc<Slot>>>,
    _family: PhantomData<fn() -> F>,
}

impl<F: DriverFamily> MetadataCache<F> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            _family: PhantomData,
        }
    }

    /// Returns the cached metadata for `key`, computing and storing it on a
    /// miss. Errors are returned to the caller and not stored.
    ///
    /// # Errors
    ///
    /// Returns the error of `compute`.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &str,
        compute: impl FnOnce() -> Result<ColumnsMetadata, E>,
    ) -> Result<Arc<ColumnsMetadata>, E> {
        let slot = Arc::clone(lock(&self.slots).entry(key.to_string()).or_default());

        let mut entry = lock(&slot);
        if let Some(metadata) = entry.as_ref() {
            return Ok(Arc::clone(metadata));
        }

        match compute() {
            Ok(metadata) => {
                let metadata = Arc::new(metadata);
                *entry = Some(Arc::clone(&metadata));
                // A failed computation may have unregistered the slot meanwhile.
                lock(&self.slots)
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::clone(&slot));
                Ok(metadata)
            }
            Err(err) => {
                let mut slots = lock(&self.slots);
                if slots.get(key).is_some_and(|s| Arc::ptr_eq(s, &slot)) {
                    slots.remove(key);
                }
                Err(err)
            }
        }
    }

    /// Returns the cached metadata for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<ColumnsMetadata>> {
        let slot = lock(&self.slots).get(key).cloned()?;
        let entry = lock(&slot);
        entry.clone()
    }

    /// Returns whether metadata is cached for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let slots: Vec<Arc<Slot>> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    /// Returns whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: DriverFamily> Default for MetadataCache<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DriverFamily> fmt::Debug for MetadataCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataCache")
            .field("family", &F::NAME)
            .field("entries", &self.len())
            .finish()
    }
}
