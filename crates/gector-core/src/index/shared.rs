//! Thread-shareable handle around a single index.
//!
//! The index has no internal locking. `SharedIndex` puts one `RwLock` around
//! the whole structure: mutations are exclusive, queries run concurrently.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::hnsw::{HnswIndex, SearchResult};
use crate::error::Result;
use crate::vector::Vector;

/// Cloneable, lock-protected handle to an [`HnswIndex`].
#[derive(Debug, Clone)]
pub struct SharedIndex {
    inner: Arc<RwLock<HnswIndex>>,
}

impl SharedIndex {
    /// Wraps an index.
    #[must_use]
    pub fn new(index: HnswIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// See [`HnswIndex::add_vector`].
    pub fn add_vector(&self, id: impl Into<String>, vector: Vector) {
        self.inner.write().add_vector(id, vector);
    }

    /// See [`HnswIndex::try_add_vector`].
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is already present.
    pub fn try_add_vector(&self, id: impl Into<String>, vector: Vector) -> Result<()> {
        self.inner.write().try_add_vector(id, vector)
    }

    /// See [`HnswIndex::update_vector`].
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not present.
    pub fn update_vector(&self, id: &str, vector: Vector) -> Result<()> {
        self.inner.write().update_vector(id, vector)
    }

    /// See [`HnswIndex::delete_vector`].
    ///
    /// # Errors
    ///
    /// Currently never fails.
    pub fn delete_vector(&self, id: &str) -> Result<()> {
        self.inner.write().delete_vector(id)
    }

    /// See [`HnswIndex::nearest_neighbors`].
    #[must_use]
    pub fn nearest_neighbors(&self, query: &Vector, k: usize) -> Vec<Vector> {
        self.inner.read().nearest_neighbors(query, k)
    }

    /// See [`HnswIndex::search`].
    #[must_use]
    pub fn search(&self, query: &Vector, k: usize) -> Vec<SearchResult> {
        self.inner.read().search(query, k)
    }

    /// Returns a copy of the vector stored under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Vector> {
        self.inner.read().get(id).cloned()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the index holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Shared access for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, HnswIndex> {
        self.inner.read()
    }

    /// Exclusive access for several mutations under one lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, HnswIndex> {
        self.inner.write()
    }
}

impl From<HnswIndex> for SharedIndex {
    fn from(index: HnswIndex) -> Self {
        Self::new(index)
    }
}
