//! Generic CRUD interface over stored records.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

/// A record addressable by id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// CRUD operations every collection supports, independent of backing
/// storage.
pub trait Repository<T: Record>: Send + Sync {
    fn get(&self, id: Uuid) -> Option<T>;
    /// Returns all records, newest first.
    fn list(&self) -> Vec<T>;
    /// Inserts a new record at the front, or replaces an existing record
    /// with the same id in place.
    fn upsert(&self, record: T);
    /// Removes a record. Returns whether anything was removed.
    fn delete(&self, id: Uuid) -> bool;
}

/// In-memory, insertion-ordered collection. New records go to the front
/// so `list()` is newest-first, matching how the panel UI displays rows.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    // A poisoned lock only means another thread panicked mid-operation;
    // the Vec itself is still structurally sound.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Record> MemoryCollection<T> {
    /// Replaces the whole collection, preserving the given order. Used by
    /// the bulk seed endpoint.
    pub fn replace_all(&self, records: Vec<T>) {
        tracing::debug!(count = records.len(), "replacing collection contents");
        *self.write() = records;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T: Record> Repository<T> for MemoryCollection<T> {
    fn get(&self, id: Uuid) -> Option<T> {
        self.read().iter().find(|record| record.id() == id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn upsert(&self, record: T) {
        let mut records = self.write();
        if let Some(existing) = records.iter_mut().find(|r| r.id() == record.id()) {
            *existing = record;
        } else {
            records.insert(0, record);
        }
    }

    fn delete(&self, id: Uuid) -> bool {
        let mut records = self.write();
        let before = records.len();
        records.retain(|record| record.id() != id);
        records.len() != before
    }
}
