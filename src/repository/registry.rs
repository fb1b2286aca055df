//! Append-only in-memory registry for one entity kind

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::Entity,
};

/// Ordered collection of one entity kind.
///
/// Clones share the same storage. Writers take the lock exclusively, so an
/// admission is never observed half-done by a concurrent export.
#[derive(Debug)]
pub struct Registry<T> {
    entries: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a partial push behind,
    // so a poisoned lock still guards consistent data.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and append an entity.
    ///
    /// An id already present is not rejected; the new entry is stored after
    /// the existing one and lookups keep returning the first.
    pub fn admit(&self, entity: T) -> AppResult<T> {
        if let Err(e) = entity.check() {
            tracing::debug!("Rejected {} with id {}", T::KIND, entity.id());
            return Err(e);
        }
        let mut entries = self.write();
        if entries.iter().any(|e| e.id() == entity.id()) {
            tracing::warn!("Admitting duplicate {} id {}", T::KIND, entity.id());
        }
        entries.push(entity.clone());
        Ok(entity)
    }

    /// Bulk-load a starting collection. Either every entity is valid and all
    /// are appended, or nothing is.
    pub fn seed(&self, entities: Vec<T>) -> AppResult<usize> {
        entities.iter().try_for_each(T::check)?;
        let count = entities.len();
        self.write().extend(entities);
        Ok(count)
    }

    /// Snapshot of the whole collection in insertion order
    pub fn export(&self) -> Vec<T> {
        self.read().clone()
    }

    /// First entity with the given id
    pub fn find_by_id(&self, id: i32) -> AppResult<T> {
        self.read()
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", T::KIND, id)))
    }

    /// Every entity matching the predicate, in insertion order
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.read().iter().filter(|&e| predicate(e)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
