// src/filters/selection.rs

use crate::filters::record::FilterRecord;
use std::sync::{Arc, Mutex};

/// Session-lifetime holder of the currently applied filter, shared across
/// request handlers. Every write replaces the whole record; readers get a
/// clone taken under the lock, so a record is never observed half-applied.
#[derive(Clone, Default)]
pub struct SelectionStore {
    inner: Arc<Mutex<Option<FilterRecord>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        SelectionStore::default()
    }

    pub fn get(&self) -> Option<FilterRecord> {
        self.lock().clone()
    }

    pub fn set(&self, record: Option<FilterRecord>) {
        *self.lock() = record;
    }

    pub fn clear(&self) {
        self.set(None);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<FilterRecord>> {
        // A poisoned lock only means a panicking reader; the data is a
        // plain record and stays usable.
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}
