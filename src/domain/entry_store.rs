//! Concurrent in-memory entry storage.
//!
//! [`EntryStore`] keeps every [`Entry`] for the lifetime of the process in a
//! single table behind one [`tokio::sync::RwLock`]. Reads share the lock;
//! inserts take it exclusively. Nothing is persisted across restarts.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::{Entry, EntryId, FoodItem, Nutrients};
use crate::error::ApiError;

/// Table contents guarded by the store lock.
#[derive(Debug)]
struct EntryTable {
    entries: BTreeMap<EntryId, Entry>,
    next_id: EntryId,
}

/// Authoritative holder of all nutrition entries.
///
/// # Concurrency
///
/// - `get`, `list` and `len` run in parallel with each other.
/// - `insert` excludes every other operation while it runs.
/// - Identifier assignment and the table write happen in the same critical
///   section, so identifiers are unique and strictly increasing.
///
/// Entries are handed out as owned clones; no lock outlives a call.
#[derive(Debug)]
pub struct EntryStore {
    table: RwLock<EntryTable>,
}

impl EntryStore {
    /// Creates an empty store whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(EntryTable {
                entries: BTreeMap::new(),
                next_id: EntryId::FIRST,
            }),
        }
    }

    /// Stores a new entry and returns it.
    ///
    /// Assigns the next identifier and stamps the current time. Because the
    /// timestamp is taken under the write lock, `created_at` never decreases
    /// in identifier order.
    pub async fn insert(&self, date: String, query: String, foods: Vec<FoodItem>) -> Entry {
        let mut table = self.table.write().await;
        let id = table.next_id;
        let entry = Entry {
            id,
            date,
            query,
            nutrients: Nutrients { foods },
            created_at: Utc::now(),
        };
        table.entries.insert(id, entry.clone());
        table.next_id = id.next();
        entry
    }

    /// Returns the entry with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EntryNotFound`] if no entry has that
    /// identifier.
    pub async fn get(&self, id: EntryId) -> Result<Entry, ApiError> {
        let table = self.table.read().await;
        table
            .entries
            .get(&id)
            .cloned()
            .ok_or(ApiError::EntryNotFound(id))
    }

    /// Returns all entries in ascending identifier (insertion) order.
    pub async fn list(&self) -> Vec<Entry> {
        let table = self.table.read().await;
        table.entries.values().cloned().collect()
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.table.read().await.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.entries.is_empty()
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
