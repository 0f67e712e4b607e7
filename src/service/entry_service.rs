//! Entry service: orchestrates lookups and entry storage.

use std::sync::Arc;

use crate::domain::{Entry, EntryId, EntryStore};
use crate::error::ApiError;
use crate::lookup::NutritionLookup;

/// Orchestration layer for entry operations.
///
/// Owns references to the [`EntryStore`] for state and a
/// [`NutritionLookup`] for the outbound call. Creation always runs the
/// lookup first and only then touches the store, so a slow upstream never
/// holds the store lock and a failed lookup leaves the store unchanged.
#[derive(Debug, Clone)]
pub struct EntryService {
    store: Arc<EntryStore>,
    lookup: Arc<dyn NutritionLookup>,
}

impl EntryService {
    /// Creates a new `EntryService`.
    #[must_use]
    pub fn new(store: Arc<EntryStore>, lookup: Arc<dyn NutritionLookup>) -> Self {
        Self { store, lookup }
    }

    /// Looks up `query` and stores the result as a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Lookup`] if the nutrition lookup fails. No
    /// entry is created in that case.
    pub async fn create_entry(&self, date: String, query: String) -> Result<Entry, ApiError> {
        let foods = match self.lookup.lookup(&query).await {
            Ok(foods) => foods,
            Err(err) => {
                tracing::error!(error = %err, query = %query, "nutrition lookup failed");
                return Err(err.into());
            }
        };

        let entry = self.store.insert(date, query, foods).await;
        tracing::info!(
            id = %entry.id,
            date = %entry.date,
            foods = entry.foods().len(),
            "entry created"
        );
        Ok(entry)
    }

    /// Returns the entry with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EntryNotFound`] if it does not exist.
    pub async fn get_entry(&self, id: EntryId) -> Result<Entry, ApiError> {
        self.store.get(id).await
    }

    /// Returns all entries in ascending identifier order.
    pub async fn list_entries(&self) -> Vec<Entry> {
        self.store.list().await
    }

    /// Returns the number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.store.len().await
    }
}
