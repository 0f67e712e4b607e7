//! Nutrition entry: one stored lookup result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EntryId, FoodItem};

/// Lookup result as returned by the nutrition service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Nutrients {
    /// Food components recognised in the query, in upstream order.
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

/// A dated nutrition lookup, immutable once stored.
///
/// Entries are only ever created by [`super::EntryStore::insert`], which
/// assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,

    /// Caller-supplied date string (not validated as a calendar date).
    #[schema(example = "2025-08-11")]
    pub date: String,

    /// Original free-text query.
    #[schema(example = "1 cup rice")]
    pub query: String,

    /// Nutrition data returned by the lookup.
    pub nutrients: Nutrients,

    /// Time the entry was stored.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Returns the food items of this entry.
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.nutrients.foods
    }
}
