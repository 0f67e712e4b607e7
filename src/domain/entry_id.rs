//! Type-safe entry identifier.
//!
//! [`EntryId`] is a newtype over `u64` so that entry identifiers cannot be
//! confused with counts or other integers. Identifiers are assigned by
//! [`super::EntryStore`] starting at 1 and are never reused.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Unique, positive identifier of a nutrition entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct EntryId(u64);

impl EntryId {
    /// The first identifier handed out by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw value, returning `None` for zero.
    #[must_use]
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ApiError;

    /// Parses a path segment. Anything that is not a positive integer is
    /// rejected with [`ApiError::InvalidEntryId`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ApiError::InvalidEntryId(s.to_string()))
    }
}

impl From<EntryId> for u64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}
