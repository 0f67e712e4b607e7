//! Entry DTOs for create and list operations.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Entry, SimplifiedEntry, simplify};
use crate::error::ApiError;

/// Value of `format` that selects the simplified list view.
pub const SIMPLE_FORMAT: &str = "simple";

/// Request body for `POST /entries`.
///
/// Both fields are required and must not be empty. Missing fields decode
/// as empty strings so that [`CreateEntryRequest::validate`] reports them
/// with the same 400 as empty ones. Whitespace counts as content.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEntryRequest {
    /// Free-text food description.
    #[serde(default)]
    #[schema(example = "1 cup rice", min_length = 1)]
    pub query: String,

    /// Date the food was eaten.
    #[serde(default)]
    #[schema(example = "2025-08-11", format = Date)]
    pub date: String,
}

impl CreateEntryRequest {
    /// Checks that `query` and `date` are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.is_empty() {
            return Err(ApiError::InvalidRequest("query is required".to_string()));
        }
        if self.date.is_empty() {
            return Err(ApiError::InvalidRequest("date is required".to_string()));
        }
        Ok(())
    }
}

/// Query parameters for `GET /entries`.
///
/// Built from the raw query pairs by [`ListEntriesParams::from_pairs`]
/// rather than deserialized, so a repeated or unexpected key never turns
/// the listing into an error.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEntriesParams {
    /// Response format. `simple` returns aggregated entries; any other
    /// value (or none) returns full entries.
    #[param(example = "simple")]
    pub format: Option<String>,
}

impl ListEntriesParams {
    /// Name of the format parameter.
    pub const FORMAT_KEY: &'static str = "format";

    /// Picks the parameters out of decoded query pairs. The first `format`
    /// wins; other keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let format = pairs
            .iter()
            .find(|(key, _)| key == Self::FORMAT_KEY)
            .map(|(_, value)| value.clone());
        Self { format }
    }

    /// Returns `true` if the simplified view was requested.
    #[must_use]
    pub fn wants_simple(&self) -> bool {
        self.format.as_deref() == Some(SIMPLE_FORMAT)
    }
}

/// Response body for `GET /entries`: full or simplified entries.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum EntryListResponse {
    /// Full entries (default).
    Full(Vec<Entry>),
    /// Simplified entries (`format=simple`).
    Simple(Vec<SimplifiedEntry>),
}

impl EntryListResponse {
    /// Builds the response for `entries` in the requested format.
    #[must_use]
    pub fn build(entries: Vec<Entry>, params: &ListEntriesParams) -> Self {
        if params.wants_simple() {
            Self::Simple(entries.iter().map(simplify).collect())
        } else {
            Self::Full(entries)
        }
    }
}
