//! Entry handlers: create, list, get.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateEntryRequest, EntryListResponse, ListEntriesParams};
use crate::app_state::AppState;
use crate::domain::{Entry, EntryId};
use crate::error::{ErrorResponse, ApiError};

/// `POST /entries` — Look up a food description and store the result.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed or incomplete
/// body and [`ApiError::Lookup`] if the nutrition service fails.
#[utoipa::path(
    post,
    path = "/entries",
    tag = "Entries",
    summary = "Create a nutrition entry",
    description = "Queries the nutrition service with `query` and stores the returned foods under a new entry for `date`.",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = Entry),
        (status = 400, description = "Malformed body or missing field", body = ErrorResponse),
        (status = 500, description = "Nutrition lookup failed", body = ErrorResponse),
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let entry = state
        .entry_service
        .create_entry(req.date, req.query)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /entries` — List all entries, full or simplified.
#[utoipa::path(
    get,
    path = "/entries",
    tag = "Entries",
    summary = "List nutrition entries",
    description = "Returns every stored entry in ascending id order. With `format=simple` each entry is folded into one aggregated row.",
    params(ListEntriesParams),
    responses(
        (status = 200, description = "Full or simplified entries", body = EntryListResponse),
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = ListEntriesParams::from_pairs(&pairs);
    let entries = state.entry_service.list_entries().await;
    Json(EntryListResponse::build(entries, &params))
}

/// `GET /entries/{id}` — Get one entry.
///
/// # Errors
///
/// Returns [`ApiError::InvalidEntryId`] if `id` is not a positive
/// integer and [`ApiError::EntryNotFound`] if no such entry exists.
#[utoipa::path(
    get,
    path = "/entries/{id}",
    tag = "Entries",
    summary = "Get a nutrition entry",
    description = "Returns the full entry with the given id.",
    params(
        ("id" = u64, Path, description = "Entry id (positive integer)"),
    ),
    responses(
        (status = 200, description = "Entry", body = Entry),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: EntryId = raw_id.parse()?;
    let entry = state.entry_service.get_entry(id).await?;
    Ok(Json(entry))
}

/// Entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/{id}", get(get_entry))
}
