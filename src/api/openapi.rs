//! OpenAPI document and Swagger UI.
//!
//! The machine-readable document is served at `/api-docs/openapi.json`.
//! With the `swagger-ui` feature (on by default) the interactive UI is
//! mounted at `/docs`.

use axum::Router;
use utoipa::OpenApi;

use crate::api::dto::{CreateEntryRequest, EntryListResponse};
use crate::api::handlers::{entries, system};
use crate::domain::{Entry, EntryId, FoodItem, Nutrients, Photo, SimplifiedEntry};
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Mount point of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/docs";

/// OpenAPI documentation for the nutrition tracker API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Nutrition Tracker API",
        description = "Records Nutritionix lookups as dated nutrition entries",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        entries::create_entry,
        entries::list_entries,
        entries::get_entry,
        system::health_handler,
    ),
    components(schemas(
        Entry,
        EntryId,
        Nutrients,
        FoodItem,
        Photo,
        SimplifiedEntry,
        CreateEntryRequest,
        EntryListResponse,
        system::HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Entries", description = "Nutrition entry lookup and retrieval"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Documentation routes.
#[cfg(feature = "swagger-ui")]
pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Documentation routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/entries", "/entries/{id}", "/health"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
