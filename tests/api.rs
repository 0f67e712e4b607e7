//! End-to-end tests for the REST surface, backed by a fake lookup.

#![allow(clippy::panic, clippy::indexing_slicing)]

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use nutrition_tracker::api::build_app;
use nutrition_tracker::app_state::AppState;
use nutrition_tracker::domain::{EntryStore, FoodItem, Photo};
use nutrition_tracker::lookup::{LookupError, NutritionLookup};
use nutrition_tracker::service::EntryService;

/// Lookup that returns rice and an apple, or fails every call.
#[derive(Debug)]
struct FakeLookup {
    fail: bool,
}

#[async_trait]
impl NutritionLookup for FakeLookup {
    async fn lookup(&self, _query: &str) -> Result<Vec<FoodItem>, LookupError> {
        if self.fail {
            return Err(LookupError::Status(401));
        }
        Ok(vec![
            FoodItem {
                food_name: "rice".to_string(),
                serving_qty: 1.0,
                serving_unit: "cup".to_string(),
                serving_weight: 158.0,
                calories: 205.4,
                protein: 4.25,
                total_fat: 0.44,
                total_carbohydrate: 44.51,
                ..FoodItem::default()
            },
            FoodItem {
                food_name: "apple".to_string(),
                serving_qty: 0.5,
                serving_unit: "medium".to_string(),
                calories: 35.7,
                protein: 0.18,
                total_fat: 0.12,
                total_carbohydrate: 9.5,
                photo: Photo {
                    thumb: Some("https://nix-tag-images.s3.amazonaws.com/384_thumb.jpg".to_string()),
                    highres: None,
                },
                ..FoodItem::default()
            },
        ])
    }
}

struct TestServer {
    base: String,
    http: reqwest::Client,
}

impl TestServer {
    async fn start(fail: bool) -> Self {
        let service = EntryService::new(Arc::new(EntryStore::new()), Arc::new(FakeLookup { fail }));
        let addr: SocketAddr = common::serve(build_app(AppState::new(service))).await;
        Self {
            base: format!("http://{addr}"),
            http: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let Ok(response) = self.http.get(format!("{}{path}", self.base)).send().await else {
            panic!("GET {path} failed");
        };
        let status = response.status();
        let Ok(body) = response.json::<Value>().await else {
            panic!("GET {path} returned non-JSON");
        };
        (status, body)
    }

    async fn post(&self, body: &Value) -> (StatusCode, Value) {
        let Ok(response) = self
            .http
            .post(format!("{}/entries", self.base))
            .json(body)
            .send()
            .await
        else {
            panic!("POST /entries failed");
        };
        let status = response.status();
        let Ok(body) = response.json::<Value>().await else {
            panic!("POST /entries returned non-JSON");
        };
        (status, body)
    }

    async fn entry_count(&self) -> u64 {
        let (_, health) = self.get("/health").await;
        let Some(count) = health["entries"].as_u64() else {
            panic!("health has no entry count: {health}");
        };
        count
    }
}

fn rice_request() -> Value {
    json!({"query": "1 cup rice and half an apple", "date": "2025-08-11"})
}

#[tokio::test]
async fn create_returns_201_with_full_entry() {
    let server = TestServer::start(false).await;

    let (status, body) = server.post(&rice_request()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["date"], "2025-08-11");
    assert_eq!(body["query"], "1 cup rice and half an apple");
    assert_eq!(body["nutrients"]["foods"][0]["food_name"], "rice");
    assert_eq!(body["nutrients"]["foods"][0]["nf_calories"], 205.4);
    assert_eq!(body["nutrients"]["foods"][1]["serving_unit"], "medium");
    assert!(body["created_at"].is_string());

    let Some(rice_photo) = body["nutrients"]["foods"][0]["photo"].as_object() else {
        panic!("photo must be an object: {body}");
    };
    assert_eq!(rice_photo.get("thumb"), Some(&Value::Null));
    assert_eq!(rice_photo.get("highres"), Some(&Value::Null));
}

#[tokio::test]
async fn ids_follow_entry_count() {
    let server = TestServer::start(false).await;

    for expected in 1..=3_u64 {
        let before = server.entry_count().await;
        let (status, body) = server.post(&rice_request()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"].as_u64(), Some(before + 1));
        assert_eq!(body["id"].as_u64(), Some(expected));
    }
}

#[tokio::test]
async fn get_returns_created_entry() {
    let server = TestServer::start(false).await;
    let (_, created) = server.post(&rice_request()).await;

    let (status, fetched) = server.get("/entries/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_ids_are_bad_requests() {
    let server = TestServer::start(false).await;

    for id in ["0", "-3", "abc"] {
        let (status, body) = server.get(&format!("/entries/{id}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(body["error"]["code"], 1002);
    }
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let server = TestServer::start(false).await;

    let (status, body) = server.get("/entries/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn incomplete_create_is_rejected_without_side_effects() {
    let server = TestServer::start(false).await;

    let bodies = [
        json!({"query": "", "date": "2025-08-11"}),
        json!({"query": "1 cup rice"}),
        json!({"date": "2025-08-11"}),
        json!({"query": 42, "date": "2025-08-11"}),
    ];
    for body in &bodies {
        let (status, response) = server.post(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response["error"]["code"], 1001);
    }

    assert_eq!(server.entry_count().await, 0);
}

#[tokio::test]
async fn whitespace_fields_are_accepted() {
    let server = TestServer::start(false).await;

    let (status, body) = server.post(&json!({"query": "   ", "date": "2025-08-11"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["query"], "   ");

    let (status, body) = server.post(&json!({"query": "rice", "date": " "})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["date"], " ");

    assert_eq!(server.entry_count().await, 2);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = TestServer::start(false).await;

    let Ok(response) = server
        .http
        .post(format!("{}/entries", server.base))
        .header("content-type", "application/json")
        .body("{\"query\": ")
        .send()
        .await
    else {
        panic!("POST failed");
    };

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.entry_count().await, 0);
}

#[tokio::test]
async fn lookup_failure_is_500_and_stores_nothing() {
    let server = TestServer::start(true).await;

    let (status, body) = server.post(&rice_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], 3001);
    assert_eq!(body["error"]["message"], "failed to fetch nutrition data");
    assert_eq!(server.entry_count().await, 0);
}

#[tokio::test]
async fn list_returns_full_entries_by_default() {
    let server = TestServer::start(false).await;
    server.post(&rice_request()).await;
    server
        .post(&json!({"query": "2 eggs", "date": "2025-08-12"}))
        .await;

    for path in ["/entries", "/entries?format=full"] {
        let (status, body) = server.get(path).await;
        assert_eq!(status, StatusCode::OK);
        let Some(entries) = body.as_array() else {
            panic!("expected a list, got {body}");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], 1);
        assert_eq!(entries[1]["id"], 2);
        assert!(entries[0]["nutrients"]["foods"].is_array());
    }
}

#[tokio::test]
async fn list_simple_aggregates_each_entry() {
    let server = TestServer::start(false).await;
    server.post(&rice_request()).await;

    let (status, body) = server.get("/entries?format=simple").await;

    assert_eq!(status, StatusCode::OK);
    let Some(entries) = body.as_array() else {
        panic!("expected a list, got {body}");
    };
    assert_eq!(entries.len(), 1);
    let view = &entries[0];
    assert_eq!(view["id"], 1);
    assert_eq!(view["food_name"], "rice + apple");
    assert_eq!(view["serving_size"], "1.0 cup + 0.5 medium");
    let Some(calories) = view["calories"].as_f64() else {
        panic!("calories missing");
    };
    assert!((calories - 241.1).abs() < 1e-9);
    assert_eq!(
        view["image_url"],
        "https://nix-tag-images.s3.amazonaws.com/384_thumb.jpg"
    );
    assert!(view.get("nutrients").is_none());
}

#[tokio::test]
async fn repeated_format_uses_first_value() {
    let server = TestServer::start(false).await;
    server.post(&rice_request()).await;

    let (status, body) = server.get("/entries?format=simple&format=full").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["food_name"], "rice + apple");
    assert!(body[0].get("nutrients").is_none());

    let (status, body) = server.get("/entries?format=full&format=simple").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body[0]["nutrients"]["foods"].is_array());
}

#[tokio::test]
async fn list_is_empty_on_fresh_server() {
    let server = TestServer::start(false).await;

    let (status, body) = server.get("/entries?format=simple").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn health_reports_entry_count() {
    let server = TestServer::start(false).await;
    for _ in 0..4 {
        server.post(&rice_request()).await;
    }

    let (status, body) = server.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["entries"], 4);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = TestServer::start(false).await;

    let (status, body) = server.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/entries/{id}"].is_object());
}
