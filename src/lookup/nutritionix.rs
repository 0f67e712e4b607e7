//! Nutritionix "natural nutrients" client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use super::{LookupError, NutritionLookup};
use crate::config::Config;
use crate::domain::{FoodItem, Nutrients};

/// Path of the natural-language nutrients endpoint.
const NUTRIENTS_PATH: &str = "/v2/natural/nutrients";

/// Request body for the nutrients endpoint.
#[derive(Debug, Serialize)]
struct NutrientsRequest<'a> {
    query: &'a str,
}

/// HTTP client for the Nutritionix API.
///
/// Each lookup is one `POST` carrying the application id and key headers.
/// The timeout covers the whole exchange, including reading the body.
#[derive(Clone)]
pub struct NutritionixClient {
    client: Client,
    endpoint: String,
    app_id: String,
    app_key: String,
}

impl NutritionixClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(
        base_url: &str,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::Transport)?;

        Ok(Self {
            client,
            endpoint: format!("{}{NUTRIENTS_PATH}", base_url.trim_end_matches('/')),
            app_id: app_id.into(),
            app_key: app_key.into(),
        })
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(
            &config.nutritionix_base_url,
            config.app_id.as_str(),
            config.app_key.as_str(),
            config.lookup_timeout,
        )
    }

    /// Full URL the client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for NutritionixClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionixClient")
            .field("endpoint", &self.endpoint)
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl NutritionLookup for NutritionixClient {
    async fn lookup(&self, query: &str) -> Result<Vec<FoodItem>, LookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .json(&NutrientsRequest { query })
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        let nutrients: Nutrients =
            serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        tracing::debug!(query, foods = nutrients.foods.len(), "nutrition lookup succeeded");
        Ok(nutrients.foods)
    }
}

/// Separates timeouts from other transport failures.
fn classify(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(err)
    }
}
