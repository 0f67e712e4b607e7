//! Outbound nutrition lookup.
//!
//! [`NutritionLookup`] is the seam between the service layer and the
//! third-party nutrition API. The production implementation is
//! [`NutritionixClient`]; tests substitute their own.

pub mod nutritionix;

use async_trait::async_trait;

use crate::domain::FoodItem;

pub use nutritionix::NutritionixClient;

/// Failure of a single lookup call.
///
/// Callers treat every variant the same way (the create request fails);
/// the variants exist so the cause can be logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream call exceeded the configured timeout.
    #[error("lookup timed out")]
    Timeout,

    /// The upstream answered with a non-200 status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The upstream body was not a valid lookup response.
    #[error("malformed upstream response: {0}")]
    Decode(String),
}

/// Resolves a free-text food description into food items.
#[async_trait]
pub trait NutritionLookup: Send + Sync + std::fmt::Debug {
    /// Looks up `query` and returns the recognised food items.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] on transport failure, timeout, non-200
    /// status, or an undecodable body.
    async fn lookup(&self, query: &str) -> Result<Vec<FoodItem>, LookupError>;
}
