//! # nutrition-tracker
//!
//! REST API that turns free-text food descriptions into dated nutrition
//! entries.
//!
//! Each `POST /entries` forwards the query to the Nutritionix natural
//! nutrients endpoint and stores the returned foods in memory under an
//! auto-incrementing id. Entries can be read back in full or folded into a
//! simplified summary (summed macros, joined names, first image).
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EntryService (service/)
//!     │       │
//!     │       ├── NutritionLookup (lookup/) ──► Nutritionix
//!     │       │
//!     │       └── EntryStore (domain/)
//!     │
//!     └── simplify (domain/)
//! ```
//!
//! Nothing is persisted: entries live for the lifetime of the process.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod service;
