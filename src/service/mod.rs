//! Service layer: business logic orchestration.
//!
//! [`EntryService`] runs the outbound nutrition lookup and records the
//! result in the [`super::domain::EntryStore`].

pub mod entry_service;

pub use entry_service::EntryService;
