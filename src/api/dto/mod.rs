//! Data Transfer Objects for REST request/response serialization.

pub mod entry_dto;

pub use entry_dto::*;
