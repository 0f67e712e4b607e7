//! Domain layer: entry types, the entry store, and the simplified view.
//!
//! This module contains the server-side model: identifiers, food items as
//! returned by the lookup service, stored entries, the concurrent
//! [`EntryStore`], and the [`simplify`] projection used by list endpoints.

pub mod entry;
pub mod entry_id;
pub mod entry_store;
pub mod food_item;
pub mod simplified;

pub use entry::{Entry, Nutrients};
pub use entry_id::EntryId;
pub use entry_store::EntryStore;
pub use food_item::{FoodItem, Photo};
pub use simplified::{SimplifiedEntry, simplify};
