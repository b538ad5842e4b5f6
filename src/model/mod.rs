//! Catalog entity types shared across storage and search.

pub mod types;

pub use types::ModelRecord;
