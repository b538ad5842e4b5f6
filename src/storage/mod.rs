//! Catalog persistence.
//!
//! - **[`sqlite`]**: rusqlite-backed [`crate::search::CatalogStore`]
//!   implementation (models table + trigram FTS5 index).
//! - **[`ingest`]**: litellm-style pricing JSON import.

pub mod ingest;
pub mod sqlite;

pub use ingest::{ImportStats, import_catalog};
pub use sqlite::SqliteCatalog;
