//! Tiered keyword/substring search over an AI model pricing catalog.
//!
//! The catalog (model name, slug, provider, token pricing) is built by an
//! external data pipeline; this crate indexes it in SQLite and resolves
//! free-text queries through a two-tier strategy: a trigram FTS5 keyword
//! index ranked by BM25, falling back to a literal substring scan when the
//! index is unavailable or the query is too short to tokenize. Results are
//! always ordered provider-tier-first, biasing toward curated first-party
//! vendors.
//!
//! Layering, leaves first:
//!
//! - [`model`]: catalog entity structs.
//! - [`search`]: the query resolution engine (sanitizer, tier classifier,
//!   strategies, resolver) over an abstract store.
//! - [`storage`]: the SQLite store implementation and catalog ingest.
//! - [`cli`]: the boundary layer (argument validation, output envelopes).

pub mod cli;
pub mod model;
pub mod search;
pub mod storage;

pub use model::ModelRecord;
pub use search::{CatalogStore, QueryResolver, StoreError, TierTable};
pub use storage::SqliteCatalog;
