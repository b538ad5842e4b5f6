//! Search layer facade.
//!
//! This module implements the two-tier query resolution engine:
//!
//! - **[`sanitize`]**: Strips characters with syntactic meaning to the
//!   keyword index before any strategy runs.
//! - **[`tier`]**: Provider priority classification (curated tier table).
//! - **[`store`]**: The abstract queryable catalog store and its error
//!   taxonomy.
//! - **[`keyword`]**: Relevance-ranked retrieval via the full-text index.
//! - **[`substring`]**: Literal case-insensitive fallback retrieval.
//! - **[`resolver`]**: The entry point orchestrating sanitization, strategy
//!   selection, and silent fallback.

pub mod keyword;
pub mod resolver;
pub mod sanitize;
pub mod store;
pub mod substring;
pub mod tier;

pub use resolver::{MIN_INDEXED_QUERY_LEN, QueryResolver};
pub use sanitize::sanitize;
pub use store::{CatalogStore, ScoredModel, StoreError};
pub use tier::TierTable;
