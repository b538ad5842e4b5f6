//! Abstract queryable catalog store.
//!
//! The resolver and strategies never talk to SQLite directly; they go
//! through [`CatalogStore`], which keeps the engine testable against mock
//! backends and keeps index construction an external concern.

use thiserror::Error;

use crate::model::ModelRecord;

/// A keyword-index match with its relevance score attached.
#[derive(Debug, Clone)]
pub struct ScoredModel {
    pub record: ModelRecord,
    /// BM25-style relevance; lower is better.
    pub rank: f64,
}

/// Errors a store backend can produce.
///
/// Both variants trigger the same substring fallback in the resolver; they
/// exist so diagnostics can distinguish a query the index choked on from a
/// backend that could not be reached at all.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("index query failed: {0}")]
    IndexQuery(String),

    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the model catalog.
///
/// Implementations return *all* matching rows; ordering and truncation are
/// the strategies' job (the catalog is low-thousands of rows, so candidate
/// sets are bounded by construction). An empty row set is success, not an
/// error.
pub trait CatalogStore {
    /// Relevance-ranked matches from the full-text index over name, slug,
    /// and provider. The query must already be sanitized.
    fn keyword_matches(&self, query: &str) -> Result<Vec<ScoredModel>, StoreError>;

    /// Case-insensitive literal "contains" matches over name, slug, and
    /// provider. Valid for any input string; fails only when the backend
    /// itself is unreachable.
    fn substring_matches(&self, query: &str) -> Result<Vec<ModelRecord>, StoreError>;
}
