//! Query resolution entry point.
//!
//! Orchestrates sanitization, strategy selection, and the silent fallback
//! from the keyword index to a substring scan. The fallback is an explicit
//! branch on the keyword strategy's outcome, not error unwinding, so it is
//! visible in the control flow and directly testable.

use tracing::{debug, warn};

use super::sanitize::sanitize;
use super::store::{CatalogStore, StoreError};
use super::tier::TierTable;
use super::{keyword, substring};
use crate::model::ModelRecord;

/// Sanitized queries shorter than this skip the keyword index entirely.
/// The trigram tokenizer needs three characters to form a single token, so
/// shorter input produces only spurious matches; a direct substring scan is
/// both faster and more precise for it.
pub const MIN_INDEXED_QUERY_LEN: usize = 3;

/// Resolves raw user queries into ranked, bounded result sets.
///
/// Owns the tier table so tests can substitute alternate priority policies.
pub struct QueryResolver<S> {
    store: S,
    tiers: TierTable,
}

impl<S: CatalogStore> QueryResolver<S> {
    pub fn new(store: S) -> Self {
        Self::with_tiers(store, TierTable::default())
    }

    pub fn with_tiers(store: S, tiers: TierTable) -> Self {
        Self { store, tiers }
    }

    /// Resolve `query` into at most `limit` ranked records.
    ///
    /// Preconditions (enforced by the boundary layer, documented here):
    /// `limit` is already clamped to `[1, 50]` and `query` is not
    /// empty/whitespace-only.
    ///
    /// Keyword-index execution failures are absorbed: the resolver logs
    /// them and retries as a substring scan over the sanitized query, so
    /// callers see either a ranked result set or an error only when the
    /// store itself is unreachable.
    pub fn resolve(&self, query: &str, limit: usize) -> Result<Vec<ModelRecord>, StoreError> {
        let sanitized = sanitize(query);

        if sanitized.chars().count() < MIN_INDEXED_QUERY_LEN {
            debug!(query = %sanitized, "short query, routing to substring scan");
            return substring::search(&self.store, &self.tiers, &sanitized, limit);
        }

        match keyword::search(&self.store, &self.tiers, &sanitized, limit) {
            Ok(results) => Ok(results),
            Err(err) => {
                // Both failure shapes fall back identically; the tag only
                // changes what the diagnostics say.
                match &err {
                    StoreError::IndexQuery(_) => {
                        warn!(error = %err, "keyword index rejected query, retrying as substring scan");
                    }
                    StoreError::Unavailable(_) => {
                        warn!(error = %err, "keyword index unavailable, retrying as substring scan");
                    }
                }
                substring::search(&self.store, &self.tiers, &sanitized, limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::store::ScoredModel;
    use std::cell::Cell;

    /// Mock store that counts calls and can be told to fail either path.
    struct ProbeStore {
        rows: Vec<ModelRecord>,
        keyword_calls: Cell<usize>,
        substring_calls: Cell<usize>,
        fail_keyword: bool,
        fail_substring: bool,
    }

    impl ProbeStore {
        fn healthy(rows: Vec<ModelRecord>) -> Self {
            Self {
                rows,
                keyword_calls: Cell::new(0),
                substring_calls: Cell::new(0),
                fail_keyword: false,
                fail_substring: false,
            }
        }
    }

    impl CatalogStore for ProbeStore {
        fn keyword_matches(&self, _query: &str) -> Result<Vec<ScoredModel>, StoreError> {
            self.keyword_calls.set(self.keyword_calls.get() + 1);
            if self.fail_keyword {
                return Err(StoreError::IndexQuery("fts5: syntax error".to_string()));
            }
            Ok(self
                .rows
                .iter()
                .cloned()
                .map(|record| ScoredModel { record, rank: -1.0 })
                .collect())
        }

        fn substring_matches(&self, _query: &str) -> Result<Vec<ModelRecord>, StoreError> {
            self.substring_calls.set(self.substring_calls.get() + 1);
            if self.fail_substring {
                return Err(StoreError::Unavailable("database is locked".to_string()));
            }
            Ok(self.rows.clone())
        }
    }

    fn record(name: &str, provider: &str) -> ModelRecord {
        ModelRecord {
            name: name.to_string(),
            slug: name.to_string(),
            provider: provider.to_string(),
            mode: None,
            input_cost_per_token: None,
            output_cost_per_token: None,
        }
    }

    #[test]
    fn short_query_never_touches_keyword_index() {
        let store = ProbeStore::healthy(vec![record("gpt-4o", "openai")]);
        let resolver = QueryResolver::new(store);
        resolver.resolve("4o", 5).unwrap();
        assert_eq!(resolver.store.keyword_calls.get(), 0);
        assert_eq!(resolver.store.substring_calls.get(), 1);
    }

    #[test]
    fn short_after_sanitization_also_routes_to_substring() {
        // "-4o" is three chars of raw input but sanitizes to "4o"; the
        // routing decision is made on the sanitized string.
        let store = ProbeStore::healthy(vec![]);
        let resolver = QueryResolver::new(store);
        resolver.resolve("-4o", 5).unwrap();
        assert_eq!(resolver.store.keyword_calls.get(), 0);
    }

    #[test]
    fn long_query_uses_keyword_index_only() {
        let store = ProbeStore::healthy(vec![record("claude-3-opus", "anthropic")]);
        let resolver = QueryResolver::new(store);
        let results = resolver.resolve("claude", 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(resolver.store.keyword_calls.get(), 1);
        assert_eq!(resolver.store.substring_calls.get(), 0);
    }

    #[test]
    fn keyword_failure_falls_back_transparently() {
        let mut store = ProbeStore::healthy(vec![record("claude-3-opus", "anthropic")]);
        store.fail_keyword = true;
        let resolver = QueryResolver::new(store);
        let results = resolver.resolve("claude", 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(resolver.store.keyword_calls.get(), 1);
        assert_eq!(resolver.store.substring_calls.get(), 1);
    }

    #[test]
    fn both_paths_failing_propagates_infrastructure_error() {
        let mut store = ProbeStore::healthy(vec![]);
        store.fail_keyword = true;
        store.fail_substring = true;
        let resolver = QueryResolver::new(store);
        let err = resolver.resolve("claude", 5).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn resolve_is_idempotent_against_an_unchanged_catalog() {
        let store = ProbeStore::healthy(vec![
            record("b-model", "acme"),
            record("a-model", "acme"),
            record("claude-3-opus", "anthropic"),
        ]);
        let resolver = QueryResolver::new(store);
        let first = resolver.resolve("model", 10).unwrap();
        let second = resolver.resolve("model", 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidate_set_is_not_an_error() {
        let store = ProbeStore::healthy(vec![]);
        let resolver = QueryResolver::new(store);
        let results = resolver.resolve("nonexistent-model", 5).unwrap();
        assert!(results.is_empty());
    }
}
