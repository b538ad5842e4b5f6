//! Indexed keyword search strategy.

use tracing::debug;

use super::store::{CatalogStore, StoreError};
use super::tier::TierTable;
use crate::model::ModelRecord;

/// Relevance-ranked retrieval via the full-text index.
///
/// Orders primarily by ascending provider tier, secondarily by ascending
/// BM25 rank, so tier dominates relevance. Propagates backend execution
/// failure to the caller; an empty candidate set is a normal empty result.
pub fn search<S: CatalogStore>(
    store: &S,
    tiers: &TierTable,
    query: &str,
    limit: usize,
) -> Result<Vec<ModelRecord>, StoreError> {
    let mut hits = store.keyword_matches(query)?;
    debug!(query, candidates = hits.len(), "keyword index matches");

    hits.sort_by(|a, b| {
        tiers
            .rank(&a.record.provider)
            .cmp(&tiers.rank(&b.record.provider))
            .then(a.rank.total_cmp(&b.rank))
    });
    hits.truncate(limit);

    Ok(hits.into_iter().map(|hit| hit.record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::store::ScoredModel;

    struct FixedStore(Vec<ScoredModel>);

    impl CatalogStore for FixedStore {
        fn keyword_matches(&self, _query: &str) -> Result<Vec<ScoredModel>, StoreError> {
            Ok(self.0.clone())
        }

        fn substring_matches(&self, _query: &str) -> Result<Vec<ModelRecord>, StoreError> {
            unreachable!("keyword strategy never touches the substring path")
        }
    }

    fn scored(name: &str, provider: &str, rank: f64) -> ScoredModel {
        ScoredModel {
            record: ModelRecord {
                name: name.to_string(),
                slug: name.to_lowercase().replace(['/', '.', ':'], "-"),
                provider: provider.to_string(),
                mode: None,
                input_cost_per_token: None,
                output_cost_per_token: None,
            },
            rank,
        }
    }

    #[test]
    fn tier_dominates_relevance() {
        let store = FixedStore(vec![
            scored("acme-claude-clone", "acme", -9.0),
            scored("claude-3-opus", "anthropic", -1.5),
        ]);
        let results = search(&store, &TierTable::default(), "claude", 10).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["claude-3-opus", "acme-claude-clone"]);
    }

    #[test]
    fn rank_breaks_ties_within_a_tier() {
        let store = FixedStore(vec![
            scored("gpt-4o-mini", "openai", -2.0),
            scored("gpt-4o", "openai", -5.0),
        ]);
        let results = search(&store, &TierTable::default(), "gpt 4o", 10).unwrap();
        assert_eq!(results[0].name, "gpt-4o");
    }

    #[test]
    fn truncates_to_limit_after_ordering() {
        let store = FixedStore(vec![
            scored("other-a", "acme", -9.0),
            scored("gpt-4", "openai", -1.0),
            scored("gpt-4-turbo", "openai", -2.0),
        ]);
        let results = search(&store, &TierTable::default(), "gpt", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.provider == "openai"));
    }
}
