//! Substring search strategy.
//!
//! The universal fallback and the exclusive path for very short queries.
//! No relevance score exists for a literal "contains" match, so within a
//! tier the ordering key is the case-insensitive name.

use tracing::debug;

use super::store::{CatalogStore, StoreError};
use super::tier::TierTable;
use crate::model::ModelRecord;

/// Literal case-insensitive retrieval over name, slug, and provider.
///
/// Orders by ascending provider tier, then alphabetically by lowercase
/// name, then truncates to `limit`. Any query string is valid input; only
/// backend unavailability fails here.
pub fn search<S: CatalogStore>(
    store: &S,
    tiers: &TierTable,
    query: &str,
    limit: usize,
) -> Result<Vec<ModelRecord>, StoreError> {
    let mut rows = store.substring_matches(query)?;
    debug!(query, candidates = rows.len(), "substring scan matches");

    rows.sort_by_cached_key(|row| (tiers.rank(&row.provider), row.name.to_lowercase()));
    rows.truncate(limit);

    Ok(rows)
}
