//! Provider tier classification.
//!
//! Results are biased toward a curated set of first-party providers,
//! independent of textual relevance: a weak match from a tier-0 provider
//! outranks a strong match from a tier-2 reseller. The membership lists are
//! configuration data, so the table is owned by a value tests can swap out,
//! not hard-coded at the call sites.

use std::collections::HashMap;

/// Primary frontier-model vendors (tier 0).
pub const PRIMARY_PROVIDERS: &[&str] =
    &["anthropic", "openai", "gemini", "vertex_ai", "vertex_ai_beta"];

/// Second-tier but still first-party vendors (tier 1).
pub const SECONDARY_PROVIDERS: &[&str] =
    &["vertex_ai-language-models", "deepseek", "mistral", "xai"];

/// Ordered provider-to-rank mapping. Rank 0 is highest priority; providers
/// absent from the table fall through to the default (lowest) rank.
#[derive(Debug, Clone)]
pub struct TierTable {
    ranks: HashMap<String, u8>,
    default_rank: u8,
}

impl TierTable {
    /// Build a table from tier lists, first slice = rank 0. Matching is
    /// exact and case-sensitive against the stored provider identifier,
    /// which the catalog keeps lowercase.
    pub fn new(tiers: &[&[&str]]) -> Self {
        let mut ranks = HashMap::new();
        for (rank, providers) in tiers.iter().enumerate() {
            for provider in *providers {
                ranks.insert((*provider).to_string(), rank as u8);
            }
        }
        Self {
            ranks,
            default_rank: tiers.len() as u8,
        }
    }

    /// Priority rank for a provider. Lower sorts first.
    pub fn rank(&self, provider: &str) -> u8 {
        self.ranks.get(provider).copied().unwrap_or(self.default_rank)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::new(&[PRIMARY_PROVIDERS, SECONDARY_PROVIDERS])
    }
}
