//! Catalog ingest from litellm-style pricing JSON.
//!
//! The upstream document is a single JSON object mapping model names to
//! metadata blobs. Slugs and providers are derived here, at ingest, so the
//! search engine only ever sees normalized rows.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::sqlite::SqliteCatalog;

/// The subset of upstream fields the catalog keeps. Everything else in an
/// entry is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogEntry {
    litellm_provider: Option<String>,
    mode: Option<String>,
    input_cost_per_token: Option<f64>,
    output_cost_per_token: Option<f64>,
}

#[derive(Debug, Default)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// URL-safe identifier for a model name: `/`, `.`, `:` become `-`.
pub fn slugify(name: &str) -> String {
    name.replace(['/', '.', ':'], "-")
}

/// Provider identifier for a model, lowercase.
///
/// Prefers the upstream `litellm_provider` field; otherwise falls back to
/// the name's vendor path prefix, then well-known name prefixes.
pub fn derive_provider(name: &str, declared: Option<&str>) -> String {
    if let Some(declared) = declared {
        let declared = declared.trim();
        if !declared.is_empty() {
            return declared.to_lowercase();
        }
    }
    if let Some((vendor, _)) = name.split_once('/') {
        return vendor.to_lowercase();
    }
    if name.starts_with("gpt-") || name.starts_with("o1") || name.starts_with("o3") {
        return "openai".to_string();
    }
    if name.starts_with("claude-") {
        return "anthropic".to_string();
    }
    if name.starts_with("gemini") {
        return "google".to_string();
    }
    "unknown".to_string()
}

/// Load a pricing document into the catalog.
///
/// Upserts by slug (re-import is idempotent) and rebuilds the FTS index in
/// the same transaction. Entries that fail to deserialize — the upstream
/// document ships a `sample_spec` placeholder whose fields are descriptive
/// strings — are skipped with a warning rather than failing the import.
pub fn import_catalog(catalog: &mut SqliteCatalog, json: &str) -> Result<ImportStats> {
    let doc: serde_json::Map<String, Value> =
        serde_json::from_str(json).context("Failed to parse catalog JSON")?;

    let tx = catalog.conn.transaction()?;
    let mut stats = ImportStats::default();

    {
        let mut upsert = tx.prepare(
            "INSERT INTO models (name, slug, provider, mode,
                                 input_cost_per_token, output_cost_per_token)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(slug) DO UPDATE SET
                 name = excluded.name,
                 provider = excluded.provider,
                 mode = excluded.mode,
                 input_cost_per_token = excluded.input_cost_per_token,
                 output_cost_per_token = excluded.output_cost_per_token",
        )?;

        for (name, value) in &doc {
            if name == "sample_spec" {
                stats.skipped += 1;
                continue;
            }
            let entry: CatalogEntry = match serde_json::from_value(value.clone()) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(model = %name, error = %err, "skipping malformed catalog entry");
                    stats.skipped += 1;
                    continue;
                }
            };

            let slug = slugify(name);
            let provider = derive_provider(name, entry.litellm_provider.as_deref());
            upsert.execute(rusqlite::params![
                name,
                slug,
                provider,
                entry.mode,
                entry.input_cost_per_token,
                entry.output_cost_per_token,
            ])?;
            stats.imported += 1;
        }
    }

    // External-content FTS tables do not track the base table; rebuild once
    // per import instead of mirroring every upsert.
    tx.execute("INSERT INTO models_fts(models_fts) VALUES('rebuild')", [])?;
    tx.commit().context("Failed to commit catalog import")?;

    debug!(
        imported = stats.imported,
        skipped = stats.skipped,
        "catalog import finished"
    );
    Ok(stats)
}
