//! SQLite-backed catalog store.
//!
//! The keyword path queries an external-content FTS5 table built with the
//! trigram tokenizer over name, slug, and provider; the substring path is a
//! plain LIKE scan over the models table. Index construction lives here,
//! with ingest, so the search engine itself stays storage-agnostic.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::{Connection, Row};

use crate::model::ModelRecord;
use crate::search::store::{CatalogStore, ScoredModel, StoreError};

const RECORD_COLUMNS: &str =
    "name, slug, provider, mode, input_cost_per_token, output_cost_per_token";

pub struct SqliteCatalog {
    pub(crate) conn: Connection,
}

impl SqliteCatalog {
    /// Open (or create) a catalog database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open catalog database at {}", path.display()))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        let catalog = Self { conn };
        catalog.init_schema()?;
        Ok(catalog)
    }

    /// In-memory catalog, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        let catalog = Self { conn };
        catalog.init_schema()?;
        Ok(catalog)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS models (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    slug TEXT NOT NULL UNIQUE,
                    provider TEXT NOT NULL,
                    mode TEXT,
                    input_cost_per_token REAL,
                    output_cost_per_token REAL
                );

                CREATE VIRTUAL TABLE IF NOT EXISTS models_fts USING fts5(
                    name, slug, provider,
                    content='models',
                    content_rowid='id',
                    tokenize='trigram'
                );",
            )
            .context("Failed to create catalog schema")?;
        Ok(())
    }

    /// Number of models currently in the catalog.
    pub fn model_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM models", [], |row| row.get(0))
            .context("Failed to count catalog rows")
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ModelRecord> {
    Ok(ModelRecord {
        name: row.get(0)?,
        slug: row.get(1)?,
        provider: row.get(2)?,
        mode: row.get(3)?,
        input_cost_per_token: row.get(4)?,
        output_cost_per_token: row.get(5)?,
    })
}

/// Build an FTS5 MATCH expression from a sanitized query.
///
/// The trigram tokenizer matches nothing for terms under three characters,
/// so those are dropped rather than left to AND the whole query down to
/// zero rows ("gpt 4" must still find gpt-4-turbo through "gpt"). Each
/// surviving token is quoted as a phrase; sanitization has already removed
/// every quote, so the tokens cannot escape.
fn match_expression(query: &str) -> Option<String> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .filter(|token| token.chars().count() >= 3)
        .map(|token| format!("\"{token}\""))
        .collect();
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.join(" "))
}

/// Wrap `query` in `%...%`, escaping LIKE wildcards so the scan matches the
/// user's text literally.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl CatalogStore for SqliteCatalog {
    fn keyword_matches(&self, query: &str) -> Result<Vec<ScoredModel>, StoreError> {
        let expression = match_expression(query).ok_or_else(|| {
            StoreError::IndexQuery(format!("no indexable terms in query '{query}'"))
        })?;
        let run = || -> rusqlite::Result<Vec<ScoredModel>> {
            let mut stmt = self.conn.prepare(
                "SELECT m.name, m.slug, m.provider, m.mode,
                        m.input_cost_per_token, m.output_cost_per_token,
                        bm25(models_fts) AS rank
                 FROM models_fts
                 JOIN models m ON models_fts.rowid = m.id
                 WHERE models_fts MATCH ?1",
            )?;
            let rows = stmt.query_map([&expression], |row| {
                Ok(ScoredModel {
                    record: record_from_row(row)?,
                    rank: row.get(6)?,
                })
            })?;
            rows.collect()
        };
        run().map_err(|err| StoreError::IndexQuery(err.to_string()))
    }

    fn substring_matches(&self, query: &str) -> Result<Vec<ModelRecord>, StoreError> {
        let pattern = like_pattern(query);
        let run = || -> rusqlite::Result<Vec<ModelRecord>> {
            let mut stmt = self.conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS}
                 FROM models
                 WHERE name LIKE ?1 ESCAPE '\\'
                    OR slug LIKE ?1 ESCAPE '\\'
                    OR provider LIKE ?1 ESCAPE '\\'"
            ))?;
            let rows = stmt.query_map([&pattern], record_from_row)?;
            rows.collect()
        };
        run().map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}
