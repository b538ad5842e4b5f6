//! CLI boundary layer.
//!
//! Everything the core documents as a boundary precondition is enforced
//! here: the result limit is clamped to `[1, 50]` and empty/whitespace
//! queries are rejected with a descriptive error before the resolver ever
//! runs. Infrastructure failures surface as ordinary errors (nonzero exit);
//! "no results" is a success with an empty result set.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::model::ModelRecord;
use crate::search::QueryResolver;
use crate::storage::{SqliteCatalog, import_catalog};

/// Hard cap on results per query.
pub const MAX_RESULT_LIMIT: usize = 50;
const DEFAULT_RESULT_LIMIT: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "mcs", version, about = "Search an AI model pricing catalog")]
pub struct Cli {
    /// Path to the catalog database.
    #[arg(long, global = true, env = "MODEL_CATALOG_DB", default_value = "models.db")]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a litellm-style pricing JSON document into the catalog.
    Import {
        /// Path to the pricing JSON file.
        input: PathBuf,
    },
    /// Search the catalog for models by name, slug, or provider.
    Search {
        /// Free-text query.
        query: String,

        /// Maximum number of results (clamped to 1..=50).
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,

        /// Emit a JSON envelope instead of a table.
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Import { input } => run_import(&cli.db, &input),
        Commands::Search { query, limit, json } => run_search(&cli.db, &query, limit, json),
    }
}

fn run_import(db: &Path, input: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read catalog file {}", input.display()))?;
    let mut catalog = SqliteCatalog::open(db)?;
    let stats = import_catalog(&mut catalog, &json)?;
    println!(
        "Imported {} models into {} ({} entries skipped)",
        stats.imported,
        db.display(),
        stats.skipped
    );
    Ok(())
}

fn run_search(db: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    if query.trim().is_empty() {
        bail!("query must not be empty or whitespace (usage: mcs search <query>)");
    }
    let limit = limit.clamp(1, MAX_RESULT_LIMIT);

    let catalog = SqliteCatalog::open(db)?;
    let resolver = QueryResolver::new(catalog);
    let results = resolver
        .resolve(query, limit)
        .context("catalog store could not be queried")?;

    if json {
        let envelope = serde_json::json!({
            "results": results,
            "query": query,
            "count": results.len(),
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No models matched '{query}'.");
        return Ok(());
    }
    for record in &results {
        println!(
            "{:<48} {:<28} {}",
            record.slug,
            record.provider,
            format_costs(record)
        );
    }
    Ok(())
}

fn format_costs(record: &ModelRecord) -> String {
    let fmt = |cost: Option<f64>| match cost {
        Some(c) => format!("${:.2}/1M", c * 1_000_000.0),
        None => "-".to_string(),
    };
    format!(
        "in {} out {}",
        fmt(record.input_cost_per_token),
        fmt(record.output_cost_per_token)
    )
}
