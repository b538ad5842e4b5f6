//! Normalized catalog entity structs.

use serde::{Deserialize, Serialize};

/// One model row from the pricing catalog.
///
/// The catalog is owned and refreshed by the external data pipeline; the
/// search engine only ever reads these. The same struct doubles as the
/// result projection returned to callers, so the field set matches the
/// search API's output exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Display name as published upstream. May contain `/`, `.`, `:`.
    pub name: String,
    /// URL-safe identifier derived from `name`. Unique across the catalog.
    pub slug: String,
    /// Lowercase provider identifier (e.g. "anthropic", "openai").
    pub provider: String,
    /// Optional classification ("chat", "embedding", "image_generation", ...).
    pub mode: Option<String>,
    /// Cost per input token in USD, when the upstream feed publishes one.
    pub input_cost_per_token: Option<f64>,
    /// Cost per output token in USD.
    pub output_cost_per_token: Option<f64>,
}
