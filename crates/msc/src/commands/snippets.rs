//! Snippets command implementation.
//!
//! Runs a query string against the API and prints the matching snippets
//! with folder paths and tag names resolved from the cache.

use std::collections::HashMap;

use masscode_cache_rs::{FreshnessOracle, Medium};

use super::{CommandContext, Result};
use crate::output::{format_snippets_json, format_snippets_table, SnippetRow};

/// Executes the snippets command.
///
/// # Errors
///
/// Returns an error if a tag or folder in the query does not exist, or if an
/// API request fails.
pub async fn execute<O: FreshnessOracle>(
    ctx: &CommandContext,
    medium: &mut Medium<O>,
    query: &str,
) -> Result<()> {
    tracing::debug!(query, "Running snippet query");
    let snippets = medium.query_snippets(query).await?;

    let paths: HashMap<String, String> = medium.folder_paths().await?.clone();
    let tag_names = medium.tags_map(true).await?;

    let rows: Vec<SnippetRow> = snippets
        .iter()
        .map(|s| SnippetRow {
            id: &s.id,
            name: s.name.as_deref().unwrap_or_default(),
            folder: s
                .folder_id
                .as_ref()
                .and_then(|id| paths.get(id))
                .map(String::as_str),
            tags: s
                .tags_ids
                .iter()
                .map(|id| tag_names.get(id).map_or(id.as_str(), String::as_str))
                .collect(),
            fragments: s.content.len(),
        })
        .collect();

    let output = if ctx.json_output {
        format_snippets_json(&rows)?
    } else {
        format_snippets_table(&rows, ctx.use_colors)
    };
    ctx.emit(&output);

    Ok(())
}
