//! Tags command implementation.
//!
//! Lists the cached tag collection, optionally narrowed by a name pattern.

use masscode_api_rs::models::Tag;
use masscode_cache_rs::{FreshnessOracle, Medium};

use super::{CommandContext, Result};
use crate::output::{format_tags_json, format_tags_table};

/// Executes the tags command.
///
/// # Errors
///
/// Returns an error if the freshness check or the API request fails.
pub async fn execute<O: FreshnessOracle>(
    ctx: &CommandContext,
    medium: &mut Medium<O>,
    pattern: Option<&str>,
) -> Result<()> {
    let mut tags: Vec<&Tag> = match pattern {
        Some(pattern) => medium.match_tags(pattern).await?,
        None => medium.full_tags().await?.iter().collect(),
    };
    tags.sort_by_key(|t| t.name.to_lowercase());

    let output = if ctx.json_output {
        format_tags_json(&tags)?
    } else {
        format_tags_table(&tags, ctx.use_colors)
    };
    ctx.emit(&output);

    Ok(())
}
