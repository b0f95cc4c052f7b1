//! Parse command implementation.
//!
//! Shows how a query string breaks down, without touching the API.

use masscode_cache_rs::parse_query;

use super::{CommandContext, Result};
use crate::output::{format_query_json, format_query_table};

/// Executes the parse command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let parsed = parse_query(query);

    let output = if ctx.json_output {
        format_query_json(&parsed)?
    } else {
        format_query_table(&parsed, ctx.use_colors)
    };
    ctx.emit(&output);

    Ok(())
}
