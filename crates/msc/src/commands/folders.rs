//! Folders command implementation.
//!
//! Lists folders with their resolved `Parent/Child` paths.

use std::collections::HashMap;

use masscode_api_rs::models::Folder;
use masscode_cache_rs::{FreshnessOracle, Medium};

use super::{CommandContext, Result};
use crate::output::{format_folders_json, format_folders_table, FolderRow};

/// Executes the folders command.
///
/// # Errors
///
/// Returns an error if the API request fails or folder parents cannot be
/// resolved into paths.
pub async fn execute<O: FreshnessOracle>(
    ctx: &CommandContext,
    medium: &mut Medium<O>,
    pattern: Option<&str>,
) -> Result<()> {
    let paths: HashMap<String, String> = medium.folder_paths().await?.clone();
    let folders: Vec<&Folder> = match pattern {
        Some(pattern) => medium.match_folders(pattern).await?,
        None => medium.full_folders().await?.iter().collect(),
    };

    let rows = folder_rows(&folders, &paths);

    let output = if ctx.json_output {
        format_folders_json(&rows)?
    } else {
        format_folders_table(&rows, ctx.use_colors)
    };
    ctx.emit(&output);

    Ok(())
}

/// Pairs folders with their paths, sorted by path.
fn folder_rows<'a>(folders: &[&'a Folder], paths: &'a HashMap<String, String>) -> Vec<FolderRow<'a>> {
    let mut rows: Vec<FolderRow> = folders
        .iter()
        .map(|f| FolderRow {
            id: &f.id,
            name: &f.name,
            path: paths.get(&f.id).map_or(f.name.as_str(), String::as_str),
            parent_id: f.parent(),
        })
        .collect();
    rows.sort_by(|a, b| a.path.cmp(b.path));
    rows
}
