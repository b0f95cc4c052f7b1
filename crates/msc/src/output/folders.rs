//! Folder output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{header_line, truncate_id, truncate_str};

/// A folder paired with its resolved path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub path: &'a str,
    pub parent_id: Option<&'a str>,
}

/// JSON output structure for the folders command.
#[derive(Serialize)]
pub struct FoldersListOutput<'a, 'b> {
    pub folders: &'b [FolderRow<'a>],
}

/// Formats folders as JSON.
pub fn format_folders_json(rows: &[FolderRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FoldersListOutput { folders: rows })
}

/// Formats folders as a table, path segments before the leaf dimmed.
pub fn format_folders_table(rows: &[FolderRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No folders found.\n".to_string();
    }

    let mut output = header_line(&format!("{:<10} {}", "ID", "Path"), use_colors);

    for row in rows {
        let path = truncate_str(row.path, 60);
        let path = if use_colors {
            match path.rsplit_once('/') {
                Some((parents, leaf)) => {
                    format!("{}{}", format!("{parents}/").dimmed(), leaf.bold())
                }
                None => path.bold().to_string(),
            }
        } else {
            path
        };
        output.push_str(&format!("{:<10} {}\n", truncate_id(row.id), path));
    }

    output
}
