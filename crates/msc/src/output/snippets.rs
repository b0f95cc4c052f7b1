//! Snippet output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_tags, header_line, truncate_id, truncate_str};

/// A snippet with folder path and tag names resolved for display.
#[derive(Debug, Serialize)]
pub struct SnippetRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub folder: Option<&'a str>,
    pub tags: Vec<&'a str>,
    pub fragments: usize,
}

/// JSON output structure for the snippets command.
#[derive(Serialize)]
pub struct SnippetsListOutput<'a, 'b> {
    pub snippets: &'b [SnippetRow<'a>],
    pub total: usize,
}

/// Formats snippets as JSON.
pub fn format_snippets_json(rows: &[SnippetRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SnippetsListOutput {
        snippets: rows,
        total: rows.len(),
    })
}

/// Formats snippets as a table.
pub fn format_snippets_table(rows: &[SnippetRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No snippets found.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<10} {:<30} {:<24} {}", "ID", "Name", "Folder", "Tags"),
        use_colors,
    );

    for row in rows {
        let name = if row.name.is_empty() {
            "(untitled)"
        } else {
            row.name
        };
        let folder = truncate_str(row.folder.unwrap_or("Inbox"), 24);
        let tags = format_tags(&row.tags, 30);
        let tags = if use_colors {
            tags.cyan().to_string()
        } else {
            tags
        };

        let line = format!(
            "{:<10} {:<30} {:<24} {}",
            truncate_id(row.id),
            truncate_str(name, 30),
            folder,
            tags
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
