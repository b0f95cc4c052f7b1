//! Parsed query output formatting.

use masscode_cache_rs::QueryResult;
use owo_colors::OwoColorize;

/// Formats a parsed query as JSON.
pub fn format_query_json(query: &QueryResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(query)
}

/// Formats a parsed query as labelled lines, skipping empty parts.
pub fn format_query_table(query: &QueryResult, use_colors: bool) -> String {
    if query.is_empty() {
        return "Empty query.\n".to_string();
    }

    let params: Vec<String> = query
        .params
        .iter()
        .map(|p| match &p.value {
            Some(value) => format!("{}={}", p.key, value),
            None => p.key.clone(),
        })
        .collect();

    let sections = [
        ("Folders", query.folder.join(", ")),
        ("Exclude folders", query.folders_exclude.join(", ")),
        ("Tags", query.tags.join(", ")),
        ("Exclude tags", query.tags_exclude.join(", ")),
        ("Params", params.join(", ")),
        ("Search", query.search_text().to_string()),
    ];

    let mut output = String::new();
    for (label, value) in sections {
        if value.is_empty() {
            continue;
        }
        let label = format!("{label}:");
        if use_colors {
            output.push_str(&format!("{:<17} {}\n", label.dimmed(), value));
        } else {
            output.push_str(&format!("{label:<17} {value}\n"));
        }
    }

    output
}
