//! Tag output formatting.

use masscode_api_rs::models::Tag;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{header_line, truncate_id, truncate_str};

/// JSON output structure for the tags command.
#[derive(Serialize)]
pub struct TagsListOutput<'a> {
    pub tags: Vec<TagOutput<'a>>,
}

/// JSON output structure for a single tag.
#[derive(Serialize)]
pub struct TagOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// Formats tags as JSON.
pub fn format_tags_json(tags: &[&Tag]) -> Result<String, serde_json::Error> {
    let output = TagsListOutput {
        tags: tags
            .iter()
            .map(|t| TagOutput {
                id: &t.id,
                name: &t.name,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats tags as a table.
pub fn format_tags_table(tags: &[&Tag], use_colors: bool) -> String {
    if tags.is_empty() {
        return "No tags found.\n".to_string();
    }

    let mut output = header_line(&format!("{:<10} {}", "ID", "Name"), use_colors);

    for tag in tags {
        let name = truncate_str(&format!("#{}", tag.name), 40);
        let name = if use_colors {
            name.cyan().to_string()
        } else {
            name
        };
        output.push_str(&format!("{:<10} {}\n", truncate_id(&tag.id), name));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: &str, name: &str) -> Tag {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_format_tags_table_empty() {
        assert_eq!(format_tags_table(&[], false), "No tags found.\n");
    }

    #[test]
    fn test_format_tags_table_rows() {
        let bash = tag("kx2g0f3a9", "bash");
        let output = format_tags_table(&[&bash], false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert_eq!(lines[1], "kx2g0f3a   #bash");
    }

    #[test]
    fn test_format_tags_json() {
        let bash = tag("t1", "bash");
        let json: serde_json::Value =
            serde_json::from_str(&format_tags_json(&[&bash]).unwrap()).unwrap();
        assert_eq!(json["tags"][0]["id"], "t1");
        assert_eq!(json["tags"][0]["name"], "bash");
    }
}
