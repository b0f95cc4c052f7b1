//! Snippet model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// One fragment (tab) of a snippet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl SnippetContent {
    /// Creates a content fragment with the given label, language and body.
    pub fn new(
        label: impl Into<String>,
        language: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: Some(label.into()),
            language: Some(language.into()),
            value: Some(value.into()),
            extra: Extra::new(),
        }
    }
}

/// A snippet: named, filed under a folder, tagged, with ordered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// The unique identifier for the snippet.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The folder the snippet lives in, if any.
    #[serde(default)]
    pub folder_id: Option<String>,

    /// Ids of the tags attached to the snippet.
    #[serde(default)]
    pub tags_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorites: Option<bool>,

    /// Ordered, index-addressable content fragments.
    #[serde(default)]
    pub content: Vec<SnippetContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Snippet {
    /// Returns true if the snippet carries the given tag id.
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags_ids.iter().any(|t| t == tag_id)
    }
}

/// Partial snippet update for `PATCH /snippets/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorites: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<SnippetContent>>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl SnippetPatch {
    /// A patch that replaces the whole content array.
    pub fn content(content: Vec<SnippetContent>) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }
}
