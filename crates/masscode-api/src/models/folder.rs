//! Folder model.

use serde::{Deserialize, Serialize};

use super::{Extra, Named};

/// A snippet folder. Folders form a forest through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// The unique identifier for the folder.
    pub id: String,

    /// The folder name (a single path segment).
    pub name: String,

    /// The parent folder id, `null` for root folders.
    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,

    /// Sort position among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Folder {
    /// Returns the parent id, treating an empty string as "no parent".
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns true if this folder has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

impl Named for Folder {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Partial folder update for `PATCH /folders/:id`.
///
/// `parent_id: Some(None)` moves the folder to the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    #[serde(flatten)]
    pub extra: Extra,
}
