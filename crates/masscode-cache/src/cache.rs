//! In-memory cache slots.
//!
//! Each cached artifact lives in its own slot and is built lazily on first
//! access. All slots are dropped together when the data store changes; there
//! is no per-entity invalidation.

use std::collections::HashMap;

use masscode_api_rs::models::{Folder, Named, Snippet, Tag};

/// Name/id lookups for one collection, both directions built together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIdMap {
    by_name: HashMap<String, String>,
    by_id: HashMap<String, String>,
}

impl NameIdMap {
    /// Builds both directions from a collection.
    ///
    /// When names repeat, the record appearing last wins in the name→id map.
    pub fn from_records<T: Named>(records: &[T]) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_name.insert(record.name().to_string(), record.id().to_string());
            by_id.insert(record.id().to_string(), record.name().to_string());
        }
        Self { by_name, by_id }
    }

    /// name→id when `reverse` is false, id→name when it is true.
    pub fn direction(&self, reverse: bool) -> &HashMap<String, String> {
        if reverse {
            &self.by_id
        } else {
            &self.by_name
        }
    }

    pub fn by_name(&self) -> &HashMap<String, String> {
        &self.by_name
    }

    pub fn by_id(&self) -> &HashMap<String, String> {
        &self.by_id
    }
}

/// The six cache slots owned by a [`Medium`](crate::Medium).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cache {
    /// Full tag collection.
    pub(crate) tags: Option<Vec<Tag>>,
    /// Full folder collection.
    pub(crate) folders: Option<Vec<Folder>>,
    /// Full snippet collection.
    pub(crate) snippets: Option<Vec<Snippet>>,
    pub(crate) tags_map: Option<NameIdMap>,
    pub(crate) folders_map: Option<NameIdMap>,
    /// Folder id → slash-joined ancestry path.
    pub(crate) folder_paths: Option<HashMap<String, String>>,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every slot.
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    /// Returns the number of filled slots.
    pub fn filled_slots(&self) -> usize {
        [
            self.tags.is_some(),
            self.folders.is_some(),
            self.snippets.is_some(),
            self.tags_map.is_some(),
            self.folders_map.is_some(),
            self.folder_paths.is_some(),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count()
    }

    /// Returns true if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.filled_slots() == 0
    }

    /// Cached tags, if present.
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Cached folders, if present.
    pub fn folders(&self) -> Option<&[Folder]> {
        self.folders.as_deref()
    }

    /// Cached snippets, if present.
    pub fn snippets(&self) -> Option<&[Snippet]> {
        self.snippets.as_deref()
    }

    /// Cached folder paths, if present.
    pub fn folder_paths(&self) -> Option<&HashMap<String, String>> {
        self.folder_paths.as_ref()
    }
}
