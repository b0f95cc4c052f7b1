//! Output formatting utilities for the msc CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`tags`] - Tag list formatting
//! - [`folders`] - Folder list formatting with resolved paths
//! - [`snippets`] - Snippet query results
//! - [`query`] - Parsed query breakdown
//! - [`helpers`] - Common formatting utilities (truncation, headers)

mod folders;
pub mod helpers;
mod query;
mod snippets;
mod tags;

pub use folders::{format_folders_json, format_folders_table, FolderRow};
pub use query::{format_query_json, format_query_table};
pub use snippets::{format_snippets_json, format_snippets_table, SnippetRow};
pub use tags::{format_tags_json, format_tags_table};
