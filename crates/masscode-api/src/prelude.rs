//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use masscode_api_rs::prelude::*;
//!
//! let params = QueryParams::new().with("folderId", "f1");
//! assert_eq!(params.get("folderId"), Some("f1"));
//! ```

// Client types
pub use crate::client::{JservClient, JservClientBuilder, DEFAULT_BASE_URL};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Request parameters
pub use crate::params::QueryParams;

// Data models
pub use crate::models::{
    Folder, FolderPatch, Named, Snippet, SnippetContent, SnippetPatch, Tag, TagPatch,
};
