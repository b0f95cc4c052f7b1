//! Cached data-access layer for massCode.
//!
//! This crate sits on top of [`masscode_api_rs`] and provides:
//! - [`Medium`]: the facade combining live reads, partial updates and cached
//!   collections
//! - [`DbMetaOracle`]: change detection through `db.json`'s modification time
//! - [`resolve_folder_paths`]: folder id → `Parent/Child` path resolution
//! - [`query`]: the `@folder #tag ~#tag >key=value search` query language
//! - [`NamePattern`]: regex name matching with substring fallback

pub mod cache;
pub mod freshness;
pub mod matching;
mod medium;
pub mod paths;
pub mod query;

pub use cache::{Cache, NameIdMap};
pub use freshness::{DbMeta, DbMetaError, DbMetaOracle, FreshnessOracle, Preferences};
pub use matching::NamePattern;
pub use medium::{Medium, MediumError, Result as MediumResult};
pub use paths::{resolve_folder_paths, FolderPathError};
pub use query::{parse_query, QueryParam, QueryResult};
