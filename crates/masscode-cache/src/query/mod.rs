//! Query language for snippet lookups.
//!
//! A query is a space-separated list of tokens. Each token is classified by
//! its leading sigil:
//!
//! ## Folders
//! - `@name` - Snippets in a folder (by name or full path, e.g. `@Work/Scripts`)
//! - `~@name` - Exclude snippets in a folder
//!
//! ## Tags
//! - `#name` - Snippets carrying a tag
//! - `~#name` - Exclude snippets carrying a tag
//!
//! ## Parameters
//! - `>key=value` - Raw API parameter passed through (e.g. `>_limit=10`)
//!
//! ## Search
//! Any other token is a search term, each followed by one space. Repeated
//! spaces produce empty terms, so they survive in the search text.
//!
//! There is no quoting or escaping: a folder or tag name containing a space
//! cannot be expressed.
//!
//! # Example
//!
//! ```
//! use masscode_cache_rs::query::{parse_query, QueryParam};
//!
//! let query = parse_query("hello @work #urgent ~#old >limit=10 world");
//! assert_eq!(query.search, "hello world ");
//! assert_eq!(query.folder, vec!["work"]);
//! assert_eq!(query.tags, vec!["urgent"]);
//! assert_eq!(query.tags_exclude, vec!["old"]);
//! assert_eq!(query.params, vec![QueryParam::new("limit", Some("10"))]);
//! assert!(query.folders_exclude.is_empty());
//! ```

mod parser;

pub use parser::{classify, parse_query, QueryParam, QueryResult, QueryToken};

#[cfg(test)]
mod tests;
