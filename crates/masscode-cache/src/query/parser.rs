//! Tokenizer and parser for the query language.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A `>key=value` parameter. `value` is `None` when the token has no `=`.
///
/// Serializes as a one-entry map, `{"key": "value"}` or `{"key": null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: Option<String>,
}

impl QueryParam {
    /// Creates a parameter.
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }
}

impl Serialize for QueryParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// Structured form of a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Folders to include (`@`).
    pub folder: Vec<String>,
    /// Folders to exclude (`~@`).
    pub folders_exclude: Vec<String>,
    /// Tags to include (`#`).
    pub tags: Vec<String>,
    /// Tags to exclude (`~#`).
    pub tags_exclude: Vec<String>,
    /// Raw parameters (`>`), in input order, duplicates kept.
    pub params: Vec<QueryParam>,
    /// Search terms, each followed by one space.
    pub search: String,
}

impl QueryResult {
    /// Returns the search text without the trailing separator.
    pub fn search_text(&self) -> &str {
        self.search.trim_end()
    }

    /// Returns true if the query selects nothing in particular.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A classified query token, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryToken<'a> {
    /// `~@name`
    FolderExclude(&'a str),
    /// `~#name`
    TagExclude(&'a str),
    /// `@name`
    Folder(&'a str),
    /// `#name`
    Tag(&'a str),
    /// `>key=value` or `>key`
    Param { key: &'a str, value: Option<&'a str> },
    /// Anything else.
    Search(&'a str),
}

/// Classifies one token. Two-character sigils are checked first.
pub fn classify(token: &str) -> QueryToken<'_> {
    if let Some(rest) = token.strip_prefix("~@") {
        QueryToken::FolderExclude(rest)
    } else if let Some(rest) = token.strip_prefix("~#") {
        QueryToken::TagExclude(rest)
    } else if let Some(rest) = token.strip_prefix('@') {
        QueryToken::Folder(rest)
    } else if let Some(rest) = token.strip_prefix('#') {
        QueryToken::Tag(rest)
    } else if let Some(rest) = token.strip_prefix('>') {
        match rest.split_once('=') {
            Some((key, value)) => QueryToken::Param {
                key,
                value: Some(value),
            },
            None => QueryToken::Param {
                key: rest,
                value: None,
            },
        }
    } else {
        QueryToken::Search(token)
    }
}

/// Parses a query string. Never fails.
///
/// The input is trimmed and split on single spaces. An empty token between
/// repeated spaces is a search term like any other, so it adds one space to
/// `search`. Blank input yields an empty result.
pub fn parse_query(query: &str) -> QueryResult {
    let mut result = QueryResult::default();
    let query = query.trim();
    if query.is_empty() {
        return result;
    }

    for token in query.split(' ') {
        match classify(token) {
            QueryToken::FolderExclude(name) => result.folders_exclude.push(name.to_string()),
            QueryToken::TagExclude(name) => result.tags_exclude.push(name.to_string()),
            QueryToken::Folder(name) => result.folder.push(name.to_string()),
            QueryToken::Tag(name) => result.tags.push(name.to_string()),
            QueryToken::Param { key, value } => result.params.push(QueryParam::new(key, value)),
            QueryToken::Search(term) => {
                result.search.push_str(term);
                result.search.push(' ');
            }
        }
    }

    result
}
