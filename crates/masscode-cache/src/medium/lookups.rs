//! Query resolution for `Medium`.
//!
//! Turns a parsed query's tag and folder names into ids so it can be sent to
//! the API as filter parameters, with "did you mean" suggestions for names
//! that do not exist.

use std::collections::HashSet;

use masscode_api_rs::models::{Folder, Named, Snippet};
use masscode_api_rs::params::QueryParams;
use strsim::levenshtein;

use super::{Medium, MediumError, Result};
use crate::freshness::FreshnessOracle;
use crate::query::{parse_query, QueryResult};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// API parameter filtering snippets by folder.
const FOLDER_PARAM: &str = "folderId";

/// API parameter filtering snippets by tag (json-server `_like` operator).
const TAG_PARAM: &str = "tagsIds_like";

/// API parameter for json-server full-text search.
const SEARCH_PARAM: &str = "q";

/// Formats the "not found" error message, optionally including a suggestion.
pub(crate) fn format_not_found_error(
    resource_type: &str,
    identifier: &str,
    suggestion: Option<&str>,
) -> String {
    let base = format!("{} '{}' not found.", resource_type, identifier);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
pub(crate) fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    // Only suggest if the distance is within threshold and not an exact match
    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

impl<O: FreshnessOracle> Medium<O> {
    /// Converts a parsed query into API filter parameters.
    ///
    /// In order:
    /// - every `>key=value` parameter (a missing value is sent empty)
    /// - `tagsIds_like=<id>` per included tag
    /// - `folderId=<id>` per included folder (matched by full path, then name)
    /// - `q=<search>` if there is search text
    ///
    /// Exclusions are not expressible as parameters; see
    /// [`query_snippets`](Self::query_snippets).
    ///
    /// # Errors
    ///
    /// Returns `MediumError::NotFound` for an unknown tag or folder name.
    pub async fn query_params(&mut self, query: &QueryResult) -> Result<QueryParams> {
        self.refresh().await?;
        self.build_query_params(query).await
    }

    /// Runs a query string against `/snippets`.
    ///
    /// Inclusions and search go to the server as parameters; snippets in an
    /// excluded folder or carrying an excluded tag are dropped afterwards.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(medium: &mut masscode_cache_rs::Medium) -> masscode_cache_rs::MediumResult<()> {
    /// let snippets = medium.query_snippets("#docker ~@Archive compose").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query_snippets(&mut self, query: &str) -> Result<Vec<Snippet>> {
        let parsed = parse_query(query);
        self.refresh().await?;

        let params = self.build_query_params(&parsed).await?;
        let excluded_tags: HashSet<String> = self
            .resolve_tag_ids(&parsed.tags_exclude)
            .await?
            .into_iter()
            .collect();
        let excluded_folders: HashSet<String> = self
            .resolve_folder_ids(&parsed.folders_exclude)
            .await?
            .into_iter()
            .collect();

        let snippets = self.client.get_snippets(&params).await?;
        Ok(snippets
            .into_iter()
            .filter(|s| {
                !s.folder_id
                    .as_ref()
                    .is_some_and(|f| excluded_folders.contains(f))
            })
            .filter(|s| !excluded_tags.iter().any(|t| s.has_tag(t)))
            .collect())
    }

    async fn build_query_params(&mut self, query: &QueryResult) -> Result<QueryParams> {
        let mut params = QueryParams::new();

        for param in &query.params {
            params.append(param.key.as_str(), param.value.as_deref().unwrap_or_default());
        }
        for id in self.resolve_tag_ids(&query.tags).await? {
            params.append(TAG_PARAM, id);
        }
        for id in self.resolve_folder_ids(&query.folder).await? {
            params.append(FOLDER_PARAM, id);
        }
        let search = query.search_text();
        if !search.is_empty() {
            params.append(SEARCH_PARAM, search);
        }

        Ok(params)
    }

    /// Resolves tag names to ids, exact first, then case-insensitive.
    async fn resolve_tag_ids(&mut self, names: &[String]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let tags = self.load_tags().await?;

        names
            .iter()
            .map(|name| {
                find_by_name(tags, name)
                    .map(|tag| tag.id.clone())
                    .ok_or_else(|| MediumError::NotFound {
                        resource_type: "Tag",
                        identifier: name.clone(),
                        suggestion: find_similar_name(name, tags.iter().map(|t| t.name.as_str())),
                    })
            })
            .collect()
    }

    /// Resolves folder references to ids.
    ///
    /// A reference is tried as a full path (`Work/Scripts`) first, then as a
    /// bare folder name, each exact before case-insensitive.
    async fn resolve_folder_ids(&mut self, names: &[String]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        self.load_folder_paths().await?;
        let folders = self.cache.folders().unwrap_or_default();
        let paths = self.cache.folder_paths();
        let path_of =
            |folder: &Folder| paths.and_then(|p| p.get(&folder.id)).map(String::as_str);

        names
            .iter()
            .map(|name| {
                let lower = name.to_lowercase();
                folders
                    .iter()
                    .find(|f| path_of(*f) == Some(name.as_str()))
                    .or_else(|| {
                        folders
                            .iter()
                            .find(|f| path_of(*f).is_some_and(|p| p.to_lowercase() == lower))
                    })
                    .or_else(|| find_by_name(folders, name))
                    .map(|folder| folder.id.clone())
                    .ok_or_else(|| MediumError::NotFound {
                        resource_type: "Folder",
                        identifier: name.clone(),
                        suggestion: find_similar_name(
                            name,
                            folders.iter().map(|f| f.name.as_str()),
                        ),
                    })
            })
            .collect()
    }
}

/// Finds a record by name.
///
/// An exact match takes the last such record, like the name→id map. Failing
/// that, the first record in collection order whose name is equal ignoring
/// case.
fn find_by_name<'a, T: Named>(records: &'a [T], name: &str) -> Option<&'a T> {
    records.iter().rev().find(|r| r.name() == name).or_else(|| {
        let lower = name.to_lowercase();
        records.iter().find(|r| r.name().to_lowercase() == lower)
    })
}
