//! The data-access facade over the massCode API.
//!
//! `Medium` combines:
//! - the HTTP client, for live reads and partial updates
//! - a freshness oracle, to detect changes to the backing store
//! - six lazily built cache slots (full collections and derived maps)
//!
//! # Example
//!
//! ```no_run
//! use masscode_cache_rs::Medium;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut medium = Medium::from_defaults()?;
//!
//!     let paths = medium.folder_paths().await?;
//!     println!("{} folders", paths.len());
//!
//!     let snippets = medium.query_snippets("@Work #bash deploy").await?;
//!     println!("{} matching snippets", snippets.len());
//!
//!     Ok(())
//! }
//! ```

mod lookups;

use std::collections::HashMap;

use masscode_api_rs::client::JservClient;
use masscode_api_rs::models::{Folder, Snippet, SnippetContent, SnippetPatch, Tag};
use masscode_api_rs::params::QueryParams;
use serde::Serialize;

use crate::cache::{Cache, NameIdMap};
use crate::freshness::{DbMetaError, DbMetaOracle, FreshnessOracle};
use crate::matching::NamePattern;
use crate::paths::{resolve_folder_paths, FolderPathError};

pub(crate) use lookups::format_not_found_error;

/// Errors that can occur in the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum MediumError {
    /// API or transport error, passed through unchanged.
    #[error("API error: {0}")]
    Api(#[from] masscode_api_rs::error::Error),

    /// Preferences or database file could not be read.
    #[error("freshness check failed: {0}")]
    Freshness(#[from] DbMetaError),

    /// Folder parents are dangling or cyclic.
    #[error("cannot resolve folder paths: {0}")]
    FolderPaths(#[from] FolderPathError),

    /// A named or identified resource does not exist.
    #[error("{}", format_not_found_error(resource_type, identifier, suggestion.as_deref()))]
    NotFound {
        /// The type of resource that was not found (e.g., "Snippet", "Tag").
        resource_type: &'static str,
        /// The name or ID that was searched for.
        identifier: String,
        /// Optional suggestion for a similar name.
        suggestion: Option<String>,
    },

    /// A content patch addressed a fragment the snippet does not have.
    #[error("snippet '{id}' has {len} content fragments, index {index} is out of range")]
    ContentIndexOutOfRange {
        id: String,
        index: usize,
        len: usize,
    },
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, MediumError>;

/// Cached access to massCode tags, folders and snippets.
///
/// # Caching
///
/// Every cache-backed getter first asks the freshness oracle whether the data
/// store changed. If it did, all six slots are dropped at once; the requested
/// slot is then rebuilt on demand and the others stay empty until asked for.
/// Filtered getters (`get_*`) and patches always hit the network.
///
/// # Thread Safety
///
/// Cache-backed methods take `&mut self`, so one `Medium` cannot be used from
/// two tasks at once. Wrap it in `tokio::sync::Mutex` to share it.
pub struct Medium<O = DbMetaOracle> {
    client: JservClient,
    oracle: O,
    cache: Cache,
}

impl Medium<DbMetaOracle> {
    /// Creates a facade for the default local API and preferences file.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the config
    /// directory cannot be determined.
    pub fn from_defaults() -> Result<Self> {
        Ok(Self::new(JservClient::new()?, DbMetaOracle::new()?))
    }
}

impl<O: FreshnessOracle> Medium<O> {
    /// Creates a facade with an explicit client and freshness oracle.
    pub fn new(client: JservClient, oracle: O) -> Self {
        Self {
            client,
            oracle,
            cache: Cache::new(),
        }
    }

    /// Returns a reference to the API client.
    pub fn client(&self) -> &JservClient {
        &self.client
    }

    /// Returns a reference to the freshness oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Returns a mutable reference to the freshness oracle.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// Returns the current cache contents.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Drops every cached slot without consulting the oracle.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Observes the oracle once and drops all slots if the store changed.
    async fn refresh(&mut self) -> Result<()> {
        let meta = self.oracle.observe().await?;
        if meta.is_modified {
            if !self.cache.is_empty() {
                tracing::debug!(
                    db = %meta.db_path.display(),
                    modified = %meta.last_modified,
                    "Data store modified; invalidating cache"
                );
            }
            self.cache.invalidate();
        }
        Ok(())
    }

    // ==================== Full collections ====================

    /// Returns every tag, from cache when the store is unchanged.
    pub async fn full_tags(&mut self) -> Result<&[Tag]> {
        self.refresh().await?;
        self.load_tags().await
    }

    /// Returns every folder, from cache when the store is unchanged.
    pub async fn full_folders(&mut self) -> Result<&[Folder]> {
        self.refresh().await?;
        self.load_folders().await
    }

    /// Returns every snippet, from cache when the store is unchanged.
    pub async fn full_snippets(&mut self) -> Result<&[Snippet]> {
        self.refresh().await?;
        self.load_snippets().await
    }

    async fn load_tags(&mut self) -> Result<&[Tag]> {
        let tags = match self.cache.tags.take() {
            Some(tags) => {
                tracing::debug!(slot = "full_tags", "Cache hit");
                tags
            }
            None => {
                tracing::debug!(slot = "full_tags", "Cache miss");
                self.client.get_tags(&QueryParams::new()).await?
            }
        };
        Ok(self.cache.tags.insert(tags).as_slice())
    }

    async fn load_folders(&mut self) -> Result<&[Folder]> {
        let folders = match self.cache.folders.take() {
            Some(folders) => {
                tracing::debug!(slot = "full_folders", "Cache hit");
                folders
            }
            None => {
                tracing::debug!(slot = "full_folders", "Cache miss");
                self.client.get_folders(&QueryParams::new()).await?
            }
        };
        Ok(self.cache.folders.insert(folders).as_slice())
    }

    async fn load_snippets(&mut self) -> Result<&[Snippet]> {
        let snippets = match self.cache.snippets.take() {
            Some(snippets) => {
                tracing::debug!(slot = "full_snippets", "Cache hit");
                snippets
            }
            None => {
                tracing::debug!(slot = "full_snippets", "Cache miss");
                self.client.get_snippets(&QueryParams::new()).await?
            }
        };
        Ok(self.cache.snippets.insert(snippets).as_slice())
    }

    // ==================== Filtered reads (never cached) ====================

    /// `GET /tags` with parameters passed through verbatim.
    pub async fn get_tags(&self, params: &QueryParams) -> Result<Vec<Tag>> {
        Ok(self.client.get_tags(params).await?)
    }

    /// `GET /folders` with parameters passed through verbatim.
    pub async fn get_folders(&self, params: &QueryParams) -> Result<Vec<Folder>> {
        Ok(self.client.get_folders(params).await?)
    }

    /// `GET /snippets` with parameters passed through verbatim.
    pub async fn get_snippets(&self, params: &QueryParams) -> Result<Vec<Snippet>> {
        Ok(self.client.get_snippets(params).await?)
    }

    // ==================== Partial updates ====================

    /// Sends a partial tag and returns the server's updated record.
    pub async fn patch_tag<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<Tag> {
        Ok(self.client.patch_tag(id, data).await?)
    }

    /// Sends a partial folder and returns the server's updated record.
    pub async fn patch_folder<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<Folder> {
        Ok(self.client.patch_folder(id, data).await?)
    }

    /// Sends a partial snippet and returns the server's updated record.
    pub async fn patch_snippet<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<Snippet> {
        Ok(self.client.patch_snippet(id, data).await?)
    }

    /// Replaces one content fragment of a snippet.
    ///
    /// The snippet is fetched live, fragment `index` is replaced in the fetched
    /// content array, and the whole updated array is sent as
    /// `{"content": [...]}`. Other fragments are preserved as the server had
    /// them.
    ///
    /// # Errors
    ///
    /// - `MediumError::NotFound` if no snippet has this id.
    /// - `MediumError::ContentIndexOutOfRange` if `index` is past the last fragment.
    ///
    /// Neither error performs a write.
    pub async fn patch_snippet_content(
        &self,
        id: &str,
        index: usize,
        content: SnippetContent,
    ) -> Result<Snippet> {
        let params = QueryParams::new().with("id", id);
        let snippet = self
            .client
            .get_snippets(&params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| MediumError::NotFound {
                resource_type: "Snippet",
                identifier: id.to_string(),
                suggestion: None,
            })?;

        let mut fragments = snippet.content;
        let len = fragments.len();
        let slot = fragments
            .get_mut(index)
            .ok_or_else(|| MediumError::ContentIndexOutOfRange {
                id: id.to_string(),
                index,
                len,
            })?;
        *slot = content;

        Ok(self
            .client
            .patch_snippet(id, &SnippetPatch::content(fragments))
            .await?)
    }

    // ==================== Derived maps ====================

    /// Tag names to ids (`reverse == false`) or ids to names (`reverse == true`).
    pub async fn tags_map(&mut self, reverse: bool) -> Result<&HashMap<String, String>> {
        self.refresh().await?;
        Ok(self.load_tags_map().await?.direction(reverse))
    }

    /// Folder names to ids (`reverse == false`) or ids to names (`reverse == true`).
    pub async fn folders_map(&mut self, reverse: bool) -> Result<&HashMap<String, String>> {
        self.refresh().await?;
        Ok(self.load_folders_map().await?.direction(reverse))
    }

    /// Folder id → full slash-joined path.
    ///
    /// # Errors
    ///
    /// Returns `MediumError::FolderPaths` if the folder list has dangling or
    /// cyclic parent links.
    pub async fn folder_paths(&mut self) -> Result<&HashMap<String, String>> {
        self.refresh().await?;
        self.load_folder_paths().await
    }

    async fn load_tags_map(&mut self) -> Result<&NameIdMap> {
        let map = match self.cache.tags_map.take() {
            Some(map) => map,
            None => NameIdMap::from_records(self.load_tags().await?),
        };
        Ok(self.cache.tags_map.insert(map))
    }

    async fn load_folders_map(&mut self) -> Result<&NameIdMap> {
        let map = match self.cache.folders_map.take() {
            Some(map) => map,
            None => NameIdMap::from_records(self.load_folders().await?),
        };
        Ok(self.cache.folders_map.insert(map))
    }

    async fn load_folder_paths(&mut self) -> Result<&HashMap<String, String>> {
        let paths = match self.cache.folder_paths.take() {
            Some(paths) => paths,
            None => resolve_folder_paths(self.load_folders().await?)?,
        };
        Ok(self.cache.folder_paths.insert(paths))
    }

    // ==================== Name matching ====================

    /// Tags whose name matches `pattern` (regex, or substring if invalid).
    pub async fn match_tags(&mut self, pattern: &str) -> Result<Vec<&Tag>> {
        let pattern = NamePattern::new(pattern);
        Ok(pattern.filter(self.full_tags().await?))
    }

    /// Folders whose name matches `pattern` (regex, or substring if invalid).
    pub async fn match_folders(&mut self, pattern: &str) -> Result<Vec<&Folder>> {
        let pattern = NamePattern::new(pattern);
        Ok(pattern.filter(self.full_folders().await?))
    }
}
