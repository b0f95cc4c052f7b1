//! Data-store freshness detection.
//!
//! massCode keeps its data in `<storagePath>/db.json`, where `storagePath`
//! comes from the user's preferences file. The cache never reads the database
//! itself; it only watches the file's modification time to decide whether
//! previously fetched collections are still valid.
//!
//! The preferences file lives at:
//! - Linux: `~/.config/masscode/v2/preferences.json`
//! - macOS: `~/Library/Application Support/masscode/v2/preferences.json`
//! - Windows: `%APPDATA%\masscode\v2\preferences.json`
//!
//! `MASSCODE_PREFERENCES` overrides the location.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the preferences file path.
pub const PREFERENCES_ENV: &str = "MASSCODE_PREFERENCES";

/// Database filename inside the storage directory.
const DB_FILENAME: &str = "db.json";

/// Path of the preferences file relative to the user config directory.
const PREFERENCES_SUBPATH: [&str; 3] = ["masscode", "v2", "preferences.json"];

/// Errors that can occur while checking data-store freshness.
#[derive(Debug, Error)]
pub enum DbMetaError {
    /// Failed to determine the user config directory.
    #[error("failed to determine config directory: no valid home directory found")]
    NoConfigDir,

    /// I/O error while reading the preferences file.
    #[error("failed to read preferences file '{path}': {source}")]
    ReadPreferences {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The preferences file is not valid JSON or lacks `storagePath`.
    #[error("failed to parse preferences file '{path}': {source}")]
    ParsePreferences {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The database file could not be stat-ed.
    #[error("failed to read modification time of '{path}': {source}")]
    Stat {
        /// The database path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for freshness checks.
pub type Result<T> = std::result::Result<T, DbMetaError>;

/// The subset of massCode preferences this crate needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Directory holding `db.json`.
    pub storage_path: PathBuf,

    /// Remaining preferences, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Preferences {
    /// Reads and parses a preferences file.
    ///
    /// # Errors
    ///
    /// - `DbMetaError::ReadPreferences` if the file cannot be read.
    /// - `DbMetaError::ParsePreferences` if it is not JSON or has no `storagePath`.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DbMetaError::ReadPreferences {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        serde_json::from_str(&contents).map_err(|e| DbMetaError::ParsePreferences {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Returns the default preferences path, honoring `MASSCODE_PREFERENCES`.
    ///
    /// # Errors
    ///
    /// Returns `DbMetaError::NoConfigDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(PREFERENCES_ENV) {
            return Ok(PathBuf::from(path));
        }

        let base_dirs = BaseDirs::new().ok_or(DbMetaError::NoConfigDir)?;
        Ok(PREFERENCES_SUBPATH
            .iter()
            .fold(base_dirs.config_dir().to_path_buf(), |acc, part| acc.join(part)))
    }
}

/// Result of one freshness observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbMeta {
    /// Path of the database file that was checked.
    pub db_path: PathBuf,
    /// Its modification time at this observation.
    pub last_modified: DateTime<Utc>,
    /// True if the modification time differs from the previous observation
    /// (or this is the first one).
    pub is_modified: bool,
}

/// Answers "has the backing store changed since I last checked?".
///
/// Each call is an observation: implementations advance their notion of
/// "last seen" so that two consecutive calls with no change in between
/// report `is_modified == false` on the second.
#[allow(async_fn_in_trait)]
pub trait FreshnessOracle {
    /// Observes the store and reports whether it changed.
    async fn observe(&mut self) -> Result<DbMeta>;
}

/// Where the oracle finds the storage directory.
#[derive(Debug, Clone)]
enum StorageLocation {
    /// Read `storagePath` from this preferences file on first use.
    Preferences(PathBuf),
    /// Already known.
    Resolved(PathBuf),
}

/// Freshness oracle backed by the modification time of massCode's `db.json`.
///
/// # Example
///
/// ```no_run
/// use masscode_cache_rs::{DbMetaOracle, FreshnessOracle};
///
/// # async fn example() -> Result<(), masscode_cache_rs::DbMetaError> {
/// let mut oracle = DbMetaOracle::new()?;
/// let first = oracle.observe().await?;
/// assert!(first.is_modified);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DbMetaOracle {
    location: StorageLocation,
    last_modified: Option<DateTime<Utc>>,
}

impl DbMetaOracle {
    /// Creates an oracle that reads the default preferences file lazily.
    ///
    /// # Errors
    ///
    /// Returns `DbMetaError::NoConfigDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_preferences_path(Preferences::default_path()?))
    }

    /// Creates an oracle that reads `storagePath` from the given preferences file.
    pub fn with_preferences_path(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StorageLocation::Preferences(path.into()),
            last_modified: None,
        }
    }

    /// Creates an oracle for a known storage directory, skipping preferences.
    pub fn with_storage_path(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StorageLocation::Resolved(path.into()),
            last_modified: None,
        }
    }

    /// Returns the last observed modification time, if any.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// Resolves the storage directory, reading preferences the first time.
    async fn storage_path(&mut self) -> Result<PathBuf> {
        match &self.location {
            StorageLocation::Resolved(path) => Ok(path.clone()),
            StorageLocation::Preferences(prefs_path) => {
                let prefs = Preferences::load(prefs_path).await?;
                tracing::debug!(
                    preferences = %prefs_path.display(),
                    storage = %prefs.storage_path.display(),
                    "Resolved massCode storage path"
                );
                self.location = StorageLocation::Resolved(prefs.storage_path.clone());
                Ok(prefs.storage_path)
            }
        }
    }
}

impl FreshnessOracle for DbMetaOracle {
    async fn observe(&mut self) -> Result<DbMeta> {
        let db_path = self.storage_path().await?.join(DB_FILENAME);

        let modified = tokio::fs::metadata(&db_path)
            .await
            .and_then(|m| m.modified())
            .map_err(|e| DbMetaError::Stat {
                path: db_path.clone(),
                source: e,
            })?;
        let current: DateTime<Utc> = modified.into();

        let is_modified = self.last_modified != Some(current);
        self.last_modified = Some(current);

        Ok(DbMeta {
            db_path,
            last_modified: current,
            is_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, SystemTime};

    use serial_test::serial;
    use tempfile::tempdir;

    use super::*;

    fn set_mtime(path: &Path, time: SystemTime) {
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[tokio::test]
    async fn test_observe_reports_modified_only_on_transition() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "{}").unwrap();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        set_mtime(&db, t0);

        let mut oracle = DbMetaOracle::with_storage_path(dir.path());

        let first = oracle.observe().await.unwrap();
        assert!(first.is_modified);
        assert_eq!(first.db_path, db);

        let second = oracle.observe().await.unwrap();
        assert!(!second.is_modified);
        assert_eq!(second.last_modified, first.last_modified);

        set_mtime(&db, t0 + Duration::from_secs(5));
        let third = oracle.observe().await.unwrap();
        assert!(third.is_modified);
        assert!(third.last_modified > first.last_modified);
        assert_eq!(oracle.last_modified(), Some(third.last_modified));
    }

    #[tokio::test]
    async fn test_observe_detects_mtime_moving_backwards() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "{}").unwrap();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        set_mtime(&db, t0);

        let mut oracle = DbMetaOracle::with_storage_path(dir.path());
        oracle.observe().await.unwrap();

        // Restoring an older backup still counts as a change.
        set_mtime(&db, t0 - Duration::from_secs(60));
        assert!(oracle.observe().await.unwrap().is_modified);
    }

    #[tokio::test]
    async fn test_storage_path_read_from_preferences() {
        let dir = tempdir().unwrap();
        let storage = dir.path().join("storage");
        fs::create_dir(&storage).unwrap();
        fs::write(storage.join("db.json"), "{}").unwrap();

        let prefs = dir.path().join("preferences.json");
        fs::write(
            &prefs,
            serde_json::json!({"storagePath": storage, "theme": "dark"}).to_string(),
        )
        .unwrap();

        let mut oracle = DbMetaOracle::with_preferences_path(&prefs);
        let meta = oracle.observe().await.unwrap();
        assert_eq!(meta.db_path, storage.join("db.json"));

        // The storage path is remembered; deleting preferences no longer matters.
        fs::remove_file(&prefs).unwrap();
        assert!(!oracle.observe().await.unwrap().is_modified);
    }

    #[tokio::test]
    async fn test_missing_preferences_is_read_error() {
        let dir = tempdir().unwrap();
        let mut oracle = DbMetaOracle::with_preferences_path(dir.path().join("nope.json"));

        let err = oracle.observe().await.unwrap_err();
        assert!(matches!(err, DbMetaError::ReadPreferences { .. }));
    }

    #[tokio::test]
    async fn test_preferences_without_storage_path_is_parse_error() {
        let dir = tempdir().unwrap();
        let prefs = dir.path().join("preferences.json");
        fs::write(&prefs, r#"{"theme": "dark"}"#).unwrap();

        let mut oracle = DbMetaOracle::with_preferences_path(&prefs);
        let err = oracle.observe().await.unwrap_err();
        assert!(matches!(err, DbMetaError::ParsePreferences { .. }));
        assert!(err.to_string().contains("preferences.json"));
    }

    #[tokio::test]
    async fn test_missing_db_is_stat_error() {
        let dir = tempdir().unwrap();
        let mut oracle = DbMetaOracle::with_storage_path(dir.path());

        let err = oracle.observe().await.unwrap_err();
        match err {
            DbMetaError::Stat { path, .. } => assert_eq!(path, dir.path().join("db.json")),
            other => panic!("Expected Stat error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_default_path_honors_env_override() {
        env::set_var(PREFERENCES_ENV, "/tmp/custom-prefs.json");
        let path = Preferences::default_path().unwrap();
        env::remove_var(PREFERENCES_ENV);

        assert_eq!(path, PathBuf::from("/tmp/custom-prefs.json"));
    }

    #[test]
    #[serial]
    fn test_default_path_ends_with_masscode_v2() {
        env::remove_var(PREFERENCES_ENV);
        if let Ok(path) = Preferences::default_path() {
            assert!(path.ends_with("masscode/v2/preferences.json"));
        }
    }
}
