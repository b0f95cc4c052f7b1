//! Command implementations for the msc CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod folders;
pub mod parse;
pub mod snippets;
pub mod tags;

use masscode_api_rs::client::JservClient;
use masscode_cache_rs::{DbMetaOracle, Medium, MediumError};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Data-access error (API, freshness check, lookups).
    #[error("{0}")]
    Medium(#[from] MediumError),

    /// API client could not be built.
    #[error("API error: {0}")]
    Api(#[from] masscode_api_rs::error::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Short machine-readable code for JSON error output.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Medium(MediumError::Api(_)) | CommandError::Api(_) => "API_ERROR",
            CommandError::Medium(MediumError::Freshness(_)) => "STORAGE_ERROR",
            CommandError::Medium(MediumError::FolderPaths(_)) => "FOLDER_PATH_ERROR",
            CommandError::Medium(MediumError::NotFound { .. }) => "NOT_FOUND",
            CommandError::Medium(MediumError::ContentIndexOutOfRange { .. }) => "INVALID_INDEX",
            CommandError::Json(_) => "JSON_ERROR",
        }
    }

    /// Process exit code: 3 for network failures, 2 for API and lookup
    /// errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Medium(MediumError::Api(e)) | CommandError::Api(e) => {
                e.exit_code() as u8
            }
            CommandError::Medium(_) => 2,
            CommandError::Json(_) => 1,
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
        }
    }

    /// Prints formatted output unless quiet. JSON is always printed.
    pub fn emit(&self, output: &str) {
        if self.json_output {
            println!("{output}");
        } else if !self.quiet {
            print!("{output}");
        }
    }
}

/// Builds the data-access facade from the global flags.
pub fn build_medium(cli: &Cli) -> Result<Medium> {
    let client = JservClient::with_base_url(cli.api_url.as_str())?;
    let oracle = match &cli.preferences {
        Some(path) => DbMetaOracle::with_preferences_path(path),
        None => DbMetaOracle::new().map_err(MediumError::from)?,
    };
    Ok(Medium::new(client, oracle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use masscode_api_rs::error::ApiError;
    use masscode_api_rs::params::QueryParams;

    #[test]
    fn test_not_found_exit_code_and_code() {
        let err = CommandError::from(MediumError::NotFound {
            resource_type: "Tag",
            identifier: "dokcer".to_string(),
            suggestion: Some("docker".to_string()),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(
            err.to_string(),
            "Tag 'dokcer' not found. Did you mean 'docker'?"
        );
    }

    #[tokio::test]
    async fn test_refused_connection_exit_code() {
        let client = JservClient::with_base_url("http://127.0.0.1:9").unwrap();
        let api = client.get_tags(&QueryParams::new()).await.unwrap_err();

        let err = CommandError::from(MediumError::from(api));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.code(), "API_ERROR");
    }

    #[test]
    fn test_server_error_exit_code() {
        let api = masscode_api_rs::error::Error::Api(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(CommandError::from(api).exit_code(), 2);
    }

    #[test]
    fn test_json_error_exit_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(CommandError::from(json_err).exit_code(), 1);
    }
}
