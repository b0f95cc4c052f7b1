//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the msc CLI.

use clap::{Parser, Subcommand};

/// msc - Browse massCode snippets from the terminal
#[derive(Parser, Debug)]
#[command(name = "msc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the massCode API
    #[arg(
        long,
        global = true,
        env = "MASSCODE_API_URL",
        default_value = masscode_api_rs::client::DEFAULT_BASE_URL
    )]
    pub api_url: String,

    /// Path to massCode's preferences.json (default: per-user config dir)
    #[arg(long, global = true, env = "MASSCODE_PREFERENCES")]
    pub preferences: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tags
    #[command(alias = "t")]
    Tags {
        /// Only tags whose name matches this pattern (regex, case-insensitive)
        #[arg(short, long = "match")]
        pattern: Option<String>,
    },

    /// List folders with their full paths
    #[command(alias = "f")]
    Folders {
        /// Only folders whose name matches this pattern (regex, case-insensitive)
        #[arg(short, long = "match")]
        pattern: Option<String>,
    },

    /// Search snippets with the query language
    ///
    /// Tokens: @folder ~@folder #tag ~#tag >key=value, anything else is search text.
    #[command(alias = "s")]
    Snippets {
        /// Query tokens (e.g. `@Work #bash ~#old deploy`)
        query: Vec<String>,
    },

    /// Show how a query is parsed, without contacting the API
    Parse {
        /// Query tokens
        query: Vec<String>,
    },
}

impl Commands {
    /// Joins positional query tokens back into one query string.
    pub fn query_string(tokens: &[String]) -> String {
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snippets_query_tokens() {
        let cli = Cli::try_parse_from(["msc", "snippets", "@Work", "#bash", "deploy"]).unwrap();
        match cli.command {
            Commands::Snippets { query } => {
                assert_eq!(Commands::query_string(&query), "@Work #bash deploy");
            }
            other => panic!("Expected Snippets, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "msc",
            "tags",
            "--match",
            "^ru",
            "--json",
            "--api-url",
            "http://127.0.0.1:4000",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.api_url, "http://127.0.0.1:4000");
        assert!(matches!(
            cli.command,
            Commands::Tags { pattern: Some(ref p) } if p == "^ru"
        ));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["msc", "-v", "-q", "tags"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
