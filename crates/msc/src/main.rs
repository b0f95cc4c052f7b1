use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{CommandContext, CommandError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": e.code(),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Sends log output to stderr. `RUST_LOG` wins over `--verbose`/`--quiet`.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();
}

async fn run(cli: &Cli) -> Result<(), CommandError> {
    let ctx = CommandContext::from_cli(cli);

    // Parsing is local; everything else needs the API.
    if let Commands::Parse { query } = &cli.command {
        return commands::parse::execute(&ctx, &Commands::query_string(query));
    }

    let mut medium = commands::build_medium(cli)?;
    tracing::debug!(api_url = %cli.api_url, "Using massCode API");

    match &cli.command {
        Commands::Tags { pattern } => {
            commands::tags::execute(&ctx, &mut medium, pattern.as_deref()).await
        }
        Commands::Folders { pattern } => {
            commands::folders::execute(&ctx, &mut medium, pattern.as_deref()).await
        }
        Commands::Snippets { query } => {
            commands::snippets::execute(&ctx, &mut medium, &Commands::query_string(query)).await
        }
        Commands::Parse { .. } => Ok(()),
    }
}
