//! jiradash command-line entry point.

use std::process::ExitCode;

use clap::Parser;

use jiradash::cli::Cli;
use jiradash::{commands, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it is loaded before the subscriber.
    let dotenv = dotenvy::dotenv();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let code = match commands::dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::FAILURE
        }
    };

    logging::shutdown();
    code
}
