//! Subcommand implementations.
//!
//! Each command writes its report to any [`std::io::Write`] so tests can
//! capture the output. [`dispatch`] wires them to stdout, the settings file
//! and the environment credentials.

mod check;
mod dashboard;
mod demo;
mod fetch;
mod projects;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::api::JiraConnector;
use crate::cli::{Cli, Command};
use crate::config::{Credentials, Settings};
use crate::error::Result;

pub use check::check_connection;
pub use dashboard::run_dashboard;
pub use demo::run_demo;
pub use fetch::{fetch_issues, resolve_jql, FetchOptions};
pub use projects::list_projects;

/// Run the parsed command line.
///
/// # Errors
///
/// Returns an error when settings or credentials are missing or invalid,
/// when the connection check fails, or when output cannot be written.
/// `demo` reads no settings, so a bad settings file never affects it.
pub async fn dispatch(cli: Cli) -> Result<()> {
    if let Command::Demo = cli.command {
        let mut out = io::stdout().lock();
        run_demo(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "Settings loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo => {}
        Command::Fetch {
            project,
            jql,
            max_results,
            limit,
        } => {
            let mut connector = connect()?;
            let options = FetchOptions {
                jql: resolve_jql(project.as_deref(), jql.as_deref(), &settings.default_jql),
                max_results: max_results.unwrap_or(settings.max_results),
                limit: limit.unwrap_or(settings.display_limit),
            };
            fetch_issues(&mut connector, &options, &mut out).await?;
        }
        Command::Projects => {
            let mut connector = connect()?;
            list_projects(&mut connector, &mut out).await?;
        }
        Command::Check => {
            let mut connector = connect()?;
            check_connection(&mut connector, &mut out).await?;
        }
        Command::Dashboard { live, jql } => {
            drop(out);
            let connector = if live { Some(connect()?) } else { None };
            let jql = jql.unwrap_or_else(|| settings.default_jql.clone());
            run_dashboard(connector, &jql, &settings).await?;
            return Ok(());
        }
    }

    out.flush()?;
    Ok(())
}

/// Build a live connector from the environment credentials.
fn connect() -> Result<JiraConnector> {
    let credentials = Credentials::from_env()?;
    info!(url = %credentials.url, "Connecting to JIRA");
    let connector = JiraConnector::new(&credentials.url, &credentials.email, &credentials.api_token)?;
    Ok(connector)
}
