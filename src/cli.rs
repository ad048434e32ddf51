//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `jiradash`.
#[derive(Debug, Parser)]
#[command(name = "jiradash", version, about = "JIRA project dashboard and reports")]
pub struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize the built-in demo issues without contacting JIRA.
    Demo,
    /// Search issues on the configured JIRA instance and print a summary.
    Fetch {
        /// Restrict the search to one project key.
        #[arg(short, long, conflicts_with = "jql")]
        project: Option<String>,
        /// Raw JQL query.
        #[arg(long)]
        jql: Option<String>,
        /// Maximum number of issues to request.
        #[arg(long, value_name = "N")]
        max_results: Option<u32>,
        /// Number of issues to print.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// List the projects visible to the configured account.
    Projects,
    /// Verify the credentials against JIRA.
    Check,
    /// Open the terminal dashboard.
    Dashboard {
        /// Load issues from JIRA instead of the demo data.
        #[arg(long)]
        live: bool,
        /// JQL used with `--live`.
        #[arg(long, requires = "live")]
        jql: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_demo_subcommand() {
        let cli = Cli::parse_from(["jiradash", "demo"]);
        assert!(matches!(cli.command, Command::Demo));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_fetch_with_project() {
        let cli = Cli::parse_from(["jiradash", "fetch", "--project", "DEMO", "--limit", "3"]);
        match cli.command {
            Command::Fetch {
                project,
                jql,
                max_results,
                limit,
            } => {
                assert_eq!(project.as_deref(), Some("DEMO"));
                assert!(jql.is_none());
                assert!(max_results.is_none());
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_project_and_jql_together() {
        let result = Cli::try_parse_from([
            "jiradash", "fetch", "--project", "DEMO", "--jql", "status = Done",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::parse_from(["jiradash", "projects", "--config", "/tmp/jiradash.toml"]);
        assert!(matches!(cli.command, Command::Projects));
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/tmp/jiradash.toml"))
        );
    }

    #[test]
    fn parses_dashboard_defaults_to_demo_data() {
        let cli = Cli::parse_from(["jiradash", "dashboard"]);
        assert!(matches!(
            cli.command,
            Command::Dashboard {
                live: false,
                jql: None
            }
        ));
    }

    #[test]
    fn dashboard_jql_requires_live() {
        assert!(Cli::try_parse_from(["jiradash", "dashboard", "--jql", "project = DEMO"]).is_err());
        assert!(
            Cli::try_parse_from(["jiradash", "dashboard", "--live", "--jql", "project = DEMO"])
                .is_ok()
        );
    }

    #[test]
    fn errors_on_unknown_subcommand() {
        assert!(Cli::try_parse_from(["jiradash", "unknown"]).is_err());
    }
}
