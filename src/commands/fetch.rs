//! Issue search report.

use std::io::{self, Write};

use tracing::info;

use crate::api::{JiraConnector, Transport};
use crate::report::{count_by_status, write_status_breakdown};

/// Parameters of a `fetch` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// The JQL query to run.
    pub jql: String,
    /// Maximum number of issues to request.
    pub max_results: u32,
    /// Number of issues to print.
    pub limit: usize,
}

/// Pick the JQL for a search: a project filter wins over a raw query, and
/// the configured default applies when neither is given.
pub fn resolve_jql(project: Option<&str>, jql: Option<&str>, default_jql: &str) -> String {
    match (project, jql) {
        (Some(project), _) => format!("project = {}", project),
        (None, Some(jql)) => jql.to_string(),
        (None, None) => default_jql.to_string(),
    }
}

/// Search issues and print the first few, their status breakdown and the
/// connector statistics.
///
/// A failed search prints as an empty result; the error shows up in the
/// statistics line.
pub async fn fetch_issues<T: Transport, W: Write>(
    connector: &mut JiraConnector<T>,
    options: &FetchOptions,
    out: &mut W,
) -> io::Result<()> {
    info!(jql = %options.jql, max_results = options.max_results, "Fetching issues");
    let issues = connector
        .search_issues(&options.jql, options.max_results)
        .await;

    writeln!(out, "Fetched {} issues", issues.len())?;
    if issues.is_empty() {
        writeln!(out, "No issues found.")?;
    } else {
        for issue in issues.iter().take(options.limit) {
            writeln!(out, "  - {}", issue)?;
        }
        if issues.len() > options.limit {
            writeln!(out, "  ... and {} more", issues.len() - options.limit)?;
        }
        writeln!(out)?;
        write_status_breakdown(out, &count_by_status(&issues))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", connector.get_statistics())?;
    Ok(())
}
