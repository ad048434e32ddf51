//! Project listing.

use std::io::{self, Write};

use crate::api::{JiraConnector, Transport};

/// Print every visible project followed by the connector statistics.
pub async fn list_projects<T: Transport, W: Write>(
    connector: &mut JiraConnector<T>,
    out: &mut W,
) -> io::Result<()> {
    let projects = connector.get_projects().await;

    writeln!(out, "Found {} projects", projects.len())?;
    for project in &projects {
        writeln!(out, "  - {}", project)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", connector.get_statistics())?;
    Ok(())
}
