//! Demo report over the built-in issues.

use std::io::{self, Write};

use tracing::info;

use crate::mock::mock_issues;
use crate::report::{count_by_status, write_status_breakdown};

/// Print the status summary of the mock issues.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Running in DEMO mode...")?;
    writeln!(out)?;

    let issues = mock_issues();
    info!(issues = issues.len(), "Running demo report");
    writeln!(out, "Total issues: {}", issues.len())?;
    writeln!(out)?;

    write_status_breakdown(out, &count_by_status(&issues))?;
    writeln!(out, "Demo completed successfully!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();

        let expected = "\
Running in DEMO mode...

Total issues: 6

Status breakdown:
  - In Progress: 1
  - Done: 2
  - To Do: 2
  - Testing: 1
Demo completed successfully!
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_demo_is_repeatable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run_demo(&mut first).unwrap();
        run_demo(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
