//! Built-in demo dataset.
//!
//! Covers every status, priority and type combination the dashboard charts
//! know how to draw, so the UI can be exercised without a JIRA instance.

use crate::api::IssueRecord;

/// Return the demo issues.
///
/// Always the same six records, in the same order.
pub fn mock_issues() -> Vec<IssueRecord> {
    vec![
        IssueRecord::new(
            "DEMO-1",
            "Implement authentication",
            "In Progress",
            "High",
            "Feature",
        ),
        IssueRecord::new("DEMO-2", "Create dashboard", "Done", "Medium", "Feature"),
        IssueRecord::new("DEMO-3", "Add CI/CD pipeline", "To Do", "High", "Feature"),
        IssueRecord::new("DEMO-4", "Fix login bug", "Done", "High", "Bug"),
        IssueRecord::new("DEMO-5", "Add unit tests", "Testing", "Medium", "Test"),
        IssueRecord::new("DEMO-6", "Update documentation", "To Do", "Low", "Feature"),
    ]
}
