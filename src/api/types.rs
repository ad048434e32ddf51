//! JIRA API response types and the plain records they normalize into.
//!
//! The `*Response` shapes mirror the subset of the JIRA REST API v3 schema the
//! connector reads. [`IssueRecord`] and [`ProjectRecord`] are what the rest of
//! the application works with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority reported for issues that have none set.
pub const NO_PRIORITY: &str = "None";

/// The current authenticated user.
///
/// Returned by `GET /rest/api/3/myself`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// The user's account ID.
    #[serde(default)]
    pub account_id: String,
    /// The user's display name.
    pub display_name: String,
    /// The user's email address (may be empty if hidden).
    #[serde(default)]
    pub email_address: String,
    /// Whether the user is active.
    #[serde(default = "default_true")]
    pub active: bool,
    /// The user's timezone.
    #[serde(default)]
    pub time_zone: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Search result from a JQL query.
///
/// Returned by `GET /rest/api/3/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// Total number of matching issues.
    #[serde(default)]
    pub total: u32,
    /// The returned issues.
    #[serde(default)]
    pub issues: Vec<IssueResponse>,
}

/// A single issue as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    /// The issue key (e.g., "DEMO-1").
    pub key: String,
    /// The issue fields.
    pub fields: IssueFields,
}

/// The issue fields the connector reads.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    /// The issue summary/title.
    pub summary: String,
    /// The workflow status.
    pub status: NamedField,
    /// The issue type (Bug, Story, Task, etc.).
    pub issuetype: NamedField,
    /// The issue priority, absent on projects without priorities.
    #[serde(default)]
    pub priority: Option<NamedField>,
}

/// Any JIRA object where only the `name` is of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedField {
    /// The display name.
    pub name: String,
}

/// A project as returned by `GET /rest/api/3/project`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectResponse {
    /// The project key (e.g., "DEMO").
    pub key: String,
    /// The project name.
    pub name: String,
}

/// A normalized issue snapshot.
///
/// Produced fresh on every fetch; identity is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// The issue key (e.g., "DEMO-1").
    pub key: String,
    /// The issue summary.
    pub summary: String,
    /// The workflow status name.
    pub status: String,
    /// The priority name, or [`NO_PRIORITY`].
    pub priority: String,
    /// The issue type name.
    #[serde(rename = "type")]
    pub issue_type: String,
}

impl IssueRecord {
    /// Create a new issue record.
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        status: impl Into<String>,
        priority: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            status: status.into(),
            priority: priority.into(),
            issue_type: issue_type.into(),
        }
    }
}

impl From<IssueResponse> for IssueRecord {
    fn from(issue: IssueResponse) -> Self {
        let IssueFields {
            summary,
            status,
            issuetype,
            priority,
        } = issue.fields;

        Self {
            key: issue.key,
            summary,
            status: status.name,
            priority: priority
                .map(|p| p.name)
                .unwrap_or_else(|| NO_PRIORITY.to_string()),
            issue_type: issuetype.name,
        }
    }
}

impl fmt::Display for IssueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.summary)
    }
}

/// A normalized project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// The project key.
    pub key: String,
    /// The project name.
    pub name: String,
}

impl From<ProjectResponse> for ProjectRecord {
    fn from(project: ProjectResponse) -> Self {
        Self {
            key: project.key,
            name: project.name,
        }
    }
}

impl fmt::Display for ProjectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.name)
    }
}

/// Cumulative request statistics for a connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of HTTP requests attempted.
    pub requests_made: u64,
    /// Number of those requests that failed.
    pub errors_count: u64,
    /// Percentage of successful requests, `0.0` when nothing was requested.
    pub success_rate: f64,
}

impl Statistics {
    /// Compute statistics from raw counters.
    pub fn from_counts(requests_made: u64, errors_count: u64) -> Self {
        let success_rate = if requests_made == 0 {
            0.0
        } else {
            requests_made.saturating_sub(errors_count) as f64 / requests_made as f64 * 100.0
        };

        Self {
            requests_made,
            errors_count,
            success_rate,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Requests: {}, errors: {}, success rate: {:.1}%",
            self.requests_made, self.errors_count, self.success_rate
        )
    }
}
