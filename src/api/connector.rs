//! JIRA connector implementation.
//!
//! The connector wraps three REST v3 endpoints (current user, issue search,
//! project list) and keeps per-instance request statistics.
//!
//! Error handling is deliberately asymmetric:
//! - [`JiraConnector::test_connection`] propagates failures to the caller.
//! - [`JiraConnector::search_issues`] and [`JiraConnector::get_projects`]
//!   log and count failures, then return an empty list.

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::transport::{HttpResponse, ReqwestTransport, Transport};
use super::types::{
    CurrentUser, IssueRecord, ProjectRecord, ProjectResponse, SearchResponse, Statistics,
};

/// Default number of issues requested by a search.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// The JIRA connector.
///
/// Counters only ever increase and belong to this instance alone. Every
/// request attempt bumps `requests_made`; every failed attempt also bumps
/// `errors_count`.
#[derive(Debug)]
pub struct JiraConnector<T = ReqwestTransport> {
    /// The HTTP transport.
    transport: T,
    /// The base URL for the JIRA instance, without trailing slashes.
    base_url: String,
    /// Authentication credentials.
    auth: Auth,
    /// Number of requests attempted.
    requests_made: u64,
    /// Number of failed requests.
    errors_count: u64,
}

impl JiraConnector {
    /// Create a connector that talks to JIRA over HTTP.
    ///
    /// Does NOT contact the server; call [`JiraConnector::test_connection`]
    /// to validate credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(base_url, email, api_token, transport))
    }
}

impl<T: Transport> JiraConnector<T> {
    /// Create a connector over an explicit transport.
    pub fn with_transport(base_url: &str, email: &str, api_token: &str, transport: T) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
            auth: Auth::new(email, api_token),
            requests_made: 0,
            errors_count: 0,
        }
    }

    /// Check the credentials by calling `GET /rest/api/3/myself`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthorized`] when JIRA answers 401.
    /// - [`ApiError::ConnectionFailed`] for any other status, an unreadable
    ///   body, or a network fault.
    #[instrument(skip(self))]
    pub async fn test_connection(&mut self) -> Result<CurrentUser> {
        debug!("Validating JIRA connection");

        let url = format!("{}/rest/api/3/myself", self.base_url);
        let user: CurrentUser = self.get_json(&url).await.map_err(|e| {
            error!("Connection validation failed: {}", e);
            match e {
                ApiError::Unauthorized => e,
                e if e.is_network() => {
                    ApiError::ConnectionFailed(format!("Cannot connect to {}: {}", self.base_url, e))
                }
                _ => ApiError::ConnectionFailed(e.to_string()),
            }
        })?;

        info!("Connected as user: {}", user.display_name);
        Ok(user)
    }

    /// Search for issues using JQL.
    ///
    /// Returns an empty list on any failure; the failure is logged and
    /// counted in the statistics.
    #[instrument(skip(self), fields(jql = %jql))]
    pub async fn search_issues(&mut self, jql: &str, max_results: u32) -> Vec<IssueRecord> {
        debug!("Searching issues: maxResults={}", max_results);

        let url = format!(
            "{}/rest/api/3/search?jql={}&maxResults={}",
            self.base_url,
            urlencoding::encode(jql),
            max_results
        );

        match self.get_json::<SearchResponse>(&url).await {
            Ok(result) => {
                debug!("Found {} issues (total: {})", result.issues.len(), result.total);
                result.issues.into_iter().map(IssueRecord::from).collect()
            }
            Err(e) => {
                error!("Error fetching issues: {}", e);
                Vec::new()
            }
        }
    }

    /// List all projects visible to the user.
    ///
    /// Returns an empty list on any failure, like [`JiraConnector::search_issues`].
    #[instrument(skip(self))]
    pub async fn get_projects(&mut self) -> Vec<ProjectRecord> {
        let url = format!("{}/rest/api/3/project", self.base_url);

        match self.get_json::<Vec<ProjectResponse>>(&url).await {
            Ok(projects) => {
                debug!("Found {} projects", projects.len());
                projects.into_iter().map(ProjectRecord::from).collect()
            }
            Err(e) => {
                error!("Error fetching projects: {}", e);
                Vec::new()
            }
        }
    }

    /// Read the request counters.
    pub fn get_statistics(&self) -> Statistics {
        Statistics::from_counts(self.requests_made, self.errors_count)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the email used for authentication.
    pub fn email(&self) -> &str {
        self.auth.email()
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform a counted GET request and decode the JSON body.
    async fn get_json<D: DeserializeOwned>(&mut self, url: &str) -> Result<D> {
        self.requests_made += 1;

        let outcome = match self.transport.get(url, &self.auth).await {
            Ok(response) => handle_response(response),
            Err(e) => Err(e),
        };

        if outcome.is_err() {
            self.errors_count += 1;
        }
        outcome
    }
}

/// Check the status and parse the body of a response.
fn handle_response<D: DeserializeOwned>(response: HttpResponse) -> Result<D> {
    if response.status.is_success() {
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    } else {
        debug!("Error response body: {}", response.body);
        Err(error_from_response(&response))
    }
}

/// Create an appropriate error from a non-success response.
///
/// JIRA usually explains failures in `errorMessages` or `errors`; those take
/// precedence over the bare URL as context.
fn error_from_response(response: &HttpResponse) -> ApiError {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&response.body) {
        if let Some(messages) = json.get("errorMessages").and_then(|m| m.as_array()) {
            let messages: Vec<&str> = messages.iter().filter_map(|v| v.as_str()).collect();
            if !messages.is_empty() {
                return ApiError::from_status(response.status, &messages.join(", "));
            }
        }
        if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
            let errors: Vec<String> = errors
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            if !errors.is_empty() {
                return ApiError::from_status(response.status, &errors.join(", "));
            }
        }
    }

    ApiError::from_status(response.status, &response.url)
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    // Warn if not HTTPS (but don't enforce for localhost/testing)
    if !url.starts_with("https://") && !url.contains("localhost") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::scripted::ScriptedTransport;

    const BASE_URL: &str = "https://test.atlassian.net";

    fn connector(transport: ScriptedTransport) -> JiraConnector<ScriptedTransport> {
        JiraConnector::with_transport(BASE_URL, "test@example.com", "token", transport)
    }

    #[test]
    fn test_connector_initialization() {
        let connector = JiraConnector::with_transport(
            "https://test.atlassian.net",
            "test@example.com",
            "fake-token",
            ScriptedTransport::new(),
        );

        assert_eq!(connector.base_url(), "https://test.atlassian.net");
        assert_eq!(connector.email(), "test@example.com");
        assert_eq!(connector.requests_made, 0);
        assert_eq!(connector.errors_count, 0);
    }

    #[test]
    fn test_connector_debug_hides_credentials() {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let connector = connector(ScriptedTransport::new());
        let debug_output = format!("{:?}", connector);

        assert!(debug_output.contains(BASE_URL));
        assert!(!debug_output.contains("token"));
        assert!(!debug_output.contains(&STANDARD.encode("test@example.com:token")));
    }

    #[tokio::test]
    async fn test_live_connector_initialization() {
        let connector =
            JiraConnector::new("https://test.atlassian.net/", "test@example.com", "token")
                .unwrap();
        assert_eq!(connector.base_url(), BASE_URL);
        assert_eq!(connector.get_statistics().requests_made, 0);
    }

    #[tokio::test]
    async fn test_connection_success() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"{"displayName": "Test User", "emailAddress": "test@example.com"}"#,
        );
        let mut connector = connector(transport);

        let user = connector.test_connection().await.unwrap();

        assert_eq!(user.display_name, "Test User");
        assert_eq!(user.email_address, "test@example.com");
        assert_eq!(connector.requests_made, 1);
        assert_eq!(connector.errors_count, 0);

        let requests = connector.transport().requests();
        assert_eq!(requests[0].url, "https://test.atlassian.net/rest/api/3/myself");
        assert!(requests[0].authorization.starts_with("Basic "));
    }

    #[tokio::test]
    async fn test_connection_unauthorized() {
        let transport = ScriptedTransport::new().respond(401, "");
        let mut connector = connector(transport);

        let err = connector.test_connection().await.unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
        assert!(err.to_string().contains("Authentication failed"));
        assert_eq!(connector.requests_made, 1);
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_connection_server_error() {
        let transport = ScriptedTransport::new().respond(503, "");
        let mut connector = connector(transport);

        let err = connector.test_connection().await.unwrap_err();

        match err {
            ApiError::ConnectionFailed(msg) => assert!(msg.contains("503")),
            other => panic!("Expected ConnectionFailed, got {:?}", other),
        }
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_connection_network_fault() {
        let transport = ScriptedTransport::new().fail("connection reset");
        let mut connector = connector(transport);

        let err = connector.test_connection().await.unwrap_err();

        match err {
            ApiError::ConnectionFailed(msg) => {
                assert!(msg.contains("Cannot connect to https://test.atlassian.net"));
                assert!(msg.contains("connection reset"));
            }
            other => panic!("Expected ConnectionFailed, got {:?}", other),
        }
        assert_eq!(connector.requests_made, 1);
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_connection_invalid_body() {
        let transport = ScriptedTransport::new().respond(200, "<html>login</html>");
        let mut connector = connector(transport);

        let err = connector.test_connection().await.unwrap_err();

        assert!(matches!(err, ApiError::ConnectionFailed(_)));
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_search_issues() {
        let body = r#"{
            "startAt": 0,
            "maxResults": 50,
            "total": 2,
            "issues": [
                {"key": "DEMO-1", "fields": {
                    "summary": "Implement authentication",
                    "status": {"name": "In Progress"},
                    "issuetype": {"name": "Feature"},
                    "priority": {"name": "High"}
                }},
                {"key": "DEMO-2", "fields": {
                    "summary": "Create dashboard",
                    "status": {"name": "Done"},
                    "issuetype": {"name": "Feature"}
                }}
            ]
        }"#;
        let transport = ScriptedTransport::new().respond(200, body);
        let mut connector = connector(transport);

        let issues = connector
            .search_issues("project = DEMO", DEFAULT_MAX_RESULTS)
            .await;

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "DEMO-1");
        assert_eq!(issues[0].priority, "High");
        assert_eq!(issues[1].priority, "None");
        assert_eq!(connector.get_statistics().requests_made, 1);

        let requests = connector.transport().requests();
        assert_eq!(
            requests[0].url,
            "https://test.atlassian.net/rest/api/3/search?jql=project%20%3D%20DEMO&maxResults=50"
        );
    }

    #[tokio::test]
    async fn test_search_issues_fails_soft() {
        let transport = ScriptedTransport::new()
            .respond(400, r#"{"errorMessages": ["Field 'projet' does not exist"]}"#);
        let mut connector = connector(transport);

        let issues = connector.search_issues("projet = DEMO", 10).await;

        assert!(issues.is_empty());
        assert_eq!(connector.requests_made, 1);
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_search_issues_network_fault_fails_soft() {
        let transport = ScriptedTransport::new().fail("timed out");
        let mut connector = connector(transport);

        assert!(connector.search_issues("ORDER BY created DESC", 5).await.is_empty());
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_get_projects() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"[{"key": "DEMO", "name": "Demo Project"}, {"key": "TEST", "name": "Test Project"}]"#,
        );
        let mut connector = connector(transport);

        let projects = connector.get_projects().await;

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].key, "DEMO");
        assert_eq!(projects[1].name, "Test Project");
    }

    #[tokio::test]
    async fn test_get_projects_fails_soft() {
        let transport = ScriptedTransport::new().respond(403, "");
        let mut connector = connector(transport);

        assert!(connector.get_projects().await.is_empty());
        assert_eq!(connector.errors_count, 1);
    }

    #[tokio::test]
    async fn test_counters_accumulate() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"displayName": "Test User"}"#)
            .respond(500, "")
            .respond(200, "[]");
        let mut connector = connector(transport);

        connector.test_connection().await.unwrap();
        connector.search_issues("ORDER BY created DESC", 50).await;
        connector.get_projects().await;

        let stats = connector.get_statistics();
        assert_eq!(stats.requests_made, 3);
        assert_eq!(stats.errors_count, 1);
        assert!(stats.requests_made >= stats.errors_count);
    }

    #[test]
    fn test_statistics() {
        let mut connector = connector(ScriptedTransport::new());
        connector.requests_made = 10;
        connector.errors_count = 2;

        let stats = connector.get_statistics();

        assert_eq!(stats.requests_made, 10);
        assert_eq!(stats.errors_count, 2);
        assert_eq!(stats.success_rate, 80.0);
    }

    #[test]
    fn test_error_from_response_prefers_error_messages() {
        let response = HttpResponse {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://test.atlassian.net/rest/api/3/project".to_string(),
            body: r#"{"errorMessages": ["No project could be found"]}"#.to_string(),
        };
        match error_from_response(&response) {
            ApiError::NotFound(msg) => assert_eq!(msg, "No project could be found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_response_field_errors() {
        let response = HttpResponse {
            status: reqwest::StatusCode::BAD_REQUEST,
            url: "https://test.atlassian.net/rest/api/3/search".to_string(),
            body: r#"{"errorMessages": [], "errors": {"jql": "bad query"}}"#.to_string(),
        };
        match error_from_response(&response) {
            ApiError::ServerError(msg) => assert!(msg.contains("jql: \"bad query\"")),
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_response_falls_back_to_url() {
        let response = HttpResponse {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://test.atlassian.net/rest/api/3/nope".to_string(),
            body: String::new(),
        };
        match error_from_response(&response) {
            ApiError::NotFound(msg) => assert!(msg.ends_with("/rest/api/3/nope")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_base_url_removes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://company.atlassian.net/"),
            "https://company.atlassian.net"
        );
    }

    #[test]
    fn test_normalize_base_url_handles_multiple_slashes() {
        assert_eq!(
            normalize_base_url("https://company.atlassian.net///"),
            "https://company.atlassian.net"
        );
    }

    #[test]
    fn test_normalize_base_url_preserves_path() {
        assert_eq!(
            normalize_base_url("https://company.atlassian.net/jira/"),
            "https://company.atlassian.net/jira"
        );
    }
}
