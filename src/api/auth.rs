//! Basic authentication for the JIRA API.
//!
//! JIRA Cloud accepts HTTP Basic auth built from the account email and an
//! API token. The raw token is encoded once at construction and never kept.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Authentication credentials for JIRA.
#[derive(Clone)]
pub struct Auth {
    /// The user's email address.
    email: String,
    /// The Base64-encoded authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from email and token.
    pub fn new(email: &str, token: &str) -> Self {
        Self {
            email: email.to_string(),
            auth_header: build_auth_header(email, token),
        }
    }

    /// Get the complete "Basic ..." header value.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("email", &self.email)
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

/// Encode "email:token" in Base64 and prepend "Basic ".
fn build_auth_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}
