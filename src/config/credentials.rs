//! JIRA credentials read from the environment.

use std::fmt;

use super::{ConfigError, Result};

/// Environment variable holding the JIRA instance URL.
pub const ENV_URL: &str = "JIRA_URL";
/// Environment variable holding the account email.
pub const ENV_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Connection details for a JIRA instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The JIRA instance URL (e.g., "https://company.atlassian.net").
    pub url: String,
    /// The user's email address.
    pub email: String,
    /// The API token. Never printed.
    pub api_token: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(url: String, email: String, api_token: String) -> Self {
        Self {
            url,
            email,
            api_token,
        }
    }

    /// Read `JIRA_URL`, `JIRA_EMAIL` and `JIRA_API_TOKEN` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming every unset or
    /// empty variable, or a validation error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let url = read(ENV_URL);
        let email = read(ENV_EMAIL);
        let api_token = read(ENV_API_TOKEN);

        match (url, email, api_token) {
            (Some(url), Some(email), Some(api_token)) => {
                let credentials = Self::new(url, email, api_token);
                credentials.validate()?;
                Ok(credentials)
            }
            (url, email, api_token) => {
                let missing = [
                    (ENV_URL, url.is_none()),
                    (ENV_EMAIL, email.is_none()),
                    (ENV_API_TOKEN, api_token.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(ConfigError::MissingCredentials(missing))
            }
        }
    }

    /// Validate these credentials.
    ///
    /// Checks that the URL has an http(s) scheme and the email looks like one.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "{}: URL must start with http:// or https://",
                ENV_URL
            )));
        }

        if !self.email.contains('@') {
            return Err(ConfigError::ValidationError(format!(
                "{}: '{}' does not appear to be a valid email address",
                ENV_EMAIL, self.email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_complete() {
        let credentials = Credentials::from_lookup(lookup(&[
            (ENV_URL, "https://company.atlassian.net"),
            (ENV_EMAIL, "user@company.com"),
            (ENV_API_TOKEN, "token"),
        ]))
        .unwrap();

        assert_eq!(credentials.url, "https://company.atlassian.net");
        assert_eq!(credentials.email, "user@company.com");
        assert_eq!(credentials.api_token, "token");
    }

    #[test]
    fn test_from_lookup_reports_all_missing() {
        let err = Credentials::from_lookup(lookup(&[])).unwrap_err();
        match err {
            ConfigError::MissingCredentials(names) => {
                assert_eq!(names, vec![ENV_URL, ENV_EMAIL, ENV_API_TOKEN]);
            }
            other => panic!("Expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_treats_empty_as_missing() {
        let err = Credentials::from_lookup(lookup(&[
            (ENV_URL, "https://company.atlassian.net"),
            (ENV_EMAIL, "user@company.com"),
            (ENV_API_TOKEN, "  "),
        ]))
        .unwrap_err();
        match err {
            ConfigError::MissingCredentials(names) => assert_eq!(names, vec![ENV_API_TOKEN]),
            other => panic!("Expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_scheme_rejected() {
        let err = Credentials::from_lookup(lookup(&[
            (ENV_URL, "company.atlassian.net"),
            (ENV_EMAIL, "user@company.com"),
            (ENV_API_TOKEN, "token"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let credentials = Credentials::new(
            "http://localhost:8080".to_string(),
            "not-an-email".to_string(),
            "token".to_string(),
        );
        let err = credentials.validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials::new(
            "https://company.atlassian.net".to_string(),
            "user@company.com".to_string(),
            "super-secret".to_string(),
        );
        let output = format!("{:?}", credentials);
        assert!(!output.contains("super-secret"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(ENV_URL, "https://env.atlassian.net");
        std::env::set_var(ENV_EMAIL, "env@example.com");
        std::env::set_var(ENV_API_TOKEN, "env-token");

        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.url, "https://env.atlassian.net");
        assert_eq!(credentials.email, "env@example.com");

        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_EMAIL);
        std::env::remove_var(ENV_API_TOKEN);
    }

    #[test]
    #[serial]
    fn test_from_env_missing() {
        std::env::remove_var(ENV_URL);
        std::env::set_var(ENV_EMAIL, "env@example.com");
        std::env::remove_var(ENV_API_TOKEN);

        let err = Credentials::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredentials(ref names) if names == &vec![ENV_URL, ENV_API_TOKEN]
        ));

        std::env::remove_var(ENV_EMAIL);
    }
}
