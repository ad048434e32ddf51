//! Credential check.

use std::io::Write;

use tracing::{error, info};

use crate::api::{JiraConnector, Transport};
use crate::error::Result;

/// Verify the connection and print who the credentials belong to.
///
/// The statistics line is printed whether or not the check succeeds.
///
/// # Errors
///
/// Returns the connection error so the caller can exit non-zero.
pub async fn check_connection<T: Transport, W: Write>(
    connector: &mut JiraConnector<T>,
    out: &mut W,
) -> Result<()> {
    let result = connector.test_connection().await;

    match &result {
        Ok(user) => {
            info!(account_id = %user.account_id, "Connection check passed");
            writeln!(out, "Connected to {}", connector.base_url())?;
            if user.email_address.is_empty() {
                writeln!(out, "Authenticated as {}", user.display_name)?;
            } else {
                writeln!(
                    out,
                    "Authenticated as {} ({})",
                    user.display_name, user.email_address
                )?;
            }
        }
        Err(e) => {
            error!(error = %e, "Connection check failed");
            writeln!(out, "Connection check failed for {}", connector.base_url())?;
        }
    }

    writeln!(out, "{}", connector.get_statistics())?;
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scripted::ScriptedTransport;
    use crate::api::ApiError;
    use crate::error::AppError;

    fn connector(transport: ScriptedTransport) -> JiraConnector<ScriptedTransport> {
        JiraConnector::with_transport(
            "https://test.atlassian.net/",
            "test@example.com",
            "token",
            transport,
        )
    }

    #[tokio::test]
    async fn test_check_success() {
        let body = r#"{"accountId": "abc", "displayName": "Test User",
            "emailAddress": "test@example.com"}"#;
        let mut connector = connector(ScriptedTransport::new().respond(200, body));
        let mut out = Vec::new();

        check_connection(&mut connector, &mut out).await.unwrap();

        let expected = "\
Connected to https://test.atlassian.net
Authenticated as Test User (test@example.com)
Requests: 1, errors: 0, success rate: 100.0%
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_check_unauthorized() {
        let mut connector = connector(ScriptedTransport::new().respond(401, ""));
        let mut out = Vec::new();

        let err = check_connection(&mut connector, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::Unauthorized)));
        assert!(err.to_string().contains("Authentication failed"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Requests: 1, errors: 1, success rate: 0.0%"));
    }
}
