//! HTTP transport used by the connector.
//!
//! [`Transport`] is the boundary between the connector's request/error
//! handling and the network. [`ReqwestTransport`] is the live implementation.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::trace;

use super::auth::Auth;
use super::error::{ApiError, Result};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Boxed future returned by [`Transport::get`], keeping the trait object-safe.
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send + 'a>>;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The response status.
    pub status: StatusCode,
    /// The final request URL.
    pub url: String,
    /// The response body as text.
    pub body: String,
}

/// Performs authenticated GET requests.
pub trait Transport: Send + Sync {
    /// Send a GET request to `url` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was received. Non-success
    /// statuses are returned as a normal [`HttpResponse`].
    fn get<'a>(&'a self, url: &'a str, auth: &'a Auth) -> TransportFuture<'a>;
}

/// Live transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build the transport with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Build the transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str, auth: &'a Auth) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header(header::AUTHORIZATION, auth.header_value())
                .header(header::ACCEPT, "application/json")
                .header(header::CONTENT_TYPE, "application/json")
                .send()
                .await?;

            let status = response.status();
            let url = response.url().to_string();
            let body = response.text().await?;
            trace!(%status, bytes = body.len(), "Received response");

            Ok(HttpResponse { status, url, body })
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn test_reqwest_transport_custom_timeout() {
        assert!(ReqwestTransport::with_timeout(Duration::from_millis(500)).is_ok());
    }
}
