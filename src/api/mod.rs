//! JIRA API connector and types.
//!
//! This module provides the interface for communicating with the JIRA REST API.

mod auth;
mod connector;
pub mod error;
mod transport;
pub mod types;

pub use auth::Auth;
pub use connector::{JiraConnector, DEFAULT_MAX_RESULTS};
pub use error::ApiError;
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportFuture};
pub use types::{CurrentUser, IssueRecord, ProjectRecord, Statistics};

#[cfg(test)]
pub(crate) use transport::scripted;
