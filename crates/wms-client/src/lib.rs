//! # wms-client
//!
//! Table-scoped read access to the hosted warehouse backend. Queries are
//! built with a PostgREST-style builder ([`Query`]) and executed through
//! an explicitly constructed [`BackendClient`] handle, so views can be
//! tested against a substitutable endpoint instead of ambient globals.

pub mod client;
pub mod dashboard;
pub mod query;

pub use client::*;
pub use dashboard::*;
pub use query::*;

use thiserror::Error;

/// Default backend URL for local development (the mock server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

// ============================================================================
// CLIENT CONFIGURATION
// ============================================================================

/// Backend connection configuration, supplied by the entry crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Trailing-slash tolerant base for URL assembly
    pub fn rest_root(&self) -> String {
        format!("{}/rest/v1", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, "dev-anon-key")
    }
}

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

/// Failure of a single backend query.
///
/// Views collapse every variant into its `Display` string; the taxonomy
/// exists for logging and tests, not for divergent user-facing behavior.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never produced a response (network unreachable, CORS, ...)
    #[error("request failed: {0}")]
    Network(String),

    /// Backend rejected the query
    #[error("query rejected ({status}): {message}")]
    Http { status: u16, message: String },

    /// Response arrived but did not match the expected row shape
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
