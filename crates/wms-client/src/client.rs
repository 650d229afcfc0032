//! Backend client handle
//!
//! One explicitly constructed handle per application, passed to views via
//! context. Issues non-blocking fetches against the `/rest/v1/{table}`
//! surface; row queries deserialize the JSON body, count-only queries read
//! the total from the `Content-Range` header.

use crate::{ClientConfig, FetchError, Query};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Configured handle to the hosted data service
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: ClientConfig,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a query (exposed for logging and tests)
    pub fn endpoint(&self, query: &Query) -> String {
        format!(
            "{}/{}?{}",
            self.config.rest_root(),
            query.table(),
            query.query_string()
        )
    }

    /// Execute a row query and deserialize the result set
    pub async fn rows<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>, FetchError> {
        let url = self.endpoint(&query);
        tracing::debug!(table = query.table(), %url, "rows query");

        let response = self.request(&url).send().await?;
        self.check_status(&response).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Execute a count-only query.
    ///
    /// Sends `Prefer: count=exact` with `limit=0`; the backend answers with
    /// no rows and a `Content-Range: */N` header carrying the total.
    pub async fn count(&self, query: Query) -> Result<u64, FetchError> {
        let url = format!("{}&limit=0", self.endpoint(&query));
        tracing::debug!(table = query.table(), %url, "count query");

        let response = self
            .request(&url)
            .header("Prefer", "count=exact")
            .send()
            .await?;
        self.check_status(&response).await?;

        let range = response
            .headers()
            .get("content-range")
            .ok_or_else(|| FetchError::Decode("missing Content-Range header".to_string()))?;

        parse_content_range_total(&range)
    }

    fn request(&self, url: &str) -> gloo_net::http::RequestBuilder {
        Request::get(url)
            .header("apikey", &self.config.api_key)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
    }

    async fn check_status(&self, response: &Response) -> Result<(), FetchError> {
        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            response.status_text()
        } else {
            body.trim().to_string()
        };

        tracing::warn!(status, %message, "backend rejected query");
        Err(FetchError::Http { status, message })
    }
}

/// Extract the total from a `Content-Range` value (`*/57` or `0-0/57`)
pub fn parse_content_range_total(range: &str) -> Result<u64, FetchError> {
    range
        .rsplit('/')
        .next()
        .and_then(|total| total.trim().parse::<u64>().ok())
        .ok_or_else(|| FetchError::Decode(format!("unparseable Content-Range: {range}")))
}
