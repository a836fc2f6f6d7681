//! HTTP transport abstraction
//!
//! The client never talks to the network directly. Every call is handed to a
//! [`Fetcher`] as one [`HttpRequest`], and the fetcher answers with a status
//! code and a body. [`ReqwestFetcher`] is the default implementation;
//! [`MockFetcher`] replays canned responses and records what was sent.
//!
//! # Example
//!
//! ```no_run
//! use cmc_rest::fetcher::{Fetcher, HttpRequest, ReqwestFetcher, TransportError};
//!
//! async fn example() -> Result<(), TransportError> {
//!     let fetcher = ReqwestFetcher::new()?;
//!     let response = fetcher
//!         .fetch(HttpRequest::get("https://pro-api.coinmarketcap.com/v1/key/info"))
//!         .await?;
//!     println!("{} {}", response.status, response.text());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

pub use reqwest::Method;

/// Default transport timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the server
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request did not complete in time
    #[error("request timed out")]
    Timeout,

    /// Request failed for another reason
    #[error("request failed: {0}")]
    Request(String),

    /// Response body could not be read
    #[error("failed to read body: {0}")]
    Body(String),

    /// No response available (mock transport exhausted)
    #[error("no response available")]
    NoResponse,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// One outbound HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Request headers, in sending order
    pub headers: Vec<(String, String)>,
    /// Per-request timeout, if the caller configured one
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Create a GET request without headers
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// Look up a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// URL without the query string
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    /// Decoded query string pairs
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self.url.split_once('?') {
            Some((_, query)) => serde_urlencoded::from_str(query).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Decoded value of one query parameter
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// Response handed back by a fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw body text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations issue exactly one request per call and must not retry.
/// A timeout set on the request should be honored when the transport
/// supports one.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Send the request and return the response
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).fetch(request).await
    }
}

/// Default fetcher backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self, TransportError> {
        Self::with_options(Duration::from_secs(DEFAULT_TIMEOUT_SECS), None)
    }

    /// Create a fetcher with a custom timeout and user agent
    pub fn with_options(timeout: Duration, user_agent: Option<&str>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(concat!("cmc-rest/", env!("CARGO_PKG_VERSION"))))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, len = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}

/// Mock fetcher for testing
///
/// Replays queued responses in order and captures every request.
/// Available with the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    /// Create a mock without queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests captured so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests captured so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(TransportError::NoResponse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher_replays_in_order() {
        let mock = MockFetcher::new();
        mock.push_response(200, "first");
        mock.push_error(TransportError::Timeout);

        let first = mock.fetch(HttpRequest::get("https://mock.test/a")).await.unwrap();
        assert_eq!(first.text(), "first");

        let second = mock.fetch(HttpRequest::get("https://mock.test/b")).await;
        assert_eq!(second, Err(TransportError::Timeout));

        let third = mock.fetch(HttpRequest::get("https://mock.test/c")).await;
        assert_eq!(third, Err(TransportError::NoResponse));

        assert_eq!(mock.request_count(), 3);
        assert_eq!(mock.last_request().unwrap().path(), "https://mock.test/c");
    }

    #[test]
    fn test_request_query_pairs_are_decoded() {
        let request = HttpRequest::get("https://mock.test/v1/x?symbol=BTC%2CETH&limit=10");
        assert_eq!(request.path(), "https://mock.test/v1/x");
        assert_eq!(request.query_param("symbol").as_deref(), Some("BTC,ETH"));
        assert_eq!(request.query_param("limit").as_deref(), Some("10"));
        assert_eq!(request.query_param("start"), None);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut request = HttpRequest::get("https://mock.test");
        request.headers.push(("Accept".into(), "application/json".into()));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("x-missing"), None);
    }

    #[test]
    fn test_response_json() {
        let response = HttpResponse::new(200, r#"{"a":1}"#);
        assert!(response.is_success());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["a"], 1);
        assert!(!HttpResponse::new(404, "").is_success());
    }
}
