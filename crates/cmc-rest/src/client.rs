//! Main REST client implementation

use crate::auth::ApiKey;
use crate::endpoints::{CryptocurrencyEndpoints, GlobalMetricsEndpoints};
use crate::error::{RestError, RestResult};
use crate::fetcher::{Fetcher, HttpRequest, HttpResponse, ReqwestFetcher, DEFAULT_TIMEOUT_SECS};
use crate::options::{GlobalOptions, IdMapOptions, ListingOptions, MetadataOptions, QuotesOptions};
use crate::params::Query;
use cmc_types::{Envelope, GlobalMetrics, IdMapEntry, MetadataEntry, QuoteEntry, Status, TickerEntry};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Sandbox API host (accepts the public sandbox key)
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com";

/// API version path segment used when none is configured
pub const DEFAULT_VERSION: &str = "v1";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// CoinMarketCap Pro API client
///
/// Every endpoint method validates its options, issues exactly one GET and
/// returns the parsed envelope. The client holds only immutable
/// configuration and is cheap to clone.
///
/// # Example
///
/// ```no_run
/// use cmc_rest::{CoinMarketCapClient, QuotesOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinMarketCapClient::from_env()?;
///
///     let quotes = client
///         .get_quotes(&QuotesOptions::by_symbol(["BTC", "ETH"]).with_convert("EUR"))
///         .await?;
///
///     for (symbol, entry) in &quotes.data {
///         println!("{}: {:?}", symbol, entry.price_in("EUR"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinMarketCapClient {
    api_key: ApiKey,
    version: String,
    base_url: String,
    request: RequestConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl CoinMarketCapClient {
    /// Create a client with the default configuration
    pub fn new(api_key: impl Into<ApiKey>) -> RestResult<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with the key from `CMC_PRO_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        Self::new(ApiKey::from_env()?)
    }

    /// Create a client with custom configuration
    pub fn with_config(api_key: impl Into<ApiKey>, config: ClientConfig) -> RestResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RestError::Config("API key must not be empty".to_string()));
        }

        let version = config.version.trim_matches('/').to_string();
        if version.is_empty() {
            return Err(RestError::Config("API version must not be empty".to_string()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(RestError::Config(format!("invalid base URL: {}", config.base_url)));
        }

        let fetcher = match config.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(
                ReqwestFetcher::with_options(
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    config.user_agent.as_deref(),
                )
                .map_err(|e| RestError::Config(e.to_string()))?,
            ),
        };

        info!(%base_url, %version, "Created CoinMarketCap REST client");

        Ok(Self {
            api_key,
            version,
            base_url,
            request: config.request,
            fetcher,
        })
    }

    /// API version path segment
    pub fn version(&self) -> &str {
        &self.version
    }

    /// API host, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get cryptocurrency endpoints
    pub fn cryptocurrency(&self) -> CryptocurrencyEndpoints<'_> {
        CryptocurrencyEndpoints::new(self)
    }

    /// Get global metrics endpoints
    pub fn global_metrics(&self) -> GlobalMetricsEndpoints<'_> {
        GlobalMetricsEndpoints::new(self)
    }

    /// Get the CoinMarketCap ID map
    pub async fn get_id_map(&self, options: &IdMapOptions) -> RestResult<Envelope<Vec<IdMapEntry>>> {
        self.cryptocurrency().id_map(options).await
    }

    /// Get static metadata, keyed by the requested id, symbol or slug
    pub async fn get_metadata(
        &self,
        options: &MetadataOptions,
    ) -> RestResult<Envelope<HashMap<String, MetadataEntry>>> {
        self.cryptocurrency().info(options).await
    }

    /// Get the latest listings with market data
    pub async fn get_tickers(&self, options: &ListingOptions) -> RestResult<Envelope<Vec<TickerEntry>>> {
        self.cryptocurrency().listings_latest(options).await
    }

    /// Get the latest quotes, keyed by the requested id, symbol or slug
    pub async fn get_quotes(
        &self,
        options: &QuotesOptions,
    ) -> RestResult<Envelope<HashMap<String, QuoteEntry>>> {
        self.cryptocurrency().quotes_latest(options).await
    }

    /// Get the latest global market metrics
    pub async fn get_global(&self, options: &GlobalOptions) -> RestResult<Envelope<GlobalMetrics>> {
        self.global_metrics().quotes_latest(options).await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Absolute URL for an endpoint path such as `/cryptocurrency/map`
    pub(crate) fn url(&self, path: &str, query: &Query) -> RestResult<String> {
        let mut url = format!("{}/{}{}", self.base_url, self.version, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode()?);
        }
        Ok(url)
    }

    /// Build the request, with client headers taking precedence
    pub(crate) fn request(&self, url: String) -> HttpRequest {
        let mut request = HttpRequest::get(url);
        request.headers = self
            .request
            .headers
            .iter()
            .filter(|(name, _)| {
                !name.eq_ignore_ascii_case(API_KEY_HEADER) && !name.eq_ignore_ascii_case("accept")
            })
            .cloned()
            .collect();
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        request
            .headers
            .push((API_KEY_HEADER.to_string(), self.api_key.expose().to_string()));
        request.timeout = self.request.timeout;
        request
    }

    /// Issue one GET and decode the envelope
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
    ) -> RestResult<Envelope<T>> {
        let url = self.url(path, &query)?;
        debug!(%url, "Sending request");

        let response = self.fetcher.fetch(self.request(url)).await?;
        decode_envelope(response)
    }
}

impl fmt::Debug for CoinMarketCapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinMarketCapClient")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: Status,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Map a raw response onto an envelope or an error
///
/// A failed status block wins over the HTTP status, so API error codes
/// survive non-2xx responses.
pub(crate) fn decode_envelope<T: DeserializeOwned>(response: HttpResponse) -> RestResult<Envelope<T>> {
    let raw: RawEnvelope = match response.json() {
        Ok(raw) => raw,
        Err(_) if !response.is_success() => {
            return Err(RestError::Http {
                status: response.status,
            })
        }
        Err(e) => return Err(RestError::Parse(e.to_string())),
    };

    if let Some(err) = RestError::from_status(&raw.status, response.status) {
        warn!(http_status = response.status, "API error: {}", err);
        return Err(err);
    }
    if !response.is_success() {
        return Err(RestError::Http {
            status: response.status,
        });
    }

    let data = raw
        .data
        .ok_or_else(|| RestError::Parse("response has no `data` field".to_string()))?;
    let data = serde_json::from_value(data).map_err(|e| RestError::Parse(e.to_string()))?;

    debug!(
        credit_count = raw.status.credit_count,
        elapsed = raw.status.elapsed,
        "Request succeeded"
    );

    Ok(Envelope {
        status: raw.status,
        data,
    })
}

/// Transport options applied to every request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Extra headers; `Accept` and the API key header are always set by the client
    pub headers: Vec<(String, String)>,
    /// Per-request timeout forwarded to the fetcher
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API version path segment
    pub version: String,
    /// API host
    pub base_url: String,
    /// Transport options applied to every request
    pub request: RequestConfig,
    /// Custom transport; a `reqwest` fetcher is created when unset
    pub fetcher: Option<Arc<dyn Fetcher>>,
    /// Custom user agent for the default fetcher, unused with a custom fetcher
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request: RequestConfig::default(),
            fetcher: None,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("request", &self.request)
            .field("custom_fetcher", &self.fetcher.is_some())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration targeting the sandbox host
    pub fn sandbox() -> Self {
        Self::default().with_base_url(SANDBOX_BASE_URL)
    }

    /// Set the API version path segment
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the transport options applied to every request
    pub fn with_request_config(mut self, request: RequestConfig) -> Self {
        self.request = request;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// Set a custom transport
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set user agent
    ///
    /// Only applies to the default `reqwest` fetcher. A fetcher set through
    /// [`ClientConfig::with_fetcher`] sends its own user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::MockFetcher;

    fn mock_client(config: ClientConfig) -> CoinMarketCapClient {
        let config = config.with_fetcher(Arc::new(MockFetcher::new()));
        CoinMarketCapClient::with_config("test-key", config).unwrap()
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_version("v2")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.version, "v2");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(ClientConfig::sandbox().base_url, SANDBOX_BASE_URL);
    }

    #[test]
    fn test_user_agent_builds_default_fetcher() {
        let config = ClientConfig::new().with_user_agent("cmc-test/1.0");
        assert!(config.fetcher.is_none());
        let client = CoinMarketCapClient::with_config("k", config).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(DEFAULT_TIMEOUT_SECS, 30);
    }

    #[test]
    fn test_empty_key_is_config_error() {
        let err = CoinMarketCapClient::with_config("  ", ClientConfig::new()).unwrap_err();
        assert!(matches!(err, RestError::Config(_)));
    }

    #[test]
    fn test_empty_version_is_config_error() {
        let config = ClientConfig::new()
            .with_version("/")
            .with_fetcher(Arc::new(MockFetcher::new()));
        let err = CoinMarketCapClient::with_config("k", config).unwrap_err();
        assert!(matches!(err, RestError::Config(_)));
    }

    #[test]
    fn test_url_includes_version_and_query() {
        let client = mock_client(ClientConfig::new().with_base_url("https://mock.test/"));
        assert_eq!(client.base_url(), "https://mock.test");

        let mut query = Query::new();
        query.push("symbol", "BTC,ETH");
        let url = client.url("/cryptocurrency/map", &query).unwrap();
        assert_eq!(url, "https://mock.test/v1/cryptocurrency/map?symbol=BTC%2CETH");

        let url = client.url("/global-metrics/quotes/latest", &Query::new()).unwrap();
        assert_eq!(url, "https://mock.test/v1/global-metrics/quotes/latest");
    }

    #[test]
    fn test_client_headers_override_request_headers() {
        let request = RequestConfig::new()
            .with_header("x-cmc_pro_api_key", "spoofed")
            .with_header("X-Trace", "abc")
            .with_timeout(Duration::from_millis(250));
        let client = mock_client(ClientConfig::new().with_request_config(request));

        let request = client.request("https://mock.test/v1/x".to_string());
        assert_eq!(request.header(API_KEY_HEADER), Some("test-key"));
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.timeout, Some(Duration::from_millis(250)));
        assert_eq!(
            request
                .headers
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case(API_KEY_HEADER))
                .count(),
            1
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let client = mock_client(ClientConfig::new());
        let debug = format!("{:?}", client);
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("v1"));
    }

    #[test]
    fn test_decode_error_code_wins_over_http_status() {
        let body = r#"{"status":{"timestamp":"2024-05-01T10:00:00.000Z","error_code":1002,"error_message":"API key missing.","elapsed":0,"credit_count":0}}"#;
        let err = decode_envelope::<serde_json::Value>(HttpResponse::new(401, body)).unwrap_err();
        assert_eq!(err.error_code(), Some(1002));
        assert!(matches!(err, RestError::Api { http_status: 401, .. }));
    }

    #[test]
    fn test_decode_non_json_error_body() {
        let err = decode_envelope::<serde_json::Value>(HttpResponse::new(502, "<html>bad gateway</html>"))
            .unwrap_err();
        assert!(matches!(err, RestError::Http { status: 502 }));
        assert_eq!(err.error_code(), None);

        let err = decode_envelope::<serde_json::Value>(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));
    }

    #[test]
    fn test_decode_zero_error_code_is_success() {
        let body = r#"{"status":{"timestamp":"2024-05-01T10:00:00.000Z","error_code":0,"error_message":null,"elapsed":3,"credit_count":1},"data":{"answer":42}}"#;
        let envelope = decode_envelope::<serde_json::Value>(HttpResponse::new(200, body)).unwrap();
        assert_eq!(envelope.data["answer"], 42);
        assert_eq!(envelope.status.credit_count, 1);
    }
}
