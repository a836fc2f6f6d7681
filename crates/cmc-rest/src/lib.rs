//! REST API client for the CoinMarketCap Pro API
//!
//! This crate provides a typed client for the CoinMarketCap market data
//! endpoints. Every method validates its options up front, issues exactly one
//! GET, and returns the parsed response envelope.
//!
//! # Endpoints
//!
//! - **ID map**: `/cryptocurrency/map` via [`CoinMarketCapClient::get_id_map`]
//! - **Metadata**: `/cryptocurrency/info` via [`CoinMarketCapClient::get_metadata`]
//! - **Listings**: `/cryptocurrency/listings/latest` via [`CoinMarketCapClient::get_tickers`]
//! - **Quotes**: `/cryptocurrency/quotes/latest` via [`CoinMarketCapClient::get_quotes`]
//! - **Global metrics**: `/global-metrics/quotes/latest` via [`CoinMarketCapClient::get_global`]
//!
//! # Authentication
//!
//! The API key is sent in the `X-CMC_PRO_API_KEY` header on every call.
//! [`ApiKey::from_env`] reads it from `CMC_PRO_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use cmc_rest::{CoinMarketCapClient, IdMapOptions, ListingOptions, ParamList};
//! use cmc_types::ListingSort;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinMarketCapClient::from_env()?;
//!
//!     // Resolve ids for a few symbols
//!     let symbols = ParamList::from("BTC,ETH,SOL");
//!     let map = client.get_id_map(&IdMapOptions::new().with_symbol(symbols)).await?;
//!     for entry in &map.data {
//!         println!("{} -> {}", entry.symbol, entry.id);
//!     }
//!
//!     // Top ten by 24h volume
//!     let options = ListingOptions::new()
//!         .with_limit(10)
//!         .with_sort(ListingSort::Volume24h, None);
//!     let listings = client.get_tickers(&options).await?;
//!     println!("{} listings, {} credits", listings.data.len(), listings.status.credit_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Invalid option combinations fail with [`RestError::Validation`] before any
//! request is sent. A response whose status block carries an error code fails
//! with [`RestError::Api`], whatever its HTTP status. The client never retries;
//! use [`RestError::is_retryable`] to decide.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetcher;
pub mod options;
pub mod params;

// Re-export main types
pub use auth::{ApiKey, API_KEY_ENV};
pub use client::{
    ClientConfig, CoinMarketCapClient, RequestConfig, API_KEY_HEADER, DEFAULT_BASE_URL,
    DEFAULT_VERSION, SANDBOX_BASE_URL,
};
pub use error::{RestError, RestResult, ValidationError};
pub use fetcher::{
    Fetcher, HttpRequest, HttpResponse, ReqwestFetcher, TransportError, DEFAULT_TIMEOUT_SECS,
};
#[cfg(any(test, feature = "test-utils"))]
pub use fetcher::MockFetcher;
pub use options::{
    Conversion, GlobalOptions, IdMapOptions, ListingOptions, Lookup, MetadataOptions,
    QuotesOptions, RangeFilter,
};
pub use params::ParamList;

// Re-export response types
pub use cmc_types::{
    Envelope, GlobalMetrics, IdMapEntry, MetadataEntry, Quote, QuoteEntry, Status, TickerEntry,
};
