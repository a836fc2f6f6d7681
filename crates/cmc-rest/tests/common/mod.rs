//! Common test utilities and fixtures for integration tests
//!
//! Payloads follow the shape of live CoinMarketCap Pro API v1 responses,
//! trimmed to a few records.

#![allow(dead_code)]

use cmc_rest::{ClientConfig, CoinMarketCapClient, MockFetcher};
use std::sync::Arc;

/// Key used by every mock client
pub const API_KEY: &str = "b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c";

/// Host used by every mock client
pub const MOCK_BASE_URL: &str = "https://mock.test";

/// Sample `/cryptocurrency/map` payload
pub const ID_MAP_DATA: &str = r#"[
    {
        "id": 1,
        "name": "Bitcoin",
        "symbol": "BTC",
        "slug": "bitcoin",
        "is_active": 1,
        "first_historical_data": "2013-04-28T18:47:21.000Z",
        "last_historical_data": "2024-05-01T09:59:00.000Z",
        "platform": null
    },
    {
        "id": 1027,
        "name": "Ethereum",
        "symbol": "ETH",
        "slug": "ethereum",
        "is_active": 1,
        "first_historical_data": "2015-08-07T14:49:30.000Z",
        "last_historical_data": "2024-05-01T09:59:00.000Z",
        "platform": null
    },
    {
        "id": 3408,
        "name": "USDC",
        "symbol": "USDC",
        "slug": "usd-coin",
        "is_active": 1,
        "first_historical_data": "2018-10-08T18:49:28.000Z",
        "last_historical_data": "2024-05-01T09:59:00.000Z",
        "platform": {
            "id": 1027,
            "name": "Ethereum",
            "symbol": "ETH",
            "slug": "ethereum",
            "token_address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        }
    }
]"#;

/// Sample `/cryptocurrency/info` payload keyed by id
pub const METADATA_DATA: &str = r#"{
    "1": {
        "id": 1,
        "name": "Bitcoin",
        "symbol": "BTC",
        "category": "coin",
        "slug": "bitcoin",
        "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/1.png",
        "description": "Bitcoin (BTC) is a cryptocurrency.",
        "date_added": "2013-04-28T00:00:00.000Z",
        "notice": null,
        "tags": ["mineable", "pow", "sha-256"],
        "platform": null,
        "urls": {
            "website": ["https://bitcoin.org/"],
            "technical_doc": ["https://bitcoin.org/bitcoin.pdf"],
            "twitter": [],
            "reddit": ["https://reddit.com/r/bitcoin"],
            "message_board": ["https://bitcointalk.org"],
            "announcement": [],
            "chat": [],
            "explorer": ["https://blockchain.info/"],
            "source_code": ["https://github.com/bitcoin/bitcoin"]
        }
    }
}"#;

/// Sample `/cryptocurrency/listings/latest` payload
pub const LISTINGS_DATA: &str = r#"[
    {
        "id": 1,
        "name": "Bitcoin",
        "symbol": "BTC",
        "slug": "bitcoin",
        "cmc_rank": 1,
        "num_market_pairs": 11012,
        "circulating_supply": 19689356,
        "total_supply": 19689356,
        "max_supply": 21000000,
        "last_updated": "2024-05-01T10:00:00.000Z",
        "date_added": "2013-04-28T00:00:00.000Z",
        "tags": ["mineable"],
        "platform": null,
        "quote": {
            "USD": {
                "price": 60123.45,
                "volume_24h": 35012345678.5,
                "market_cap": 1183792001234.5,
                "percent_change_1h": -0.25,
                "percent_change_24h": -5.5,
                "percent_change_7d": -6.75,
                "last_updated": "2024-05-01T10:00:00.000Z"
            }
        }
    },
    {
        "id": 1027,
        "name": "Ethereum",
        "symbol": "ETH",
        "slug": "ethereum",
        "cmc_rank": 2,
        "num_market_pairs": 8745,
        "circulating_supply": 120100000.5,
        "total_supply": 120100000.5,
        "max_supply": null,
        "last_updated": "2024-05-01T10:00:00.000Z",
        "date_added": "2015-08-07T00:00:00.000Z",
        "tags": ["pos", "smart-contracts"],
        "platform": null,
        "quote": {
            "USD": {
                "price": 2950.5,
                "volume_24h": 15000000000,
                "market_cap": 354355051475.25,
                "percent_change_1h": 0.1,
                "percent_change_24h": -3.2,
                "percent_change_7d": -5.4,
                "last_updated": "2024-05-01T10:00:00.000Z"
            }
        }
    }
]"#;

/// Sample `/cryptocurrency/quotes/latest` payload for id 1 only
pub const QUOTES_DATA: &str = r#"{
    "1": {
        "id": 1,
        "name": "Bitcoin",
        "symbol": "BTC",
        "slug": "bitcoin",
        "is_active": 1,
        "is_fiat": 0,
        "cmc_rank": 1,
        "num_market_pairs": 11012,
        "circulating_supply": 19689356,
        "total_supply": 19689356,
        "max_supply": 21000000,
        "date_added": "2013-04-28T00:00:00.000Z",
        "tags": ["mineable"],
        "platform": null,
        "last_updated": "2024-05-01T10:00:00.000Z",
        "quote": {
            "EUR": {
                "price": 56250.75,
                "volume_24h": 32750000000,
                "market_cap": 1107531000000,
                "percent_change_1h": -0.25,
                "percent_change_24h": -5.5,
                "percent_change_7d": -6.75,
                "last_updated": "2024-05-01T10:00:00.000Z"
            }
        }
    }
}"#;

/// Sample `/global-metrics/quotes/latest` payload
pub const GLOBAL_DATA: &str = r#"{
    "active_cryptocurrencies": 9876,
    "total_cryptocurrencies": 31000,
    "active_market_pairs": 80123,
    "active_exchanges": 750,
    "total_exchanges": 8000,
    "eth_dominance": 15.25,
    "btc_dominance": 54.5,
    "last_updated": "2024-05-01T10:00:00.000Z",
    "quote": {
        "USD": {
            "total_market_cap": 2200000000000,
            "total_volume_24h": 95000000000,
            "total_volume_24h_reported": 1500000000000,
            "altcoin_volume_24h": 60000000000,
            "altcoin_market_cap": 1000000000000,
            "last_updated": "2024-05-01T10:00:00.000Z"
        }
    }
}"#;

/// Global metrics converted to a currency priced far below one cent
pub const EXTREME_GLOBAL_DATA: &str = r#"{
    "active_cryptocurrencies": 9876,
    "btc_dominance": 54.5,
    "quote": {
        "PEPE2": {
            "total_market_cap": 2.2e30,
            "total_volume_24h": 9.5e28,
            "last_updated": "2024-05-01T10:00:00.000Z"
        }
    }
}"#;

/// Quote of a token priced below the smallest decimal step
pub const EXTREME_QUOTES_DATA: &str = r#"{
    "DUST": {
        "id": 99999,
        "name": "Dust",
        "symbol": "DUST",
        "slug": "dust",
        "tags": null,
        "platform": null,
        "quote": {
            "USD": {
                "price": 3.4e-31,
                "volume_24h": 0,
                "market_cap": 8.5e28,
                "last_updated": "2024-05-01T10:00:00.000Z"
            }
        }
    }
}"#;

/// Relative float comparison for decoded market values
pub fn approx_eq(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|a| ((a - expected) / expected).abs() < 1e-12)
}

/// Status block JSON
pub fn status_json(error_code: Option<i64>, error_message: Option<&str>) -> String {
    serde_json::json!({
        "timestamp": "2024-05-01T10:00:00.000Z",
        "error_code": error_code,
        "error_message": error_message,
        "elapsed": 12,
        "credit_count": 1,
        "notice": null
    })
    .to_string()
}

/// Successful response body wrapping a payload
pub fn success_body(data: &str) -> String {
    format!(r#"{{"status":{},"data":{}}}"#, status_json(None, None), data)
}

/// Error response body without payload
pub fn error_body(code: i64, message: &str) -> String {
    format!(r#"{{"status":{}}}"#, status_json(Some(code), Some(message)))
}

/// Client backed by a mock fetcher, with the mock handle for assertions
pub fn mock_client() -> (CoinMarketCapClient, Arc<MockFetcher>) {
    mock_client_with(ClientConfig::new())
}

/// Same as [`mock_client`], starting from a custom configuration
pub fn mock_client_with(config: ClientConfig) -> (CoinMarketCapClient, Arc<MockFetcher>) {
    let mock = Arc::new(MockFetcher::new());
    let config = config
        .with_base_url(MOCK_BASE_URL)
        .with_fetcher(mock.clone());
    let client = CoinMarketCapClient::with_config(API_KEY, config).expect("mock client");
    (client, mock)
}
