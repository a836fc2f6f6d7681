//! Cryptocurrency records returned by the `/cryptocurrency/*` endpoints

use crate::enums::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Market quotes keyed by conversion currency symbol or id
pub type QuoteMap = HashMap<String, Quote>;

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Shared
// ============================================================================

/// Parent platform of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// CoinMarketCap ID of the parent platform cryptocurrency
    pub id: u64,
    /// Name of the parent platform cryptocurrency
    pub name: String,
    /// Ticker symbol of the parent platform cryptocurrency
    pub symbol: String,
    /// URL friendly shorthand of the parent platform name
    pub slug: String,
    /// Token address on the parent platform
    #[serde(default)]
    pub token_address: Option<String>,
}

/// Market quote in one conversion currency
///
/// Values are `f64`: converted market caps exceed 1e28 and prices of
/// low-priced tokens fall below 1e-28.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Price in the conversion currency
    pub price: Option<f64>,
    /// Rolling 24 hour adjusted volume
    pub volume_24h: Option<f64>,
    /// Rolling 24 hour reported volume (aux)
    pub volume_24h_reported: Option<f64>,
    /// Rolling 7 day adjusted volume (aux)
    pub volume_7d: Option<f64>,
    /// Rolling 7 day reported volume (aux)
    pub volume_7d_reported: Option<f64>,
    /// Rolling 30 day adjusted volume (aux)
    pub volume_30d: Option<f64>,
    /// Rolling 30 day reported volume (aux)
    pub volume_30d_reported: Option<f64>,
    /// Market cap
    pub market_cap: Option<f64>,
    /// Market cap by total supply (aux)
    pub market_cap_by_total_supply: Option<f64>,
    /// Fully diluted market cap
    pub fully_diluted_market_cap: Option<f64>,
    /// 1 hour change in percent
    pub percent_change_1h: Option<f64>,
    /// 24 hour change in percent
    pub percent_change_24h: Option<f64>,
    /// 7 day change in percent
    pub percent_change_7d: Option<f64>,
    /// When the conversion currency value was referenced
    pub last_updated: Option<DateTime<Utc>>,
}

// ============================================================================
// /cryptocurrency/map
// ============================================================================

/// Entry of the CoinMarketCap ID map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdMapEntry {
    /// CoinMarketCap ID
    pub id: u64,
    /// Name
    pub name: String,
    /// Ticker symbol, always upper case
    pub symbol: String,
    /// URL friendly shorthand of the name
    pub slug: String,
    /// Rank by market cap, when requested with `sort=cmc_rank`
    pub rank: Option<u64>,
    /// 1 if at least one active market is tracked, otherwise 0
    pub is_active: Option<u8>,
    /// Listing status (aux)
    pub status: Option<String>,
    /// First date this cryptocurrency was available
    pub first_historical_data: Option<DateTime<Utc>>,
    /// Last time market data was updated
    pub last_historical_data: Option<DateTime<Utc>>,
    /// Parent platform if this is a token
    pub platform: Option<Platform>,
}

// ============================================================================
// /cryptocurrency/info
// ============================================================================

/// Website and community links of a cryptocurrency
///
/// Categories absent from the response decode as empty lists.
///
/// ```
/// use cmc_types::CryptocurrencyUrls;
///
/// let urls: CryptocurrencyUrls =
///     serde_json::from_str(r#"{"website": ["https://bitcoin.org/"]}"#).unwrap();
/// assert_eq!(urls.website, vec!["https://bitcoin.org/".to_string()]);
/// assert!(urls.reddit.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptocurrencyUrls {
    /// Official websites
    pub website: Vec<String>,
    /// Whitepapers and technical documents
    pub technical_doc: Vec<String>,
    /// Block explorers
    pub explorer: Vec<String>,
    /// Source code repositories
    pub source_code: Vec<String>,
    /// Forums
    pub message_board: Vec<String>,
    /// Chat rooms
    pub chat: Vec<String>,
    /// Announcement threads
    pub announcement: Vec<String>,
    /// Subreddits
    pub reddit: Vec<String>,
    /// Twitter accounts
    pub twitter: Vec<String>,
}

/// Static metadata of a cryptocurrency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// CoinMarketCap ID
    pub id: u64,
    /// Name
    pub name: String,
    /// Ticker symbol, always upper case
    pub symbol: String,
    /// Coin or token
    pub category: Category,
    /// URL friendly shorthand of the name
    pub slug: String,
    /// Hosted 64px logo; other sizes replace `64x64` in the path
    pub logo: Option<String>,
    /// Brief description
    pub description: Option<String>,
    /// When this cryptocurrency was added
    pub date_added: Option<DateTime<Utc>>,
    /// Markdown notice about a significant event
    pub notice: Option<String>,
    /// Associated tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Parent platform if this is a token
    pub platform: Option<Platform>,
    /// Links (aux)
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: CryptocurrencyUrls,
}

// ============================================================================
// /cryptocurrency/listings/latest
// ============================================================================

/// Entry of the latest listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEntry {
    /// CoinMarketCap ID
    pub id: u64,
    /// Name
    pub name: String,
    /// Ticker symbol, always upper case
    pub symbol: String,
    /// URL friendly shorthand of the name
    pub slug: String,
    /// Rank by market cap
    pub cmc_rank: Option<u64>,
    /// Number of active trading pairs
    pub num_market_pairs: Option<u64>,
    /// Approximate circulating coins
    pub circulating_supply: Option<f64>,
    /// Approximate coins in existence minus verifiably burned ones
    pub total_supply: Option<f64>,
    /// Market cap by total supply (aux)
    pub market_cap_by_total_supply: Option<f64>,
    /// Expected maximum supply
    pub max_supply: Option<f64>,
    /// Last time market data was updated
    pub last_updated: Option<DateTime<Utc>>,
    /// When this cryptocurrency was added
    pub date_added: Option<DateTime<Utc>>,
    /// Associated tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Parent platform if this is a token
    pub platform: Option<Platform>,
    /// Quotes per conversion currency
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: QuoteMap,
}

impl TickerEntry {
    /// Get the quote in a conversion currency
    pub fn quote_in(&self, currency: &str) -> Option<&Quote> {
        self.quote.get(currency)
    }

    /// Get the price in a conversion currency
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.quote_in(currency)?.price
    }
}

// ============================================================================
// /cryptocurrency/quotes/latest
// ============================================================================

/// Latest market quote of a cryptocurrency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// CoinMarketCap ID
    pub id: u64,
    /// Name
    pub name: String,
    /// Ticker symbol, always upper case
    pub symbol: String,
    /// URL friendly shorthand of the name
    pub slug: String,
    /// 1 if at least one active market is tracked, otherwise 0
    pub is_active: Option<u8>,
    /// 1 if this is a fiat currency
    pub is_fiat: Option<u8>,
    /// Rank by market cap
    pub cmc_rank: Option<u64>,
    /// Number of active trading pairs
    pub num_market_pairs: Option<u64>,
    /// Approximate circulating coins
    pub circulating_supply: Option<f64>,
    /// Approximate coins in existence minus verifiably burned ones
    pub total_supply: Option<f64>,
    /// Market cap by total supply (aux)
    pub market_cap_by_total_supply: Option<f64>,
    /// Expected maximum supply
    pub max_supply: Option<f64>,
    /// When this cryptocurrency was added
    pub date_added: Option<DateTime<Utc>>,
    /// Associated tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Parent platform if this is a token
    pub platform: Option<Platform>,
    /// Last time market data was updated
    pub last_updated: Option<DateTime<Utc>>,
    /// Quotes per conversion currency
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: QuoteMap,
}

impl QuoteEntry {
    /// Get the quote in a conversion currency
    pub fn quote_in(&self, currency: &str) -> Option<&Quote> {
        self.quote.get(currency)
    }

    /// Get the price in a conversion currency
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.quote_in(currency)?.price
    }

    /// Check if this record describes a fiat currency
    pub fn is_fiat(&self) -> bool {
        self.is_fiat == Some(1)
    }
}
