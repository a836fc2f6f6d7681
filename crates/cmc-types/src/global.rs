//! Aggregate market metrics returned by `/global-metrics/quotes/latest`

use crate::cryptocurrency::null_as_default;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate market values in one conversion currency
///
/// Values are `f64`; totals converted to low-priced currencies exceed 1e28.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalQuote {
    /// Sum of all individual cryptocurrency market caps
    pub total_market_cap: Option<f64>,
    /// Sum of rolling 24 hour adjusted volume
    pub total_volume_24h: Option<f64>,
    /// Sum of rolling 24 hour reported volume
    pub total_volume_24h_reported: Option<f64>,
    /// Rolling 24 hour adjusted volume excluding Bitcoin
    pub altcoin_volume_24h: Option<f64>,
    /// Rolling 24 hour reported volume excluding Bitcoin
    pub altcoin_volume_24h_reported: Option<f64>,
    /// Market cap excluding Bitcoin
    pub altcoin_market_cap: Option<f64>,
    /// 24 hour change of the total market cap in percent
    pub total_market_cap_yesterday_percentage_change: Option<f64>,
    /// When the values were referenced
    pub last_updated: Option<DateTime<Utc>>,
}

/// Global cryptocurrency market metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    /// Number of active cryptocurrencies
    pub active_cryptocurrencies: u64,
    /// Number of all tracked cryptocurrencies
    pub total_cryptocurrencies: Option<u64>,
    /// Number of active market pairs across exchanges
    pub active_market_pairs: Option<u64>,
    /// Number of active exchanges
    pub active_exchanges: Option<u64>,
    /// Number of all tracked exchanges
    pub total_exchanges: Option<u64>,
    /// Ethereum share of the total market cap in percent
    pub eth_dominance: Option<Decimal>,
    /// Bitcoin share of the total market cap in percent
    pub btc_dominance: Option<Decimal>,
    /// Ethereum dominance 24 hours ago
    pub eth_dominance_yesterday: Option<Decimal>,
    /// Bitcoin dominance 24 hours ago
    pub btc_dominance_yesterday: Option<Decimal>,
    /// Rolling 24 hour DeFi volume in USD
    pub defi_volume_24h: Option<f64>,
    /// DeFi market cap in USD
    pub defi_market_cap: Option<f64>,
    /// Rolling 24 hour stablecoin volume in USD
    pub stablecoin_volume_24h: Option<f64>,
    /// Stablecoin market cap in USD
    pub stablecoin_market_cap: Option<f64>,
    /// Rolling 24 hour derivatives volume in USD
    pub derivatives_volume_24h: Option<f64>,
    /// Quotes per conversion currency
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: HashMap<String, GlobalQuote>,
    /// Last time the metrics were updated
    pub last_updated: Option<DateTime<Utc>>,
}

impl GlobalMetrics {
    /// Get the aggregate values in a conversion currency
    pub fn quote_in(&self, currency: &str) -> Option<&GlobalQuote> {
        self.quote.get(currency)
    }

    /// Get the total market cap in a conversion currency
    pub fn total_market_cap_in(&self, currency: &str) -> Option<f64> {
        self.quote_in(currency)?.total_market_cap
    }
}
