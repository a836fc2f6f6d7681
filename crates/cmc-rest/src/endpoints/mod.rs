//! API endpoint implementations

pub mod cryptocurrency;
pub mod global_metrics;

pub use cryptocurrency::CryptocurrencyEndpoints;
pub use global_metrics::GlobalMetricsEndpoints;
