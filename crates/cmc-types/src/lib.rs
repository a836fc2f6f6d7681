//! Shared types for the CoinMarketCap Pro API
//!
//! This crate provides the wire data model used by `cmc-rest`. It has
//! minimal dependencies and can be used independently, e.g. to decode
//! recorded responses.
//!
//! # Key Types
//!
//! - [`Envelope`], [`Status`] - Response wrapper carried by every endpoint
//! - [`IdMapEntry`], [`MetadataEntry`], [`TickerEntry`], [`QuoteEntry`] - Cryptocurrency records
//! - [`Quote`], [`QuoteMap`] - Market quotes keyed by conversion currency
//! - [`GlobalMetrics`] - Aggregate market metrics
//! - [`ListingStatus`], [`ListingSort`], [`IdMapAux`] and friends - Request enums
//! - [`CmcErrorCode`] - CoinMarketCap error code table

pub mod cryptocurrency;
pub mod enums;
pub mod envelope;
pub mod error_codes;
pub mod global;

// Re-export commonly used types
pub use cryptocurrency::*;
pub use enums::*;
pub use envelope::*;
pub use error_codes::*;
pub use global::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
