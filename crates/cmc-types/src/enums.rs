//! Enumerated request values and response categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an enumerated value from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    /// Name of the enumeration
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

/// Declares a wire enum with `as_str`, `Display`, `FromStr` and serde names.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every value, in documentation order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the value as sent on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Listing status filter for the ID map
    ListingStatus: "listing status" {
        /// Cryptocurrencies with at least one tracked market
        Active => "active",
        /// Cryptocurrencies that are no longer active
        Inactive => "inactive",
        /// Listed but not yet meeting methodology requirements
        Untracked => "untracked",
    }
}

wire_enum! {
    /// Sort field for the ID map
    IdMapSort: "id map sort" {
        Id => "id",
        CmcRank => "cmc_rank",
    }
}

wire_enum! {
    /// Sort field for the latest listings
    ListingSort: "listing sort" {
        Name => "name",
        Symbol => "symbol",
        DateAdded => "date_added",
        MarketCap => "market_cap",
        MarketCapStrict => "market_cap_strict",
        Price => "price",
        CirculatingSupply => "circulating_supply",
        TotalSupply => "total_supply",
        MaxSupply => "max_supply",
        NumMarketPairs => "num_market_pairs",
        Volume24h => "volume_24h",
        PercentChange1h => "percent_change_1h",
        PercentChange24h => "percent_change_24h",
        PercentChange7d => "percent_change_7d",
        MarketCapByTotalSupplyStrict => "market_cap_by_total_supply_strict",
        Volume7d => "volume_7d",
        Volume30d => "volume_30d",
    }
}

wire_enum! {
    /// Sort direction
    SortDir: "sort direction" {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    /// Cryptocurrency type filter for the latest listings
    CryptocurrencyType: "cryptocurrency type" {
        All => "all",
        Coins => "coins",
        Tokens => "tokens",
    }
}

wire_enum! {
    /// Tag filter for the latest listings
    ListingTag: "listing tag" {
        All => "all",
        Defi => "defi",
        Filesharing => "filesharing",
    }
}

wire_enum! {
    /// Supplemental fields for the ID map
    IdMapAux: "id map aux field" {
        Platform => "platform",
        FirstHistoricalData => "first_historical_data",
        LastHistoricalData => "last_historical_data",
        IsActive => "is_active",
        Status => "status",
    }
}

impl IdMapAux {
    /// Fields returned when `aux` is not supplied
    pub const DEFAULTS: &'static [Self] = &[
        Self::Platform,
        Self::FirstHistoricalData,
        Self::LastHistoricalData,
        Self::IsActive,
    ];
}

wire_enum! {
    /// Supplemental fields for cryptocurrency metadata
    MetadataAux: "metadata aux field" {
        Urls => "urls",
        Logo => "logo",
        Description => "description",
        Tags => "tags",
        Platform => "platform",
        DateAdded => "date_added",
        Notice => "notice",
        Status => "status",
    }
}

impl MetadataAux {
    /// Fields returned when `aux` is not supplied
    pub const DEFAULTS: &'static [Self] = &[
        Self::Urls,
        Self::Logo,
        Self::Description,
        Self::Tags,
        Self::Platform,
        Self::DateAdded,
        Self::Notice,
    ];
}

wire_enum! {
    /// Supplemental fields for the latest listings
    ListingAux: "listing aux field" {
        NumMarketPairs => "num_market_pairs",
        CmcRank => "cmc_rank",
        DateAdded => "date_added",
        Tags => "tags",
        Platform => "platform",
        MaxSupply => "max_supply",
        CirculatingSupply => "circulating_supply",
        TotalSupply => "total_supply",
        MarketCapByTotalSupply => "market_cap_by_total_supply",
        Volume24hReported => "volume_24h_reported",
        Volume7d => "volume_7d",
        Volume7dReported => "volume_7d_reported",
        Volume30d => "volume_30d",
        Volume30dReported => "volume_30d_reported",
        IsMarketCapIncludedInCalc => "is_market_cap_included_in_calc",
    }
}

impl ListingAux {
    /// Fields returned when `aux` is not supplied
    pub const DEFAULTS: &'static [Self] = &[
        Self::NumMarketPairs,
        Self::CmcRank,
        Self::DateAdded,
        Self::Tags,
        Self::Platform,
        Self::MaxSupply,
        Self::CirculatingSupply,
        Self::TotalSupply,
    ];
}

wire_enum! {
    /// Supplemental fields for the latest quotes
    QuoteAux: "quote aux field" {
        NumMarketPairs => "num_market_pairs",
        CmcRank => "cmc_rank",
        DateAdded => "date_added",
        Tags => "tags",
        Platform => "platform",
        MaxSupply => "max_supply",
        CirculatingSupply => "circulating_supply",
        TotalSupply => "total_supply",
        MarketCapByTotalSupply => "market_cap_by_total_supply",
        Volume24hReported => "volume_24h_reported",
        Volume7d => "volume_7d",
        Volume7dReported => "volume_7d_reported",
        Volume30d => "volume_30d",
        Volume30dReported => "volume_30d_reported",
        IsActive => "is_active",
        IsFiat => "is_fiat",
    }
}

impl QuoteAux {
    /// Fields returned when `aux` is not supplied
    pub const DEFAULTS: &'static [Self] = &[
        Self::NumMarketPairs,
        Self::CmcRank,
        Self::DateAdded,
        Self::Tags,
        Self::Platform,
        Self::MaxSupply,
        Self::CirculatingSupply,
        Self::TotalSupply,
        Self::IsActive,
        Self::IsFiat,
    ];
}

/// Metadata category of a cryptocurrency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Native coin of its own chain
    Coin,
    /// Token issued on a parent platform
    Token,
    /// Category not known to this client
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(ListingStatus::Untracked.as_str(), "untracked");
        assert_eq!(ListingSort::MarketCapByTotalSupplyStrict.as_str(), "market_cap_by_total_supply_strict");
        assert_eq!(QuoteAux::Volume30dReported.to_string(), "volume_30d_reported");
        assert_eq!(ListingSort::ALL.len(), 17);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cmc_rank".parse::<IdMapSort>(), Ok(IdMapSort::CmcRank));
        assert_eq!(" desc ".parse::<SortDir>(), Ok(SortDir::Desc));

        let err = "popularity".parse::<ListingSort>().unwrap_err();
        assert_eq!(err.kind, "listing sort");
        assert!(err.to_string().contains("popularity"));
    }

    #[test]
    fn test_serde_names_match_wire() {
        let json = serde_json::to_string(&ListingTag::Filesharing).unwrap();
        assert_eq!(json, "\"filesharing\"");
        let parsed: CryptocurrencyType = serde_json::from_str("\"tokens\"").unwrap();
        assert_eq!(parsed, CryptocurrencyType::Tokens);
    }

    #[test]
    fn test_category_unknown_fallback() {
        let category: Category = serde_json::from_str("\"token\"").unwrap();
        assert_eq!(category, Category::Token);
        let category: Category = serde_json::from_str("\"nft\"").unwrap();
        assert_eq!(category, Category::Unknown);
    }

    #[test]
    fn test_aux_defaults_are_subsets() {
        assert!(MetadataAux::DEFAULTS.iter().all(|a| MetadataAux::ALL.contains(a)));
        assert!(!MetadataAux::DEFAULTS.contains(&MetadataAux::Status));
        assert!(!IdMapAux::DEFAULTS.contains(&IdMapAux::Status));
    }
}
