//! Request options for each endpoint
//!
//! Options are plain structs with `with_*` setters. Nothing is checked while
//! building; every endpoint validates its options into a [`Query`] before a
//! request is created, so caller errors never reach the network.

use crate::error::ValidationError;
use crate::params::{ParamList, Query};
use cmc_types::{
    CryptocurrencyType, IdMapAux, IdMapSort, ListingAux, ListingSort, ListingStatus, ListingTag,
    MetadataAux, QuoteAux, SortDir,
};
use rust_decimal::Decimal;

/// Largest page size accepted by paginated endpoints
pub const MAX_LIMIT: u32 = 5000;

/// Largest number of conversion currencies per call
pub const MAX_CONVERSIONS: usize = 120;

/// Upper bound of the numeric range filters
const FILTER_MAX: Decimal = Decimal::from_parts(1569325056, 23283064, 0, false, 0); // 1e17

/// Lower bound of the percent change filters
const PERCENT_CHANGE_MIN: Decimal = Decimal::from_parts(100, 0, 0, true, 0); // -100

// ============================================================================
// Shared pieces
// ============================================================================

/// Cryptocurrency lookup key, resolved from mutually exclusive options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// CoinMarketCap ids
    Ids(ParamList),
    /// Ticker symbols
    Symbols(ParamList),
    /// URL slugs
    Slugs(ParamList),
}

impl Lookup {
    /// Query parameter name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ids(_) => "id",
            Self::Symbols(_) => "symbol",
            Self::Slugs(_) => "slug",
        }
    }

    /// Requested entries
    pub fn list(&self) -> &ParamList {
        match self {
            Self::Ids(list) | Self::Symbols(list) | Self::Slugs(list) => list,
        }
    }

    /// Resolve exactly one lookup key from the optional id/symbol/slug fields
    pub fn resolve(
        id: Option<&ParamList>,
        symbol: Option<&ParamList>,
        slug: Option<&ParamList>,
    ) -> Result<Self, ValidationError> {
        let lookup = match (id, symbol, slug) {
            (Some(_), Some(_), _) => {
                return Err(ValidationError::MutuallyExclusive {
                    first: "id",
                    second: "symbol",
                })
            }
            (Some(_), _, Some(_)) => {
                return Err(ValidationError::MutuallyExclusive {
                    first: "id",
                    second: "slug",
                })
            }
            (_, Some(_), Some(_)) => {
                return Err(ValidationError::MutuallyExclusive {
                    first: "symbol",
                    second: "slug",
                })
            }
            (Some(ids), None, None) => Self::Ids(ids.clone()),
            (None, Some(symbols), None) => Self::Symbols(symbols.clone()),
            (None, None, Some(slugs)) => Self::Slugs(slugs.clone()),
            (None, None, None) => {
                return Err(ValidationError::MissingLookup {
                    expected: "`id`, `symbol` or `slug`",
                })
            }
        };

        if lookup.list().is_empty() {
            return Err(ValidationError::EmptyList { field: lookup.key() });
        }
        Ok(lookup)
    }

    fn apply(&self, query: &mut Query) {
        query.push_list(self.key(), self.list());
    }
}

/// Conversion currencies, resolved from `convert` / `convert_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Currency symbols (`convert`)
    Symbols(ParamList),
    /// CoinMarketCap ids (`convert_id`)
    Ids(ParamList),
}

impl Conversion {
    /// Query parameter name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Symbols(_) => "convert",
            Self::Ids(_) => "convert_id",
        }
    }

    /// Requested currencies
    pub fn list(&self) -> &ParamList {
        match self {
            Self::Symbols(list) | Self::Ids(list) => list,
        }
    }

    /// Resolve at most one conversion option
    pub fn resolve(
        convert: Option<&ParamList>,
        convert_id: Option<&ParamList>,
    ) -> Result<Option<Self>, ValidationError> {
        let conversion = match (convert, convert_id) {
            (Some(_), Some(_)) => {
                return Err(ValidationError::MutuallyExclusive {
                    first: "convert",
                    second: "convert_id",
                })
            }
            (Some(symbols), None) => Self::Symbols(symbols.clone()),
            (None, Some(ids)) => Self::Ids(ids.clone()),
            (None, None) => return Ok(None),
        };

        if conversion.list().is_empty() {
            return Err(ValidationError::EmptyList {
                field: conversion.key(),
            });
        }
        if conversion.list().len() > MAX_CONVERSIONS {
            return Err(ValidationError::TooManyConversions {
                count: conversion.list().len(),
                max: MAX_CONVERSIONS,
            });
        }
        Ok(Some(conversion))
    }

    fn apply(&self, query: &mut Query) {
        query.push_list(self.key(), self.list());
    }
}

/// Inclusive `*_min` / `*_max` filter pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    /// Lower bound
    pub min: Option<Decimal>,
    /// Upper bound
    pub max: Option<Decimal>,
}

impl RangeFilter {
    /// Both bounds
    pub fn between(min: Decimal, max: Decimal) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound only
    pub fn at_least(min: Decimal) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only
    pub fn at_most(max: Decimal) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    fn validate(&self, field: &'static str, lower: Decimal) -> Result<(), ValidationError> {
        for value in [self.min, self.max].into_iter().flatten() {
            if value < lower || value > FILTER_MAX {
                return Err(ValidationError::out_of_range(field, value, lower, FILTER_MAX));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ValidationError::InvertedRange { field });
            }
        }
        Ok(())
    }

    fn apply(&self, query: &mut Query, min_key: &'static str, max_key: &'static str) {
        query.push_opt(min_key, self.min);
        query.push_opt(max_key, self.max);
    }
}

fn validate_start(start: Option<u32>) -> Result<(), ValidationError> {
    match start {
        Some(0) => Err(ValidationError::out_of_range("start", 0, 1, u32::MAX)),
        _ => Ok(()),
    }
}

fn validate_limit(limit: Option<u32>) -> Result<(), ValidationError> {
    match limit {
        Some(limit) if !(1..=MAX_LIMIT).contains(&limit) => {
            Err(ValidationError::out_of_range("limit", limit, 1, MAX_LIMIT))
        }
        _ => Ok(()),
    }
}

// ============================================================================
// /cryptocurrency/map
// ============================================================================

/// Options for the CoinMarketCap ID map
///
/// When `symbol` is set the service ignores every other option, so only the
/// symbol filter is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMapOptions {
    /// Listing statuses to include (service default: active)
    pub listing_status: Vec<ListingStatus>,
    /// 1-based offset
    pub start: Option<u32>,
    /// Page size, 1 to 5000
    pub limit: Option<u32>,
    /// Symbols to resolve
    pub symbol: Option<ParamList>,
    /// Sort field (service default: id)
    pub sort: Option<IdMapSort>,
    /// Supplemental fields
    pub aux: Vec<IdMapAux>,
}

impl IdMapOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a listing status
    pub fn with_listing_status(mut self, status: ListingStatus) -> Self {
        if !self.listing_status.contains(&status) {
            self.listing_status.push(status);
        }
        self
    }

    /// Set the 1-based offset
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resolve ids for these symbols only
    pub fn with_symbol(mut self, symbol: impl Into<ParamList>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the sort field
    pub fn with_sort(mut self, sort: IdMapSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Request supplemental fields
    pub fn with_aux(mut self, aux: impl IntoIterator<Item = IdMapAux>) -> Self {
        self.aux = aux.into_iter().collect();
        self
    }

    /// Validate and build the query
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        validate_start(self.start)?;
        validate_limit(self.limit)?;

        let mut query = Query::new();
        if let Some(symbol) = &self.symbol {
            if symbol.is_empty() {
                return Err(ValidationError::EmptyList { field: "symbol" });
            }
            query.push_list("symbol", symbol);
            return Ok(query);
        }

        query.push_joined("listing_status", &self.listing_status);
        query.push_opt("start", self.start);
        query.push_opt("limit", self.limit);
        query.push_opt("sort", self.sort);
        query.push_joined("aux", &self.aux);
        Ok(query)
    }
}

// ============================================================================
// /cryptocurrency/info
// ============================================================================

/// Options for cryptocurrency metadata
///
/// Exactly one of `id`, `symbol` or `slug` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOptions {
    /// CoinMarketCap ids
    pub id: Option<ParamList>,
    /// Ticker symbols
    pub symbol: Option<ParamList>,
    /// URL slugs
    pub slug: Option<ParamList>,
    /// Supplemental fields
    pub aux: Vec<MetadataAux>,
}

impl MetadataOptions {
    /// Look up by CoinMarketCap id
    pub fn by_id(id: impl Into<ParamList>) -> Self {
        Self::default().with_id(id)
    }

    /// Look up by symbol
    pub fn by_symbol(symbol: impl Into<ParamList>) -> Self {
        Self::default().with_symbol(symbol)
    }

    /// Look up by slug
    pub fn by_slug(slug: impl Into<ParamList>) -> Self {
        Self::default().with_slug(slug)
    }

    /// Set the ids
    pub fn with_id(mut self, id: impl Into<ParamList>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the symbols
    pub fn with_symbol(mut self, symbol: impl Into<ParamList>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the slugs
    pub fn with_slug(mut self, slug: impl Into<ParamList>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Request supplemental fields
    pub fn with_aux(mut self, aux: impl IntoIterator<Item = MetadataAux>) -> Self {
        self.aux = aux.into_iter().collect();
        self
    }

    /// Validate and build the query
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        let lookup = Lookup::resolve(self.id.as_ref(), self.symbol.as_ref(), self.slug.as_ref())?;

        let mut query = Query::new();
        lookup.apply(&mut query);
        query.push_joined("aux", &self.aux);
        Ok(query)
    }
}

// ============================================================================
// /cryptocurrency/listings/latest
// ============================================================================

/// Options for the latest listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// 1-based offset
    pub start: Option<u32>,
    /// Page size, 1 to 5000 (service default: 100)
    pub limit: Option<u32>,
    /// USD price filter
    pub price: RangeFilter,
    /// Market cap filter
    pub market_cap: RangeFilter,
    /// 24 hour USD volume filter
    pub volume_24h: RangeFilter,
    /// Circulating supply filter
    pub circulating_supply: RangeFilter,
    /// 24 hour percent change filter
    pub percent_change_24h: RangeFilter,
    /// Conversion currency symbols
    pub convert: Option<ParamList>,
    /// Conversion currency ids
    pub convert_id: Option<ParamList>,
    /// Sort field (service default: market_cap)
    pub sort: Option<ListingSort>,
    /// Sort direction
    pub sort_dir: Option<SortDir>,
    /// Cryptocurrency type (service default: all)
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    /// Tag filter
    pub tag: Option<ListingTag>,
    /// Supplemental fields
    pub aux: Vec<ListingAux>,
}

impl ListingOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based offset
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by USD price
    pub fn with_price(mut self, range: RangeFilter) -> Self {
        self.price = range;
        self
    }

    /// Filter by market cap
    pub fn with_market_cap(mut self, range: RangeFilter) -> Self {
        self.market_cap = range;
        self
    }

    /// Filter by 24 hour USD volume
    pub fn with_volume_24h(mut self, range: RangeFilter) -> Self {
        self.volume_24h = range;
        self
    }

    /// Filter by circulating supply
    pub fn with_circulating_supply(mut self, range: RangeFilter) -> Self {
        self.circulating_supply = range;
        self
    }

    /// Filter by 24 hour percent change
    pub fn with_percent_change_24h(mut self, range: RangeFilter) -> Self {
        self.percent_change_24h = range;
        self
    }

    /// Convert quotes to these currency symbols
    pub fn with_convert(mut self, convert: impl Into<ParamList>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Convert quotes to these currency ids
    pub fn with_convert_id(mut self, convert_id: impl Into<ParamList>) -> Self {
        self.convert_id = Some(convert_id.into());
        self
    }

    /// Set the sort field and direction
    pub fn with_sort(mut self, sort: ListingSort, dir: Option<SortDir>) -> Self {
        self.sort = Some(sort);
        self.sort_dir = dir;
        self
    }

    /// Restrict to a cryptocurrency type
    pub fn with_cryptocurrency_type(mut self, kind: CryptocurrencyType) -> Self {
        self.cryptocurrency_type = Some(kind);
        self
    }

    /// Restrict to a tag
    pub fn with_tag(mut self, tag: ListingTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Request supplemental fields
    pub fn with_aux(mut self, aux: impl IntoIterator<Item = ListingAux>) -> Self {
        self.aux = aux.into_iter().collect();
        self
    }

    /// Validate and build the query
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        validate_start(self.start)?;
        validate_limit(self.limit)?;
        self.price.validate("price", Decimal::ZERO)?;
        self.market_cap.validate("market_cap", Decimal::ZERO)?;
        self.volume_24h.validate("volume_24h", Decimal::ZERO)?;
        self.circulating_supply.validate("circulating_supply", Decimal::ZERO)?;
        self.percent_change_24h.validate("percent_change_24h", PERCENT_CHANGE_MIN)?;
        let conversion = Conversion::resolve(self.convert.as_ref(), self.convert_id.as_ref())?;

        let mut query = Query::new();
        query.push_opt("start", self.start);
        query.push_opt("limit", self.limit);
        self.price.apply(&mut query, "price_min", "price_max");
        self.market_cap.apply(&mut query, "market_cap_min", "market_cap_max");
        self.volume_24h.apply(&mut query, "volume_24h_min", "volume_24h_max");
        self.circulating_supply
            .apply(&mut query, "circulating_supply_min", "circulating_supply_max");
        self.percent_change_24h
            .apply(&mut query, "percent_change_24h_min", "percent_change_24h_max");
        if let Some(conversion) = &conversion {
            conversion.apply(&mut query);
        }
        query.push_opt("sort", self.sort);
        query.push_opt("sort_dir", self.sort_dir);
        query.push_opt("cryptocurrency_type", self.cryptocurrency_type);
        query.push_opt("tag", self.tag);
        query.push_joined("aux", &self.aux);
        Ok(query)
    }
}

// ============================================================================
// /cryptocurrency/quotes/latest
// ============================================================================

/// Options for the latest quotes
///
/// Exactly one of `id`, `symbol` or `slug` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotesOptions {
    /// CoinMarketCap ids
    pub id: Option<ParamList>,
    /// Ticker symbols
    pub symbol: Option<ParamList>,
    /// URL slugs
    pub slug: Option<ParamList>,
    /// Conversion currency symbols
    pub convert: Option<ParamList>,
    /// Conversion currency ids
    pub convert_id: Option<ParamList>,
    /// Supplemental fields
    pub aux: Vec<QuoteAux>,
    /// Skip unmatched lookups instead of failing the call (service default: false)
    pub skip_invalid: Option<bool>,
}

impl QuotesOptions {
    /// Look up by CoinMarketCap id
    pub fn by_id(id: impl Into<ParamList>) -> Self {
        Self::default().with_id(id)
    }

    /// Look up by symbol
    pub fn by_symbol(symbol: impl Into<ParamList>) -> Self {
        Self::default().with_symbol(symbol)
    }

    /// Look up by slug
    pub fn by_slug(slug: impl Into<ParamList>) -> Self {
        Self::default().with_slug(slug)
    }

    /// Set the ids
    pub fn with_id(mut self, id: impl Into<ParamList>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the symbols
    pub fn with_symbol(mut self, symbol: impl Into<ParamList>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the slugs
    pub fn with_slug(mut self, slug: impl Into<ParamList>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Convert quotes to these currency symbols
    pub fn with_convert(mut self, convert: impl Into<ParamList>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Convert quotes to these currency ids
    pub fn with_convert_id(mut self, convert_id: impl Into<ParamList>) -> Self {
        self.convert_id = Some(convert_id.into());
        self
    }

    /// Request supplemental fields
    pub fn with_aux(mut self, aux: impl IntoIterator<Item = QuoteAux>) -> Self {
        self.aux = aux.into_iter().collect();
        self
    }

    /// Skip unmatched lookups
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = Some(skip);
        self
    }

    /// Validate and build the query
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        let lookup = Lookup::resolve(self.id.as_ref(), self.symbol.as_ref(), self.slug.as_ref())?;
        let conversion = Conversion::resolve(self.convert.as_ref(), self.convert_id.as_ref())?;

        let mut query = Query::new();
        lookup.apply(&mut query);
        if let Some(conversion) = &conversion {
            conversion.apply(&mut query);
        }
        query.push_joined("aux", &self.aux);
        query.push_opt("skip_invalid", self.skip_invalid);
        Ok(query)
    }
}

// ============================================================================
// /global-metrics/quotes/latest
// ============================================================================

/// Options for the global metrics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Conversion currency symbols
    pub convert: Option<ParamList>,
    /// Conversion currency ids
    pub convert_id: Option<ParamList>,
}

impl GlobalOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert quotes to these currency symbols
    pub fn with_convert(mut self, convert: impl Into<ParamList>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Convert quotes to these currency ids
    pub fn with_convert_id(mut self, convert_id: impl Into<ParamList>) -> Self {
        self.convert_id = Some(convert_id.into());
        self
    }

    /// Validate and build the query
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        let conversion = Conversion::resolve(self.convert.as_ref(), self.convert_id.as_ref())?;

        let mut query = Query::new();
        if let Some(conversion) = &conversion {
            conversion.apply(&mut query);
        }
        Ok(query)
    }
}
