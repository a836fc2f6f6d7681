//! Cryptocurrency endpoints
//!
//! ID map, static metadata, latest listings and latest quotes. All four are
//! plain GETs under `/{version}/cryptocurrency`.

use crate::client::CoinMarketCapClient;
use crate::error::RestResult;
use crate::options::{IdMapOptions, ListingOptions, MetadataOptions, QuotesOptions};
use cmc_types::{Envelope, IdMapEntry, MetadataEntry, QuoteEntry, TickerEntry};
use std::collections::HashMap;
use tracing::{debug, instrument};

pub(crate) const ID_MAP_PATH: &str = "/cryptocurrency/map";
pub(crate) const INFO_PATH: &str = "/cryptocurrency/info";
pub(crate) const LISTINGS_LATEST_PATH: &str = "/cryptocurrency/listings/latest";
pub(crate) const QUOTES_LATEST_PATH: &str = "/cryptocurrency/quotes/latest";

/// Cryptocurrency endpoints
pub struct CryptocurrencyEndpoints<'a> {
    client: &'a CoinMarketCapClient,
}

impl<'a> CryptocurrencyEndpoints<'a> {
    pub fn new(client: &'a CoinMarketCapClient) -> Self {
        Self { client }
    }

    /// Get the mapping of all cryptocurrencies to CoinMarketCap ids
    ///
    /// Setting `symbol` resolves only those symbols; the other options are
    /// then left out of the request.
    #[instrument(skip(self))]
    pub async fn id_map(&self, options: &IdMapOptions) -> RestResult<Envelope<Vec<IdMapEntry>>> {
        let query = options.to_query()?;
        debug!("Fetching ID map");

        let envelope: Envelope<Vec<IdMapEntry>> = self.client.get(ID_MAP_PATH, query).await?;
        debug!(entries = envelope.data.len(), "Received ID map");
        Ok(envelope)
    }

    /// Get static metadata for one or more cryptocurrencies
    ///
    /// The result is keyed by the requested id, symbol or slug.
    #[instrument(skip(self))]
    pub async fn info(
        &self,
        options: &MetadataOptions,
    ) -> RestResult<Envelope<HashMap<String, MetadataEntry>>> {
        let query = options.to_query()?;
        debug!("Fetching metadata");

        self.client.get(INFO_PATH, query).await
    }

    /// Get a paginated list of active cryptocurrencies with market data
    #[instrument(skip(self))]
    pub async fn listings_latest(
        &self,
        options: &ListingOptions,
    ) -> RestResult<Envelope<Vec<TickerEntry>>> {
        let query = options.to_query()?;
        debug!("Fetching latest listings");

        let envelope: Envelope<Vec<TickerEntry>> =
            self.client.get(LISTINGS_LATEST_PATH, query).await?;
        debug!(entries = envelope.data.len(), "Received latest listings");
        Ok(envelope)
    }

    /// Get the latest market quotes for one or more cryptocurrencies
    ///
    /// The result is keyed by the requested id, symbol or slug. With
    /// `skip_invalid` set, unknown lookups are left out instead of failing
    /// the whole call.
    #[instrument(skip(self))]
    pub async fn quotes_latest(
        &self,
        options: &QuotesOptions,
    ) -> RestResult<Envelope<HashMap<String, QuoteEntry>>> {
        let query = options.to_query()?;
        debug!("Fetching latest quotes");

        self.client.get(QUOTES_LATEST_PATH, query).await
    }
}
