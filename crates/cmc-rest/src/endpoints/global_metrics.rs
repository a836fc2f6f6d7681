//! Global metrics endpoints

use crate::client::CoinMarketCapClient;
use crate::error::RestResult;
use crate::options::GlobalOptions;
use cmc_types::{Envelope, GlobalMetrics};
use tracing::{debug, instrument};

pub(crate) const QUOTES_LATEST_PATH: &str = "/global-metrics/quotes/latest";

/// Global metrics endpoints
pub struct GlobalMetricsEndpoints<'a> {
    client: &'a CoinMarketCapClient,
}

impl<'a> GlobalMetricsEndpoints<'a> {
    pub fn new(client: &'a CoinMarketCapClient) -> Self {
        Self { client }
    }

    /// Get the latest aggregate market metrics
    #[instrument(skip(self))]
    pub async fn quotes_latest(&self, options: &GlobalOptions) -> RestResult<Envelope<GlobalMetrics>> {
        let query = options.to_query()?;
        debug!("Fetching global metrics");

        self.client.get(QUOTES_LATEST_PATH, query).await
    }
}
