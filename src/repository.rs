//! Price queries in a given currency

use crate::{
    error::ProviderError,
    provider::PriceApi,
    response::RawPriceResponse,
    types::{Currency, Instrument},
};
use std::sync::Arc;

/// Builds instrument query keys and forwards them to a [`PriceApi`]
///
/// Every call issues exactly one request; nothing is cached or retried.
#[derive(Clone)]
pub struct CoinRepository {
    api: Arc<dyn PriceApi>,
}

impl CoinRepository {
    pub fn new(api: Arc<dyn PriceApi>) -> Self {
        Self { api }
    }

    /// Fetches the latest tick for one instrument
    pub async fn fetch_one(
        &self,
        instrument: Instrument,
        currency: Currency,
    ) -> Result<RawPriceResponse, ProviderError> {
        self.fetch_instruments(&[instrument], currency).await
    }

    /// Fetches every supported instrument in a single batched request
    pub async fn fetch_all(&self, currency: Currency) -> Result<RawPriceResponse, ProviderError> {
        self.fetch_instruments(Instrument::all(), currency).await
    }

    /// Fetches an explicit instrument list in a single batched request
    pub async fn fetch_instruments(
        &self,
        instruments: &[Instrument],
        currency: Currency,
    ) -> Result<RawPriceResponse, ProviderError> {
        let keys: Vec<String> = instruments
            .iter()
            .map(|i| i.query_key(currency))
            .collect();

        self.api.fetch_latest_tick(&keys).await
    }

    /// Returns the name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.api.provider_name()
    }
}
