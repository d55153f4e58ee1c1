//! CoinDesk data API provider implementation

use crate::{
    constants::{
        API_URL_ENV, COINDESK_API_URL, LATEST_TICK_ENDPOINT, MARKET, REQUEST_TIMEOUT_SECS,
        USER_AGENT,
    },
    error::ProviderError,
    provider::PriceApi,
    response::RawPriceResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// CoinDesk latest-tick provider
pub struct CoinDeskProvider {
    client: Client,
    base_url: String,
}

impl CoinDeskProvider {
    /// Creates a provider against the public CoinDesk API
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(COINDESK_API_URL)
    }

    /// Creates a provider against a custom base URL
    pub fn with_base_url(base_url: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::NetworkError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a provider using the `COINPEEK_API_URL` environment variable,
    /// falling back to the public API
    pub fn from_env() -> Result<Self, ProviderError> {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| COINDESK_API_URL.to_string());
        Self::with_base_url(&base_url)
    }

    /// Builds the latest-tick URL for a batch of query keys
    fn build_url(&self, instruments: &[String]) -> String {
        format!(
            "{}{}?market={}&instruments={}",
            self.base_url,
            LATEST_TICK_ENDPOINT,
            MARKET,
            instruments.join(",")
        )
    }
}

#[async_trait]
impl PriceApi for CoinDeskProvider {
    async fn fetch_latest_tick(
        &self,
        instruments: &[String],
    ) -> Result<RawPriceResponse, ProviderError> {
        let url = self.build_url(instruments);
        tracing::debug!(url = %url, "Fetching latest tick from CoinDesk");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        // Check for rate limiting
        if response.status().as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let response_text = response.text().await.map_err(ProviderError::from_reqwest)?;

        let tick: RawPriceResponse = serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::InvalidResponse(format!(
                "Failed to parse CoinDesk response: {}. Response: {}",
                e, response_text
            ))
        })?;

        tracing::debug!(
            count = tick.data.len(),
            provider = self.provider_name(),
            "Fetched latest tick"
        );

        Ok(tick)
    }

    fn provider_name(&self) -> &'static str {
        "coindesk"
    }
}
