//! Abstraction over the remote price API

use crate::{error::ProviderError, response::RawPriceResponse};
use async_trait::async_trait;

/// Trait for latest-price APIs
///
/// Implementations issue exactly one request per call and return the raw
/// payload untouched. They hold no per-request state and are shared across
/// controllers.
#[async_trait]
pub trait PriceApi: Send + Sync {
    /// Fetches the latest tick for the given instrument query keys
    ///
    /// # Arguments
    /// * `instruments` - Query keys such as `BTC-USD`, sent as one batch
    ///
    /// # Returns
    /// The raw response or the transport/decode failure as-is
    async fn fetch_latest_tick(
        &self,
        instruments: &[String],
    ) -> Result<RawPriceResponse, ProviderError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::response::RawPriceRecord;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Mock API keyed by the comma-joined query string
    #[derive(Default)]
    pub struct MockPriceApi {
        responses: Mutex<HashMap<String, Result<RawPriceResponse, String>>>,
        delays: Mutex<HashMap<String, Duration>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPriceApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_response(&self, query: &str, response: RawPriceResponse) {
            self.responses
                .lock()
                .unwrap()
                .insert(query.to_string(), Ok(response));
        }

        pub fn set_error(&self, query: &str, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .insert(query.to_string(), Err(message.to_string()));
        }

        pub fn set_delay(&self, query: &str, delay: Duration) {
            self.delays.lock().unwrap().insert(query.to_string(), delay);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PriceApi for MockPriceApi {
        async fn fetch_latest_tick(
            &self,
            instruments: &[String],
        ) -> Result<RawPriceResponse, ProviderError> {
            let query = instruments.join(",");
            self.calls.lock().unwrap().push(query.clone());

            let delay = self.delays.lock().unwrap().get(&query).copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            match self.responses.lock().unwrap().get(&query) {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(message)) => Err(ProviderError::ApiError(message.clone())),
                None => Err(ProviderError::invalid_response(format!(
                    "no mock response for {}",
                    query
                ))),
            }
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    /// Builds a record the way the API would for `key`
    pub fn record(key: &str, value: f64, flag: &str, ts: i64) -> RawPriceRecord {
        RawPriceRecord {
            instrument: Some(key.to_string()),
            market: Some("cadli".to_string()),
            value: Some(value),
            value_flag: Some(flag.to_string()),
            last_updated_ts: Some(ts),
            day_high: Some(value * 1.1),
            day_low: Some(value * 0.9),
            day_open: Some(value),
            daily_change: None,
            daily_change_percentage: Some(0.5),
        }
    }

    /// Builds a response from `(key, value, flag)` triples sharing one timestamp
    pub fn response(entries: &[(&str, f64, &str)], ts: i64) -> RawPriceResponse {
        RawPriceResponse {
            data: entries
                .iter()
                .map(|(key, value, flag)| (key.to_string(), record(key, *value, flag, ts)))
                .collect(),
            err: None,
        }
    }
}
