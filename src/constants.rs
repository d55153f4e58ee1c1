//! Constants for the coin price client
//!
//! All configuration is centralized here. The only runtime override is the
//! API base URL, read from [`API_URL_ENV`] by
//! [`CoinDeskProvider::from_env`](crate::providers::CoinDeskProvider::from_env).

use crate::types::{Currency, Instrument};

/// CoinDesk data API base URL
pub const COINDESK_API_URL: &str = "https://data-api.coindesk.com";

/// Endpoint returning the latest tick for a list of instruments
pub const LATEST_TICK_ENDPOINT: &str = "/index/cc/v1/latest/tick";

/// Index market queried for every instrument
pub const MARKET: &str = "cadli";

/// Environment variable overriding [`COINDESK_API_URL`]
pub const API_URL_ENV: &str = "COINPEEK_API_URL";

/// HTTP request timeout when fetching prices (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "coin-peek-sdk/0.1.0";

/// Currency every controller fetches with on construction
pub const DEFAULT_CURRENCY: Currency = Currency::USD;

/// chrono pattern for last-update timestamps (`yyyy-MM-dd HH:mm`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Instruments shown by the aggregate controller
pub const AGGREGATE_INSTRUMENTS: &[Instrument] = &[Instrument::BTC, Instrument::ETH, Instrument::DOT];
