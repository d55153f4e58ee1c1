//! Types for the coin price client

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiat currencies prices can be quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
}

impl Currency {
    /// Get the ISO currency code used in instrument query keys
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the display sign
    pub fn sign(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }

    /// Formats an amount with this currency's sign, e.g. `$12345.00`
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.sign(), amount)
    }

    /// Get all supported currencies
    pub fn all() -> &'static [Currency] {
        &[Currency::USD, Currency::EUR]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Supported cryptocurrency instruments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instrument {
    /// Bitcoin
    BTC,
    /// Ethereum
    ETH,
    /// Polkadot
    DOT,
    /// XRP
    XRP,
    /// Tether
    USDT,
    /// BNB
    BNB,
    /// Dogecoin
    DOGE,
}

impl Instrument {
    /// Get the instrument symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Instrument::BTC => "BTC",
            Instrument::ETH => "ETH",
            Instrument::DOT => "DOT",
            Instrument::XRP => "XRP",
            Instrument::USDT => "USDT",
            Instrument::BNB => "BNB",
            Instrument::DOGE => "DOGE",
        }
    }

    /// Get the human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::BTC => "Bitcoin",
            Instrument::ETH => "Ethereum",
            Instrument::DOT => "Polkadot",
            Instrument::XRP => "XRP",
            Instrument::USDT => "Tether",
            Instrument::BNB => "BNB",
            Instrument::DOGE => "Dogecoin",
        }
    }

    /// Builds the API query key for this instrument, e.g. `BTC-USD`
    pub fn query_key(&self, currency: Currency) -> String {
        format!("{}-{}", self.symbol(), currency.code())
    }

    /// Looks up an instrument by its exact (case-sensitive) symbol
    pub fn from_symbol(symbol: &str) -> Option<Instrument> {
        Self::all().iter().copied().find(|i| i.symbol() == symbol)
    }

    /// Get all supported instruments, in query order
    pub fn all() -> &'static [Instrument] {
        &[
            Instrument::BTC,
            Instrument::ETH,
            Instrument::DOT,
            Instrument::XRP,
            Instrument::USDT,
            Instrument::BNB,
            Instrument::DOGE,
        ]
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Normalized price details for one instrument pair
///
/// Rebuilt from scratch on every fetch. Any field the API left out is `None`
/// (or an empty string for the timestamp).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    /// Instrument pair label, e.g. `BTC-USD`
    pub title: Option<String>,

    /// Current price
    pub value: Option<f64>,

    /// Direction of the last move (`UP`, `DOWN`, ...)
    pub value_flag: Option<String>,

    /// Last update time formatted as `yyyy-MM-dd HH:mm` in local time
    pub last_updated_timestamp: String,

    /// Current day high
    pub day_high: Option<f64>,

    /// Current day low
    pub day_low: Option<f64>,

    /// Current day open
    pub day_open: Option<f64>,

    /// Moving 24h change
    pub daily_change: Option<f64>,

    /// Moving 24h change percentage
    pub daily_change_percentage: Option<f64>,
}
