//! Conversion of raw API records into [`CoinDetails`]

use crate::{
    constants::TIMESTAMP_FORMAT,
    response::{RawPriceRecord, RawPriceResponse},
    types::CoinDetails,
};
use chrono::{Local, TimeZone};

impl RawPriceRecord {
    /// Maps this record to normalized coin details
    pub fn to_coin_details(&self) -> CoinDetails {
        CoinDetails {
            title: self.instrument.clone(),
            value: self.value,
            value_flag: self.value_flag.clone(),
            last_updated_timestamp: format_timestamp(self.last_updated_ts),
            day_high: self.day_high,
            day_low: self.day_low,
            day_open: self.day_open,
            daily_change: self.daily_change,
            daily_change_percentage: self.daily_change_percentage,
        }
    }
}

impl RawPriceResponse {
    /// Maps every record in the response
    ///
    /// Order follows the underlying map and is not stable between calls.
    pub fn to_coin_details_list(&self) -> Vec<CoinDetails> {
        self.data.values().map(RawPriceRecord::to_coin_details).collect()
    }
}

/// Formats epoch seconds as a local `yyyy-MM-dd HH:mm` string
///
/// Returns an empty string for a missing timestamp or one outside chrono's
/// representable range.
pub fn format_timestamp(epoch_secs: Option<i64>) -> String {
    epoch_secs
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
