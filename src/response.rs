//! Raw payload of the CoinDesk latest-tick endpoint
//!
//! The upstream schema is loose, so every field is optional and unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest-tick response: instrument key to record, plus the error payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPriceResponse {
    #[serde(rename = "Data", default)]
    pub data: HashMap<String, RawPriceRecord>,

    /// Carried through untouched
    #[serde(rename = "Err", default)]
    pub err: Option<serde_json::Value>,
}

/// One instrument record as sent by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPriceRecord {
    #[serde(rename = "INSTRUMENT")]
    pub instrument: Option<String>,

    #[serde(rename = "MARKET")]
    pub market: Option<String>,

    #[serde(rename = "VALUE")]
    pub value: Option<f64>,

    #[serde(rename = "VALUE_FLAG")]
    pub value_flag: Option<String>,

    /// Epoch seconds
    #[serde(rename = "VALUE_LAST_UPDATE_TS")]
    pub last_updated_ts: Option<i64>,

    #[serde(rename = "CURRENT_DAY_HIGH")]
    pub day_high: Option<f64>,

    #[serde(rename = "CURRENT_DAY_LOW")]
    pub day_low: Option<f64>,

    #[serde(rename = "CURRENT_DAY_OPEN")]
    pub day_open: Option<f64>,

    #[serde(rename = "MOVING_24_HOUR_CHANGE")]
    pub daily_change: Option<f64>,

    #[serde(rename = "MOVING_24_HOUR_CHANGE_PERCENTAGE")]
    pub daily_change_percentage: Option<f64>,
}
