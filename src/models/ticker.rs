//! Ticker models for both the REST endpoint and the stream channel.

use std::collections::HashMap;

use serde::Deserialize;

use crate::coerce::{f64_str, i64_str};

/// Summary information for every currency pair, keyed by pair name.
pub type Ticker = HashMap<String, TickerEntry>;

/// REST ticker summary for a single pair (`returnTicker`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerEntry {
    #[serde(with = "f64_str")]
    pub last: f64,
    #[serde(rename = "lowestAsk", with = "f64_str")]
    pub ask: f64,
    #[serde(rename = "highestBid", with = "f64_str")]
    pub bid: f64,
    /// Daily change. [`Poloniex::ticker`](crate::Poloniex::ticker)
    /// multiplies the raw server fraction by 100, so this reads as a
    /// percentage — unlike [`WsTicker::percent_change`], which stays
    /// raw.
    #[serde(rename = "percentChange", with = "f64_str")]
    pub percent_change: f64,
    #[serde(rename = "baseVolume", with = "f64_str")]
    pub base_volume: f64,
    #[serde(rename = "quoteVolume", with = "f64_str")]
    pub quote_volume: f64,
    /// Non-zero when trading in the pair is suspended.
    #[serde(rename = "isFrozen", with = "i64_str")]
    pub is_frozen: i64,
    /// Numeric market id, also the pair's stream channel id.
    pub id: i64,
}

/// A ticker event decoded from the stream (channel 1002).
#[derive(Debug, Clone, Default)]
pub struct WsTicker {
    pub pair: String,
    pub last: f64,
    pub ask: f64,
    pub bid: f64,
    /// Raw server value — the stream does *not* scale this to a
    /// percentage, while the REST path does. Both conventions are kept
    /// to stay wire-faithful.
    pub percent_change: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    /// True iff the server's numeric frozen flag is non-zero.
    pub is_frozen: bool,
    pub daily_high: f64,
    pub daily_low: f64,
    pub pair_id: i64,
}
