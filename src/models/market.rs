//! Public market-data models: volume, trade history, chart data,
//! currencies.

use std::collections::HashMap;

use serde::Deserialize;

use crate::coerce::f64_str;

/// 24-hour volume per market, keyed by pair name, then by currency.
///
/// The endpoint mixes per-market maps with scalar totals
/// (`totalBTC`, ...); the totals are skipped during decoding.
pub type DailyVolume = HashMap<String, HashMap<String, f64>>;

/// One historical trade from the public `returnTradeHistory` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeHistoryEntry {
    #[serde(rename = "globalTradeID")]
    pub id: i64,
    pub date: String,
    /// `"buy"` or `"sell"`.
    #[serde(rename = "type")]
    pub tpe: String,
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    #[serde(with = "f64_str")]
    pub total: f64,
}

/// One OHLC candle from `returnChartData`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataEntry {
    /// Unix seconds at the start of the period.
    pub date: i64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
    pub quote_volume: f64,
    pub weighted_average: f64,
}

/// Reference data for a single currency (`returnCurrencies`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub name: String,
    #[serde(with = "f64_str")]
    pub tx_fee: f64,
    pub min_conf: f64,
    #[serde(default)]
    pub deposit_address: Option<String>,
    pub disabled: i64,
    pub delisted: i64,
    pub frozen: i64,
}
