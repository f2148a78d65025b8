//! Typed operations over the public REST API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::Result;
use crate::client::Poloniex;
use crate::coerce::to_float;
use crate::models::{
    ChartDataEntry, Currency, DailyVolume, LoanOrders, OrderBook, OrderBookAll, Ticker,
    TradeHistoryEntry,
};

/// Candle resolution used when the caller does not pick one.
const DEFAULT_CHART_PERIOD: i64 = 300;

/// Sentinel end date accepted by the range endpoints as "no upper
/// bound".
const OPEN_ENDED: &str = "9999999999";

impl Poloniex {
    /// Summary information for every currency pair
    /// (`returnTicker`).
    ///
    /// `percent_change` is scaled to a percentage here; the stream
    /// ticker keeps the raw server fraction.
    pub async fn ticker(&self) -> Result<Ticker> {
        let mut ticker: Ticker = self.public("returnTicker", &[]).await?;
        for entry in ticker.values_mut() {
            entry.percent_change *= 100.0;
        }
        Ok(ticker)
    }

    /// 24-hour volume for every market (`return24hVolume`).
    ///
    /// The endpoint mixes per-market maps with scalar primary-currency
    /// totals; only the maps are kept.
    pub async fn daily_volume(&self) -> Result<DailyVolume> {
        let raw: HashMap<String, Value> = self.public("return24hVolume", &[]).await?;
        let mut volume = DailyVolume::new();
        for (market, entry) in raw {
            if let Value::Object(currencies) = entry {
                volume.insert(
                    market,
                    currencies
                        .into_iter()
                        .map(|(currency, amount)| (currency, to_float(&amount)))
                        .collect(),
                );
            }
        }
        Ok(volume)
    }

    /// Order book for a single market, 40 levels deep
    /// (`returnOrderBook`).
    pub async fn order_book(&self, pair: &str) -> Result<OrderBook> {
        let params = [
            ("currencyPair", pair.to_string()),
            ("depth", "40".to_string()),
        ];
        self.public("returnOrderBook", &params).await
    }

    /// Order books for every market, 5 levels deep.
    pub async fn order_book_all(&self) -> Result<OrderBookAll> {
        let params = [
            ("currencyPair", "all".to_string()),
            ("depth", "5".to_string()),
        ];
        self.public("returnOrderBook", &params).await
    }

    /// Historical trades for a market (`returnTradeHistory`).
    ///
    /// Without dates the server returns the most recent 200 trades;
    /// `start`/`end` are Unix seconds selecting a specific window.
    pub async fn trade_history(
        &self,
        pair: &str,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Vec<TradeHistoryEntry>> {
        let mut params = vec![("currencyPair", pair.to_string())];
        if let Some(start) = start {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            params.push(("end", end.to_string()));
        }
        self.public("returnTradeHistory", &params).await
    }

    /// OHLC candles for the last 24 hours at 5-minute resolution
    /// (`returnChartData`).
    pub async fn chart_data(&self, pair: &str) -> Result<Vec<ChartDataEntry>> {
        let start = Utc::now().timestamp() - 24 * 3600;
        let params = [
            ("currencyPair", pair.to_string()),
            ("start", start.to_string()),
            ("end", OPEN_ENDED.to_string()),
            ("period", DEFAULT_CHART_PERIOD.to_string()),
        ];
        self.public("returnChartData", &params).await
    }

    /// OHLC candles for an explicit window and resolution.
    pub async fn chart_data_period(
        &self,
        pair: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        period: Option<i64>,
    ) -> Result<Vec<ChartDataEntry>> {
        let params = [
            ("currencyPair", pair.to_string()),
            ("start", start.timestamp().to_string()),
            ("end", end.timestamp().to_string()),
            (
                "period",
                period.unwrap_or(DEFAULT_CHART_PERIOD).to_string(),
            ),
        ];
        self.public("returnChartData", &params).await
    }

    /// Reference data for every currency (`returnCurrencies`).
    pub async fn currencies(&self) -> Result<HashMap<String, Currency>> {
        self.public("returnCurrencies", &[]).await
    }

    /// Public loan offers and demands for a currency
    /// (`returnLoanOrders`).
    pub async fn loan_orders(&self, currency: &str) -> Result<LoanOrders> {
        let params = [("currency", currency.to_string())];
        self.public("returnLoanOrders", &params).await
    }
}
