//! Order-book models: REST snapshots and stream deltas.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::coerce::{to_float, to_string};

/// One price level in a REST order-book snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookEntry {
    pub rate: f64,
    pub amount: f64,
}

/// REST order book for a single market (`returnOrderBook`).
///
/// Levels arrive as positional `[rate, amount]` pairs with the usual
/// string/number looseness, so decoding goes through [`to_float`].
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    pub asks: Vec<BookEntry>,
    pub bids: Vec<BookEntry>,
    pub is_frozen: bool,
}

/// Order books for every market, keyed by pair name.
pub type OrderBookAll = HashMap<String, OrderBook>;

#[derive(Deserialize)]
struct RawBook {
    #[serde(default)]
    asks: Vec<Vec<Value>>,
    #[serde(default)]
    bids: Vec<Vec<Value>>,
    #[serde(rename = "isFrozen", default)]
    is_frozen: Value,
}

fn levels(raw: Vec<Vec<Value>>) -> Vec<BookEntry> {
    raw.iter()
        .map(|level| BookEntry {
            rate: level.first().map_or(0.0, to_float),
            amount: level.get(1).map_or(0.0, to_float),
        })
        .collect()
}

impl<'de> Deserialize<'de> for OrderBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBook::deserialize(deserializer)?;
        Ok(OrderBook {
            asks: levels(raw.asks),
            bids: levels(raw.bids),
            // The frozen flag travels as the string "0" or "1".
            is_frozen: to_string(&raw.is_frozen) != "0",
        })
    }
}

/// What a stream order-book delta did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookEventKind {
    /// A price level was inserted or changed.
    Modify,
    /// A price level went to zero.
    Remove,
    /// A trade printed.
    Trade,
}

impl BookEventKind {
    /// Event-bus name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BookEventKind::Modify => "modify",
            BookEventKind::Remove => "remove",
            BookEventKind::Trade => "trade",
        }
    }
}

/// Which side of the book (or of a trade) a delta touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Ask,
    Bid,
    Buy,
    Sell,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Ask => "ask",
            EntryType::Bid => "bid",
            EntryType::Buy => "buy",
            EntryType::Sell => "sell",
        }
    }
}

/// One decoded delta from a per-market stream channel.
#[derive(Debug, Clone)]
pub struct WsBookUpdate {
    pub pair: String,
    pub event: BookEventKind,
    /// Only set for [`BookEventKind::Trade`].
    pub trade_id: i64,
    pub entry_type: EntryType,
    pub rate: f64,
    pub amount: f64,
    /// `rate * amount`; only set for trades.
    pub total: f64,
    /// Trade timestamp from the wire, or local wall clock for
    /// modify/remove deltas.
    pub ts: DateTime<Utc>,
}
