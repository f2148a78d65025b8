//! Order models: open orders, trade history, placement results, and
//! the shared order-modifier flags.

use std::collections::HashMap;

use serde::Deserialize;

use super::Base;
use crate::coerce::{f64_str, i64_str};

/// Optional execution constraint for buy/sell/move orders.
///
/// The variants are mutually exclusive on the wire; each sends exactly
/// one flag field set to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderModifier {
    /// Reject the order if any part of it would fill immediately.
    PostOnly,
    /// Fill the entire order immediately or cancel it.
    FillOrKill,
    /// Fill what can be filled immediately, cancel the rest.
    ImmediateOrCancel,
}

impl OrderModifier {
    /// The form field this modifier contributes to the request.
    pub fn wire_field(self) -> &'static str {
        match self {
            OrderModifier::PostOnly => "postOnly",
            OrderModifier::FillOrKill => "fillOrKill",
            OrderModifier::ImmediateOrCancel => "immediateOrCancel",
        }
    }
}

/// A resting order in a given market (`returnOpenOrders`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenOrder {
    #[serde(rename = "orderNumber", with = "i64_str")]
    pub order_number: i64,
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

/// Open orders for a single market.
pub type OpenOrders = Vec<OpenOrder>;

/// Open orders for every market, keyed by pair name.
pub type OpenOrdersAll = HashMap<String, OpenOrders>;

/// One entry of your own trade history (`returnTradeHistory`,
/// private).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrivateTrade {
    pub date: String,
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    #[serde(with = "f64_str")]
    pub total: f64,
    #[serde(rename = "orderNumber", with = "i64_str")]
    pub order_number: i64,
    #[serde(rename = "type")]
    pub tpe: String,
    #[serde(rename = "globalTradeID", default)]
    pub global_trade_id: i64,
}

/// A trade that (partially) filled a specific order
/// (`returnOrderTrades`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderTrade {
    #[serde(rename = "globalTradeID")]
    pub global_trade_id: i64,
    #[serde(rename = "tradeID")]
    pub trade_id: i64,
    #[serde(rename = "currencyPair")]
    pub currency_pair: String,
    #[serde(rename = "type")]
    pub tpe: String,
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    #[serde(with = "f64_str")]
    pub total: f64,
    #[serde(with = "f64_str")]
    pub fee: f64,
    pub date: String,
}

/// A fill produced while placing or moving an order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultingTrade {
    #[serde(with = "f64_str")]
    pub amount: f64,
    #[serde(with = "f64_str")]
    pub rate: f64,
    pub date: String,
    #[serde(with = "f64_str")]
    pub total: f64,
    #[serde(rename = "tradeID", default)]
    pub trade_id: String,
    #[serde(rename = "type")]
    pub tpe: String,
}

/// Result of placing a buy or sell order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderResult {
    #[serde(rename = "orderNumber", with = "i64_str", default)]
    pub order_number: i64,
    #[serde(rename = "resultingTrades", default)]
    pub resulting_trades: Vec<ResultingTrade>,
}

/// Result of atomically cancel-and-replacing an order (`moveOrder`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveResult {
    #[serde(flatten)]
    pub base: Base,
    #[serde(rename = "orderNumber", with = "i64_str", default)]
    pub order_number: i64,
    #[serde(rename = "resultingTrades", default)]
    pub resulting_trades: Vec<ResultingTrade>,
}

/// Server acknowledgement of a withdrawal request (`withdraw`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithdrawResult {
    #[serde(flatten)]
    pub base: Base,
}
