//! Account models: balances, deposit/withdrawal history, fees, margin.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::Base;
use crate::coerce::{f64_str, to_float};

/// Balances available for trade, keyed by currency
/// (`returnCompleteBalances`).
pub type Balances = HashMap<String, Balance>;

/// A single entry in [`Balances`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(with = "f64_str")]
    pub available: f64,
    #[serde(with = "f64_str")]
    pub on_orders: f64,
    #[serde(with = "f64_str")]
    pub btc_value: f64,
}

/// Balances broken down by sub-account
/// (`returnAvailableAccountBalances`).
#[derive(Debug, Clone, Default)]
pub struct AccountBalances {
    pub exchange: HashMap<String, f64>,
    pub margin: HashMap<String, f64>,
    pub lending: HashMap<String, f64>,
}

/// Wire shape of the sub-account balances; amounts arrive as either
/// strings or numbers and are coerced on conversion.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAccountBalances {
    #[serde(default)]
    exchange: HashMap<String, Value>,
    #[serde(default)]
    margin: HashMap<String, Value>,
    #[serde(default)]
    lending: HashMap<String, Value>,
}

impl From<RawAccountBalances> for AccountBalances {
    fn from(raw: RawAccountBalances) -> Self {
        let coerce = |m: HashMap<String, Value>| {
            m.into_iter().map(|(k, v)| (k, to_float(&v))).collect()
        };
        AccountBalances {
            exchange: coerce(raw.exchange),
            margin: coerce(raw.margin),
            lending: coerce(raw.lending),
        }
    }
}

/// Deposit addresses keyed by currency (`returnDepositAddresses`).
pub type Addresses = HashMap<String, String>;

/// Combined deposit and withdrawal history
/// (`returnDepositsWithdrawals`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepositsWithdrawals {
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deposit {
    pub currency: String,
    pub address: String,
    #[serde(with = "f64_str")]
    pub amount: f64,
    pub confirmations: i64,
    pub txid: String,
    pub timestamp: i64,
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub withdrawal_number: i64,
    pub currency: String,
    pub address: String,
    #[serde(with = "f64_str")]
    pub amount: f64,
    pub timestamp: i64,
    pub status: String,
}

/// Maker/taker fee schedule and trailing 30-day volume
/// (`returnFeeInfo`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInfo {
    #[serde(with = "f64_str")]
    pub maker_fee: f64,
    #[serde(with = "f64_str")]
    pub taker_fee: f64,
    #[serde(with = "f64_str")]
    pub thirty_day_volume: f64,
    #[serde(with = "f64_str")]
    pub next_tier: f64,
}

/// Tradable margin balances per market, then per currency
/// (`returnTradableBalances`).
pub type TradableBalances = HashMap<String, HashMap<String, f64>>;

/// Result of a transfer between sub-accounts (`transferBalance`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferResult {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default)]
    pub message: String,
}

/// Margin account summary (`returnMarginAccountSummary`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarginSummary {
    #[serde(rename = "totalValue", with = "f64_str")]
    pub total_value: f64,
    #[serde(rename = "pl", with = "f64_str")]
    pub profit_loss: f64,
    #[serde(rename = "lendingFees", with = "f64_str")]
    pub lending_fees: f64,
    #[serde(rename = "netValue", with = "f64_str")]
    pub net_value: f64,
    #[serde(rename = "totalBorrowedValue", with = "f64_str")]
    pub total_borrowed_value: f64,
    #[serde(rename = "currentMargin", with = "f64_str")]
    pub current_margin: f64,
}
