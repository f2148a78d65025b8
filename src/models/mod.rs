//! Typed domain model for the REST and WebSocket surfaces.
//!
//! Organized by domain:
//! - [`ticker`] - REST ticker summaries and stream ticker events
//! - [`book`] - order books and stream order-book deltas
//! - [`market`] - public market data (volume, chart data, currencies)
//! - [`account`] - balances, deposits/withdrawals, fees, margin
//! - [`order`] - open orders, trades, and order placement results
//! - [`loan`] - loan offers and active loans

pub mod account;
pub mod book;
pub mod loan;
pub mod market;
pub mod order;
pub mod ticker;

use serde::Deserialize;

pub use account::{
    AccountBalances, Addresses, Balance, Balances, Deposit, DepositsWithdrawals, FeeInfo,
    MarginSummary, TradableBalances, TransferResult, Withdrawal,
};
pub use book::{BookEntry, BookEventKind, EntryType, OrderBook, OrderBookAll, WsBookUpdate};
pub use loan::{ActiveLoan, ActiveLoans, LoanOfferResult, LoanOrder, LoanOrders, OpenLoanOffer, OpenLoanOffers};
pub use market::{ChartDataEntry, Currency, DailyVolume, TradeHistoryEntry};
pub use order::{
    MoveResult, OpenOrder, OpenOrders, OpenOrdersAll, OrderModifier, OrderResult, OrderTrade,
    PrivateTrade, ResultingTrade, WithdrawResult,
};
pub use ticker::{Ticker, TickerEntry, WsTicker};

/// Common envelope returned by trading commands that report a success
/// flag instead of (or alongside) a payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Base {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub success: i64,
    #[serde(default)]
    pub response: String,
}

impl Base {
    /// `success == 1` is the server's affirmative.
    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}
