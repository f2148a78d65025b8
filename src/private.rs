//! Typed operations over the authenticated trading API.
//!
//! Each operation is a thin descriptor over the private dispatcher:
//! command name, form parameters, response shape. Rates and order
//! amounts are formatted with fixed 8-decimal-place precision on the
//! wire; withdrawal amounts use 6 places.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;

use crate::Result;
use crate::client::Poloniex;
use crate::coerce::to_float;
use crate::models::account::RawAccountBalances;
use crate::models::{
    AccountBalances, ActiveLoans, Addresses, Balances, Base, DepositsWithdrawals, FeeInfo,
    LoanOfferResult, MarginSummary, MoveResult, OpenLoanOffers, OpenOrders, OpenOrdersAll,
    OrderModifier, OrderResult, OrderTrade, PrivateTrade, TradableBalances, TransferResult,
    WithdrawResult,
};

/// Deposit/withdrawal history defaults to roughly the last six months.
const HISTORY_WINDOW_SECS: i64 = 4380 * 3600;

fn fixed8(value: f64) -> String {
    format!("{value:.8}")
}

impl Poloniex {
    /// Balances available for trade, net of open orders
    /// (`returnCompleteBalances`).
    pub async fn balances(&self) -> Result<Balances> {
        self.private("returnCompleteBalances", &[]).await
    }

    /// Balances broken down by sub-account
    /// (`returnAvailableAccountBalances`).
    pub async fn account_balances(&self) -> Result<AccountBalances> {
        let raw: RawAccountBalances = self
            .private("returnAvailableAccountBalances", &[])
            .await?;
        Ok(raw.into())
    }

    /// Deposit addresses for every currency
    /// (`returnDepositAddresses`).
    pub async fn addresses(&self) -> Result<Addresses> {
        self.private("returnDepositAddresses", &[]).await
    }

    /// Generates a new deposit address for a currency
    /// (`generateNewAddress`). Returns the address.
    pub async fn generate_new_address(&self, currency: &str) -> Result<String> {
        let params = [("currency", currency.to_string())];
        let base: Base = self.private("generateNewAddress", &params).await?;
        Ok(base.response)
    }

    /// Deposit and withdrawal history for roughly the last six months
    /// (`returnDepositsWithdrawals`).
    pub async fn deposits_withdrawals(&self) -> Result<DepositsWithdrawals> {
        let start = Utc::now().timestamp() - HISTORY_WINDOW_SECS;
        let params = [
            ("start", start.to_string()),
            ("end", "9999999999".to_string()),
        ];
        self.private("returnDepositsWithdrawals", &params).await
    }

    /// Your resting orders in one market (`returnOpenOrders`).
    pub async fn open_orders(&self, pair: &str) -> Result<OpenOrders> {
        let params = [("currencyPair", pair.to_string())];
        self.private("returnOpenOrders", &params).await
    }

    /// Your resting orders in every market.
    pub async fn open_orders_all(&self) -> Result<OpenOrdersAll> {
        let params = [("currencyPair", "all".to_string())];
        self.private("returnOpenOrders", &params).await
    }

    /// Your trade history in one market (`returnTradeHistory`).
    ///
    /// `start`/`end` are Unix seconds bounding the window.
    pub async fn private_trade_history(
        &self,
        pair: &str,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Vec<PrivateTrade>> {
        let mut params = vec![("currencyPair", pair.to_string())];
        if let Some(start) = start {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            params.push(("end", end.to_string()));
        }
        self.private("returnTradeHistory", &params).await
    }

    /// Your trade history across every market.
    pub async fn private_trade_history_all(
        &self,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<HashMap<String, Vec<PrivateTrade>>> {
        let mut params = vec![("currencyPair", "all".to_string())];
        if let Some(start) = start {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            params.push(("end", end.to_string()));
        }
        self.private("returnTradeHistory", &params).await
    }

    /// All trades involving a given order (`returnOrderTrades`).
    pub async fn order_trades(&self, order_number: i64) -> Result<Vec<OrderTrade>> {
        let params = [("orderNumber", order_number.to_string())];
        self.private("returnOrderTrades", &params).await
    }

    /// Cancels a resting order (`cancelOrder`). True on success.
    pub async fn cancel_order(&self, order_number: i64) -> Result<bool> {
        let params = [("orderNumber", order_number.to_string())];
        let base: Base = self.private("cancelOrder", &params).await?;
        Ok(base.is_success())
    }

    /// Places a limit buy order.
    pub async fn buy(&self, pair: &str, rate: f64, amount: f64) -> Result<OrderResult> {
        self.place_order("buy", pair, rate, amount, None).await
    }

    /// Places a limit buy order with an execution constraint.
    pub async fn buy_with(
        &self,
        pair: &str,
        rate: f64,
        amount: f64,
        modifier: OrderModifier,
    ) -> Result<OrderResult> {
        self.place_order("buy", pair, rate, amount, Some(modifier))
            .await
    }

    /// Places a limit sell order.
    pub async fn sell(&self, pair: &str, rate: f64, amount: f64) -> Result<OrderResult> {
        self.place_order("sell", pair, rate, amount, None).await
    }

    /// Places a limit sell order with an execution constraint.
    pub async fn sell_with(
        &self,
        pair: &str,
        rate: f64,
        amount: f64,
        modifier: OrderModifier,
    ) -> Result<OrderResult> {
        self.place_order("sell", pair, rate, amount, Some(modifier))
            .await
    }

    async fn place_order(
        &self,
        command: &str,
        pair: &str,
        rate: f64,
        amount: f64,
        modifier: Option<OrderModifier>,
    ) -> Result<OrderResult> {
        let mut params = vec![
            ("currencyPair", pair.to_string()),
            ("rate", fixed8(rate)),
            ("amount", fixed8(amount)),
        ];
        if let Some(modifier) = modifier {
            params.push((modifier.wire_field(), "1".to_string()));
        }
        self.private(command, &params).await
    }

    /// Cancels an order and places a replacement at a new rate in one
    /// atomic transaction (`moveOrder`).
    pub async fn move_order(
        &self,
        order_number: i64,
        rate: f64,
        modifier: Option<OrderModifier>,
    ) -> Result<MoveResult> {
        let mut params = vec![
            ("orderNumber", order_number.to_string()),
            ("rate", fixed8(rate)),
        ];
        if let Some(modifier) = modifier {
            params.push((modifier.wire_field(), "1".to_string()));
        }
        self.private("moveOrder", &params).await
    }

    /// Places an immediate withdrawal with no email confirmation
    /// (`withdraw`). The API key must have the withdrawal privilege.
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: f64,
        address: &str,
    ) -> Result<WithdrawResult> {
        let params = [
            ("currency", currency.to_string()),
            ("amount", format!("{amount:.6}")),
            ("address", address.to_string()),
        ];
        self.private("withdraw", &params).await
    }

    /// Current trading fees and trailing 30-day volume
    /// (`returnFeeInfo`).
    pub async fn fee_info(&self) -> Result<FeeInfo> {
        self.private("returnFeeInfo", &[]).await
    }

    /// Tradable balances per margin-enabled market
    /// (`returnTradableBalances`).
    pub async fn tradable_balances(&self) -> Result<TradableBalances> {
        let raw: HashMap<String, HashMap<String, Value>> =
            self.private("returnTradableBalances", &[]).await?;
        Ok(raw
            .into_iter()
            .map(|(market, currencies)| {
                (
                    market,
                    currencies
                        .into_iter()
                        .map(|(currency, amount)| (currency, to_float(&amount)))
                        .collect(),
                )
            })
            .collect())
    }

    /// Transfers funds between sub-accounts (`transferBalance`).
    pub async fn transfer_balance(
        &self,
        currency: &str,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<TransferResult> {
        let params = [
            ("currency", currency.to_string()),
            ("amount", fixed8(amount)),
            ("fromAccount", from.to_string()),
            ("toAccount", to.to_string()),
        ];
        self.private("transferBalance", &params).await
    }

    /// Summary of the entire margin account
    /// (`returnMarginAccountSummary`).
    pub async fn margin_account_summary(&self) -> Result<MarginSummary> {
        self.private("returnMarginAccountSummary", &[]).await
    }

    /// Creates a loan offer (`createLoanOffer`).
    ///
    /// `lending_rate` is a percentage; the wire wants a fraction, so it
    /// is divided by 100 before sending.
    pub async fn create_loan_offer(
        &self,
        currency: &str,
        amount: f64,
        duration: i64,
        auto_renew: bool,
        lending_rate: f64,
    ) -> Result<LoanOfferResult> {
        let params = [
            ("currency", currency.to_string()),
            ("amount", fixed8(amount)),
            ("lendingRate", fixed8(lending_rate / 100.0)),
            ("duration", duration.to_string()),
            ("autoRenew", i64::from(auto_renew).to_string()),
        ];
        self.private("createLoanOffer", &params).await
    }

    /// Cancels a loan offer (`cancelLoanOffer`). True on success.
    pub async fn cancel_loan_offer(&self, order_number: i64) -> Result<bool> {
        let params = [("orderNumber", order_number.to_string())];
        let base: Base = self.private("cancelLoanOffer", &params).await?;
        Ok(base.is_success())
    }

    /// Your open loan offers per currency (`returnOpenLoanOffers`).
    pub async fn open_loan_offers(&self) -> Result<OpenLoanOffers> {
        self.private("returnOpenLoanOffers", &[]).await
    }

    /// Your active loans (`returnActiveLoans`), with the date string
    /// parsed and the renewable flag derived.
    pub async fn active_loans(&self) -> Result<ActiveLoans> {
        let mut loans: ActiveLoans = self.private("returnActiveLoans", &[]).await?;
        for loan in &mut loans.provided {
            loan.finalize();
        }
        Ok(loans)
    }

    /// Toggles autoRenew on an active loan (`toggleAutoRenew`). True
    /// on success.
    pub async fn toggle_auto_renew(&self, order_number: i64) -> Result<bool> {
        let params = [("orderNumber", order_number.to_string())];
        let base: Base = self.private("toggleAutoRenew", &params).await?;
        Ok(base.is_success())
    }
}
