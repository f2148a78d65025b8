use poloniex::models::{
    ActiveLoans, Balances, Currency, DepositsWithdrawals, FeeInfo, LoanOfferResult, MoveResult,
    OpenLoanOffers, OpenOrders, OrderBook, OrderResult, Ticker, TradeHistoryEntry, TransferResult,
    WithdrawResult,
};

#[test]
fn ticker_entry_decodes_renamed_string_fields() {
    let body = r#"{
        "USDT_BTC": {
            "id": 121,
            "last": "6786.11684074",
            "lowestAsk": "6789.29838874",
            "highestBid": "6786.11684074",
            "percentChange": "0.01322413",
            "baseVolume": "30926539.63838656",
            "quoteVolume": "4631.29671618",
            "isFrozen": "0",
            "high24hr": "6837.00000000",
            "low24hr": "6566.07791663"
        }
    }"#;

    let ticker: Ticker = serde_json::from_str(body).unwrap();
    let entry = &ticker["USDT_BTC"];
    assert_eq!(entry.id, 121);
    assert_eq!(entry.last, 6786.11684074);
    assert_eq!(entry.ask, 6789.29838874);
    assert_eq!(entry.bid, 6786.11684074);
    assert_eq!(entry.percent_change, 0.01322413);
    assert_eq!(entry.is_frozen, 0);
}

#[test]
fn order_book_decodes_positional_levels_and_frozen_flag() {
    let body = r#"{
        "asks": [["0.03154313", 2.6], ["0.03154314", "12.5"]],
        "bids": [["0.03153000", "1.0"]],
        "isFrozen": "0",
        "seq": 469373479
    }"#;

    let book: OrderBook = serde_json::from_str(body).unwrap();
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.asks[0].rate, 0.03154313);
    assert_eq!(book.asks[0].amount, 2.6);
    assert_eq!(book.asks[1].amount, 12.5);
    assert_eq!(book.bids[0].rate, 0.03153);
    assert!(!book.is_frozen);

    let frozen: OrderBook = serde_json::from_str(r#"{"asks":[],"bids":[],"isFrozen":"1"}"#).unwrap();
    assert!(frozen.is_frozen);
}

#[test]
fn public_trade_history_entry_decodes() {
    let body = r#"{
        "globalTradeID": 358335678,
        "tradeID": 31842,
        "date": "2018-04-03 01:19:27",
        "type": "buy",
        "rate": "0.03153000",
        "amount": "1.03342098",
        "total": "0.03258376"
    }"#;

    let trade: TradeHistoryEntry = serde_json::from_str(body).unwrap();
    assert_eq!(trade.id, 358335678);
    assert_eq!(trade.tpe, "buy");
    assert_eq!(trade.total, 0.03258376);
}

#[test]
fn balances_decode_camel_case_string_amounts() {
    let body = r#"{
        "BTC": {"available": "0.09999999", "onOrders": "0.10000000", "btcValue": "0.19999999"},
        "ETH": {"available": "0.00000000", "onOrders": "0.00000000", "btcValue": "0.00000000"}
    }"#;

    let balances: Balances = serde_json::from_str(body).unwrap();
    assert_eq!(balances["BTC"].available, 0.09999999);
    assert_eq!(balances["BTC"].on_orders, 0.1);
    assert_eq!(balances["ETH"].btc_value, 0.0);
}

#[test]
fn deposits_and_withdrawals_decode() {
    let body = r#"{
        "deposits": [{
            "currency": "BTC",
            "address": "1abc",
            "amount": "0.01006132",
            "confirmations": 10,
            "txid": "deadbeef",
            "timestamp": 1399305798,
            "status": "COMPLETE"
        }],
        "withdrawals": [{
            "withdrawalNumber": 134933,
            "currency": "BTC",
            "address": "1def",
            "amount": "5.00010000",
            "timestamp": 1399267904,
            "status": "COMPLETE: 36e483...",
            "ipAddress": "127.0.0.1"
        }]
    }"#;

    let history: DepositsWithdrawals = serde_json::from_str(body).unwrap();
    assert_eq!(history.deposits.len(), 1);
    assert_eq!(history.deposits[0].amount, 0.01006132);
    assert_eq!(history.withdrawals[0].withdrawal_number, 134933);
    assert_eq!(history.withdrawals[0].amount, 5.0001);
}

#[test]
fn open_orders_decode() {
    let body = r#"[
        {"orderNumber": "120466", "type": "sell", "rate": "0.025", "amount": "100", "total": "2.5"},
        {"orderNumber": "120467", "type": "buy", "rate": "0.024", "amount": "51", "total": "1.224"}
    ]"#;

    let orders: OpenOrders = serde_json::from_str(body).unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_number, 120466);
    assert_eq!(orders[0].tpe, "sell");
    assert_eq!(orders[1].rate, 0.024);
}

#[test]
fn order_result_decodes_with_resulting_trades() {
    let body = r#"{
        "orderNumber": "31226040",
        "resultingTrades": [{
            "amount": "338.8732",
            "date": "2018-10-18 23:03:21",
            "rate": "0.00000173",
            "total": "0.00058625",
            "tradeID": "16164",
            "type": "buy"
        }]
    }"#;

    let result: OrderResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.order_number, 31226040);
    assert_eq!(result.resulting_trades.len(), 1);
    assert_eq!(result.resulting_trades[0].trade_id, "16164");
    assert_eq!(result.resulting_trades[0].tpe, "buy");
}

#[test]
fn order_result_tolerates_missing_trades() {
    let result: OrderResult = serde_json::from_str(r#"{"orderNumber": "31226040"}"#).unwrap();
    assert_eq!(result.order_number, 31226040);
    assert!(result.resulting_trades.is_empty());
}

#[test]
fn move_result_flattens_the_success_envelope() {
    let body = r#"{
        "success": 1,
        "orderNumber": "239574176",
        "resultingTrades": []
    }"#;

    let result: MoveResult = serde_json::from_str(body).unwrap();
    assert!(result.base.is_success());
    assert_eq!(result.order_number, 239574176);
}

#[test]
fn withdraw_result_carries_the_response_message() {
    let body = r#"{"response": "Withdrew 2398 NXT."}"#;
    let result: WithdrawResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.base.response, "Withdrew 2398 NXT.");
    assert!(!result.base.is_success());
}

#[test]
fn transfer_result_decodes_success_and_message() {
    let body = r#"{"success": 1, "message": "Transferred 2 BTC from exchange to margin account."}"#;
    let result: TransferResult = serde_json::from_str(body).unwrap();
    assert!(result.base.is_success());
    assert!(result.message.starts_with("Transferred"));
}

#[test]
fn fee_info_decodes() {
    let body = r#"{
        "makerFee": "0.00140000",
        "takerFee": "0.00240000",
        "thirtyDayVolume": "612.00248891",
        "nextTier": "1200.00000000"
    }"#;

    let fees: FeeInfo = serde_json::from_str(body).unwrap();
    assert_eq!(fees.maker_fee, 0.0014);
    assert_eq!(fees.taker_fee, 0.0024);
    assert_eq!(fees.next_tier, 1200.0);
}

#[test]
fn currency_decodes() {
    let body = r#"{
        "name": "Bitcoin",
        "txFee": "0.00050000",
        "minConf": 1,
        "depositAddress": null,
        "disabled": 0,
        "delisted": 0,
        "frozen": 0
    }"#;

    let currency: Currency = serde_json::from_str(body).unwrap();
    assert_eq!(currency.name, "Bitcoin");
    assert_eq!(currency.tx_fee, 0.0005);
    assert!(currency.deposit_address.is_none());
}

#[test]
fn loan_offer_result_decodes() {
    let body = r#"{"success": 1, "message": "Loan order placed.", "orderID": 10590}"#;
    let result: LoanOfferResult = serde_json::from_str(body).unwrap();
    assert!(result.base.is_success());
    assert_eq!(result.order_id, 10590);
}

#[test]
fn open_loan_offers_decode_per_currency() {
    let body = r#"{
        "BTC": [{
            "id": 10595,
            "rate": "0.00020000",
            "amount": "3.00000000",
            "duration": 2,
            "autoRenew": 1,
            "date": "2018-05-10 23:33:50"
        }]
    }"#;

    let offers: OpenLoanOffers = serde_json::from_str(body).unwrap();
    assert_eq!(offers["BTC"][0].id, 10595);
    assert_eq!(offers["BTC"][0].rate, 0.0002);
    assert_eq!(offers["BTC"][0].auto_renew, 1);
}

#[test]
fn active_loans_decode_provided_side_only() {
    let body = r#"{
        "provided": [{
            "id": 75073,
            "currency": "LTC",
            "rate": "0.00020000",
            "amount": "0.72234880",
            "range": 2,
            "autoRenew": 0,
            "date": "2018-05-10 23:45:05",
            "fees": "0.00006000"
        }],
        "used": []
    }"#;

    let loans: ActiveLoans = serde_json::from_str(body).unwrap();
    assert_eq!(loans.provided.len(), 1);
    assert_eq!(loans.provided[0].currency, "LTC");
    assert_eq!(loans.provided[0].fees, 0.00006);
    // Derived fields stay zeroed until the client finalizes them.
    assert!(!loans.provided[0].renewable);
    assert!(loans.provided[0].date_taken.is_none());
}
