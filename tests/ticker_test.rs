use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use poloniex::events::EventBus;
use poloniex::models::WsTicker;
use poloniex::registry::SymbolRegistry;
use poloniex::websocket::{handle_frame, parse_ticker};
use poloniex::{PoloniexError, StreamEvent};

fn registry() -> SymbolRegistry {
    SymbolRegistry::from_markets(vec![("USDT_BTC".to_string(), 121)])
}

fn frame(values: Value) -> Vec<Value> {
    values.as_array().cloned().unwrap()
}

#[test]
fn decodes_a_ticker_frame() {
    let registry = registry();
    let raw = frame(json!([
        1002,
        null,
        [121, "0.01", "0.011", "0.009", "0.05", "10", "1000", 0, "0.012", "0.008"]
    ]));

    let tick = parse_ticker(&raw, &registry).unwrap();

    assert_eq!(tick.pair, "USDT_BTC");
    assert_eq!(tick.pair_id, 121);
    assert_eq!(tick.last, 0.01);
    assert_eq!(tick.ask, 0.011);
    assert_eq!(tick.bid, 0.009);
    // Stream percent change is the raw server value, not scaled.
    assert_eq!(tick.percent_change, 0.05);
    assert_eq!(tick.base_volume, 10.0);
    assert_eq!(tick.quote_volume, 1000.0);
    assert!(!tick.is_frozen);
    assert_eq!(tick.daily_high, 0.012);
    assert_eq!(tick.daily_low, 0.008);
}

#[test]
fn frozen_flag_is_true_iff_non_zero() {
    let registry = registry();
    for (flag, expected) in [(json!(0), false), (json!(1), true), (json!("1"), true)] {
        let raw = frame(json!([
            1002,
            null,
            [121, "0.01", "0.011", "0.009", "0.05", "10", "1000", flag, "0.012", "0.008"]
        ]));
        let tick = parse_ticker(&raw, &registry).unwrap();
        assert_eq!(tick.is_frozen, expected, "flag {:?}", raw[2][7]);
    }
}

#[test]
fn unknown_market_id_fails_the_frame() {
    let registry = registry();
    let raw = frame(json!([
        1002,
        null,
        [999, "0.01", "0.011", "0.009", "0.05", "10", "1000", 0, "0.012", "0.008"]
    ]));
    assert!(matches!(
        parse_ticker(&raw, &registry),
        Err(PoloniexError::MalformedFrame(_))
    ));
}

#[test]
fn short_payload_fails_the_frame() {
    let registry = registry();
    let raw = frame(json!([1002, null, [121, "0.01"]]));
    assert!(parse_ticker(&raw, &registry).is_err());
}

#[test]
fn ticker_frame_emits_on_the_ticker_event() {
    let registry = registry();
    let bus = EventBus::new();
    let seen: Arc<Mutex<Vec<WsTicker>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    bus.on("ticker", move |event| {
        if let StreamEvent::Ticker(tick) = event {
            sink.lock().unwrap().push(tick.clone());
        }
    });

    handle_frame(
        r#"[1002,null,[121,"0.01","0.011","0.009","0.05","10","1000",0,"0.012","0.008"]]"#,
        &registry,
        &bus,
    );

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].pair, "USDT_BTC");
    assert_eq!(seen[0].last, 0.01);
}

#[test]
fn decoded_ticker_preserves_numeric_fields_exactly() {
    let registry = registry();
    let raw = frame(json!([
        1002,
        null,
        [
            121,
            "0.00012345",
            "0.00012346",
            "0.00012344",
            "-0.03141592",
            "1234.56789012",
            "9876543.21098765",
            0,
            "0.00013000",
            "0.00011000"
        ]
    ]));

    let tick = parse_ticker(&raw, &registry).unwrap();

    assert_eq!(tick.last, 0.00012345);
    assert_eq!(tick.ask, 0.00012346);
    assert_eq!(tick.bid, 0.00012344);
    assert_eq!(tick.percent_change, -0.03141592);
    assert_eq!(tick.base_volume, 1234.56789012);
    assert_eq!(tick.quote_volume, 9876543.21098765);
    assert_eq!(tick.daily_high, 0.00013);
    assert_eq!(tick.daily_low, 0.00011);
}
