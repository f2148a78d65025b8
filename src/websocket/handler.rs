//! Inbound frame classification and the positional channel parsers.
//!
//! Every frame is a JSON array whose element 0 is the channel id.
//! Ids strictly between 100 and 1000 are per-market order-book
//! channels; the aggregate ticker lives on its registry-assigned
//! control id. Everything else is dropped. A frame that fails to parse
//! is logged and dropped — the loop must stay live.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::Result;
use crate::coerce::to_float;
use crate::error::PoloniexError;
use crate::events::{EventBus, StreamEvent};
use crate::models::{BookEventKind, EntryType, WsBookUpdate, WsTicker};
use crate::registry::SymbolRegistry;

/// Decodes one frame and emits the resulting events.
///
/// Failures are swallowed at the frame boundary: a malformed frame or
/// an unknown market id never stops the stream loop.
pub fn handle_frame(text: &str, registry: &SymbolRegistry, bus: &EventBus) {
    if let Err(e) = dispatch(text, registry, bus) {
        debug!(error = %e, "dropping stream frame");
    }
}

fn dispatch(text: &str, registry: &SymbolRegistry, bus: &EventBus) -> Result<()> {
    let frame: Vec<Value> = serde_json::from_str(text)?;
    let Some(first) = frame.first() else {
        return Err(PoloniexError::MalformedFrame("empty frame".to_string()));
    };
    let channel = to_float(first) as i64;

    if channel > 100 && channel < 1000 {
        // Per-market channels carry aggregated order-book deltas.
        for update in parse_order_book(&frame, registry)? {
            let payload = StreamEvent::Book(update.clone());
            bus.emit(update.event.as_str(), &payload);
            bus.emit(&update.pair, &payload);
            bus.emit(
                &format!("{}-{}", update.pair, update.event.as_str()),
                &payload,
            );
        }
    } else if channel.to_string() == registry.ticker_channel_id() {
        let ticker = parse_ticker(&frame, registry)?;
        bus.emit("ticker", &StreamEvent::Ticker(ticker));
    }
    // Any other channel (heartbeat, trollbox, ...) is silently dropped.

    Ok(())
}

/// Decodes a ticker frame: element 2 is a positional inner array of
/// `[pair id, last, ask, bid, percentChange, baseVolume, quoteVolume,
/// frozen flag, dailyHigh, dailyLow]`.
pub fn parse_ticker(frame: &[Value], registry: &SymbolRegistry) -> Result<WsTicker> {
    let inner = frame
        .get(2)
        .and_then(Value::as_array)
        .ok_or_else(|| PoloniexError::MalformedFrame("ticker frame has no payload".to_string()))?;
    if inner.len() < 10 {
        return Err(PoloniexError::MalformedFrame(format!(
            "ticker payload has {} fields, expected 10",
            inner.len()
        )));
    }

    let pair_id = to_float(&inner[0]) as i64;
    let pair = registry
        .name_for_id(&pair_id.to_string())
        .ok_or_else(|| PoloniexError::MalformedFrame(format!("unknown market id {pair_id}")))?;

    Ok(WsTicker {
        pair: pair.to_string(),
        pair_id,
        last: to_float(&inner[1]),
        ask: to_float(&inner[2]),
        bid: to_float(&inner[3]),
        percent_change: to_float(&inner[4]),
        base_volume: to_float(&inner[5]),
        quote_volume: to_float(&inner[6]),
        is_frozen: to_float(&inner[7]) != 0.0,
        daily_high: to_float(&inner[8]),
        daily_low: to_float(&inner[9]),
    })
}

/// Decodes an order-book frame: element 0 is the market id, element 1
/// a monotonic sequence number, element 2 an array of deltas.
///
/// Snapshot (`"i"`) and unrecognised delta tags are skipped; only
/// modify/remove/trade deltas are returned, in server order.
pub fn parse_order_book(frame: &[Value], registry: &SymbolRegistry) -> Result<Vec<WsBookUpdate>> {
    let market_id = frame.first().map_or(0, |v| to_float(v) as i64);
    let pair = registry
        .name_for_id(&market_id.to_string())
        .ok_or_else(|| PoloniexError::MalformedFrame(format!("unknown market id {market_id}")))?;

    let deltas = frame
        .get(2)
        .and_then(Value::as_array)
        .ok_or_else(|| PoloniexError::MalformedFrame("book frame has no deltas".to_string()))?;

    let mut updates = Vec::new();
    for delta in deltas {
        let Some(fields) = delta.as_array() else {
            continue;
        };
        match fields.first().and_then(Value::as_str) {
            Some("o") if fields.len() >= 4 => {
                let rate = to_float(&fields[2]);
                let amount = to_float(&fields[3]);
                updates.push(WsBookUpdate {
                    pair: pair.to_string(),
                    event: if amount == 0.0 {
                        BookEventKind::Remove
                    } else {
                        BookEventKind::Modify
                    },
                    trade_id: 0,
                    entry_type: if to_float(&fields[1]) == 1.0 {
                        EntryType::Bid
                    } else {
                        EntryType::Ask
                    },
                    rate,
                    amount,
                    total: 0.0,
                    ts: Utc::now(),
                });
            }
            Some("t") if fields.len() >= 6 => {
                let rate = to_float(&fields[3]);
                let amount = to_float(&fields[4]);
                updates.push(WsBookUpdate {
                    pair: pair.to_string(),
                    event: BookEventKind::Trade,
                    // The trade id rides in the frame header, not the
                    // delta itself.
                    trade_id: frame.get(1).map_or(0, |v| to_float(v) as i64),
                    entry_type: if to_float(&fields[2]) == 1.0 {
                        EntryType::Buy
                    } else {
                        EntryType::Sell
                    },
                    rate,
                    amount,
                    total: rate * amount,
                    ts: DateTime::<Utc>::from_timestamp(to_float(&fields[5]) as i64, 0)
                        .unwrap_or_default(),
                });
            }
            // "i" carries the initial snapshot; no snapshot shape is
            // emitted at this layer.
            _ => {}
        }
    }
    Ok(updates)
}
