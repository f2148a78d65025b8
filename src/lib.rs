//! Async client for the Poloniex exchange.
//!
//! Exposes two independent surfaces: the request/response REST API
//! (public market data and authenticated trading) and the persistent
//! WebSocket stream (tickers and aggregated order-book deltas).
//!
//! ```no_run
//! use poloniex::{Poloniex, StreamEvent};
//!
//! # async fn run() -> poloniex::Result<()> {
//! let client = Poloniex::with_credentials("key", "secret").await?;
//!
//! client.on("ticker", |event| {
//!     if let StreamEvent::Ticker(tick) = event {
//!         println!("{} last={}", tick.pair, tick.last);
//!     }
//! });
//! client.subscribe("ticker").await?;
//! client.subscribe("USDT_BTC").await?;
//! let stream = client.start_ws();
//!
//! let balances = client.balances().await?;
//! # drop(balances);
//! # stream.abort();
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod coerce;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod registry;
pub mod websocket;

mod private;
mod public;

pub use client::Poloniex;
pub use error::{PoloniexError, Result};
pub use events::{ListenerHandle, StreamEvent};
pub use models::OrderModifier;
