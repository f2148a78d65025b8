//! Async WebSocket client for the streaming API.
//!
//! A single connection carries many logical channels; every inbound
//! frame is a JSON array whose first element is a numeric channel id.
//! This module is organized by concern:
//! - [`subscription`] - outbound channel control frames
//! - [`handler`] - frame classification and the positional parsers
//! - [`connection`] - connect/reconnect lifecycle

mod connection;
mod handler;
mod subscription;

use futures_util::StreamExt;
use futures_util::stream::{SplitSink, SplitStream};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::info;
use tungstenite::Message;

use crate::Result;

pub use connection::ConnectionManager;
pub use handler::{handle_frame, parse_order_book, parse_ticker};
pub use subscription::{subscribe, unsubscribe};

/// Write half of a stream connection.
pub type WsWriter = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Read half of a stream connection.
pub type WsReader = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Establishes a WebSocket connection to the given URL.
///
/// # Errors
///
/// Returns a [`PoloniexError`](crate::PoloniexError) if the connection
/// or TLS handshake fails.
pub async fn connect(url: &str) -> Result<(WsWriter, WsReader)> {
    let (ws_stream, _) = connect_async(url).await?;
    info!("WebSocket handshake completed");

    Ok(ws_stream.split())
}
