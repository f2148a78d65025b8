//! Connection lifecycle: connect, read, reconnect with backoff.
//!
//! [`ConnectionManager`] owns the read half of the connection and
//! parks the write half behind the shared writer slot so subscribe/
//! unsubscribe can reach it. After every (re)connect it replays the
//! subscription set before handing the writer over.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tungstenite::Message;

use super::{WsReader, WsWriter, connect, handler, subscription};
use crate::events::EventBus;
use crate::registry::SymbolRegistry;

/// Initial backoff duration between reconnection attempts.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Maximum backoff duration between reconnection attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Runs the stream loop: reads frames, dispatches events, reconnects
/// with exponential backoff on disconnection.
pub struct ConnectionManager {
    url: String,
    registry: Arc<SymbolRegistry>,
    bus: Arc<EventBus>,
    subscriptions: Arc<Mutex<HashSet<String>>>,
    writer: Arc<Mutex<Option<WsWriter>>>,
}

impl ConnectionManager {
    pub fn new(
        url: String,
        registry: Arc<SymbolRegistry>,
        bus: Arc<EventBus>,
        subscriptions: Arc<Mutex<HashSet<String>>>,
        writer: Arc<Mutex<Option<WsWriter>>>,
    ) -> Self {
        Self {
            url,
            registry,
            bus,
            subscriptions,
            writer,
        }
    }

    /// Re-sends a subscribe control frame for every tracked channel.
    async fn resubscribe_all(&self, write: &mut WsWriter) {
        let ids: Vec<String> = self.subscriptions.lock().await.iter().cloned().collect();
        for id in ids {
            if let Err(e) = subscription::subscribe(write, &id).await {
                warn!(channel = %id, "failed to resubscribe: {e}");
            }
        }
    }

    /// Runs the connection loop indefinitely.
    ///
    /// The task is stopped by aborting it; dropping the connection
    /// closes the WebSocket.
    pub async fn run(self) {
        let mut backoff = INITIAL_BACKOFF;

        loop {
            info!(url = %self.url, "connecting to stream");
            let (mut write, read) = match connect(&self.url).await {
                Ok(pair) => pair,
                Err(e) => {
                    error!("stream connection failed: {e}");
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(MAX_BACKOFF);
                    continue;
                }
            };

            self.resubscribe_all(&mut write).await;
            *self.writer.lock().await = Some(write);
            backoff = INITIAL_BACKOFF;

            self.read_loop(read).await;

            // Stale writers must not receive control frames.
            *self.writer.lock().await = None;
            warn!(
                backoff_secs = backoff.as_secs(),
                "stream disconnected, backing off"
            );
            tokio::time::sleep(backoff).await;
            backoff = (backoff * 2).min(MAX_BACKOFF);
        }
    }

    /// Reads frames until the connection errors or ends.
    async fn read_loop(&self, mut read: WsReader) {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handler::handle_frame(&text, &self.registry, &self.bus);
                }
                Ok(_) => {} // Binary/Ping/Pong/Close frames
                Err(e) => {
                    warn!("websocket error: {e}");
                    return;
                }
            }
        }
        warn!("websocket stream ended");
    }
}
