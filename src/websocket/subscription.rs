//! Outbound channel control frames.

use futures_util::SinkExt;
use serde::Serialize;
use tracing::info;
use tungstenite::Message;

use super::WsWriter;
use crate::Result;

/// The control frame understood by the stream server.
#[derive(Serialize)]
struct ChannelCommand<'a> {
    command: &'static str,
    channel: &'a str,
}

/// Asks the server to start delivering a channel.
///
/// # Errors
///
/// Returns a [`PoloniexError`](crate::PoloniexError) if sending the
/// control frame fails.
pub async fn subscribe(write: &mut WsWriter, channel_id: &str) -> Result<()> {
    let frame = ChannelCommand {
        command: "subscribe",
        channel: channel_id,
    };
    let json = serde_json::to_string(&frame)?;
    write.send(Message::Text(json.into())).await?;
    info!(channel = channel_id, "Subscribed to channel");

    Ok(())
}

/// Asks the server to stop delivering a channel.
///
/// The wire command is the literal `"subscribe"` even here — the
/// upstream server has only ever honoured that verb for both
/// directions.
///
/// # Errors
///
/// Returns a [`PoloniexError`](crate::PoloniexError) if sending the
/// control frame fails.
pub async fn unsubscribe(write: &mut WsWriter, channel_id: &str) -> Result<()> {
    let frame = ChannelCommand {
        command: "subscribe",
        channel: channel_id,
    };
    let json = serde_json::to_string(&frame)?;
    write.send(Message::Text(json.into())).await?;
    info!(channel = channel_id, "Unsubscribed from channel");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_frame_wire_shape() {
        let frame = ChannelCommand {
            command: "subscribe",
            channel: "1002",
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"command":"subscribe","channel":"1002"}"#);
    }
}
