//! Crate-level error types.
//!
//! [`PoloniexError`] unifies every error source (configuration, HTTP,
//! WebSocket, JSON, server-reported failures) behind a single enum so
//! callers can match on the variant they care about while still using
//! the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoloniexError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PoloniexError {
    /// A configuration file could not be found, read, or deserialized,
    /// or the client is missing required credentials.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed at the transport level.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A WebSocket operation (connect, send, receive) failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL-encoding a request body failed.
    #[error("form encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The server decoded the request but reported an error of its own.
    ///
    /// Carries the server-supplied message verbatim.
    #[error("{0}")]
    Server(String),

    /// A subscribe/unsubscribe token matched neither a pair name nor a
    /// channel id in the symbol registry.
    #[error("unrecognised channel: {0}")]
    UnknownChannel(String),

    /// An inbound stream frame did not match the expected positional
    /// grammar. Dropped at the frame boundary; the loop continues.
    #[error("malformed stream frame: {0}")]
    MalformedFrame(String),
}
