//! The client value: construction, REST dispatch, and stream lifecycle.
//!
//! A [`Poloniex`] instance owns the nonce counter, the event bus, the
//! subscription set, and the WebSocket handle. The symbol registry and
//! credentials are read-only after construction. All REST calls are
//! serialised by a single mutex — the upstream API requires strictly
//! monotonic per-key nonces, and serial dispatch is the simplest way to
//! guarantee them.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::Result;
use crate::auth::{Credentials, NonceCounter};
use crate::config::Config;
use crate::error::PoloniexError;
use crate::events::{EventBus, ListenerHandle, StreamEvent};
use crate::models::Ticker;
use crate::registry::SymbolRegistry;
use crate::websocket::{self, ConnectionManager, WsWriter};

/// Address of the public REST API.
pub const PUBLIC_URL: &str = "https://poloniex.com/public";
/// Address of the authenticated trading REST API.
pub const TRADING_URL: &str = "https://poloniex.com/tradingApi";
/// Address of the streaming API.
pub const WS_URL: &str = "wss://api2.poloniex.com/";

/// The upstream API is slow under load; it answers within this window
/// or not at all.
const REST_TIMEOUT: Duration = Duration::from_secs(130);

/// Shape of a server-reported failure body.
#[derive(Deserialize)]
struct ApiError {
    error: String,
}

/// Classifies and decodes a private-call response body.
///
/// In order: a body starting with `[` is the server's "no rows in
/// range" sentinel and yields the zero value; a decodable `{error}`
/// object with a non-empty message fails with that message; anything
/// else is decoded into the caller's target shape.
pub(crate) fn decode_private<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.starts_with('[') {
        return Ok(T::default());
    }
    if let Ok(reported) = serde_json::from_str::<ApiError>(body)
        && !reported.error.is_empty()
    {
        return Err(PoloniexError::Server(reported.error));
    }
    Ok(serde_json::from_str(body)?)
}

/// Decodes a public-call response body, surfacing server-reported
/// errors. Public endpoints legitimately return arrays, so there is no
/// empty-array sentinel here.
pub(crate) fn decode_public<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if let Ok(reported) = serde_json::from_str::<ApiError>(body)
        && !reported.error.is_empty()
    {
        return Err(PoloniexError::Server(reported.error));
    }
    Ok(serde_json::from_str(body)?)
}

/// Client for the Poloniex REST and WebSocket APIs.
pub struct Poloniex {
    http: reqwest::Client,
    credentials: Option<Credentials>,
    /// Guards the nonce counter and the in-flight REST request slot.
    rest: Mutex<NonceCounter>,
    registry: Arc<SymbolRegistry>,
    bus: Arc<EventBus>,
    subscriptions: Arc<Mutex<HashSet<String>>>,
    writer: Arc<Mutex<Option<WsWriter>>>,
    ws_url: String,
}

impl Poloniex {
    /// Creates an authenticated client from a key/secret pair.
    ///
    /// Bootstraps the symbol registry from the live ticker endpoint.
    ///
    /// # Errors
    ///
    /// Fails if the bootstrap call fails — a client without a registry
    /// cannot route stream frames or subscriptions.
    pub async fn with_credentials(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        Self::build(Some(Credentials::new(key, secret))).await
    }

    /// Creates an authenticated client from a JSON credentials file
    /// (`{"key":"...","secret":"..."}`).
    pub async fn from_config(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = Config::load(path)?;
        Self::build(Some(config.into_credentials())).await
    }

    /// Creates a client restricted to the public REST API and the
    /// stream.
    pub async fn public_only() -> Result<Self> {
        Self::build(None).await
    }

    async fn build(credentials: Option<Credentials>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REST_TIMEOUT)
            .build()?;

        let ticker: Ticker = Self::fetch_public(&http, "returnTicker", &[]).await?;
        let registry = SymbolRegistry::from_markets(
            ticker.into_iter().map(|(name, entry)| (name, entry.id)),
        );
        info!(markets = registry.len(), "symbol registry bootstrapped");

        Ok(Self {
            http,
            credentials,
            rest: Mutex::new(NonceCounter::new()),
            registry: Arc::new(registry),
            bus: Arc::new(EventBus::new()),
            subscriptions: Arc::new(Mutex::new(HashSet::new())),
            writer: Arc::new(Mutex::new(None)),
            ws_url: WS_URL.to_string(),
        })
    }

    /// The pair-name/channel-id registry built at construction.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Issues a public GET with `command` and `params` as the query
    /// string.
    ///
    /// Takes the same mutex as the private path: REST calls are serial
    /// per client instance.
    pub(crate) async fn public<T>(&self, command: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let _rest = self.rest.lock().await;
        Self::fetch_public(&self.http, command, params).await
    }

    async fn fetch_public<T>(
        http: &reqwest::Client,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("command", command.to_string()));

        let response = http.get(PUBLIC_URL).query(&query).send().await?;
        let body = response.text().await?;
        debug!(command, bytes = body.len(), "public response");
        decode_public(&body)
    }

    /// Issues a signed POST to the trading API.
    ///
    /// Body is the URL-encoded form `{...params, nonce, command}`,
    /// signed after final encoding. The mutex is held until the
    /// response body has been fully read and decoded so nonces reach
    /// the server in send order.
    pub(crate) async fn private<T>(&self, command: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            PoloniexError::Config("private call requires credentials".to_string())
        })?;

        let mut rest = self.rest.lock().await;
        let nonce = rest.next();

        let mut form: Vec<(&str, String)> = params.to_vec();
        form.push(("nonce", nonce.to_string()));
        form.push(("command", command.to_string()));
        form.sort_by(|a, b| a.0.cmp(b.0));
        let body = serde_urlencoded::to_string(&form)?;
        let signature = credentials.sign(&body);

        let response = self
            .http
            .post(TRADING_URL)
            .header("Key", credentials.key())
            .header("Sign", signature)
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        let body = response.text().await?;

        debug!(command, bytes = body.len(), "private response");
        let decoded = decode_private(&body);
        drop(rest);
        decoded
    }

    /// Registers a listener for a stream event name.
    ///
    /// Event names are `"ticker"`, an order-book event kind
    /// (`"modify"`, `"remove"`, `"trade"`), a pair name, or
    /// `"<pair>-<event>"`.
    pub fn on<F>(&self, event: &str, listener: F) -> ListenerHandle
    where
        F: Fn(&StreamEvent) + Send + Sync + 'static,
    {
        self.bus.on(event, listener)
    }

    /// Removes a listener registered with [`on`](Self::on).
    pub fn off(&self, handle: &ListenerHandle) -> bool {
        self.bus.off(handle)
    }

    /// Subscribes to a channel by pair name or channel id.
    ///
    /// The channel is recorded so a reconnect re-establishes it. If the
    /// stream is not connected yet, the control frame is sent on
    /// connect instead.
    ///
    /// # Errors
    ///
    /// Returns [`PoloniexError::UnknownChannel`] if the token matches
    /// neither a pair name nor a channel id.
    pub async fn subscribe(&self, token: &str) -> Result<()> {
        let id = self
            .registry
            .resolve(token)
            .ok_or_else(|| PoloniexError::UnknownChannel(token.to_string()))?
            .to_string();

        self.subscriptions.lock().await.insert(id.clone());
        let mut writer = self.writer.lock().await;
        if let Some(write) = writer.as_mut() {
            websocket::subscribe(write, &id).await?;
        }
        Ok(())
    }

    /// Unsubscribes from a channel by pair name or channel id.
    ///
    /// # Errors
    ///
    /// Returns [`PoloniexError::UnknownChannel`] if the token matches
    /// neither a pair name nor a channel id.
    pub async fn unsubscribe(&self, token: &str) -> Result<()> {
        let id = self
            .registry
            .resolve(token)
            .ok_or_else(|| PoloniexError::UnknownChannel(token.to_string()))?
            .to_string();

        self.subscriptions.lock().await.remove(&id);
        let mut writer = self.writer.lock().await;
        if let Some(write) = writer.as_mut() {
            websocket::unsubscribe(write, &id).await?;
        }
        Ok(())
    }

    /// Starts the stream loop on a background task.
    ///
    /// The task connects, subscribes every channel in the subscription
    /// set, and dispatches decoded events through the listeners
    /// registered with [`on`](Self::on). It reconnects with exponential
    /// backoff on failure and runs until the returned handle is
    /// aborted, which closes the connection.
    pub fn start_ws(&self) -> tokio::task::JoinHandle<()> {
        let manager = ConnectionManager::new(
            self.ws_url.clone(),
            Arc::clone(&self.registry),
            Arc::clone(&self.bus),
            Arc::clone(&self.subscriptions),
            Arc::clone(&self.writer),
        );
        tokio::spawn(manager.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Balances, Base, PrivateTrade};

    #[test]
    fn empty_array_sentinel_yields_zero_value() {
        let trades: Vec<PrivateTrade> = decode_private("[]").unwrap();
        assert!(trades.is_empty());

        let balances: Balances = decode_private("[]").unwrap();
        assert!(balances.is_empty());
    }

    #[test]
    fn server_error_is_surfaced_verbatim() {
        let result: Result<Balances> = decode_private(r#"{"error":"Invalid API key."}"#);
        match result {
            Err(PoloniexError::Server(message)) => assert_eq!(message, "Invalid API key."),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_field_falls_through_to_decode() {
        // Some payloads carry an empty error alongside real data.
        let base: Base = decode_private(r#"{"error":"","success":1,"response":"addr"}"#).unwrap();
        assert!(base.is_success());
        assert_eq!(base.response, "addr");
    }

    #[test]
    fn typed_decode_after_classification() {
        let body = r#"{"BTC":{"available":"0.10000000","onOrders":"0.00000000","btcValue":"0.10000000"}}"#;
        let balances: Balances = decode_private(body).unwrap();
        assert_eq!(balances["BTC"].available, 0.1);
    }

    #[test]
    fn decode_error_is_surfaced() {
        let result: Result<Base> = decode_private("not json at all");
        assert!(matches!(result, Err(PoloniexError::Json(_))));
    }

    #[test]
    fn public_decode_surfaces_server_error() {
        let result: Result<Vec<PrivateTrade>> =
            decode_public(r#"{"error":"Invalid currency pair."}"#);
        match result {
            Err(PoloniexError::Server(message)) => {
                assert_eq!(message, "Invalid currency pair.");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn public_decode_accepts_arrays() {
        // Public trade history is a bare JSON array; it must not be
        // mistaken for the private no-data sentinel.
        let trades: Vec<serde_json::Value> = decode_public("[1,2,3]").unwrap();
        assert_eq!(trades.len(), 3);
    }
}
