//! Bidirectional pair-name/channel-id registry.
//!
//! The WebSocket addresses everything by numeric channel id, while
//! callers think in pair names like `USDT_BTC`. The registry is
//! bootstrapped once from the REST ticker endpoint at client
//! construction and overlaid with the four reserved control channels;
//! it is never mutated afterwards and may be read concurrently.

use std::collections::HashMap;

/// Reserved control channels overlaid on top of the market listing.
const CONTROL_CHANNELS: [(&str, &str); 4] = [
    ("1001", "trollbox"),
    ("1002", "ticker"),
    ("1003", "footer"),
    ("1010", "heartbeat"),
];

/// Immutable two-way mapping between pair names and channel ids.
///
/// Invariant: `by_name` and `by_id` are exact inverses.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    by_name: HashMap<String, String>,
    by_id: HashMap<String, String>,
}

impl SymbolRegistry {
    /// Builds the registry from `(pair name, numeric market id)` pairs,
    /// then overlays the reserved control channels.
    pub fn from_markets<I>(markets: I) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        for (name, id) in markets {
            let id = id.to_string();
            by_id.insert(id.clone(), name.clone());
            by_name.insert(name, id);
        }
        for (id, name) in CONTROL_CHANNELS {
            by_id.insert(id.to_string(), name.to_string());
            by_name.insert(name.to_string(), id.to_string());
        }
        Self { by_name, by_id }
    }

    /// Resolves a subscription token to a channel id.
    ///
    /// The token is first tried as a pair name, then as a raw channel
    /// id. Returns `None` for anything the registry has never heard of.
    pub fn resolve<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        if let Some(id) = self.by_name.get(token) {
            return Some(id);
        }
        if self.by_id.contains_key(token) {
            return Some(token);
        }
        None
    }

    /// Looks up the pair name for a channel id.
    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Looks up the channel id for a pair name.
    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Channel id of the aggregate ticker stream.
    pub fn ticker_channel_id(&self) -> &str {
        self.by_name.get("ticker").map_or("1002", String::as_str)
    }

    /// Number of known channels, control entries included.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
