//! Request authentication: body signing and nonce generation.
//!
//! Every private REST call carries a `Key` header, a `Sign` header
//! (lowercase-hex HMAC-SHA512 of the exact URL-encoded body), and a
//! strictly increasing `nonce` form field. The server rejects any nonce
//! that is not greater than the last one it saw for the key, so the
//! counter is seeded from wall-clock nanoseconds and only ever
//! incremented.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

/// An API key/secret pair. The secret is held in zeroizing storage and
/// never appears in `Debug` output or logs.
pub struct Credentials {
    key: String,
    secret: Zeroizing<String>,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// The API key sent in the `Key` header.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Signs a URL-encoded request body with the secret.
    ///
    /// Must be called on the final encoded form of the body, after all
    /// parameters (including `nonce` and `command`) have been added.
    pub fn sign(&self, body: &str) -> String {
        sign(&self.secret, body)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Computes the `Sign` header value: lowercase hex of
/// `HMAC-SHA512(secret, body)`. No trailing whitespace or newline.
pub fn sign(secret: &str, body: &str) -> String {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Monotonic nonce counter seeded from wall-clock nanoseconds.
///
/// Not internally synchronized: the owning client advances it under the
/// REST mutex, exactly once per authenticated request.
pub struct NonceCounter {
    last: u64,
}

impl NonceCounter {
    /// Seeds the counter from the current wall clock.
    ///
    /// Nanosecond resolution in a `u64` overflows around year 2554.
    pub fn new() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self { last: now }
    }

    /// Increments and returns the counter.
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

impl Default for NonceCounter {
    fn default() -> Self {
        Self::new()
    }
}
