//! Client configuration loaded from a JSON credentials file.
//!
//! The file is a flat object with two keys:
//!
//! ```json
//! {"key": "...", "secret": "..."}
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::auth::Credentials;
use crate::error::PoloniexError;

/// Contents of a credentials file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub key: String,
    pub secret: String,
}

impl Config {
    /// Reads and parses a credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`PoloniexError::Config`] if the file cannot be read or
    /// does not parse as the expected JSON object.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PoloniexError::Config(format!("reading {} failed: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            PoloniexError::Config(format!("parsing {} failed: {e}", path.display()))
        })
    }

    /// Converts the loaded values into [`Credentials`], moving the
    /// secret into zeroizing storage.
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.key, self.secret)
    }
}
