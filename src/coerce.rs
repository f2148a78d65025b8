//! Tolerant coercion of loosely typed JSON scalars.
//!
//! The upstream server is inconsistent about numeric fields: the same
//! logical value may arrive as `"0.00012345"`, `0.00012345`, or `0`.
//! [`to_float`] is the single point where that tolerance lives, so the
//! rest of the crate never needs to type-test raw JSON.
//!
//! The serde adaptor submodules ([`f64_str`], [`i64_str`]) cover the
//! REST shapes whose numbers always travel as decimal strings.

use serde_json::Value;

/// Sentinel returned for values that cannot be coerced to a float.
///
/// Callers treat this as "unparseable" without raising an error.
pub const UNPARSEABLE: f64 = f64::MAX;

/// Coerces a JSON scalar into a 64-bit float.
///
/// Accepts a decimal string, a JSON number, or an integer. Any other
/// shape, or a malformed string, yields [`UNPARSEABLE`].
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::String(s) => s.parse::<f64>().unwrap_or(UNPARSEABLE),
        Value::Number(n) => n.as_f64().unwrap_or(UNPARSEABLE),
        _ => UNPARSEABLE,
    }
}

/// The reverse of [`to_float`]: renders a JSON scalar as the string the
/// wire format expects.
///
/// Floats are formatted with fixed 8-decimal-place precision, integers
/// in base 10, strings unchanged. Non-scalar shapes yield an empty
/// string.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                format!("{f:.8}")
            } else {
                n.to_string()
            }
        }
        _ => String::new(),
    }
}

/// Serde adaptor for 64-bit floats that travel as decimal strings
/// (e.g. `"available": "0.12345678"`).
pub mod f64_str {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<f64>().map_err(serde::de::Error::custom)
    }
}

/// Serde adaptor for 64-bit integers that travel as decimal strings
/// (e.g. `"orderNumber": "120466"`).
pub mod i64_str {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<i64>().map_err(serde::de::Error::custom)
    }
}
