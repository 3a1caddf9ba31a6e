//! Lenient argument decoding.
//!
//! Agents send numbers both as JSON numbers and as strings ("42", "#42").
//! These helpers accept either form when deserializing parameter structs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

/// Parse numeric text the way agents write it: surrounding blanks and a
/// leading `#` are ignored.
pub fn parse_number_text(text: &str) -> Option<u64> {
    text.trim().trim_start_matches('#').parse().ok()
}

/// Whether `value` would pass [`deserialize_number`]
pub fn is_number_like(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(n) => n.is_u64(),
        serde_json::Value::String(s) => parse_number_text(s).is_some(),
        _ => false,
    }
}

/// Deserialize a non-negative integer from a number or a numeric string
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => parse_number_text(&text)
            .ok_or_else(|| D::Error::custom(format!("expected a number, got `{}`", text))),
    }
}

/// Same as [`deserialize_number`], sized for counts and limits
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let n = deserialize_number(deserializer)?;
    usize::try_from(n).map_err(|_| D::Error::custom(format!("count {} is too large", n)))
}
