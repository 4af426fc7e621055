//! Lenient serde helpers for loosely typed backend JSON.
//!
//! The backend is inconsistent about numeric fields: ids and coordinates may
//! arrive as JSON numbers or as strings. These helpers normalize both shapes.

#[cfg(test)]
#[path = "lenient_test.rs"]
mod lenient_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Accept a string, number, or null and produce its string form.
///
/// `null` maps to an empty string.
///
/// # Errors
///
/// Returns an error for booleans, arrays, and objects.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Accept a string or null; `null` maps to an empty string.
///
/// # Errors
///
/// Returns an error for any other JSON type.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept an integer or an integer-valued string.
///
/// `null` maps to `0`.
///
/// # Errors
///
/// Returns an error when the value is not integer-compatible.
pub fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom("expected integer string")),
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected integer")),
    }
}
