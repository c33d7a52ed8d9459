//! Lenient field deserializers
//!
//! The API leaves fields out, sends explicit nulls and mixes strings and
//! numbers for the same field. These helpers fold all of that into plain
//! Rust values instead of failing the whole response.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::types::{LearningPath, Level, LocationType};

/// `null` becomes the type's default
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn value_to_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integer that may arrive as a number, a numeric string or null; 0 otherwise
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value_to_u32(&value) {
        Some(n) => n,
        None => {
            if !value.is_null() {
                warn!(?value, "unparsable integer field, using 0");
            }
            0
        }
    })
}

/// Like [`lenient_u32`] but keeps absence as `None`
pub(crate) fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_u32(&value))
}

/// Unknown or missing levels become `None`
pub(crate) fn lenient_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let level = value_to_u32(&value)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(|n| Level::try_from(n).ok());
    if level.is_none() && !value.is_null() {
        warn!(?value, "unknown level");
    }
    Ok(level)
}

/// Missing or unknown learning paths fall back to BOL
pub(crate) fn lenient_learning_path<'de, D>(deserializer: D) -> Result<LearningPath, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value.as_deref().map(str::trim) {
        Some(path) if path.eq_ignore_ascii_case("BBL") => LearningPath::Bbl,
        _ => LearningPath::Bol,
    })
}

pub(crate) fn lenient_location_type<'de, D>(
    deserializer: D,
) -> Result<Option<LocationType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Parse an API timestamp
///
/// Accepts ISO-8601 with optional fractional seconds and a trailing `Z`.
/// When the time part cannot be read the date part is used at midnight.
///
/// # Example
/// ```
/// use stagemarkt_core::models::parse_timestamp;
/// let ts = parse_timestamp("2024-09-01T08:30:00.123Z").unwrap();
/// assert_eq!(ts.to_string(), "2024-09-01 08:30:00.123");
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim().trim_end_matches('Z');
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    let date = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
