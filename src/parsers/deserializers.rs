use chrono::DateTime;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Deserializes a millisecond Unix timestamp, rejecting values chrono cannot
/// represent as a UTC instant.
pub fn deserialize_timestamp_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = i64::deserialize(deserializer)?;
    DateTime::from_timestamp_millis(ms)
        .map(|_| ms)
        .ok_or_else(|| Error::custom(format!("timestamp_ms {} out of range", ms)))
}
