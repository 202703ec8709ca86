//! Lenient date/time parsing for inbound JSON.
//!
//! Mobile and dashboard clients send dates in several shapes; these helpers accept
//! all of them and normalise to chrono types. Use with `#[serde(deserialize_with)]`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, de::Error};

/// Parses `YYYY-MM-DD`, RFC 3339 timestamps, or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_flexible_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(raw, "%H:%M").ok())
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_flexible_date(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{s}'"))),
    }
}

pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_flexible_time(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{s}'"))),
    }
}
