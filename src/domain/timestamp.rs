//! Timestamp - Lenient upload date parsing
//!
//! The backend sends RFC 3339 timestamps, or naive ISO 8601 ones when it runs
//! without time zone support. Naive values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339 or offset-less ISO 8601 timestamp
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn accepts_offset_and_naive_forms() {
        let with_offset = parse_timestamp("2025-01-20T10:15:30.123456Z").expect("rfc3339");
        let naive = parse_timestamp("2025-01-20T10:15:30.123456").expect("naive");
        assert_eq!(with_offset, naive);

        let shifted = parse_timestamp("2025-01-20T12:15:30+02:00").expect("offset");
        assert_eq!(shifted.hour(), 10);

        let whole_seconds = parse_timestamp("2025-01-20T10:15:30").expect("no fraction");
        assert_eq!(whole_seconds.day(), 20);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
