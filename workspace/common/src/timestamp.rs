//! ISO-8601 timestamps as sent by the API.
//!
//! RFC 3339 values keep their offset. Values without an offset
//! (`2024-01-10T12:00:00`, `2024-01-10`) are read as local time.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_keeps_offset() {
        let parsed = parse_timestamp("2024-01-10T12:00:00-03:00").expect("Should parse");
        assert_eq!(parsed.offset().local_minus_utc(), -3 * 3600);
        assert_eq!(parsed.naive_local().to_string(), "2024-01-10 12:00:00");
    }

    #[test]
    fn test_offsetless_values_are_local_time() {
        let parsed = parse_timestamp("2024-01-10T12:00:00").expect("Should parse");
        assert_eq!(
            parsed.with_timezone(&Local).naive_local().to_string(),
            "2024-01-10 12:00:00"
        );

        let parsed = parse_timestamp("2024-01-10 08:30:15.250").expect("Should parse");
        assert_eq!(
            parsed.with_timezone(&Local).naive_local().to_string(),
            "2024-01-10 08:30:15.250"
        );
    }

    #[test]
    fn test_date_only_is_local_midnight() {
        let parsed = parse_timestamp("2024-01-10").expect("Should parse");
        assert_eq!(
            parsed.with_timezone(&Local).naive_local().to_string(),
            "2024-01-10 00:00:00"
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-40").is_none());
    }
}
