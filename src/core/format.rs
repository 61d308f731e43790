//! Display formatting for WHOIS fields. None of these functions fail:
//! unparseable input degrades to "N/A" or is passed through unchanged.

use crate::domain::model::NOT_AVAILABLE;
use crate::domain::ports::DateStyle;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const HOSTNAMES_MAX_LEN: usize = 25;
const HOSTNAMES_KEEP_LEN: usize = 22;
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parses the timestamp shapes the provider emits, e.g. `2020-01-15`,
/// `1994-11-01T05:00:00Z`, `1994-11-01T05:00:00+0000` or
/// `1994-11-01 05:00:00 UTC`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S UTC", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_date(raw: &str, style: DateStyle) -> String {
    if raw.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    match parse_timestamp(raw) {
        Some(dt) => match style {
            DateStyle::Us => format!("{}/{}/{}", dt.month(), dt.day(), dt.year()),
            DateStyle::Iso => dt.format("%Y-%m-%d").to_string(),
            DateStyle::Eu => dt.format("%d/%m/%Y").to_string(),
        },
        None => raw.to_string(),
    }
}

pub fn format_hostnames(hostnames: &[String]) -> String {
    if hostnames.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let joined = hostnames.join(", ");
    if joined.chars().count() > HOSTNAMES_MAX_LEN {
        let head: String = joined.chars().take(HOSTNAMES_KEEP_LEN).collect();
        format!("{}...", head)
    } else {
        joined
    }
}

pub fn calculate_age(created_date: &str) -> String {
    calculate_age_at(created_date, Utc::now())
}

/// Same as [`calculate_age`] with an explicit "now".
pub fn calculate_age_at(created_date: &str, now: DateTime<Utc>) -> String {
    if created_date.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let Some(created) = parse_timestamp(created_date) else {
        return NOT_AVAILABLE.to_string();
    };

    // partial days round up
    let elapsed_ms = (now - created).num_milliseconds().abs();
    let days = (elapsed_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    let years = days / 365;
    let months = (days % 365) / 30;

    if years > 0 {
        format!("{}, {}", plural(years, "year"), plural(months, "month"))
    } else {
        plural(months, "month")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}
