use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

/// Parses a stored transaction date. Plain `YYYY-MM-DD` values are taken as
/// UTC midnight; anything else must be a full RFC 3339 timestamp.
pub fn parse_transaction_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if looks_like_iso_date(trimmed) {
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn month_key(value: &DateTime<Utc>) -> String {
    format!("{:04}-{:02}", value.year(), value.month())
}

/// Short display label for a `YYYY-MM` key, e.g. `Sep 2024`.
pub fn month_label(key: &str) -> Option<String> {
    let first_day = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()?;
    Some(first_day.format("%b %Y").to_string())
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    [0usize, 1, 2, 3, 5, 6, 8, 9]
        .iter()
        .all(|index| bytes[*index].is_ascii_digit())
}
