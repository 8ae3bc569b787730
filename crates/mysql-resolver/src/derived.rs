use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Normalizes a stored temporal value to canonical RFC 3339 text. Null
/// stays null; text in a format we do not recognize passes through
/// unchanged rather than failing the row.
pub(crate) fn normalize_timestamp(value: &Value) -> Value {
    match value {
        Value::String(text) => match parse(text) {
            Some(timestamp) => Value::String(timestamp.to_rfc3339()),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

fn parse(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    // MySQL DATETIME / TIMESTAMP text, naive; served as UTC.
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(timestamp.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
