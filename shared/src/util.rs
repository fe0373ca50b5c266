use chrono::{DateTime, Utc};

/// Convert Unix millis (storage form) back to a UTC timestamp.
///
/// Out-of-range values clamp to the Unix epoch rather than failing the read.
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}
