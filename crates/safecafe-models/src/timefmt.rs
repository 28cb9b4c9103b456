//! Relative-time labels for alerts and analysis records.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Render the age of `ts` relative to `now`.
///
/// Under an hour reads as minutes, under a day as whole hours, anything older
/// falls back to the local calendar date (`dd/mm/yyyy`). Timestamps in the
/// future are treated as zero minutes old.
pub fn format_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_age_in(ts, now, &Local)
}

/// `format_age` with the date fallback rendered in `tz`.
pub fn format_age_in<Tz>(ts: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let minutes = (now - ts).num_minutes().max(0);
    let hours = minutes / 60;

    if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        ts.with_timezone(tz).format("%d/%m/%Y").to_string()
    }
}
