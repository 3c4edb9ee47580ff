//! Timestamp formatting

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Render a visit time stored as microseconds since the Unix epoch in the
/// local timezone.
pub fn format_visit_time(micros: i64) -> String {
    format_visit_time_in(micros, &Local)
}

/// Render `micros` in `tz` as `YYYY-MM-DD HH:MM:SS`, appending `.ffffff` only
/// when the sub-second part is non-zero. Values outside chrono's range are
/// rendered as the raw integer.
pub fn format_visit_time_in<Tz>(micros: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::from_timestamp_micros(micros) else {
        return micros.to_string();
    };
    let local = utc.with_timezone(tz);
    if micros.rem_euclid(1_000_000) == 0 {
        local.format(SECONDS_FORMAT).to_string()
    } else {
        local.format(MICROS_FORMAT).to_string()
    }
}

/// Generation timestamp for report footers.
pub fn generated_at() -> String {
    Local::now().format(SECONDS_FORMAT).to_string()
}
