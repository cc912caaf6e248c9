use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::settings::OverlayConfig;

/// Converts a UTC instant into the overlay's display time zone.
pub fn to_display_tz(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Formats `instant` with `pattern`, falling back to `fallback` when the
/// pattern contains a specifier chrono cannot render.
fn format_with(instant: DateTime<Utc>, tz: Tz, pattern: &str, fallback: &str) -> String {
    let local = to_display_tz(instant, tz);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_ok() {
        return out;
    }
    warn!("Invalid display pattern '{}', using '{}'", pattern, fallback);
    out.clear();
    // The fallback patterns are fixed and always render.
    let _ = write!(out, "{}", local.format(fallback));
    out
}

/// Formats the time-of-day part of an instant, e.g. `18:30`.
pub fn format_time(instant: DateTime<Utc>, config: &OverlayConfig) -> String {
    format_with(
        instant,
        config.timezone,
        &config.time_format,
        DEFAULT_TIME_FORMAT,
    )
}

/// Formats the calendar-date part of an instant, e.g. `19/10/2026`.
pub fn format_date(instant: DateTime<Utc>, config: &OverlayConfig) -> String {
    format_with(
        instant,
        config.timezone,
        &config.date_format,
        DEFAULT_DATE_FORMAT,
    )
}

/// Formats an instant as `"{time} {date}"`, the form used in status labels.
pub fn format_time_date(instant: DateTime<Utc>, config: &OverlayConfig) -> String {
    format!(
        "{} {}",
        format_time(instant, config),
        format_date(instant, config)
    )
}
