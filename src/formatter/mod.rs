//! Display formatting engine.

mod date;
mod datetime;
mod relative;

pub use relative::RelativeUnit;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

use crate::clock::{Clock, SystemClock};
use crate::error::ParseError;
use crate::locale;
use crate::options::{DateStyle, DisplayZone, FormatOptions};
use crate::parse::parse_timestamp;

/// Convert a UTC instant to the requested display timezone.
fn in_zone(instant: DateTime<Utc>, zone: DisplayZone) -> DateTime<FixedOffset> {
    match zone {
        DisplayZone::Local => instant.with_timezone(&Local).fixed_offset(),
        DisplayZone::Utc => instant.fixed_offset(),
        DisplayZone::Offset(minutes) => {
            let offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .unwrap_or_else(|| Utc.fix());
            instant.with_timezone(&offset)
        }
    }
}

/// Try to format a timestamp as an absolute date.
///
/// Returns an error if the timestamp is empty or not valid ISO-8601.
pub fn try_format_date(
    timestamp: &str,
    style: DateStyle,
    opts: &FormatOptions,
) -> Result<String, ParseError> {
    let instant = parse_timestamp(timestamp)?;
    let locale = locale::resolve_date(opts.locale.as_deref());
    Ok(date::format_absolute(
        &in_zone(instant, opts.zone),
        style,
        &locale,
    ))
}

/// Format a timestamp as an absolute date.
///
/// This is an infallible function: empty input yields an empty string and
/// unparseable input is echoed back unchanged. Display code must never
/// fail a render over malformed data; use [`try_format_date`] when the
/// parse outcome matters.
pub fn format_date(timestamp: &str, style: DateStyle, opts: &FormatOptions) -> String {
    try_format_date(timestamp, style, opts).unwrap_or_else(|_| timestamp.to_string())
}

/// Try to format a timestamp as a date with a 12-hour time.
pub fn try_format_date_time(timestamp: &str, opts: &FormatOptions) -> Result<String, ParseError> {
    let instant = parse_timestamp(timestamp)?;
    let locale = locale::resolve_datetime(opts.locale.as_deref());
    Ok(datetime::format_absolute_datetime(
        &in_zone(instant, opts.zone),
        &locale,
    ))
}

/// Format a timestamp as a date with a 12-hour time.
///
/// Infallible; same fail-soft contract as [`format_date`].
pub fn format_date_time(timestamp: &str, opts: &FormatOptions) -> String {
    try_format_date_time(timestamp, opts).unwrap_or_else(|_| timestamp.to_string())
}

/// Try to format a timestamp relative to the clock's "now".
pub fn try_format_time_ago_with<C: Clock>(
    timestamp: &str,
    clock: &C,
    opts: &FormatOptions,
) -> Result<String, ParseError> {
    let instant = parse_timestamp(timestamp)?;
    let locale = locale::resolve_date(opts.locale.as_deref());
    let delta_ms = (instant - clock.now()).num_milliseconds();
    Ok(relative::format_relative(delta_ms, &locale))
}

/// Format a timestamp relative to the clock's "now".
///
/// Infallible; same fail-soft contract as [`format_date`].
pub fn format_time_ago_with<C: Clock>(timestamp: &str, clock: &C, opts: &FormatOptions) -> String {
    try_format_time_ago_with(timestamp, clock, opts)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Format a timestamp relative to the system clock.
pub fn format_time_ago(timestamp: &str, opts: &FormatOptions) -> String {
    format_time_ago_with(timestamp, &SystemClock, opts)
}
