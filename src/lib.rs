//! tdfmt - Locale-aware display formatting for ISO-8601 timestamps
//!
//! This crate renders ISO-8601 timestamps for display: absolute dates in
//! three verbosities, date-times with a 12-hour clock, and relative time
//! ("3 days ago"). Timestamps without a timezone designator are treated
//! as UTC; the formatting surface is fail-soft and always returns a
//! string.

pub mod clock;
pub mod error;
pub mod options;
pub mod parse;

mod formatter;
mod locale;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ParseError;
pub use formatter::{
    format_date, format_date_time, format_time_ago, format_time_ago_with, try_format_date,
    try_format_date_time, try_format_time_ago_with, RelativeUnit,
};
pub use locale::{DateNotation, Locale, RelativeGrammar};
pub use options::{DateStyle, DisplayZone, FormatOptions};
