//! Absolute date formatting.

use chrono::{DateTime, Datelike, FixedOffset};

use crate::locale::{DateNotation, Locale};
use crate::options::DateStyle;

/// Render a date in the locale's layout at the given verbosity.
pub fn format_absolute(dt: &DateTime<FixedOffset>, style: DateStyle, locale: &Locale) -> String {
    let year = dt.year();
    let month = dt.month();
    let day = dt.day();
    let weekday = locale.day_names_full[dt.weekday().num_days_from_sunday() as usize];

    match locale.notation {
        DateNotation::DayMonthYear => match style {
            DateStyle::Short => format!("{day:02}/{month:02}/{year:04}"),
            DateStyle::Medium => {
                let month_name = locale.month_names_short[(month - 1) as usize];
                format!("{day} {month_name} {year}")
            }
            DateStyle::Long => {
                let month_name = locale.month_names_full[(month - 1) as usize];
                format!("{weekday}, {day} {month_name} {year}")
            }
        },
        DateNotation::YearMonthDay => match style {
            // Hong Kong numeric dates are day-first and unpadded.
            DateStyle::Short => format!("{day}/{month}/{year}"),
            DateStyle::Medium => format!("{year}年{month}月{day}日"),
            DateStyle::Long => format!("{year}年{month}月{day}日{weekday}"),
        },
    }
}
