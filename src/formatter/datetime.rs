//! Absolute date-time formatting.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::locale::{DateNotation, Locale};

/// Render a date-time: full month name, 12-hour clock, locale meridiem
/// marker placed per locale convention.
pub fn format_absolute_datetime(dt: &DateTime<FixedOffset>, locale: &Locale) -> String {
    let year = dt.year();
    let month = dt.month();
    let day = dt.day();

    let hour = dt.hour();
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 {
        locale.am_string
    } else {
        locale.pm_string
    };

    let clock = format!("{hour12:02}:{:02}", dt.minute());
    let time = if locale.meridiem_first {
        format!("{meridiem}{clock}")
    } else {
        format!("{clock} {meridiem}")
    };

    let date = match locale.notation {
        DateNotation::DayMonthYear => {
            let month_name = locale.month_names_full[(month - 1) as usize];
            format!("{day} {month_name} {year}")
        }
        DateNotation::YearMonthDay => format!("{year}年{month}月{day}日"),
    };

    format!("{date}{}{time}", locale.datetime_connector)
}
