//! Relative-time formatting ("3 days ago", "in 2 hours").

use crate::locale::{Locale, RelativeGrammar};

/// Granularity of a relative-time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    fn index(self) -> usize {
        match self {
            RelativeUnit::Second => 0,
            RelativeUnit::Minute => 1,
            RelativeUnit::Hour => 2,
            RelativeUnit::Day => 3,
            RelativeUnit::Week => 4,
            RelativeUnit::Month => 5,
            RelativeUnit::Year => 6,
        }
    }
}

/// Round with ties toward positive infinity, like the source platform's
/// `Math.round`. `f64::round` ties away from zero, which diverges for
/// negative half values (-1.5 → -2 instead of -1).
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Pick the display unit and value for a signed delta in milliseconds
/// (future positive).
///
/// Each unit's value derives from the previous unit by division and
/// rounding, then the next coarser threshold is tested against the
/// rounded value. 59.6 minutes therefore rounds to 60 and re-buckets as
/// 1 hour rather than showing "60 minutes".
pub fn select_bucket(delta_ms: i64) -> (i64, RelativeUnit) {
    let secs = round_half_up(delta_ms as f64 / 1000.0);
    let mins = round_half_up(secs as f64 / 60.0);
    let hours = round_half_up(mins as f64 / 60.0);
    let days = round_half_up(hours as f64 / 24.0);
    let weeks = round_half_up(days as f64 / 7.0);
    let months = round_half_up(days as f64 / 30.0);
    let years = round_half_up(days as f64 / 365.0);

    if secs.abs() < 60 {
        (secs, RelativeUnit::Second)
    } else if mins.abs() < 60 {
        (mins, RelativeUnit::Minute)
    } else if hours.abs() < 24 {
        (hours, RelativeUnit::Hour)
    } else if days.abs() < 7 {
        (days, RelativeUnit::Day)
    } else if weeks.abs() < 4 {
        (weeks, RelativeUnit::Week)
    } else if months.abs() < 12 {
        (months, RelativeUnit::Month)
    } else {
        (years, RelativeUnit::Year)
    }
}

/// Render a signed delta in milliseconds as a relative-time phrase.
pub fn format_relative(delta_ms: i64, locale: &Locale) -> String {
    let (value, unit) = select_bucket(delta_ms);
    phrase(value, unit, &locale.relative)
}

fn phrase(value: i64, unit: RelativeUnit, grammar: &RelativeGrammar) -> String {
    if value == 0 && unit == RelativeUnit::Second {
        return grammar.now_string.to_string();
    }

    let i = unit.index();
    if value == -1 {
        if let Some(word) = grammar.last_words[i] {
            return word.to_string();
        }
    }
    if value == 1 {
        if let Some(word) = grammar.next_words[i] {
            return word.to_string();
        }
    }

    let n = value.unsigned_abs();
    let name = if n == 1 {
        grammar.unit_one[i]
    } else {
        grammar.unit_many[i]
    };
    let quantity = format!("{n}{}{name}", grammar.joiner);

    if value < 0 {
        format!("{}{quantity}{}", grammar.past_prefix, grammar.past_suffix)
    } else {
        format!("{}{quantity}{}", grammar.future_prefix, grammar.future_suffix)
    }
}
