//! ISO-8601 timestamp parsing with UTC inference.
//!
//! The upstream data source emits naive UTC timestamps (no offset
//! designator), so a string without a trailing `Z` or `±HH:MM` is treated
//! as UTC by appending `Z` before parsing. Strings that do carry an offset
//! are honored as written; `±HHMM` without the colon is normalized so the
//! RFC 3339 parser accepts it.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::error::ParseError;

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds and an
/// optional `Z`/`±HH:MM`/`±HHMM` offset. Input is trimmed first.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let candidate: Cow<'_, str> = if !has_explicit_offset(s) {
        Cow::Owned(format!("{s}Z"))
    } else if has_compact_offset(s) {
        // "+0800" -> "+08:00"
        let (head, minutes) = s.split_at(s.len() - 2);
        Cow::Owned(format!("{head}:{minutes}"))
    } else {
        Cow::Borrowed(s)
    };

    DateTime::parse_from_rfc3339(&candidate)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseError::InvalidTimestamp {
            input: input.to_string(),
        })
}

/// Whether the string ends in an explicit timezone designator
/// (`Z`, `z`, `±HH:MM`, or `±HHMM`).
fn has_explicit_offset(s: &str) -> bool {
    if s.ends_with(['Z', 'z']) {
        return true;
    }
    let b = s.as_bytes();
    let n = b.len();

    let colon_form = n >= 6
        && (b[n - 6] == b'+' || b[n - 6] == b'-')
        && b[n - 5].is_ascii_digit()
        && b[n - 4].is_ascii_digit()
        && b[n - 3] == b':'
        && b[n - 2].is_ascii_digit()
        && b[n - 1].is_ascii_digit();

    colon_form || has_compact_offset(s)
}

/// Whether the string ends in a `±HHMM` offset (no colon).
fn has_compact_offset(s: &str) -> bool {
    let b = s.as_bytes();
    let n = b.len();
    n >= 5
        && (b[n - 5] == b'+' || b[n - 5] == b'-')
        && b[n - 4..].iter().all(u8::is_ascii_digit)
}
